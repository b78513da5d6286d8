//! Text Surface
//!
//! Plain-text rendition for terminals. Charts are printed as tables with one
//! row per x position and one column per series.

use std::fmt::Write;

use super::RenderSurface;
use crate::dashboard::chart::format_number;
use crate::dashboard::{ChartSpec, DashboardResult};

/// Minimum width of a table column
const MIN_COLUMN_WIDTH: usize = 8;

/// Writes blocks as plain text to any `fmt::Write` sink
pub struct TextSurface<W: Write> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for TextSurface<W> {
    fn header(&mut self, title: &str, description: &str) -> DashboardResult<()> {
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", "=".repeat(title.chars().count()))?;
        writeln!(self.out, "{}", description)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn subheader(&mut self, text: &str) -> DashboardResult<()> {
        writeln!(self.out, "## {}", text)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn chart(&mut self, chart: &ChartSpec) -> DashboardResult<()> {
        writeln!(self.out, "{} ({})", chart.title, chart.kind)?;

        let x_title = chart.axis_labels.x.as_deref().unwrap_or("");
        let mut columns: Vec<Vec<String>> = Vec::with_capacity(chart.series.len() + 1);
        columns.push(
            std::iter::once(x_title.to_string())
                .chain((0..chart.x.len()).map(|i| chart.x.label(i).unwrap_or_default()))
                .collect(),
        );
        for series in &chart.series {
            columns.push(
                std::iter::once(series.name.clone())
                    .chain(series.values.iter().map(|v| format_number(*v)))
                    .collect(),
            );
        }

        let widths: Vec<usize> = columns
            .iter()
            .map(|col| {
                col.iter()
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(MIN_COLUMN_WIDTH)
            })
            .collect();

        let rows = chart.x.len() + 1;
        for row in 0..rows {
            let cells: Vec<String> = columns
                .iter()
                .zip(&widths)
                .map(|(col, width)| {
                    let cell = col.get(row).map(String::as_str).unwrap_or("");
                    format!("{:<width$}", cell, width = *width)
                })
                .collect();
            writeln!(self.out, "{}", cells.join(" | ").trim_end())?;

            if row == 0 {
                let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                writeln!(self.out, "{}", rule.join("-+-"))?;
            }
        }

        if let Some(y) = &chart.axis_labels.y {
            writeln!(self.out, "(y: {})", y)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn info(&mut self, text: &str) -> DashboardResult<()> {
        writeln!(self.out, "[info] {}", text)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> DashboardResult<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn buttons(&mut self, labels: &[String]) -> DashboardResult<()> {
        for label in labels {
            writeln!(self.out, "[button] {}", label)?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Axis, ChartKind, Series};

    #[test]
    fn test_chart_table() {
        let chart = ChartSpec::new(
            ChartKind::GroupedBar,
            "Training",
            Axis::categories(["Introductory", "Advanced"]),
        )
        .series(Series::new("Participants", [500.0, 200.0]))
        .series(Series::new("Rate", [95.0, 90.5]));

        let mut surface = TextSurface::new(String::new());
        surface.chart(&chart).unwrap();
        let out = surface.into_inner();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Training (grouped-bar)");
        assert_eq!(lines[1], "             | Participants | Rate");
        assert_eq!(lines[2], "-------------+--------------+---------");
        assert_eq!(lines[3], "Introductory | 500          | 95");
        assert_eq!(lines[4], "Advanced     | 200          | 90.5");
    }

    #[test]
    fn test_header_and_callouts() {
        let mut surface = TextSurface::new(String::new());
        surface.header("Title", "Description").unwrap();
        surface.info("Note").unwrap();
        surface
            .buttons(&["Guide (PDF)".to_string()])
            .unwrap();
        let out = surface.into_inner();

        assert!(out.starts_with("Title\n=====\nDescription\n"));
        assert!(out.contains("[info] Note\n"));
        assert!(out.contains("[button] Guide (PDF)\n"));
    }
}
