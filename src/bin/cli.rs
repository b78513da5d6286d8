//! Landsat Dashboard CLI
//!
//! Command-line interface for the dashboard:
//! - List sections
//! - Render a section as text, JSON or HTML
//! - Export chart data as CSV
//! - Check server status

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use landsat_dashboard::api::dto::{BlockResponse, SectionResponse};
use landsat_dashboard::config::{Config, RenderConfig};
use landsat_dashboard::dashboard::{Block, ChartSpec, Section, SectionRenderer};
use landsat_dashboard::surface::{HtmlSurface, TextSurface};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "landsat-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render the Landsat data dashboard from the command line")]
pub struct Cli {
    /// Path to a TOML config file (default: the server's config locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List dashboard sections
    Sections,

    /// Render a section
    Render {
        /// Section slug or label (e.g. "satellite-programs")
        section: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Fixed seed for the simulated data (default: `render.seed`)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Export every chart of a section as CSV (chart,series,x,y)
    Export {
        /// Section slug or label
        section: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fixed seed for the simulated data (default: `render.seed`)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show server status
    Status {
        /// Dashboard server URL
        #[arg(long, default_value = "http://localhost:8501")]
        api_url: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Html,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sections => {
            println!("{:<24} {}", "Slug", "Label");
            println!("{}", "-".repeat(56));
            for section in Section::all() {
                println!("{:<24} {}", section.slug(), section.label());
            }
        }

        Commands::Render {
            section,
            format,
            seed,
        } => {
            let section: Section = section.parse()?;
            let config = load_config(cli.config.as_deref())?;
            let renderer = SectionRenderer::new(seed.or(config.render.seed));

            match format {
                Format::Text => {
                    let mut surface = TextSurface::new(String::new());
                    renderer.render_to(section, &mut surface)?;
                    print!("{}", surface.into_inner());
                }
                Format::Json => {
                    let blocks = renderer.render(section)?;
                    let response = SectionResponse {
                        section: section.into(),
                        blocks: BlockResponse::from_blocks(blocks)?,
                    };
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                Format::Html => {
                    print!("{}", render_html(&renderer, section, &config.render)?);
                }
            }
        }

        Commands::Export {
            section,
            output,
            seed,
        } => {
            let section: Section = section.parse()?;
            let config = load_config(cli.config.as_deref())?;
            let blocks = SectionRenderer::new(seed.or(config.render.seed)).render(section)?;
            let charts: Vec<&ChartSpec> = blocks.iter().filter_map(Block::as_chart).collect();

            let sink: Box<dyn Write> = match &output {
                Some(path) => Box::new(
                    std::fs::File::create(path)
                        .with_context(|| format!("Failed to create {:?}", path))?,
                ),
                None => Box::new(std::io::stdout()),
            };

            let rows = write_csv(sink, &charts)?;

            if let Some(path) = output {
                eprintln!(
                    "Exported {} rows from {} charts to {:?}",
                    rows,
                    charts.len(),
                    path
                );
            }
        }

        Commands::Status { api_url } => {
            let response = reqwest::get(format!("{}/health", api_url)).await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Landsat Dashboard v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "Server Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Server Version: {}",
                        health["version"].as_str().unwrap_or("unknown")
                    );
                    println!("Sections: {}", health["sections"].as_u64().unwrap_or(0));
                    println!(
                        "Seeded: {}",
                        if health["seeded"].as_bool().unwrap_or(false) {
                            "yes"
                        } else {
                            "no"
                        }
                    );

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("Server returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to the dashboard at {}", api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the dashboard server is running:");
                    eprintln!("  cargo run --bin landsat-dashboard");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = landsat_dashboard::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Same lookup as the server: explicit file, else default locations
fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Ok(Config::load_with_env(path)?),
        None => Ok(Config::load_default()),
    }
}

/// The full dashboard page, loading Plotly.js from the configured bundle
fn render_html(
    renderer: &SectionRenderer,
    section: Section,
    render: &RenderConfig,
) -> anyhow::Result<String> {
    let mut surface = HtmlSurface::with_plotly_url(section, render.plotly_url.clone());
    renderer.render_to(section, &mut surface)?;
    Ok(surface.finish())
}

/// Write one CSV row per plotted point; returns the number of data rows
fn write_csv<W: Write>(sink: W, charts: &[&ChartSpec]) -> anyhow::Result<usize> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(["chart", "series", "x", "y"])?;

    let mut rows = 0;
    for chart in charts {
        for series in &chart.series {
            for (i, value) in series.values.iter().enumerate() {
                let x = chart.x.label(i).unwrap_or_default();
                writer.write_record([
                    chart.title.as_str(),
                    series.name.as_str(),
                    x.as_str(),
                    value.to_string().as_str(),
                ])?;
                rows += 1;
            }
        }
    }

    writer.flush()?;
    Ok(rows)
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv() {
        let blocks = SectionRenderer::new(Some(1))
            .render(Section::EarthObservatoryInsights)
            .unwrap();
        let charts: Vec<&ChartSpec> = blocks.iter().filter_map(Block::as_chart).collect();

        let mut out = Vec::new();
        let rows = write_csv(&mut out, &charts).unwrap();
        assert_eq!(rows, 10);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "chart,series,x,y");
        assert_eq!(lines[1], "Land Use Changes Over Time,Forest Area,2000,100");
        assert_eq!(lines[10], "Land Use Changes Over Time,Agricultural Area,2020,70");
    }

    #[test]
    fn test_render_html_uses_configured_plotly() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[render]\nseed = 5\nplotly_url = \"/static/plotly.min.js\""
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        let renderer = SectionRenderer::new(config.render.seed);
        let page = render_html(&renderer, Section::SatellitePrograms, &config.render).unwrap();

        assert!(page.contains("<script src=\"/static/plotly.min.js\"></script>"));
        assert!(!page.contains("cdn.plot.ly"));
        assert!(page.contains("Key Satellite Programs in Agriculture"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(7260), "2h 1m");
        assert_eq!(format_duration(90000), "1d 1h");
    }
}
