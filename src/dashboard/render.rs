//! Section renderer
//!
//! Maps a [`Section`] to the ordered blocks that make up its body. Each
//! section has its own builder; the dispatch is an exhaustive match, and
//! nothing is carried over between renders.
//!
//! The only nondeterministic input is the productivity trend in
//! [`Section::ImpactOnAgriculture`], which draws from the `Rng` passed in.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::block::Block;
use super::chart::{Axis, ChartKind, ChartSpec, Colorscale, Series};
use super::dataset::{
    ProductivityTrend, ARSET_TRAINING, CROP_WATER_USAGE, ET_ACCURACY, ET_COMPONENTS, LAND_USE,
    PROGRAM_IMPACT,
};
use super::error::DashboardResult;
use super::section::Section;
use crate::surface::RenderSurface;

/// Dashboard palette
const BLUE: &str = "#3498db";
const BLUE_DARK: &str = "#2980b9";
const TEAL: &str = "#1abc9c";
const NAVY_1: &str = "#1e3f66";
const NAVY_2: &str = "#2e5984";
const NAVY_3: &str = "#3e73a2";
const NAVY_4: &str = "#4e8dc0";

/// Build the blocks for one section
pub fn render_section<R: Rng>(section: Section, rng: &mut R) -> DashboardResult<Vec<Block>> {
    let blocks = match section {
        Section::OpenETEvapotranspiration => openet()?,
        Section::SatellitePrograms => satellite_programs()?,
        Section::ImpactOnAgriculture => impact_on_agriculture(rng)?,
        Section::ARSETTraining => arset_training()?,
        Section::EarthObservatoryInsights => earth_observatory()?,
    };

    tracing::debug!(section = section.slug(), blocks = blocks.len(), "Rendered section");
    Ok(blocks)
}

/// Build the blocks for one section and emit them to a surface in order
pub fn render_to<R: Rng, S: RenderSurface + ?Sized>(
    section: Section,
    rng: &mut R,
    surface: &mut S,
) -> DashboardResult<()> {
    let blocks = render_section(section, rng)?;
    crate::surface::emit(&blocks, surface)
}

/// Renders sections with a fixed or fresh random source per call
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionRenderer {
    seed: Option<u64>,
}

impl SectionRenderer {
    /// Create a renderer. With a seed every render is reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Random source for one render pass
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn render(&self, section: Section) -> DashboardResult<Vec<Block>> {
        render_section(section, &mut self.rng())
    }

    pub fn render_to<S: RenderSurface + ?Sized>(
        &self,
        section: Section,
        surface: &mut S,
    ) -> DashboardResult<()> {
        render_to(section, &mut self.rng(), surface)
    }
}

fn header(section: Section) -> Block {
    Block::header(section.title(), section.description())
}

fn openet() -> DashboardResult<Vec<Block>> {
    let accuracy = ChartSpec::new(
        ChartKind::Bar,
        "OpenET Accuracy by Land Cover Type",
        Axis::categories(ET_ACCURACY.iter().map(|(crop, _)| *crop)),
    )
    .series(
        Series::new("Accuracy (%)", ET_ACCURACY.iter().map(|(_, v)| *v))
            .colors([BLUE, BLUE_DARK, TEAL]),
    )
    .build()?;

    let components = ChartSpec::new(
        ChartKind::Pie,
        "Typical Distribution of Evapotranspiration Components",
        Axis::categories(ET_COMPONENTS.iter().map(|(label, _)| *label)),
    )
    .series(
        Series::new("Share (%)", ET_COMPONENTS.iter().map(|(_, v)| *v))
            .colors([NAVY_1, NAVY_3]),
    )
    .hole(0.3)
    .build()?;

    Ok(vec![
        header(Section::OpenETEvapotranspiration),
        Block::subheader("OpenET Accuracy in Calculating Evapotranspiration"),
        Block::chart(accuracy),
        Block::subheader("Components of Evapotranspiration"),
        Block::chart(components),
    ])
}

fn satellite_programs() -> DashboardResult<Vec<Block>> {
    let programs = ChartSpec::new(
        ChartKind::Bar,
        "Impact of Satellite Programs on Agricultural Decision Making",
        Axis::categories(PROGRAM_IMPACT.iter().map(|(program, _)| *program)),
    )
    .series(
        Series::new("Estimated Impact Score", PROGRAM_IMPACT.iter().map(|(_, v)| *v))
            .colors([NAVY_1, NAVY_2, NAVY_3, NAVY_4]),
    )
    .y_label("Estimated Impact Score")
    .build()?;

    Ok(vec![
        header(Section::SatellitePrograms),
        Block::chart(programs),
        Block::info(
            "These programs utilize Landsat data to provide crucial information for \
             agricultural management and water resource planning.",
        ),
    ])
}

fn impact_on_agriculture<R: Rng>(rng: &mut R) -> DashboardResult<Vec<Block>> {
    let trend = ProductivityTrend::generate(rng);
    let productivity = ChartSpec::new(
        ChartKind::Line,
        "Agricultural Productivity Over Time",
        Axis::Numbers(trend.years),
    )
    .series(Series::new("Traditional Methods", trend.traditional).color(NAVY_1))
    .series(Series::new("Satellite-Aided Methods", trend.satellite_aided).color(NAVY_3))
    .x_label("Year")
    .y_label("Productivity Index")
    .build()?;

    let correlation = ChartSpec::new(
        ChartKind::Scatter,
        "Evapotranspiration Accuracy vs Water Usage by Crop Type",
        Axis::numbers(CROP_WATER_USAGE.iter().map(|(_, accuracy, _)| *accuracy)),
    )
    .series(Series::new(
        "Water Usage (inches)",
        CROP_WATER_USAGE.iter().map(|(_, _, usage)| *usage),
    ))
    .marker(10, Colorscale::Viridis)
    .point_labels(CROP_WATER_USAGE.iter().map(|(crop, _, _)| *crop))
    .hover_template(
        "<b>%{text}</b><br>ET Accuracy: %{x}%<br>Water Usage: %{y} inches<extra></extra>",
    )
    .x_label("Evapotranspiration Accuracy (%)")
    .y_label("Water Usage (inches)")
    .build()?;

    Ok(vec![
        header(Section::ImpactOnAgriculture),
        Block::chart(productivity),
        Block::info(
            "This graph illustrates the potential improvement in agricultural productivity \
             when using satellite-aided methods compared to traditional approaches.",
        ),
        Block::subheader("Correlation between Evapotranspiration Accuracy and Crop Types"),
        Block::chart(correlation),
        Block::info(
            "This interactive scatter plot shows the relationship between evapotranspiration \
             accuracy and water usage for different crop types. Hover over the points to see \
             more details.",
        ),
    ])
}

fn arset_training() -> DashboardResult<Vec<Block>> {
    let training = ChartSpec::new(
        ChartKind::GroupedBar,
        "ARSET Agriculture Training Statistics",
        Axis::categories(ARSET_TRAINING.iter().map(|(level, _, _)| *level)),
    )
    .series(
        Series::new("Participants", ARSET_TRAINING.iter().map(|(_, p, _)| *p)).color(NAVY_1),
    )
    .series(
        Series::new(
            "Satisfaction Rate (%)",
            ARSET_TRAINING.iter().map(|(_, _, rate)| *rate),
        )
        .color(NAVY_3),
    )
    .build()?;

    Ok(vec![
        header(Section::ARSETTraining),
        Block::subheader("ARSET Agriculture Training Overview"),
        Block::text(
            "ARSET provides online and in-person trainings on remote sensing in agriculture, \
             ranging from introductory to advanced levels.",
        ),
        Block::chart(training),
        Block::subheader("Key Resources"),
        Block::buttons([
            "NASA Satellite Instruments for Agriculture (PDF)",
            "Online resource guide for agriculture training (PDF)",
        ]),
    ])
}

fn earth_observatory() -> DashboardResult<Vec<Block>> {
    let land_use = ChartSpec::new(
        ChartKind::Line,
        "Land Use Changes Over Time",
        Axis::numbers(LAND_USE.iter().map(|(year, _, _)| *year)),
    )
    .series(
        Series::new("Forest Area", LAND_USE.iter().map(|(_, forest, _)| *forest)).color(NAVY_1),
    )
    .series(
        Series::new("Agricultural Area", LAND_USE.iter().map(|(_, _, farm)| *farm)).color(NAVY_3),
    )
    .x_label("Year")
    .y_label("Area (relative units)")
    .build()?;

    Ok(vec![
        header(Section::EarthObservatoryInsights),
        Block::subheader("Key Findings from Earth Observatory"),
        Block::text("1. Impact of agriculture on deforestation, especially in tropical regions"),
        Block::text(
            "2. Patterns of agricultural land use in various regions (e.g., Great Plains, Nile Delta)",
        ),
        Block::text("3. Use of satellite data in monitoring agricultural fires and their impacts"),
        Block::chart(land_use),
        Block::info(
            "This graph illustrates the inverse relationship between forest area and \
             agricultural land expansion over time.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(blocks: &[Block]) -> Vec<&'static str> {
        blocks.iter().map(Block::kind).collect()
    }

    fn charts(blocks: &[Block]) -> Vec<&ChartSpec> {
        blocks.iter().filter_map(Block::as_chart).collect()
    }

    fn render(section: Section) -> Vec<Block> {
        render_section(section, &mut StdRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn test_block_sequences() {
        assert_eq!(
            kinds(&render(Section::OpenETEvapotranspiration)),
            vec!["header", "subheader", "chart", "subheader", "chart"]
        );
        assert_eq!(
            kinds(&render(Section::SatellitePrograms)),
            vec!["header", "chart", "info"]
        );
        assert_eq!(
            kinds(&render(Section::ImpactOnAgriculture)),
            vec!["header", "chart", "info", "subheader", "chart", "info"]
        );
        assert_eq!(
            kinds(&render(Section::ARSETTraining)),
            vec!["header", "subheader", "text", "chart", "subheader", "buttons"]
        );
        assert_eq!(
            kinds(&render(Section::EarthObservatoryInsights)),
            vec!["header", "subheader", "text", "text", "text", "chart", "info"]
        );
    }

    #[test]
    fn test_header_first() {
        for section in Section::all() {
            let blocks = render(*section);
            assert_eq!(
                blocks[0],
                Block::header(section.title(), section.description())
            );
        }
    }

    #[test]
    fn test_series_lengths_match_axis() {
        for section in Section::all() {
            for chart in charts(&render(*section)) {
                for series in &chart.series {
                    assert_eq!(series.values.len(), chart.x.len(), "{}", chart.title);
                }
            }
        }
    }

    #[test]
    fn test_satellite_programs_scenario() {
        let blocks = render(Section::SatellitePrograms);
        let charts = charts(&blocks);
        assert_eq!(charts.len(), 1);

        let chart = charts[0];
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(
            chart.x,
            Axis::categories([
                "U.S. Drought Monitor",
                "NASA Harvest",
                "OpenET",
                "Crop Condition and Soil Moisture Analytics",
            ])
        );
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].values, vec![85.0, 90.0, 95.0, 80.0]);
        assert_eq!(chart.axis_labels.y.as_deref(), Some("Estimated Impact Score"));

        let infos = blocks.iter().filter(|b| b.kind() == "info").count();
        assert_eq!(infos, 1);
    }

    #[test]
    fn test_openet_literals() {
        let blocks = render(Section::OpenETEvapotranspiration);
        let charts = charts(&blocks);

        assert_eq!(
            charts[0].x,
            Axis::categories(["Annual Crops", "Perennial Crops", "Natural Landscapes"])
        );
        assert_eq!(charts[0].series[0].values, vec![90.0, 85.0, 80.0]);

        assert_eq!(charts[1].kind, ChartKind::Pie);
        assert_eq!(charts[1].series[0].values, vec![40.0, 60.0]);
        assert_eq!(charts[1].hole, Some(0.3));
    }

    #[test]
    fn test_arset_literals() {
        let blocks = render(Section::ARSETTraining);
        let chart = charts(&blocks)[0];

        assert_eq!(chart.kind, ChartKind::GroupedBar);
        assert_eq!(
            chart.x,
            Axis::categories(["Introductory", "Intermediate", "Advanced"])
        );
        assert_eq!(chart.series[0].name, "Participants");
        assert_eq!(chart.series[0].values, vec![500.0, 300.0, 200.0]);
        assert_eq!(chart.series[1].values, vec![95.0, 92.0, 90.0]);

        assert_eq!(
            blocks.last(),
            Some(&Block::buttons([
                "NASA Satellite Instruments for Agriculture (PDF)",
                "Online resource guide for agriculture training (PDF)",
            ]))
        );
    }

    #[test]
    fn test_land_use_literals() {
        let blocks = render(Section::EarthObservatoryInsights);
        let chart = charts(&blocks)[0];

        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(
            chart.x,
            Axis::Numbers(vec![2000.0, 2005.0, 2010.0, 2015.0, 2020.0])
        );
        assert_eq!(chart.series[0].name, "Forest Area");
        assert_eq!(chart.series[0].values, vec![100.0, 95.0, 90.0, 85.0, 80.0]);
        assert_eq!(chart.series[1].name, "Agricultural Area");
        assert_eq!(chart.series[1].values, vec![50.0, 55.0, 60.0, 65.0, 70.0]);
    }

    #[test]
    fn test_impact_bounds_with_entropy() {
        let renderer = SectionRenderer::new(None);
        for _ in 0..50 {
            let blocks = renderer.render(Section::ImpactOnAgriculture).unwrap();
            let chart = charts(&blocks)[0];
            assert_eq!(chart.x.len(), 15);

            let traditional = &chart.series[0].values;
            let satellite = &chart.series[1].values;
            for i in 0..15 {
                let fi = i as f64;
                assert!(traditional[i] >= 100.0 + 3.0 * fi - 5.0);
                assert!(traditional[i] <= 100.0 + 3.0 * fi + 5.0);
                assert!(satellite[i] >= 100.0 + 5.0 * fi - 3.0);
                assert!(satellite[i] <= 100.0 + 5.0 * fi + 7.0);
            }
        }
    }

    #[test]
    fn test_scatter_chart() {
        let blocks = render(Section::ImpactOnAgriculture);
        let scatter = charts(&blocks)[1];

        assert_eq!(scatter.kind, ChartKind::Scatter);
        assert_eq!(scatter.x, Axis::Numbers(vec![92.0, 88.0, 90.0, 85.0, 87.0]));
        assert_eq!(scatter.series[0].values, vec![25.0, 20.0, 22.0, 30.0, 35.0]);
        assert_eq!(
            scatter.point_labels,
            vec!["Corn", "Wheat", "Soybeans", "Cotton", "Rice"]
        );
    }

    #[test]
    fn test_idempotent_without_randomness() {
        let renderer = SectionRenderer::new(None);
        for section in Section::all() {
            if *section == Section::ImpactOnAgriculture {
                continue;
            }
            let first = serde_json::to_string(&renderer.render(*section).unwrap()).unwrap();
            let second = serde_json::to_string(&renderer.render(*section).unwrap()).unwrap();
            assert_eq!(first, second, "{}", section);
        }
    }

    #[test]
    fn test_seeded_renderer_reproducible() {
        let renderer = SectionRenderer::new(Some(2024));
        let first = renderer.render(Section::ImpactOnAgriculture).unwrap();
        let second = renderer.render(Section::ImpactOnAgriculture).unwrap();
        assert_eq!(first, second);
        assert_eq!(renderer.seed(), Some(2024));
    }
}
