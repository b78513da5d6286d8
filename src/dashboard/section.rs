//! Dashboard sections
//!
//! The five pages selectable from the sidebar. Selection is a closed set:
//! anything that does not parse into a [`Section`] is rejected up front, so
//! the renderer can match exhaustively.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::DashboardError;

/// One dashboard page
///
/// Serializes as its slug. Deserializes from a slug or a label, like
/// [`FromStr`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum Section {
    /// Accuracy and components of evapotranspiration
    #[serde(rename = "openet")]
    OpenETEvapotranspiration,
    /// Impact scores of satellite programs
    #[serde(rename = "satellite-programs")]
    SatellitePrograms,
    /// Traditional vs satellite-aided productivity
    #[serde(rename = "impact-on-agriculture")]
    ImpactOnAgriculture,
    /// ARSET training statistics and resources
    #[serde(rename = "arset-training")]
    ARSETTraining,
    /// Land use findings from the Earth Observatory
    #[serde(rename = "earth-observatory")]
    EarthObservatoryInsights,
}

impl Section {
    /// All sections in sidebar order
    pub fn all() -> &'static [Section] {
        &[
            Section::OpenETEvapotranspiration,
            Section::SatellitePrograms,
            Section::ImpactOnAgriculture,
            Section::ARSETTraining,
            Section::EarthObservatoryInsights,
        ]
    }

    /// URL-safe identifier
    pub fn slug(&self) -> &'static str {
        match self {
            Section::OpenETEvapotranspiration => "openet",
            Section::SatellitePrograms => "satellite-programs",
            Section::ImpactOnAgriculture => "impact-on-agriculture",
            Section::ARSETTraining => "arset-training",
            Section::EarthObservatoryInsights => "earth-observatory",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Section::OpenETEvapotranspiration => "OpenET and Evapotranspiration",
            Section::SatellitePrograms => "Satellite Programs",
            Section::ImpactOnAgriculture => "Impact on Agriculture",
            Section::ARSETTraining => "ARSET Training Programs",
            Section::EarthObservatoryInsights => "Earth Observatory Insights",
        }
    }

    /// Header title shown above the section body
    pub fn title(&self) -> &'static str {
        match self {
            Section::OpenETEvapotranspiration => "OpenET and Evapotranspiration",
            Section::SatellitePrograms => "Key Satellite Programs in Agriculture",
            Section::ImpactOnAgriculture => "Impact of Satellite Data on Agriculture",
            Section::ARSETTraining => "ARSET Training Programs for Agriculture",
            Section::EarthObservatoryInsights => "Earth Observatory Insights on Agriculture",
        }
    }

    /// One-line description under the header title
    pub fn description(&self) -> &'static str {
        match self {
            Section::OpenETEvapotranspiration => {
                "Explore the accuracy and components of evapotranspiration"
            }
            Section::SatellitePrograms => {
                "Impact of various satellite programs on agricultural decision making"
            }
            Section::ImpactOnAgriculture => {
                "Comparing traditional methods with satellite-aided approaches"
            }
            Section::ARSETTraining => "Overview of NASA's Applied Remote Sensing Training",
            Section::EarthObservatoryInsights => "Key findings from NASA's Earth Observatory",
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::OpenETEvapotranspiration
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Section {
    type Err = DashboardError;

    /// Accepts a slug or a sidebar label, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Section::all()
            .iter()
            .copied()
            .find(|section| {
                section.slug().eq_ignore_ascii_case(needle)
                    || section.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DashboardError::UnknownSection(s.to_string()))
    }
}

impl TryFrom<String> for Section {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_order() {
        let labels: Vec<&str> = Section::all().iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![
                "OpenET and Evapotranspiration",
                "Satellite Programs",
                "Impact on Agriculture",
                "ARSET Training Programs",
                "Earth Observatory Insights",
            ]
        );
        assert_eq!(Section::default(), Section::all()[0]);
    }

    #[test]
    fn test_parse_slug_and_label() {
        for section in Section::all() {
            assert_eq!(section.slug().parse::<Section>().unwrap(), *section);
            assert_eq!(section.label().parse::<Section>().unwrap(), *section);
        }
        assert_eq!(
            "SATELLITE PROGRAMS".parse::<Section>().unwrap(),
            Section::SatellitePrograms
        );
        assert_eq!(
            " openet ".parse::<Section>().unwrap(),
            Section::OpenETEvapotranspiration
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "weather".parse::<Section>().unwrap_err();
        assert!(matches!(err, DashboardError::UnknownSection(ref s) if s == "weather"));
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Section::ARSETTraining).unwrap();
        assert_eq!(json, "\"arset-training\"");

        let parsed: Section = serde_json::from_str("\"earth-observatory\"").unwrap();
        assert_eq!(parsed, Section::EarthObservatoryInsights);

        let parsed: Section = serde_json::from_str("\"Satellite Programs\"").unwrap();
        assert_eq!(parsed, Section::SatellitePrograms);

        assert!(serde_json::from_str::<Section>("\"weather\"").is_err());
    }
}
