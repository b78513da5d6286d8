//! Sample datasets
//!
//! Literal tables shown on the dashboard and the one synthetic series,
//! the productivity trend, which is generated from a caller-supplied random
//! source. None of this is measured data.

use rand::Rng;

/// OpenET accuracy by land cover type (%)
pub const ET_ACCURACY: [(&str, f64); 3] = [
    ("Annual Crops", 90.0),
    ("Perennial Crops", 85.0),
    ("Natural Landscapes", 80.0),
];

/// Typical split of evapotranspiration components (%)
pub const ET_COMPONENTS: [(&str, f64); 2] = [("Evaporation", 40.0), ("Transpiration", 60.0)];

/// Estimated impact score of satellite programs on agricultural decisions
pub const PROGRAM_IMPACT: [(&str, f64); 4] = [
    ("U.S. Drought Monitor", 85.0),
    ("NASA Harvest", 90.0),
    ("OpenET", 95.0),
    ("Crop Condition and Soil Moisture Analytics", 80.0),
];

/// Crop, ET accuracy (%), water usage (inches)
pub const CROP_WATER_USAGE: [(&str, f64, f64); 5] = [
    ("Corn", 92.0, 25.0),
    ("Wheat", 88.0, 20.0),
    ("Soybeans", 90.0, 22.0),
    ("Cotton", 85.0, 30.0),
    ("Rice", 87.0, 35.0),
];

/// Training level, participants, satisfaction rate (%)
pub const ARSET_TRAINING: [(&str, f64, f64); 3] = [
    ("Introductory", 500.0, 95.0),
    ("Intermediate", 300.0, 92.0),
    ("Advanced", 200.0, 90.0),
];

/// Year, forest area, agricultural area (relative units)
pub const LAND_USE: [(f64, f64, f64); 5] = [
    (2000.0, 100.0, 50.0),
    (2005.0, 95.0, 55.0),
    (2010.0, 90.0, 60.0),
    (2015.0, 85.0, 65.0),
    (2020.0, 80.0, 70.0),
];

/// First year of the productivity trend
pub const TREND_START_YEAR: u32 = 2010;

/// Number of years in the productivity trend (2010..=2024)
pub const TREND_LEN: usize = 15;

/// Baseline productivity index at the first year
const TREND_BASE: i64 = 100;

/// Per-year slope and half-open noise range for traditional methods
const TRADITIONAL_SLOPE: i64 = 3;
const TRADITIONAL_NOISE: std::ops::Range<i64> = -5..5;

/// Per-year slope and half-open noise range for satellite-aided methods
const SATELLITE_SLOPE: i64 = 5;
const SATELLITE_NOISE: std::ops::Range<i64> = -3..7;

/// Simulated productivity index, traditional vs satellite-aided methods
#[derive(Debug, Clone, PartialEq)]
pub struct ProductivityTrend {
    pub years: Vec<f64>,
    pub traditional: Vec<f64>,
    pub satellite_aided: Vec<f64>,
}

impl ProductivityTrend {
    /// Draw a new trend: a linear baseline per method plus integer noise
    ///
    /// `traditional[i]` lies in `100 + 3i - 5 ..= 100 + 3i + 4` and
    /// `satellite_aided[i]` in `100 + 5i - 3 ..= 100 + 5i + 6`.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut years = Vec::with_capacity(TREND_LEN);
        let mut traditional = Vec::with_capacity(TREND_LEN);
        let mut satellite_aided = Vec::with_capacity(TREND_LEN);

        for i in 0..TREND_LEN as i64 {
            years.push((TREND_START_YEAR as i64 + i) as f64);
            let t = TREND_BASE + TRADITIONAL_SLOPE * i + rng.gen_range(TRADITIONAL_NOISE);
            traditional.push(t as f64);
            let s = TREND_BASE + SATELLITE_SLOPE * i + rng.gen_range(SATELLITE_NOISE);
            satellite_aided.push(s as f64);
        }

        Self {
            years,
            traditional,
            satellite_aided,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_trend_within_bounds() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let trend = ProductivityTrend::generate(&mut rng);

            assert_eq!(trend.years.len(), TREND_LEN);
            assert_eq!(trend.traditional.len(), TREND_LEN);
            assert_eq!(trend.satellite_aided.len(), TREND_LEN);

            for i in 0..TREND_LEN {
                let fi = i as f64;
                let t = trend.traditional[i];
                assert!(t >= 100.0 + 3.0 * fi - 5.0 && t <= 100.0 + 3.0 * fi + 5.0);
                let s = trend.satellite_aided[i];
                assert!(s >= 100.0 + 5.0 * fi - 3.0 && s <= 100.0 + 5.0 * fi + 7.0);
            }
        }
    }

    #[test]
    fn test_trend_years() {
        let trend = ProductivityTrend::generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(trend.years.first(), Some(&2010.0));
        assert_eq!(trend.years.last(), Some(&2024.0));
    }

    #[test]
    fn test_trend_seeded_reproducible() {
        let a = ProductivityTrend::generate(&mut StdRng::seed_from_u64(42));
        let b = ProductivityTrend::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_literal_tables() {
        let accuracy: Vec<f64> = ET_ACCURACY.iter().map(|(_, v)| *v).collect();
        assert_eq!(accuracy, vec![90.0, 85.0, 80.0]);

        let participants: Vec<f64> = ARSET_TRAINING.iter().map(|(_, p, _)| *p).collect();
        assert_eq!(participants, vec![500.0, 300.0, 200.0]);

        let years: Vec<f64> = LAND_USE.iter().map(|(y, _, _)| *y).collect();
        assert_eq!(years, vec![2000.0, 2005.0, 2010.0, 2015.0, 2020.0]);
    }
}
