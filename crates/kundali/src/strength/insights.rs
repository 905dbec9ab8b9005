use crate::strength::bhava_bala::HouseStrength;
use crate::strength::shad_bala::PlanetStrength;
use serde::{Deserialize, Serialize};

/// Ratio at or above which an entity is counted as strong in the summary.
pub const STRONG_RATIO: f64 = 1.2;

/// Headline numbers shown above the strength charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthInsights {
    pub planet_average: f64,
    /// 0 when the chart has no house data
    pub house_average: f64,
    pub strong_planets: usize,
    pub strong_houses: usize,
    pub planet_count: usize,
    pub house_count: usize,
    pub strongest_planet: Option<String>,
    pub weakest_planet: Option<String>,
}

impl StrengthInsights {
    pub fn compute(planets: &[PlanetStrength], houses: Option<&[HouseStrength]>) -> Self {
        let houses = houses.unwrap_or(&[]);

        let planet_average = average(planets.iter().map(|p| p.ratio));
        let house_average = average(houses.iter().map(|h| h.ratio));

        // Ties keep the earlier planet
        let mut strongest: Option<&PlanetStrength> = None;
        let mut weakest: Option<&PlanetStrength> = None;
        for planet in planets {
            if strongest.map_or(true, |s| planet.ratio > s.ratio) {
                strongest = Some(planet);
            }
            if weakest.map_or(true, |w| planet.ratio < w.ratio) {
                weakest = Some(planet);
            }
        }

        Self {
            planet_average,
            house_average,
            strong_planets: planets.iter().filter(|p| p.ratio >= STRONG_RATIO).count(),
            strong_houses: houses.iter().filter(|h| h.ratio >= STRONG_RATIO).count(),
            planet_count: planets.len(),
            house_count: houses.len(),
            strongest_planet: strongest.map(|p| p.planet.clone()),
            weakest_planet: weakest.map(|p| p.planet.clone()),
        }
    }
}

fn average<I: Iterator<Item = f64>>(values: I) -> f64 {
    let values: Vec<f64> = values.collect();
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
