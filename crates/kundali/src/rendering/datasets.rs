//! Radar datasets built from resolved strengths.

use crate::rendering::radar::{stretch_ratios, RadarDatum};
use crate::strength::bhava_bala::{HouseStrength, BHAVA_MAX_RUPAS};
use crate::strength::life_areas::LifeAreaScore;
use crate::strength::metadata::{house_profile, planet_profile};
use crate::strength::shad_bala::PlanetStrength;

/// Planets plotted directly against their required rupas.
pub fn planet_dataset(planets: &[PlanetStrength]) -> Vec<RadarDatum> {
    planets
        .iter()
        .map(|strength| {
            let name = strength.planet.as_str();
            match planet_profile(name) {
                Some(profile) => RadarDatum::direct(
                    format!("{} {}", profile.icon, name),
                    profile.label,
                    profile.description,
                    strength.rupas,
                    strength.required,
                    profile.color,
                )
                .with_icon(profile.icon),
                None => RadarDatum::direct(name, name, "", strength.rupas, strength.required, "#ffffff"),
            }
        })
        .collect()
}

/// Houses plotted in stretched mode so small differences show.
pub fn house_dataset(houses: &[HouseStrength]) -> Vec<RadarDatum> {
    let ratios: Vec<f64> = houses.iter().map(|h| h.ratio).collect();
    let plotted = stretch_ratios(&ratios);
    houses
        .iter()
        .zip(plotted)
        .map(|(strength, plot_ratio)| {
            let (short_label, description, color) = match house_profile(strength.house) {
                Some(profile) => (profile.short_label, profile.description, profile.color),
                None => ("", "", "#ffffff"),
            };
            RadarDatum::direct(
                format!("H{}", strength.house),
                short_label,
                description,
                strength.rupas,
                BHAVA_MAX_RUPAS,
                color,
            )
            .stretched(plot_ratio)
        })
        .collect()
}

/// Life areas plotted directly, 1.0 = full strength.
pub fn life_area_dataset(areas: &[LifeAreaScore]) -> Vec<RadarDatum> {
    areas
        .iter()
        .map(|area| {
            RadarDatum::direct(
                area.label,
                area.label,
                format!("Combined strength for {}", area.label.to_lowercase()),
                area.score,
                1.0,
                area.color,
            )
        })
        .collect()
}
