//! Planetary strength (Shad Bala).

use crate::aspects::calculator::CLASSICAL_PLANETS;
use crate::payload::ShadBalaRecord;
use crate::strength::tier::StrengthTier;
use crate::strength::SHASHTIAMSAS_PER_RUPA;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// (planet, minimum rupas for a planet to count as strong enough)
pub const REQUIRED_RUPAS: &[(&str, f64)] = &[
    ("Sun", 5.0),
    ("Moon", 6.0),
    ("Mars", 5.0),
    ("Mercury", 7.0),
    ("Jupiter", 6.5),
    ("Venus", 5.5),
    ("Saturn", 5.0),
];

pub const DEFAULT_REQUIRED_RUPAS: f64 = 5.0;

impl ShadBalaRecord {
    /// Strength in rupas.
    ///
    /// Precedence: `total_rupas`, then `total_shashtiamsas / 60`, then
    /// `total_bala / 60`, then 0.
    pub fn rupas(&self) -> f64 {
        if let Some(rupas) = self.total_rupas {
            rupas
        } else if let Some(units) = self.total_shashtiamsas {
            units / SHASHTIAMSAS_PER_RUPA
        } else if let Some(bala) = self.total_bala {
            bala / SHASHTIAMSAS_PER_RUPA
        } else {
            0.0
        }
    }

    /// Total in shashtiamsas as shown in the strength table.
    pub fn shashtiamsas(&self) -> f64 {
        if let Some(units) = self.total_shashtiamsas {
            units.round()
        } else if let Some(rupas) = self.total_rupas {
            (rupas * SHASHTIAMSAS_PER_RUPA).round()
        } else {
            self.total_bala.unwrap_or(0.0)
        }
    }

    /// The six component balas that are present, in traditional order.
    pub fn components(&self) -> Vec<(&'static str, f64)> {
        [
            ("Sthana", self.sthana_bala),
            ("Dig", self.dig_bala),
            ("Kala", self.kala_bala),
            ("Chesta", self.chesta_bala),
            ("Naisargika", self.naisargika_bala),
            ("Drik", self.drik_bala),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }
}

/// Required rupas for a planet, honoring a usable override on the record.
pub fn required_rupas(planet: &str, record: Option<&ShadBalaRecord>) -> f64 {
    if let Some(explicit) = record.and_then(|r| r.required_rupas) {
        if explicit > 0.0 {
            return explicit;
        }
        log::debug!("{planet}: ignoring non-positive required_rupas {explicit}");
    }
    REQUIRED_RUPAS
        .iter()
        .find(|(name, _)| *name == planet)
        .map(|(_, required)| *required)
        .unwrap_or(DEFAULT_REQUIRED_RUPAS)
}

/// One of the six Shad Bala components, in shashtiamsas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalaComponent {
    pub name: String,
    pub value: f64,
}

/// Resolved strength of one planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetStrength {
    pub planet: String,
    pub rupas: f64,
    pub required: f64,
    /// rupas / required
    pub ratio: f64,
    pub percentage: f64,
    pub tier: StrengthTier,
    pub shashtiamsas: f64,
    /// Components present on the record, in traditional order.
    pub components: Vec<BalaComponent>,
}

impl PlanetStrength {
    /// Resolve a planet's record; a missing record counts as all zero.
    pub fn resolve(planet: &str, record: Option<&ShadBalaRecord>) -> Self {
        let empty = ShadBalaRecord::default();
        let bala = record.unwrap_or(&empty);
        let rupas = bala.rupas();
        let required = required_rupas(planet, record);
        let ratio = rupas / required;
        let percentage = ratio * 100.0;
        Self {
            planet: planet.to_string(),
            rupas,
            required,
            ratio,
            percentage,
            tier: StrengthTier::classify(percentage),
            shashtiamsas: bala.shashtiamsas(),
            components: bala
                .components()
                .into_iter()
                .map(|(name, value)| BalaComponent {
                    name: name.to_string(),
                    value,
                })
                .collect(),
        }
    }
}

/// Strengths of the seven classical planets in canonical order.
pub fn planet_strengths(shad_bala: &HashMap<String, ShadBalaRecord>) -> Vec<PlanetStrength> {
    CLASSICAL_PLANETS
        .iter()
        .map(|planet| PlanetStrength::resolve(planet, shad_bala.get(*planet)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ShadBalaRecord {
        ShadBalaRecord::default()
    }

    #[test]
    fn rupas_precedence() {
        let mut r = record();
        r.total_bala = Some(120.0);
        assert_eq!(r.rupas(), 2.0);
        r.total_shashtiamsas = Some(300.0);
        assert_eq!(r.rupas(), 5.0);
        r.total_rupas = Some(6.25);
        assert_eq!(r.rupas(), 6.25);
        assert_eq!(record().rupas(), 0.0);
    }

    #[test]
    fn shashtiamsas_display_total() {
        let mut r = record();
        r.total_rupas = Some(6.51);
        assert_eq!(r.shashtiamsas(), 391.0);
        r.total_shashtiamsas = Some(400.4);
        assert_eq!(r.shashtiamsas(), 400.0);
    }

    #[test]
    fn override_must_be_positive() {
        let mut r = record();
        r.required_rupas = Some(0.0);
        assert_eq!(required_rupas("Mercury", Some(&r)), 7.0);
        r.required_rupas = Some(4.0);
        assert_eq!(required_rupas("Mercury", Some(&r)), 4.0);
        assert_eq!(required_rupas("Rahu", None), DEFAULT_REQUIRED_RUPAS);
    }

    #[test]
    fn missing_record_is_zero_strength() {
        let strength = PlanetStrength::resolve("Moon", None);
        assert_eq!(strength.rupas, 0.0);
        assert_eq!(strength.required, 6.0);
        assert_eq!(strength.tier, StrengthTier::Weak);
        assert!(strength.components.is_empty());
    }

    #[test]
    fn components_keep_traditional_order() {
        let mut r = record();
        r.drik_bala = Some(-12.5);
        r.sthana_bala = Some(140.0);
        r.kala_bala = Some(95.0);
        let names: Vec<&str> = r.components().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["Sthana", "Kala", "Drik"]);

        let strength = PlanetStrength::resolve("Sun", Some(&r));
        assert_eq!(strength.components.len(), 3);
        assert_eq!(strength.components[2].name, "Drik");
        assert_eq!(strength.components[2].value, -12.5);
    }
}
