//! House strength (Bhava Bala).

use crate::chart::houses::HOUSE_COUNT;
use crate::payload::BhavaBalaRecord;
use crate::strength::tier::StrengthTier;
use crate::strength::SHASHTIAMSAS_PER_RUPA;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rupas treated as full strength for every house.
pub const BHAVA_MAX_RUPAS: f64 = 4.5;

impl BhavaBalaRecord {
    /// Strength in rupas: `total_rupas`, then `total_shashtiamsas / 60`, then
    /// `strength / 60`, then 0.
    pub fn rupas(&self) -> f64 {
        if let Some(rupas) = self.total_rupas {
            rupas
        } else if let Some(units) = self.total_shashtiamsas {
            units / SHASHTIAMSAS_PER_RUPA
        } else if let Some(strength) = self.strength {
            strength / SHASHTIAMSAS_PER_RUPA
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseStrength {
    pub house: u8,
    pub rupas: f64,
    /// rupas / 4.5
    pub ratio: f64,
    pub percentage: f64,
    pub tier: StrengthTier,
    pub lord: Option<String>,
    pub occupants: Vec<String>,
}

impl HouseStrength {
    pub fn resolve(house: u8, record: Option<&BhavaBalaRecord>) -> Self {
        let rupas = record.map(BhavaBalaRecord::rupas).unwrap_or(0.0);
        let ratio = rupas / BHAVA_MAX_RUPAS;
        let percentage = ratio * 100.0;
        Self {
            house,
            rupas,
            ratio,
            percentage,
            tier: StrengthTier::classify(percentage),
            lord: record.and_then(|r| r.lord.clone()),
            occupants: record.map(|r| r.planets_in_house.clone()).unwrap_or_default(),
        }
    }
}

/// Strengths of houses 1-12, or `None` when the chart has no house data.
///
/// Houses missing from a present map resolve to zero.
pub fn house_strengths(bhava_bala: Option<&BTreeMap<u8, BhavaBalaRecord>>) -> Option<Vec<HouseStrength>> {
    let records = bhava_bala?;
    Some(
        (1..=HOUSE_COUNT)
            .map(|house| HouseStrength::resolve(house, records.get(&house)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupas_fall_back_to_generic_strength() {
        let record = BhavaBalaRecord {
            strength: Some(270.0),
            ..Default::default()
        };
        assert_eq!(record.rupas(), 4.5);
        assert_eq!(HouseStrength::resolve(1, Some(&record)).tier, StrengthTier::Medium);
    }

    #[test]
    fn absent_house_data_is_none_but_empty_map_is_twelve_zeros() {
        assert!(house_strengths(None).is_none());
        let empty = BTreeMap::new();
        let houses = house_strengths(Some(&empty)).unwrap();
        assert_eq!(houses.len(), 12);
        assert!(houses.iter().all(|h| h.rupas == 0.0));
    }
}
