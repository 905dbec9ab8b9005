use crate::payload::lenient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Birth chart response as returned by the calculation service.
///
/// Only the fields the derivation layer reads are modeled; everything else in
/// the response is ignored. Chart grids and the localized sign list stay as raw
/// JSON because their shape varies between service versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KundaliResponse {
    #[serde(deserialize_with = "lenient::record")]
    pub lagna: Option<LagnaInfo>,
    #[serde(deserialize_with = "lenient::map_of")]
    pub planets: HashMap<String, PlanetInfo>,
    #[serde(deserialize_with = "lenient::map_of")]
    pub upagrahas: HashMap<String, PlanetInfo>,
    pub rasi_chart: Value,
    pub navamsa_chart: Value,
    pub signs_sanskrit: Value,
    #[serde(deserialize_with = "lenient::map_of")]
    pub shad_bala: HashMap<String, ShadBalaRecord>,
    /// `None` when the service sent no house strengths at all.
    #[serde(deserialize_with = "lenient::house_map")]
    pub bhava_bala: Option<BTreeMap<u8, BhavaBalaRecord>>,
    #[serde(deserialize_with = "lenient::record")]
    pub dasha: Option<DashaInfo>,
}

/// Ascendant data. Rasi and Navamsa indices are independent values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LagnaInfo {
    #[serde(deserialize_with = "lenient::number")]
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub sign: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub sign_index: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub navamsa_sign_index: Option<f64>,
}

/// A planet, node or upagraha position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetInfo {
    #[serde(deserialize_with = "lenient::number")]
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub sign: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub sign_sanskrit: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub sign_index: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub deg: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub min: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub sec: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub house_whole_sign: Option<f64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub retrograde: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub exalted: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub debilitated: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub vargottama: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub combust: bool,
}

/// Shad Bala for one planet. The service fills in one of several totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadBalaRecord {
    #[serde(deserialize_with = "lenient::number")]
    pub total_rupas: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub total_shashtiamsas: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub total_bala: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub required_rupas: Option<f64>,
    #[serde(deserialize_with = "lenient::component")]
    pub sthana_bala: Option<f64>,
    #[serde(deserialize_with = "lenient::component")]
    pub dig_bala: Option<f64>,
    #[serde(deserialize_with = "lenient::component")]
    pub kala_bala: Option<f64>,
    #[serde(deserialize_with = "lenient::component")]
    pub chesta_bala: Option<f64>,
    #[serde(deserialize_with = "lenient::component")]
    pub naisargika_bala: Option<f64>,
    #[serde(deserialize_with = "lenient::component")]
    pub drik_bala: Option<f64>,
}

/// Bhava Bala for one house.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BhavaBalaRecord {
    #[serde(deserialize_with = "lenient::number")]
    pub total_rupas: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub total_shashtiamsas: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub strength: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub lord: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub planets_in_house: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub rating: Option<String>,
}

/// Vimshottari dasha timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaInfo {
    #[serde(deserialize_with = "lenient::text")]
    pub current_dasha: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub moon_nakshatra_name: Option<String>,
    #[serde(deserialize_with = "lenient::list_of")]
    pub periods: Vec<DashaPeriod>,
}

/// One mahadasha period. Dates arrive either as ISO strings or as split fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaPeriod {
    pub planet: String,
    #[serde(deserialize_with = "lenient::text")]
    pub start_datetime: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub start_year: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub start_month: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub start_day: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub end_datetime: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub end_year: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub end_month: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub end_day: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub years: Option<f64>,
}
