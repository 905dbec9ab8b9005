//! Client-side derivations for a Vedic birth chart.
//!
//! Takes the JSON computed by the kundali API and produces display-ready
//! structures: house projections of the Rasi and Navamsa charts, planetary
//! aspects, strength summaries and radar chart geometry. Nothing here does
//! astronomy; all positions come from the response.

pub mod analysis;
pub mod aspects;
pub mod chart;
pub mod dasha;
pub mod payload;
pub mod rendering;
pub mod settings;
pub mod strength;
pub mod zodiac;

pub use analysis::{ChartView, KundaliAnalysis, RadarView};
pub use aspects::{Aspect, AspectCalculator, AspectKind, AspectNature};
pub use chart::{normalize_chart, ChartGrid, ChartKind, HouseProjector};
pub use payload::{load_response_from_json, KundaliResponse, PayloadError};
pub use settings::KundaliSettings;
pub use strength::{HouseStrength, PlanetStrength, StrengthTier};
