pub mod lenient;
pub mod loader;
pub mod types;

pub use loader::{load_match_from_json, load_response_from_json, load_response_from_value, PayloadError};
pub use types::{
    BhavaBalaRecord, DashaInfo, DashaPeriod, KundaliResponse, LagnaInfo, PlanetInfo,
    ShadBalaRecord,
};
