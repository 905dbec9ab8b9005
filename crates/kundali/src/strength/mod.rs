//! Strength aggregation: Shad Bala, Bhava Bala and the composites built on them.

pub mod bhava_bala;
pub mod compatibility;
pub mod insights;
pub mod life_areas;
pub mod metadata;
pub mod series;
pub mod shad_bala;
pub mod tier;

/// 60 shashtiamsas make one rupa.
pub const SHASHTIAMSAS_PER_RUPA: f64 = 60.0;

pub use bhava_bala::{house_strengths, HouseStrength, BHAVA_MAX_RUPAS};
pub use compatibility::{
    score_percentage, CompatibilityLevel, MatchResponse, MatchScore, ScoreBand, OVERALL_CATEGORY,
};
pub use insights::StrengthInsights;
pub use life_areas::{life_area_scores, LifeArea, LifeAreaScore, LIFE_AREAS};
pub use metadata::{house_profile, planet_profile, HouseProfile, PlanetProfile};
pub use series::{max_by, top_by, BalaMetric, BalaSample};
pub use shad_bala::{planet_strengths, required_rupas, BalaComponent, PlanetStrength, REQUIRED_RUPAS};
pub use tier::StrengthTier;
