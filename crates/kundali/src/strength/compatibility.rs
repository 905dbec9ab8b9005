//! Bands for chart-matching scores.
//!
//! The match service scores two charts per category (`score` out of
//! `maxScore`). Everything here works on the percentage of the maximum.

use crate::payload::lenient;
use serde::{Deserialize, Serialize};

/// Category name the service uses for the combined score.
pub const OVERALL_CATEGORY: &str = "Overall Compatibility";

pub const HIGH_BAND_THRESHOLD: f64 = 75.0;
pub const MID_BAND_THRESHOLD: f64 = 50.0;

/// Score of one matching category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchScore {
    #[serde(deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub score: Option<f64>,
    #[serde(rename = "maxScore", alias = "max_score", deserialize_with = "lenient::number")]
    pub max_score: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

impl MatchScore {
    /// Share of the maximum as a percentage.
    ///
    /// A missing score counts as 0. A missing or non-positive maximum gives 0.
    pub fn percentage(&self) -> f64 {
        score_percentage(self.score.unwrap_or(0.0), self.max_score.unwrap_or(0.0))
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::classify(self.percentage())
    }

    pub fn is_overall(&self) -> bool {
        self.category.as_deref() == Some(OVERALL_CATEGORY)
    }
}

pub fn score_percentage(score: f64, max_score: f64) -> f64 {
    if max_score > 0.0 && score.is_finite() && max_score.is_finite() {
        score / max_score * 100.0
    } else {
        0.0
    }
}

/// Body of a chart-matching response. The two charts it also carries are
/// decoded separately with the regular response loader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchResponse {
    #[serde(deserialize_with = "lenient::text")]
    pub chart1_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub chart2_name: Option<String>,
    #[serde(deserialize_with = "lenient::list_of")]
    pub scores: Vec<MatchScore>,
    #[serde(deserialize_with = "lenient::number")]
    pub total_score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub total_max: Option<f64>,
}

impl MatchResponse {
    /// The combined score, if the service sent one.
    pub fn overall(&self) -> Option<&MatchScore> {
        self.scores.iter().find(|s| s.is_overall())
    }

    /// Per-category scores without the combined one.
    pub fn categories(&self) -> impl Iterator<Item = &MatchScore> {
        self.scores.iter().filter(|s| !s.is_overall())
    }

    /// Level of the combined score. `None` without an overall category.
    pub fn level(&self) -> Option<CompatibilityLevel> {
        self.overall()
            .map(|overall| CompatibilityLevel::classify(overall.percentage()))
    }
}

/// Color band for a single category score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    High,
    Mid,
    Low,
}

impl ScoreBand {
    /// Lower bounds are inclusive. NaN falls through to `Low`.
    pub fn classify(percentage: f64) -> Self {
        if percentage >= HIGH_BAND_THRESHOLD {
            ScoreBand::High
        } else if percentage >= MID_BAND_THRESHOLD {
            ScoreBand::Mid
        } else {
            ScoreBand::Low
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::High => "#10b981",
            ScoreBand::Mid => "#f59e0b",
            ScoreBand::Low => "#ef4444",
        }
    }
}

/// Overall verdict for a pair of charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    Excellent,
    Good,
    Moderate,
    Challenging,
}

impl CompatibilityLevel {
    /// Bands at 80, 60 and 40 percent, lower bounds inclusive.
    pub fn classify(percentage: f64) -> Self {
        if percentage >= 80.0 {
            CompatibilityLevel::Excellent
        } else if percentage >= 60.0 {
            CompatibilityLevel::Good
        } else if percentage >= 40.0 {
            CompatibilityLevel::Moderate
        } else {
            CompatibilityLevel::Challenging
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompatibilityLevel::Excellent => "Excellent Match",
            CompatibilityLevel::Good => "Good Match",
            CompatibilityLevel::Moderate => "Moderate Match",
            CompatibilityLevel::Challenging => "Challenging Match",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CompatibilityLevel::Excellent => "Highly compatible with strong astrological harmony",
            CompatibilityLevel::Good => "Compatible with good potential for harmony",
            CompatibilityLevel::Moderate => "Some compatibility, may require effort and understanding",
            CompatibilityLevel::Challenging => "Lower compatibility, requires conscious effort and compromise",
        }
    }

    /// Badge color
    pub fn color(self) -> &'static str {
        match self {
            CompatibilityLevel::Excellent => "#16a34a",
            CompatibilityLevel::Good => "#2563eb",
            CompatibilityLevel::Moderate => "#d97706",
            CompatibilityLevel::Challenging => "#dc2626",
        }
    }
}

impl std::fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bands_are_inclusive_at_their_floor() {
        assert_eq!(ScoreBand::classify(75.0), ScoreBand::High);
        assert_eq!(ScoreBand::classify(74.999), ScoreBand::Mid);
        assert_eq!(ScoreBand::classify(50.0), ScoreBand::Mid);
        assert_eq!(ScoreBand::classify(49.999), ScoreBand::Low);
        assert_eq!(ScoreBand::classify(f64::NAN), ScoreBand::Low);
        assert_eq!(ScoreBand::High.color(), "#10b981");
    }

    #[test]
    fn levels_are_inclusive_at_their_floor() {
        assert_eq!(CompatibilityLevel::classify(100.0), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::classify(80.0), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::classify(79.9), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::classify(60.0), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::classify(59.9), CompatibilityLevel::Moderate);
        assert_eq!(CompatibilityLevel::classify(40.0), CompatibilityLevel::Moderate);
        assert_eq!(CompatibilityLevel::classify(39.9), CompatibilityLevel::Challenging);
        assert_eq!(CompatibilityLevel::classify(f64::NAN), CompatibilityLevel::Challenging);
    }

    #[test]
    fn percentage_of_the_maximum() {
        let score = MatchScore {
            score: Some(27.0),
            max_score: Some(36.0),
            ..Default::default()
        };
        assert_eq!(score.percentage(), 75.0);
        assert_eq!(score.band(), ScoreBand::High);
        assert_eq!(score_percentage(3.0, 0.0), 0.0);
        assert_eq!(score_percentage(3.0, -4.0), 0.0);
        assert_eq!(MatchScore::default().percentage(), 0.0);
    }
}
