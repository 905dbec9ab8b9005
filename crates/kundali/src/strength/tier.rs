use serde::{Deserialize, Serialize};

pub const STRONG_THRESHOLD: f64 = 120.0;
pub const MEDIUM_THRESHOLD: f64 = 90.0;

/// Three-band strength classification shared by planets and houses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthTier {
    Strong,
    Medium,
    Weak,
}

impl StrengthTier {
    /// Classify a percentage of the required strength.
    ///
    /// Lower bounds are inclusive. NaN falls through to `Weak`.
    pub fn classify(percentage: f64) -> Self {
        if percentage >= STRONG_THRESHOLD {
            StrengthTier::Strong
        } else if percentage >= MEDIUM_THRESHOLD {
            StrengthTier::Medium
        } else {
            StrengthTier::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Strong => "Strong",
            StrengthTier::Medium => "Medium",
            StrengthTier::Weak => "Weak",
        }
    }
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_partition_the_line() {
        assert_eq!(StrengthTier::classify(0.0), StrengthTier::Weak);
        assert_eq!(StrengthTier::classify(89.999), StrengthTier::Weak);
        assert_eq!(StrengthTier::classify(90.0), StrengthTier::Medium);
        assert_eq!(StrengthTier::classify(119.999), StrengthTier::Medium);
        assert_eq!(StrengthTier::classify(120.0), StrengthTier::Strong);
        assert_eq!(StrengthTier::classify(f64::INFINITY), StrengthTier::Strong);
        assert_eq!(StrengthTier::classify(f64::NAN), StrengthTier::Weak);
    }
}
