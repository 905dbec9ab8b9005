use serde::{Deserialize, Serialize};

/// Whether an aspect supports or strains the bodies involved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectNature {
    Harmonious,
    Tense,
    Neutral,
}

impl std::str::FromStr for AspectNature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "harmonious" => Ok(AspectNature::Harmonious),
            "tense" => Ok(AspectNature::Tense),
            "neutral" => Ok(AspectNature::Neutral),
            other => Err(format!("unknown aspect nature: {other}")),
        }
    }
}

/// The five aspects, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectKind {
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Trine,
        AspectKind::Square,
        AspectKind::Sextile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
        }
    }

    /// Exact angle in degrees
    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Trine => 120.0,
            AspectKind::Square => 90.0,
            AspectKind::Sextile => 60.0,
        }
    }

    /// Largest allowed deviation from the exact angle
    pub fn orb_tolerance(self) -> f64 {
        match self {
            AspectKind::Conjunction | AspectKind::Opposition => 10.0,
            AspectKind::Trine | AspectKind::Square => 8.0,
            AspectKind::Sextile => 6.0,
        }
    }

    pub fn nature(self) -> AspectNature {
        match self {
            AspectKind::Conjunction => AspectNature::Neutral,
            AspectKind::Opposition | AspectKind::Square => AspectNature::Tense,
            AspectKind::Trine | AspectKind::Sextile => AspectNature::Harmonious,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "☌",
            AspectKind::Opposition => "☍",
            AspectKind::Trine => "△",
            AspectKind::Square => "□",
            AspectKind::Sextile => "⚹",
        }
    }

    pub fn color_hex(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "#e9d5ff",
            AspectKind::Opposition => "#f87171",
            AspectKind::Trine => "#4ade80",
            AspectKind::Square => "#fbbf24",
            AspectKind::Sextile => "#93c5fd",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Blending of energies, intensification",
            AspectKind::Opposition => "Polarity, awareness, balance needed",
            AspectKind::Trine => "Flow, natural talent, ease",
            AspectKind::Square => "Friction, challenge, growth",
            AspectKind::Sextile => "Opportunity, cooperation",
        }
    }

    /// Generic interpretation used when no pair-specific text exists
    pub fn one_line(self) -> &'static str {
        match self {
            AspectKind::Conjunction => {
                "Energy fusion: the two planets act as one and amplify each other."
            }
            AspectKind::Opposition => {
                "Awareness through polarity: balance two competing needs/forces."
            }
            AspectKind::Trine => "Easy flow: natural talent and support with minimal resistance.",
            AspectKind::Square => {
                "Growth pressure: friction that pushes action, mastery, and change."
            }
            AspectKind::Sextile => {
                "Opportunity: helpful cooperation that activates with initiative."
            }
        }
    }

    /// Position in [`AspectKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::str::FromStr for AspectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown aspect type: {s}"))
    }
}

/// A matched aspect between two bodies.
///
/// `body1` precedes `body2` in the fixed evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    pub body1: String,
    pub body2: String,
    #[serde(rename = "type")]
    pub kind: AspectKind,
    /// Shortest-arc separation in degrees, [0, 180]
    pub angle: f64,
    /// Deviation from the exact angle in degrees
    pub orb: f64,
    pub nature: AspectNature,
    pub one_line: &'static str,
    pub pair_one_line: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

impl Aspect {
    /// Separation rounded to whole degrees, as labeled.
    pub fn rounded_angle(&self) -> f64 {
        self.angle.round()
    }

    /// Orb rounded to a tenth of a degree, as labeled and sorted.
    pub fn rounded_orb(&self) -> f64 {
        (self.orb * 10.0).round() / 10.0
    }

    pub fn involves(&self, body: &str) -> bool {
        self.body1 == body || self.body2 == body
    }
}
