use crate::aspects::interpretations::pair_interpretation;
use crate::aspects::types::{Aspect, AspectKind};
use crate::payload::KundaliResponse;
use std::collections::HashMap;

pub const CLASSICAL_PLANETS: [&str; 7] = [
    "Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn",
];

/// Evaluation order: classical planets, then nodes, then shadow points.
pub const BODY_ORDER: [&str; 11] = [
    "Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn", "Rahu", "Ketu", "Mandi",
    "Gulika",
];

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Compute every aspect among the known bodies, tightest orb first.
    ///
    /// `longitudes` maps body name to ecliptic longitude in degrees. Bodies
    /// outside the evaluation order are ignored and missing ones skip their
    /// pairs.
    pub fn compute_aspects(&self, longitudes: &HashMap<String, f64>) -> Vec<Aspect> {
        let present: Vec<(&str, f64)> = BODY_ORDER
            .iter()
            .filter_map(|name| longitudes.get(*name).map(|lon| (*name, *lon)))
            .collect();

        let mut aspects = Vec::new();
        for i in 0..present.len() {
            for j in (i + 1)..present.len() {
                let (name1, lon1) = present[i];
                let (name2, lon2) = present[j];

                if let Some(aspect) = self.calculate_aspect(name1, lon1, name2, lon2) {
                    aspects.push(aspect);
                }
            }
        }

        // Stable: equal orbs keep discovery order
        aspects.sort_by(|a, b| a.rounded_orb().total_cmp(&b.rounded_orb()));
        log::trace!("{} aspects among {} bodies", aspects.len(), present.len());
        aspects
    }

    /// Classify the separation between two bodies, if it is an aspect.
    pub fn calculate_aspect(
        &self,
        name1: &str,
        lon1: f64,
        name2: &str,
        lon2: f64,
    ) -> Option<Aspect> {
        let angle = separation(lon1, lon2)?;

        // First kind within its orb wins
        for kind in AspectKind::ALL {
            let orb = (angle - kind.exact_angle()).abs();
            if orb <= kind.orb_tolerance() {
                return Some(Aspect {
                    body1: name1.to_string(),
                    body2: name2.to_string(),
                    kind,
                    angle,
                    orb,
                    nature: kind.nature(),
                    one_line: kind.one_line(),
                    pair_one_line: pair_interpretation(name1, name2, kind)
                        .unwrap_or_else(|| kind.one_line()),
                    description: kind.description(),
                    color: kind.color_hex(),
                });
            }
        }

        None
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Shortest-arc separation in [0, 180], `None` for non-finite input.
pub fn separation(lon1: f64, lon2: f64) -> Option<f64> {
    // The fold is |lon1 - lon2|; `% 360` only guards longitudes outside [0, 360)
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if !raw_diff.is_finite() {
        return None;
    }
    Some(if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    })
}

/// Longitudes of every body in a response.
///
/// Upagraha entries replace planets of the same name; bodies without a
/// numeric longitude are left out.
pub fn bodies_from_response(response: &KundaliResponse) -> HashMap<String, f64> {
    let mut bodies = HashMap::new();
    for (name, info) in response.planets.iter().chain(response.upagrahas.iter()) {
        match info.longitude {
            Some(lon) => {
                bodies.insert(name.clone(), lon);
            }
            None => {
                bodies.remove(name);
            }
        }
    }
    bodies
}

/// Convenience wrapper over [`AspectCalculator::compute_aspects`].
pub fn compute_aspects(longitudes: &HashMap<String, f64>) -> Vec<Aspect> {
    AspectCalculator::new().compute_aspects(longitudes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separation_uses_shortest_arc() {
        assert_eq!(separation(0.0, 182.0), Some(178.0));
        assert_eq!(separation(350.0, 10.0), Some(20.0));
        assert_eq!(separation(10.0, f64::NAN), None);
    }

    #[test]
    fn conjunction_beats_everything_at_zero() {
        let aspect = AspectCalculator::new()
            .calculate_aspect("Sun", 100.0, "Moon", 104.0)
            .unwrap();
        assert_eq!(aspect.kind, AspectKind::Conjunction);
        assert!((aspect.orb - 4.0).abs() < 1e-9);
    }

    #[test]
    fn gaps_between_orbs_produce_nothing() {
        // 75 degrees: outside square (82-98) and sextile (54-66)
        assert!(AspectCalculator::new()
            .calculate_aspect("Sun", 0.0, "Moon", 75.0)
            .is_none());
    }

    #[test]
    fn orb_boundary_is_inclusive() {
        let aspect = AspectCalculator::new()
            .calculate_aspect("Mars", 0.0, "Venus", 66.0)
            .unwrap();
        assert_eq!(aspect.kind, AspectKind::Sextile);
    }
}
