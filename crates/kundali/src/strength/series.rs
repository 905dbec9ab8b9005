//! Ranking of strength samples taken over a span of birth times.
//!
//! The batch endpoint returns one sample per instant with the summed Shad Bala
//! and Bhava Bala. These helpers pick the best instants out of that list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_TOP_COUNT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalaTotals {
    pub totals: HashMap<String, f64>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalaSample {
    pub datetime: String,
    #[serde(default)]
    pub shad_bala: BalaTotals,
    #[serde(default)]
    pub bhava_bala: BalaTotals,
}

/// Which total to rank by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalaMetric {
    Shad,
    Bhava,
    Combined,
}

impl BalaMetric {
    pub fn value(self, sample: &BalaSample) -> f64 {
        match self {
            BalaMetric::Shad => sample.shad_bala.total,
            BalaMetric::Bhava => sample.bhava_bala.total,
            BalaMetric::Combined => sample.shad_bala.total + sample.bhava_bala.total,
        }
    }
}

/// Sample with the highest value; the earliest one wins ties.
pub fn max_by(samples: &[BalaSample], metric: BalaMetric) -> Option<&BalaSample> {
    samples.iter().fold(None, |best: Option<&BalaSample>, sample| match best {
        Some(current) if metric.value(sample) <= metric.value(current) => Some(current),
        _ => Some(sample),
    })
}

/// The `count` highest samples, descending, ties in input order.
pub fn top_by(samples: &[BalaSample], metric: BalaMetric, count: usize) -> Vec<&BalaSample> {
    let mut ranked: Vec<&BalaSample> = samples.iter().collect();
    ranked.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)));
    ranked.truncate(count);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(datetime: &str, shad: f64, bhava: f64) -> BalaSample {
        BalaSample {
            datetime: datetime.to_string(),
            shad_bala: BalaTotals {
                total: shad,
                ..Default::default()
            },
            bhava_bala: BalaTotals {
                total: bhava,
                ..Default::default()
            },
        }
    }

    #[test]
    fn max_keeps_first_of_equal_values() {
        let samples = vec![sample("a", 5.0, 1.0), sample("b", 5.0, 9.0)];
        assert_eq!(max_by(&samples, BalaMetric::Shad).unwrap().datetime, "a");
        assert_eq!(max_by(&samples, BalaMetric::Bhava).unwrap().datetime, "b");
        assert!(max_by(&[], BalaMetric::Combined).is_none());
    }

    #[test]
    fn top_combined_is_sorted_and_truncated() {
        let samples = vec![
            sample("a", 1.0, 1.0),
            sample("b", 3.0, 3.0),
            sample("c", 2.0, 4.0),
            sample("d", 0.0, 0.0),
        ];
        let top: Vec<&str> = top_by(&samples, BalaMetric::Combined, 3)
            .iter()
            .map(|s| s.datetime.as_str())
            .collect();
        assert_eq!(top, vec!["b", "c", "a"]);
    }
}
