use crate::aspects::types::{Aspect, AspectKind, AspectNature};
use serde::{Deserialize, Serialize};

/// Narrow an aspect list. `None` in any field means "all".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectFilter {
    pub body: Option<String>,
    pub kind: Option<AspectKind>,
    pub nature: Option<AspectNature>,
}

impl AspectFilter {
    pub fn matches(&self, aspect: &Aspect) -> bool {
        if let Some(body) = &self.body {
            if !aspect.involves(body) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if aspect.kind != kind {
                return false;
            }
        }
        if let Some(nature) = self.nature {
            if aspect.nature != nature {
                return false;
            }
        }
        true
    }

    /// Matching aspects, order preserved.
    pub fn apply<'a>(&self, aspects: &'a [Aspect]) -> Vec<&'a Aspect> {
        aspects.iter().filter(|a| self.matches(a)).collect()
    }
}

pub fn filter_aspects<'a>(aspects: &'a [Aspect], filter: &AspectFilter) -> Vec<&'a Aspect> {
    filter.apply(aspects)
}

/// Counts shown above the aspect list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectSummary {
    pub total: usize,
    pub harmonious: usize,
    pub tense: usize,
    pub neutral: usize,
    /// Bodies taking part in at least one aspect, sorted by name.
    pub bodies: Vec<String>,
}

impl AspectSummary {
    pub fn from_aspects(aspects: &[Aspect]) -> Self {
        let mut summary = AspectSummary {
            total: aspects.len(),
            ..Default::default()
        };
        for aspect in aspects {
            match aspect.nature {
                AspectNature::Harmonious => summary.harmonious += 1,
                AspectNature::Tense => summary.tense += 1,
                AspectNature::Neutral => summary.neutral += 1,
            }
            for body in [&aspect.body1, &aspect.body2] {
                if !summary.bodies.contains(body) {
                    summary.bodies.push(body.clone());
                }
            }
        }
        summary.bodies.sort();
        summary
    }
}
