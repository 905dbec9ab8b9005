use crate::zodiac::SIGN_COUNT;
use serde::{Deserialize, Serialize};

/// Which of the two charts of a kundali is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Rasi,
    Navamsa,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Rasi, ChartKind::Navamsa];

    /// Condition indicators are only meaningful for the primary chart.
    pub fn shows_indicators(self) -> bool {
        matches!(self, ChartKind::Rasi)
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Rasi => "Rasi",
            ChartKind::Navamsa => "Navamsa",
        }
    }
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rasi" | "d1" => Ok(ChartKind::Rasi),
            "navamsa" | "d9" => Ok(ChartKind::Navamsa),
            other => Err(format!("unknown chart kind: {other}")),
        }
    }
}

/// Canonical sign-indexed grid: slot `i` holds the bodies in sign `i`.
///
/// Slots never contain the same name twice; the order of first occurrence in
/// the source data is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartGrid {
    slots: [Vec<String>; SIGN_COUNT],
}

impl ChartGrid {
    /// Grid with every slot empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from per-sign lists, deduplicating each slot.
    pub fn from_slots<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = String>,
    {
        let mut grid = Self::empty();
        for (index, bodies) in slots.into_iter().take(SIGN_COUNT).enumerate() {
            grid.slots[index] = dedup_preserving_order(bodies);
        }
        grid
    }

    pub fn slot(&self, sign_index: usize) -> &[String] {
        &self.slots[sign_index % SIGN_COUNT]
    }

    pub fn slots(&self) -> &[Vec<String>; SIGN_COUNT] {
        &self.slots
    }

    /// Sign index holding the named body, if any.
    pub fn sign_of(&self, body: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.iter().any(|name| name == body))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    pub fn body_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}

pub(crate) fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slots_pads_and_deduplicates() {
        let grid = ChartGrid::from_slots(vec![
            vec!["Sun".to_string(), "Sun".to_string(), "Moon".to_string()],
            vec![],
        ]);
        assert_eq!(grid.slot(0), ["Sun", "Moon"]);
        assert!(grid.slot(1).is_empty());
        assert!(grid.slot(11).is_empty());
        assert_eq!(grid.sign_of("Moon"), Some(0));
        assert_eq!(grid.sign_of("Mars"), None);
        assert_eq!(grid.body_count(), 2);
    }

    #[test]
    fn chart_kind_parses_aliases() {
        assert_eq!("D9".parse::<ChartKind>(), Ok(ChartKind::Navamsa));
        assert_eq!(" rasi ".parse::<ChartKind>(), Ok(ChartKind::Rasi));
        assert!("d10".parse::<ChartKind>().is_err());
    }
}
