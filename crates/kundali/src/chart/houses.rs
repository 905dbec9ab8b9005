use crate::chart::grid::{ChartGrid, ChartKind};
use crate::chart::normalize::{normalize_chart, resolve_sign_names};
use crate::payload::KundaliResponse;
use crate::zodiac::{wrap_sign_index, SIGN_COUNT};
use serde::{Deserialize, Serialize};

pub const HOUSE_COUNT: u8 = 12;

/// Sign occupying a house. House 1 is the ascendant's sign and each following
/// house takes the next sign.
pub fn sign_index_for_house(house: i64, ascendant: usize) -> usize {
    let count = SIGN_COUNT as i64;
    wrap_sign_index((ascendant % SIGN_COUNT) as i64 + house.rem_euclid(count) - 1)
}

/// Coerce a raw ascendant to a valid sign index.
///
/// Missing, non-finite, fractional or out-of-range values become 0.
pub fn coerce_ascendant(raw: Option<f64>) -> usize {
    match raw {
        Some(value) if value.is_finite() && value.fract() == 0.0 && (0.0..12.0).contains(&value) => {
            value as usize
        }
        Some(value) => {
            log::debug!("ascendant {value} outside 0..=11, using 0");
            0
        }
        None => 0,
    }
}

/// One house of a projected chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseProjection {
    pub house: u8,
    pub sign_index: usize,
    /// 1-based sign number shown in the diamond.
    pub sign_number: usize,
    pub bodies: Vec<String>,
}

/// Reads a sign-indexed grid house by house from a given ascendant.
#[derive(Debug, Clone)]
pub struct HouseProjector {
    grid: ChartGrid,
    ascendant: usize,
}

impl HouseProjector {
    pub fn new(grid: ChartGrid, ascendant: usize) -> Self {
        Self {
            grid,
            ascendant: ascendant % SIGN_COUNT,
        }
    }

    /// Build the projector for one chart of a response.
    ///
    /// Rasi uses `rasi_chart` with `lagna.sign_index`; Navamsa uses
    /// `navamsa_chart` with `lagna.navamsa_sign_index`.
    pub fn from_response(response: &KundaliResponse, kind: ChartKind) -> Self {
        let names = resolve_sign_names(&response.signs_sanskrit);
        let (raw, ascendant) = match kind {
            ChartKind::Rasi => (
                &response.rasi_chart,
                response.lagna.as_ref().and_then(|l| l.sign_index),
            ),
            ChartKind::Navamsa => (
                &response.navamsa_chart,
                response.lagna.as_ref().and_then(|l| l.navamsa_sign_index),
            ),
        };
        Self::new(normalize_chart(raw, &names), coerce_ascendant(ascendant))
    }

    pub fn grid(&self) -> &ChartGrid {
        &self.grid
    }

    pub fn ascendant(&self) -> usize {
        self.ascendant
    }

    pub fn sign_for_house(&self, house: u8) -> usize {
        sign_index_for_house(house as i64, self.ascendant)
    }

    pub fn bodies_in_house(&self, house: u8) -> &[String] {
        self.grid.slot(self.sign_for_house(house))
    }

    /// House number (1-12) holding a body, if it is on the grid.
    pub fn house_of(&self, body: &str) -> Option<u8> {
        let sign = self.grid.sign_of(body)?;
        Some(((sign + SIGN_COUNT - self.ascendant) % SIGN_COUNT) as u8 + 1)
    }

    /// All twelve houses in order, empty ones included.
    pub fn houses(&self) -> Vec<HouseProjection> {
        (1..=HOUSE_COUNT)
            .map(|house| {
                let sign_index = self.sign_for_house(house);
                HouseProjection {
                    house,
                    sign_index,
                    sign_number: sign_index + 1,
                    bodies: self.grid.slot(sign_index).to_vec(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_rejects_bad_ascendants() {
        assert_eq!(coerce_ascendant(Some(7.0)), 7);
        assert_eq!(coerce_ascendant(Some(12.0)), 0);
        assert_eq!(coerce_ascendant(Some(-1.0)), 0);
        assert_eq!(coerce_ascendant(Some(3.5)), 0);
        assert_eq!(coerce_ascendant(Some(f64::INFINITY)), 0);
        assert_eq!(coerce_ascendant(None), 0);
    }

    #[test]
    fn extreme_houses_wrap_without_overflow() {
        assert_eq!(sign_index_for_house(i64::MAX, 5), wrap_sign_index(5 + i64::MAX.rem_euclid(12) - 1));
        assert_eq!(sign_index_for_house(i64::MIN, 5), wrap_sign_index(5 + i64::MIN.rem_euclid(12) - 1));
        assert_eq!(sign_index_for_house(13, 11), sign_index_for_house(1, 11));
        assert_eq!(sign_index_for_house(0, 0), 11);
        assert_eq!(sign_index_for_house(1, usize::MAX), usize::MAX % 12);
    }

    #[test]
    fn house_of_inverts_sign_for_house() {
        let grid = ChartGrid::from_slots((0..12).map(|i| vec![format!("B{i}")]));
        let projector = HouseProjector::new(grid, 9);
        for house in 1..=12u8 {
            let body = &projector.bodies_in_house(house)[0];
            assert_eq!(projector.house_of(body), Some(house));
        }
    }
}
