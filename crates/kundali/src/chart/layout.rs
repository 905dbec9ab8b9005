//! North-Indian diamond layout.
//!
//! House 1 sits at the top center and houses advance counter-clockwise around
//! the diamond. Cell geometry is expressed as fractions of the chart square so
//! any renderer can scale it.

use crate::chart::grid::ChartKind;
use crate::chart::houses::HouseProjector;
use crate::payload::PlanetInfo;
use crate::rendering::primitives::{Color, Point};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, PI};

/// Radius of the body ring inside a house cell, in pixels.
pub const BODY_RING_RADIUS: f64 = 28.0;
pub const COMPACT_BODY_RING_RADIUS: f64 = 22.0;

/// Cell box of one house. `center`, `width` and `height` are fractions of the
/// chart side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCell {
    pub house: u8,
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

const fn cell(house: u8, cx: f64, cy: f64, width: f64, height: f64) -> HouseCell {
    HouseCell {
        house,
        center: Point::new(cx, cy),
        width,
        height,
    }
}

/// The twelve cells in house order.
pub const HOUSE_CELLS: [HouseCell; 12] = [
    cell(1, 0.50, 0.26, 0.24, 0.22),
    cell(2, 0.25, 0.13, 0.22, 0.22),
    cell(3, 0.10, 0.26, 0.20, 0.20),
    cell(4, 0.25, 0.50, 0.22, 0.22),
    cell(5, 0.10, 0.76, 0.20, 0.20),
    cell(6, 0.25, 0.87, 0.22, 0.22),
    cell(7, 0.50, 0.77, 0.24, 0.22),
    cell(8, 0.75, 0.87, 0.22, 0.22),
    cell(9, 0.90, 0.76, 0.20, 0.20),
    cell(10, 0.75, 0.50, 0.22, 0.22),
    cell(11, 0.90, 0.26, 0.20, 0.20),
    cell(12, 0.75, 0.13, 0.22, 0.22),
];

pub fn house_cell(house: u8) -> Option<&'static HouseCell> {
    HOUSE_CELLS.iter().find(|c| c.house == house)
}

// (name, abbreviation, color)
pub const BODY_GLYPHS: &[(&str, &str, &str)] = &[
    ("Sun", "Su", "#FF8C00"),
    ("Moon", "Mo", "#C0C0C0"),
    ("Mars", "Ma", "#DC143C"),
    ("Mercury", "Me", "#32CD32"),
    ("Jupiter", "Ju", "#FFD700"),
    ("Venus", "Ve", "#FF69B4"),
    ("Saturn", "Sa", "#4169E1"),
    ("Rahu", "Ra", "#708090"),
    ("Ketu", "Ke", "#8B4513"),
    ("Asc", "Asc", "#FF1493"),
    ("Uranus", "Ur", "#00CED1"),
    ("Neptune", "Ne", "#1E90FF"),
    ("Pluto", "Pl", "#9932CC"),
    ("Mandi", "Mn", "#696969"),
    ("Gulika", "Gk", "#556B2F"),
    ("Dhuma", "Dh", "#CD853F"),
    ("Vyatipata", "Vy", "#B22222"),
    ("Parivesha", "Pv", "#DAA520"),
    ("Indrachapa", "Ic", "#6B8E23"),
    ("Upaketu", "Uk", "#A0522D"),
];

/// Abbreviation and color for a body; unknown bodies use their first two
/// characters and no color.
pub fn body_glyph(name: &str) -> (String, Option<Color>) {
    match BODY_GLYPHS.iter().find(|(n, _, _)| *n == name) {
        Some((_, abbr, hex)) => (abbr.to_string(), Color::from_hex(hex)),
        None => (name.chars().take(2).collect(), None),
    }
}

/// Offsets of `count` bodies evenly spaced on a circle, first one at the top.
pub fn body_offsets(count: usize, radius: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let step = 2.0 * PI / count as f64;
    (0..count)
        .map(|i| Point::polar(Point::new(0.0, 0.0), radius, -FRAC_PI_2 + step * i as f64))
        .collect()
}

/// Condition markers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyIndicator {
    Retrograde,
    Combust,
    Vargottama,
    Exalted,
    Debilitated,
}

impl BodyIndicator {
    pub fn title(self) -> &'static str {
        match self {
            BodyIndicator::Retrograde => "Retrograde",
            BodyIndicator::Combust => "Combust",
            BodyIndicator::Vargottama => "Vargottama",
            BodyIndicator::Exalted => "Exalted",
            BodyIndicator::Debilitated => "Debilitated",
        }
    }

    pub fn mark(self) -> &'static str {
        match self {
            BodyIndicator::Retrograde => "*",
            BodyIndicator::Combust => "^",
            BodyIndicator::Vargottama => "□",
            BodyIndicator::Exalted => "↑",
            BodyIndicator::Debilitated => "↓",
        }
    }
}

/// Indicators for a body. Only the Rasi chart carries them.
pub fn indicators_for(info: Option<&PlanetInfo>, kind: ChartKind) -> Vec<BodyIndicator> {
    let Some(info) = info else {
        return Vec::new();
    };
    if !kind.shows_indicators() {
        return Vec::new();
    }
    [
        (info.retrograde, BodyIndicator::Retrograde),
        (info.combust, BodyIndicator::Combust),
        (info.vargottama, BodyIndicator::Vargottama),
        (info.exalted, BodyIndicator::Exalted),
        (info.debilitated, BodyIndicator::Debilitated),
    ]
    .into_iter()
    .filter_map(|(set, indicator)| set.then_some(indicator))
    .collect()
}

/// Hover text such as "Saturn | Retrograde | Exalted".
pub fn body_title(name: &str, indicators: &[BodyIndicator]) -> String {
    std::iter::once(name)
        .chain(indicators.iter().map(|i| i.title()))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// A body positioned inside its house cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedBody {
    pub name: String,
    pub glyph: String,
    pub color: Option<Color>,
    /// Pixel offset from the cell center.
    pub offset: Point,
    pub indicators: Vec<BodyIndicator>,
    pub title: String,
}

/// Everything a renderer needs for one house cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCellContent {
    pub cell: HouseCell,
    pub sign_index: usize,
    pub sign_number: usize,
    pub bodies: Vec<PlacedBody>,
}

/// Lay out a projected chart into the twelve diamond cells.
pub fn layout_diamond(
    projector: &HouseProjector,
    planets: &HashMap<String, PlanetInfo>,
    kind: ChartKind,
    ring_radius: f64,
) -> Vec<HouseCellContent> {
    HOUSE_CELLS
        .iter()
        .map(|cell| {
            let sign_index = projector.sign_for_house(cell.house);
            let names = projector.bodies_in_house(cell.house);
            let offsets = body_offsets(names.len(), ring_radius);
            let bodies = names
                .iter()
                .zip(offsets)
                .map(|(name, offset)| {
                    let (glyph, color) = body_glyph(name);
                    let indicators = indicators_for(planets.get(name), kind);
                    PlacedBody {
                        title: body_title(name, &indicators),
                        name: name.clone(),
                        glyph,
                        color,
                        offset,
                        indicators,
                    }
                })
                .collect();
            HouseCellContent {
                cell: *cell,
                sign_index,
                sign_number: sign_index + 1,
                bodies,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_body_sits_at_top() {
        let offsets = body_offsets(1, 28.0);
        assert_eq!(offsets.len(), 1);
        assert!(offsets[0].x.abs() < 1e-9);
        assert!((offsets[0].y + 28.0).abs() < 1e-9);
    }

    #[test]
    fn four_bodies_go_clockwise_from_top() {
        let offsets = body_offsets(4, 10.0);
        assert!((offsets[1].x - 10.0).abs() < 1e-9);
        assert!((offsets[2].y - 10.0).abs() < 1e-9);
        assert!((offsets[3].x + 10.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_body_uses_prefix() {
        assert_eq!(body_glyph("Chiron").0, "Ch");
        assert_eq!(body_glyph("Asc").0, "Asc");
        assert!(body_glyph("Sun").1.is_some());
    }

    #[test]
    fn cells_are_mirrored_left_right() {
        for (left, right) in [(2u8, 12u8), (3, 11), (4, 10), (5, 9), (6, 8)] {
            let l = house_cell(left).unwrap();
            let r = house_cell(right).unwrap();
            assert!((l.center.x + r.center.x - 1.0).abs() < 1e-9);
            assert!((l.center.y - r.center.y).abs() < 1e-9);
        }
    }
}
