use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// What a spec depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSpecKind {
    Diamond,
    Radar,
}

/// Declarative description of one chart, ready for any renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartSpecKind,
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(kind: ChartSpecKind, title: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            kind,
            title: title.into(),
            width,
            height,
            center: Point::new(width / 2.0, height / 2.0),
            background_color: Color::BLACK,
            shapes: Vec::new(),
        }
    }
}
