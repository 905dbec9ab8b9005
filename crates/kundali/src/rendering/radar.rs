//! Spider (radar) chart projection.
//!
//! Entities are placed evenly around a circle, first at the top and going
//! clockwise. The radius of each vertex is proportional to the entity's
//! strength ratio, capped at 130% of the full-strength radius. House charts use
//! a stretched ratio instead so tightly clustered houses stay distinguishable.

use crate::rendering::primitives::{Point, TextAnchor, TextBaseline};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

pub const BASE_RADIUS_FACTOR: f64 = 0.32;
pub const WEB_LEVELS: usize = 5;
/// Cap on the plotted ratio, also the outer web ring.
pub const MAX_SCALE: f64 = 1.3;
pub const LABEL_OFFSET: f64 = 22.0;
/// Labels closer than this to the vertical axis are centered.
pub const CENTER_ANCHOR_TOLERANCE: f64 = 15.0;

// Stretched mode maps [min, max] onto [0.5, 1.4]
pub const STRETCH_FLOOR: f64 = 0.5;
pub const STRETCH_SPAN: f64 = 0.9;
pub const STRETCH_MIN_RANGE: f64 = 0.001;

/// One entity to plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarDatum {
    pub label: String,
    pub short_label: String,
    pub description: String,
    pub value: f64,
    pub max_value: f64,
    /// Overrides `value / max_value` for the vertex radius only.
    pub plot_ratio: Option<f64>,
    /// Overrides `value / max_value * 100` for the label.
    pub display_percent: Option<f64>,
    pub strength_ratio: Option<f64>,
    pub color: String,
    pub icon: Option<String>,
}

impl RadarDatum {
    /// Datum plotted at its true ratio.
    pub fn direct(
        label: impl Into<String>,
        short_label: impl Into<String>,
        description: impl Into<String>,
        value: f64,
        max_value: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            short_label: short_label.into(),
            description: description.into(),
            value,
            max_value,
            plot_ratio: None,
            display_percent: None,
            strength_ratio: None,
            color: color.into(),
            icon: None,
        }
    }

    /// Datum whose vertex uses `plot_ratio` while the label keeps the true
    /// percentage.
    pub fn stretched(mut self, plot_ratio: f64) -> Self {
        let ratio = self.ratio();
        self.plot_ratio = Some(plot_ratio);
        self.strength_ratio = Some(ratio);
        self.display_percent = Some(ratio * 100.0);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// value / max_value, or 0 when the maximum is not positive.
    pub fn ratio(&self) -> f64 {
        if self.max_value > 0.0 {
            self.value / self.max_value
        } else {
            0.0
        }
    }
}

/// A projected vertex with its label placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub label: String,
    pub short_label: String,
    pub description: String,
    pub color: String,
    pub icon: Option<String>,
    /// Screen angle in radians
    pub angle: f64,
    pub position: Point,
    pub label_position: Point,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
    pub ratio: f64,
    /// Ratio actually used for the radius, after the cap
    pub normalized: f64,
    pub strength_ratio: f64,
    /// Unrounded percentage
    pub display_percent: f64,
    /// Rounded percentage text, e.g. "130%"
    pub percent_label: String,
}

/// Concentric guide polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebRing {
    /// Fraction of the full-strength radius
    pub scale: f64,
    pub radius: f64,
    /// The ring sitting on 100%
    pub is_main: bool,
    pub points: Vec<Point>,
}

/// Line from the center to the outer ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spoke {
    pub from: Point,
    pub to: Point,
}

/// Radar geometry for a square canvas of `size` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    pub size: f64,
    pub center: Point,
    pub base_radius: f64,
    pub web_radius: f64,
    pub levels: usize,
    pub label_offset: f64,
}

impl RadarGeometry {
    pub fn new(size: f64) -> Self {
        Self::with_options(size, WEB_LEVELS, LABEL_OFFSET)
    }

    pub fn with_options(size: f64, levels: usize, label_offset: f64) -> Self {
        let base_radius = size * BASE_RADIUS_FACTOR;
        Self {
            size,
            center: Point::new(size / 2.0, size / 2.0),
            base_radius,
            web_radius: base_radius * MAX_SCALE,
            levels,
            label_offset,
        }
    }

    /// Screen angle of vertex `index` out of `count`.
    pub fn angle_at(&self, index: usize, count: usize) -> f64 {
        if count == 0 {
            return -FRAC_PI_2;
        }
        (2.0 * PI / count as f64) * index as f64 - FRAC_PI_2
    }

    /// Project data onto polygon vertices. Empty input gives an empty polygon.
    pub fn project(&self, data: &[RadarDatum]) -> Vec<RadarPoint> {
        let count = data.len();
        data.iter()
            .enumerate()
            .map(|(index, datum)| {
                let angle = self.angle_at(index, count);
                let ratio = finite_or_zero(datum.ratio());
                let plot = finite_or_zero(datum.plot_ratio.unwrap_or(ratio));
                let normalized = plot.min(MAX_SCALE);
                let display_percent = finite_or_zero(datum.display_percent.unwrap_or(ratio * 100.0));

                let position = Point::polar(self.center, self.base_radius * normalized, angle);
                let label_position =
                    Point::polar(self.center, self.web_radius + self.label_offset, angle);

                RadarPoint {
                    label: datum.label.clone(),
                    short_label: datum.short_label.clone(),
                    description: datum.description.clone(),
                    color: datum.color.clone(),
                    icon: datum.icon.clone(),
                    angle,
                    position,
                    anchor: self.anchor_for(label_position),
                    baseline: self.baseline_for(label_position),
                    label_position,
                    ratio,
                    normalized,
                    strength_ratio: finite_or_zero(datum.strength_ratio.unwrap_or(ratio)),
                    display_percent,
                    percent_label: percent_label(display_percent),
                }
            })
            .collect()
    }

    /// Guide rings at evenly spaced fractions up to the cap.
    pub fn web_rings(&self, count: usize) -> Vec<WebRing> {
        (0..self.levels)
            .map(|level| {
                let scale = (level + 1) as f64 / self.levels as f64 * MAX_SCALE;
                let radius = self.base_radius * scale;
                WebRing {
                    scale,
                    radius,
                    is_main: (scale - 1.0).abs() < 0.01,
                    points: (0..count)
                        .map(|i| Point::polar(self.center, radius, self.angle_at(i, count)))
                        .collect(),
                }
            })
            .collect()
    }

    pub fn spokes(&self, count: usize) -> Vec<Spoke> {
        (0..count)
            .map(|i| Spoke {
                from: self.center,
                to: Point::polar(self.center, self.web_radius, self.angle_at(i, count)),
            })
            .collect()
    }

    fn anchor_for(&self, label: Point) -> TextAnchor {
        if (label.x - self.center.x).abs() < CENTER_ANCHOR_TOLERANCE {
            TextAnchor::Middle
        } else if label.x < self.center.x {
            TextAnchor::End
        } else {
            TextAnchor::Start
        }
    }

    fn baseline_for(&self, label: Point) -> TextBaseline {
        if label.y < self.center.y {
            TextBaseline::Auto
        } else {
            TextBaseline::Hanging
        }
    }
}

/// Rescale ratios onto the [0.5, 1.4] band.
///
/// The range is floored at 0.001 so identical ratios all map to 0.5.
pub fn stretch_ratios(ratios: &[f64]) -> Vec<f64> {
    let finite = ratios.iter().copied().filter(|r| r.is_finite());
    let min = finite.clone().fold(f64::INFINITY, f64::min);
    let max = finite.fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() {
        return vec![STRETCH_FLOOR; ratios.len()];
    }
    let range = (max - min).max(STRETCH_MIN_RANGE);
    ratios
        .iter()
        .map(|ratio| {
            let ratio = if ratio.is_finite() { *ratio } else { min };
            STRETCH_FLOOR + ((ratio - min) / range) * STRETCH_SPAN
        })
        .collect()
}

/// SVG `points` attribute for a polygon.
pub fn polygon_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole-percent label. Halves round away from zero.
pub fn percent_label(percent: f64) -> String {
    format!("{:.0}%", percent.round())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datum(value: f64, max_value: f64) -> RadarDatum {
        RadarDatum::direct("X", "x", "", value, max_value, "#ffffff")
    }

    #[test]
    fn first_vertex_is_at_the_top() {
        let geometry = RadarGeometry::new(100.0);
        let points = geometry.project(&[datum(1.0, 1.0), datum(1.0, 1.0)]);
        assert!((points[0].position.x - 50.0).abs() < 1e-9);
        assert!((points[0].position.y - (50.0 - 32.0)).abs() < 1e-9);
        assert!((points[1].position.y - (50.0 + 32.0)).abs() < 1e-9);
    }

    #[test]
    fn zero_max_plots_at_center() {
        let geometry = RadarGeometry::new(100.0);
        let point = &geometry.project(&[datum(3.0, 0.0)])[0];
        assert_eq!(point.ratio, 0.0);
        assert_eq!(point.position, geometry.center);
        assert_eq!(point.percent_label, "0%");
    }

    #[test]
    fn stretch_spans_the_band() {
        let plotted = stretch_ratios(&[0.5, 0.75, 1.0]);
        assert!((plotted[0] - 0.5).abs() < 1e-12);
        assert!((plotted[1] - 0.95).abs() < 1e-12);
        assert!((plotted[2] - 1.4).abs() < 1e-12);
        assert!(stretch_ratios(&[]).is_empty());
    }

    #[test]
    fn percent_label_rounds_halves_up() {
        assert_eq!(percent_label(129.5), "130%");
        assert_eq!(percent_label(89.4), "89%");
    }

    #[test]
    fn no_ring_lands_exactly_on_full_strength_with_five_levels() {
        let rings = RadarGeometry::new(240.0).web_rings(8);
        assert_eq!(rings.len(), 5);
        assert!(rings.iter().all(|r| !r.is_main));
        assert!((rings[4].radius - 240.0 * 0.32 * 1.3).abs() < 1e-9);
    }

    #[test]
    fn polygon_points_joins_vertices() {
        let points = [Point::new(120.0, 43.2), Point::new(196.8, 120.0), Point::new(120.0, 196.8)];
        assert_eq!(polygon_points(&points), "120,43.2 196.8,120 120,196.8");
        assert_eq!(polygon_points(&[]), "");
    }
}
