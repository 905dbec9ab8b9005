use crate::chart::layout::HouseCellContent;
use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor, TextBaseline};
use crate::rendering::radar::{RadarGeometry, RadarPoint};
use crate::rendering::spec::{ChartSpec, ChartSpecKind};
use crate::rendering::visual_config::VisualConfig;

const FRAME_INSET: f64 = 5.0;
const FRAME_CORNER: f64 = 8.0;
const DIAGONAL_INSET: f64 = 7.0;
const SIGN_NUMBER_SIZE: f64 = 11.0;
const GLYPH_SIZE: f64 = 13.0;

/// Turns a laid-out diamond chart into a ChartSpec
pub struct DiamondSpecGenerator {
    visual_config: VisualConfig,
}

impl DiamondSpecGenerator {
    /// Create a new generator with default configs
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
        }
    }

    /// Create a generator with custom configs
    pub fn with_configs(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    /// Generate the frame, diamond and house contents for a square of `side`.
    pub fn generate(&self, title: &str, cells: &[HouseCellContent], side: f64) -> ChartSpec {
        let mut spec = ChartSpec::new(ChartSpecKind::Diamond, title, side, side);
        spec.background_color = self.visual_config.background_color;

        let frame = Stroke::solid(self.visual_config.frame_color, self.visual_config.frame_width);
        spec.shapes.extend(self.frame_shapes(side, &frame));

        for content in cells {
            spec.shapes.extend(self.cell_shapes(content, side));
        }
        spec
    }

    fn frame_shapes(&self, side: f64, stroke: &Stroke) -> Vec<Shape> {
        let mid = side / 2.0;
        let far = side - FRAME_INSET;
        let mut shapes = vec![
            Shape::Rect {
                origin: Point::new(FRAME_INSET, FRAME_INSET),
                width: side - 2.0 * FRAME_INSET,
                height: side - 2.0 * FRAME_INSET,
                corner_radius: FRAME_CORNER,
                fill: None,
                stroke: Some(stroke.clone()),
            },
            Shape::Path {
                points: vec![
                    Point::new(mid, FRAME_INSET),
                    Point::new(far, mid),
                    Point::new(mid, far),
                    Point::new(FRAME_INSET, mid),
                ],
                closed: true,
                fill: None,
                stroke: Some(stroke.clone()),
            },
        ];

        // Diagonals from each corner to the center
        let near = DIAGONAL_INSET;
        let far = side - DIAGONAL_INSET;
        for corner in [
            Point::new(near, near),
            Point::new(far, near),
            Point::new(near, far),
            Point::new(far, far),
        ] {
            shapes.push(Shape::Line {
                from: corner,
                to: Point::new(mid, mid),
                stroke: stroke.clone(),
            });
        }
        shapes
    }

    fn cell_shapes(&self, content: &HouseCellContent, side: f64) -> Vec<Shape> {
        let center = Point::new(content.cell.center.x * side, content.cell.center.y * side);
        let mut shapes = vec![Shape::Text {
            position: Point::new(center.x, center.y + content.cell.height * side / 2.0 - 4.0),
            content: content.sign_number.to_string(),
            size: SIGN_NUMBER_SIZE,
            color: self.visual_config.muted_text_color,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Auto,
        }];

        for body in &content.bodies {
            let mut label = body.glyph.clone();
            for indicator in &body.indicators {
                label.push_str(indicator.mark());
            }
            shapes.push(Shape::Text {
                position: Point::new(center.x + body.offset.x, center.y + body.offset.y),
                content: label,
                size: GLYPH_SIZE,
                color: body.color.unwrap_or(self.visual_config.text_color),
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Auto,
            });
        }
        shapes
    }
}

impl Default for DiamondSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns projected radar points into a ChartSpec
pub struct RadarSpecGenerator {
    visual_config: VisualConfig,
}

impl RadarSpecGenerator {
    /// Create a new generator with default configs
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
        }
    }

    /// Create a generator with custom configs
    pub fn with_configs(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    /// Generate web, spokes, data polygon and labels.
    pub fn generate(&self, title: &str, geometry: &RadarGeometry, points: &[RadarPoint]) -> ChartSpec {
        let mut spec = ChartSpec::new(ChartSpecKind::Radar, title, geometry.size, geometry.size);
        spec.background_color = self.visual_config.background_color;
        let count = points.len();

        for ring in geometry.web_rings(count) {
            let stroke = if ring.is_main {
                Stroke::solid(self.visual_config.main_web_color, 1.5)
            } else {
                Stroke {
                    color: self.visual_config.web_color,
                    width: 1.0,
                    dash_array: Some(vec![2.0, 3.0]),
                }
            };
            spec.shapes.push(Shape::Path {
                points: ring.points,
                closed: true,
                fill: None,
                stroke: Some(stroke),
            });
        }

        for spoke in geometry.spokes(count) {
            spec.shapes.push(Shape::Line {
                from: spoke.from,
                to: spoke.to,
                stroke: Stroke::solid(self.visual_config.spoke_color, 1.0),
            });
        }

        if !points.is_empty() {
            spec.shapes.push(Shape::Path {
                points: points.iter().map(|p| p.position).collect(),
                closed: true,
                fill: Some(self.visual_config.accent_fill),
                stroke: Some(Stroke::solid(self.visual_config.accent_color, 2.0)),
            });
        }

        for point in points {
            spec.shapes.extend(self.point_shapes(point));
        }
        spec
    }

    fn point_shapes(&self, point: &RadarPoint) -> Vec<Shape> {
        let color = Color::from_hex(&point.color).unwrap_or(self.visual_config.accent_color);
        let label = match &point.icon {
            Some(icon) if !point.label.starts_with(icon.as_str()) => format!("{} {}", icon, point.label),
            _ => point.label.clone(),
        };
        vec![
            Shape::Circle {
                center: point.position,
                radius: 5.0,
                fill: Some(color),
                stroke: Some(Stroke::solid(self.visual_config.point_outline, 1.5)),
            },
            Shape::Circle {
                center: point.position,
                radius: 2.0,
                fill: Some(Color::WHITE),
                stroke: None,
            },
            Shape::Text {
                position: Point::new(point.label_position.x, point.label_position.y - 10.0),
                content: label,
                size: 12.0,
                color,
                anchor: point.anchor,
                baseline: point.baseline,
            },
            Shape::Text {
                position: Point::new(point.label_position.x, point.label_position.y + 10.0),
                content: point.percent_label.clone(),
                size: 11.0,
                color: self.visual_config.muted_text_color,
                anchor: point.anchor,
                baseline: point.baseline,
            },
        ]
    }
}

impl Default for RadarSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::radar::RadarDatum;

    #[test]
    fn empty_radar_has_rings_but_no_polygon() {
        let geometry = RadarGeometry::new(240.0);
        let spec = RadarSpecGenerator::new().generate("Planets", &geometry, &[]);
        assert_eq!(spec.kind, ChartSpecKind::Radar);
        assert_eq!(spec.shapes.len(), 5);
        assert!(spec
            .shapes
            .iter()
            .all(|s| matches!(s, Shape::Path { fill: None, .. })));
    }

    #[test]
    fn each_point_adds_markers_and_labels() {
        let geometry = RadarGeometry::new(240.0);
        let data = vec![
            RadarDatum::direct("A", "a", "", 1.0, 1.0, "#ff0000"),
            RadarDatum::direct("B", "b", "", 0.5, 1.0, "#00ff00"),
            RadarDatum::direct("C", "c", "", 0.2, 1.0, "#0000ff"),
        ];
        let points = geometry.project(&data);
        let spec = RadarSpecGenerator::default().generate("Test", &geometry, &points);
        // 5 rings + 3 spokes + polygon + 3 * (2 circles + 2 labels)
        assert_eq!(spec.shapes.len(), 5 + 3 + 1 + 12);
    }

    #[test]
    fn diamond_frame_is_drawn_first() {
        let spec = DiamondSpecGenerator::new().generate("Rasi", &[], 400.0);
        assert_eq!(spec.shapes.len(), 6);
        match &spec.shapes[0] {
            Shape::Rect { origin, width, .. } => {
                assert_eq!(*origin, Point::new(5.0, 5.0));
                assert_eq!(*width, 390.0);
            }
            other => panic!("expected frame rect, got {:?}", other),
        }
    }
}
