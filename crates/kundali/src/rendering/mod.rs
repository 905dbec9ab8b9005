pub mod datasets;
pub mod generator;
pub mod primitives;
pub mod radar;
pub mod spec;
pub mod visual_config;

pub use datasets::{house_dataset, life_area_dataset, planet_dataset};
pub use generator::{DiamondSpecGenerator, RadarSpecGenerator};
pub use primitives::{Color, Point, Shape, Stroke, TextAnchor, TextBaseline};
pub use radar::{
    percent_label, polygon_points, stretch_ratios, RadarDatum, RadarGeometry, RadarPoint, Spoke,
    WebRing,
};
pub use spec::{ChartSpec, ChartSpecKind};
pub use visual_config::VisualConfig;
