use crate::chart::grid::ChartKind;
use crate::chart::layout::{BODY_RING_RADIUS, COMPACT_BODY_RING_RADIUS};
use crate::rendering::radar::{LABEL_OFFSET, WEB_LEVELS};
use serde::{Deserialize, Serialize};

/// Top-level settings, loadable from `kundali.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KundaliSettings {
    pub radar: RadarSettings,
    pub diamond: DiamondSettings,
    pub cli: CliSettings,
}

/// Canvas sizes for the three spider charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarSettings {
    pub planet_size: f64,
    pub house_size: f64,
    pub life_area_size: f64,
    pub levels: usize,
    pub label_offset: f64,
}

impl Default for RadarSettings {
    fn default() -> Self {
        Self {
            planet_size: 240.0,
            house_size: 240.0,
            life_area_size: 240.0,
            levels: WEB_LEVELS,
            label_offset: LABEL_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiamondSettings {
    /// Side of the square view box
    pub view_box: f64,
    /// Use the tighter body ring meant for narrow screens
    pub compact: bool,
    pub body_ring_radius: f64,
    pub compact_body_ring_radius: f64,
}

impl DiamondSettings {
    pub fn ring_radius(&self) -> f64 {
        if self.compact {
            self.compact_body_ring_radius
        } else {
            self.body_ring_radius
        }
    }
}

impl Default for DiamondSettings {
    fn default() -> Self {
        Self {
            view_box: 400.0,
            compact: false,
            body_ring_radius: BODY_RING_RADIUS,
            compact_body_ring_radius: COMPACT_BODY_RING_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    pub chart: ChartKind,
    pub log_level: String,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            chart: ChartKind::Rasi,
            log_level: "info".to_string(),
        }
    }
}
