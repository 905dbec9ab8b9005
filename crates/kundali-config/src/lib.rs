use kundali::chart::ChartKind;
use kundali::settings::{CliSettings, DiamondSettings, KundaliSettings, RadarSettings};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
struct RadarToml {
    #[serde(default)]
    planet_size: Option<f64>,
    #[serde(default)]
    house_size: Option<f64>,
    #[serde(default)]
    life_area_size: Option<f64>,
    #[serde(default)]
    levels: Option<usize>,
    #[serde(default)]
    label_offset: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DiamondToml {
    #[serde(default)]
    view_box: Option<f64>,
    #[serde(default)]
    compact: bool,
    #[serde(default)]
    body_ring_radius: Option<f64>,
    #[serde(default)]
    compact_body_ring_radius: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CliToml {
    #[serde(default)]
    chart: Option<String>,
    #[serde(default)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    radar: Option<RadarToml>,
    #[serde(default)]
    diamond: Option<DiamondToml>,
    #[serde(default)]
    cli: Option<CliToml>,
}

/// Try the usual relative paths for `configs/kundali.toml`.
pub fn read_settings_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/kundali.toml", "../../configs/kundali.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load kundali.toml from {:?}", paths);
}

fn positive(name: &str, value: Option<f64>, default: f64) -> anyhow::Result<f64> {
    match value {
        None => Ok(default),
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(v) => anyhow::bail!("{name} must be a positive number, got {v}"),
    }
}

fn radar_settings(cfg: RadarToml) -> anyhow::Result<RadarSettings> {
    let defaults = RadarSettings::default();
    let levels = cfg.levels.unwrap_or(defaults.levels);
    if levels == 0 {
        anyhow::bail!("radar.levels must be at least 1");
    }
    Ok(RadarSettings {
        planet_size: positive("radar.planet_size", cfg.planet_size, defaults.planet_size)?,
        house_size: positive("radar.house_size", cfg.house_size, defaults.house_size)?,
        life_area_size: positive("radar.life_area_size", cfg.life_area_size, defaults.life_area_size)?,
        levels,
        label_offset: positive("radar.label_offset", cfg.label_offset, defaults.label_offset)?,
    })
}

fn diamond_settings(cfg: DiamondToml) -> anyhow::Result<DiamondSettings> {
    let defaults = DiamondSettings::default();
    Ok(DiamondSettings {
        view_box: positive("diamond.view_box", cfg.view_box, defaults.view_box)?,
        compact: cfg.compact,
        body_ring_radius: positive(
            "diamond.body_ring_radius",
            cfg.body_ring_radius,
            defaults.body_ring_radius,
        )?,
        compact_body_ring_radius: positive(
            "diamond.compact_body_ring_radius",
            cfg.compact_body_ring_radius,
            defaults.compact_body_ring_radius,
        )?,
    })
}

fn cli_settings(cfg: CliToml) -> anyhow::Result<CliSettings> {
    let defaults = CliSettings::default();
    let chart = match cfg.chart {
        Some(text) => text
            .parse::<ChartKind>()
            .map_err(|e| anyhow::anyhow!("cli.chart: {e}"))?,
        None => defaults.chart,
    };
    Ok(CliSettings {
        chart,
        log_level: cfg.log_level.unwrap_or(defaults.log_level),
    })
}

/// Parse settings text. Missing sections and keys fall back to defaults.
pub fn parse_settings(text: &str) -> anyhow::Result<KundaliSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse kundali.toml: {e}"))?;
    Ok(KundaliSettings {
        radar: radar_settings(root.radar.unwrap_or_default())?,
        diamond: diamond_settings(root.diamond.unwrap_or_default())?,
        cli: cli_settings(root.cli.unwrap_or_default())?,
    })
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<KundaliSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    parse_settings(&text)
}

/// Load `configs/kundali.toml`, or defaults when no file is found.
pub fn load_settings() -> anyhow::Result<KundaliSettings> {
    match read_settings_toml_text() {
        Ok(text) => parse_settings(&text),
        Err(e) => {
            log::debug!("{e}; using default settings");
            Ok(KundaliSettings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, KundaliSettings::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let settings = parse_settings(
            r#"
            [radar]
            house_size = 320.0

            [diamond]
            compact = true

            [cli]
            chart = "d9"
            "#,
        )
        .unwrap();
        assert_eq!(settings.radar.house_size, 320.0);
        assert_eq!(settings.radar.planet_size, RadarSettings::default().planet_size);
        assert_eq!(settings.diamond.ring_radius(), 22.0);
        assert_eq!(settings.cli.chart, ChartKind::Navamsa);
        assert_eq!(settings.cli.log_level, "info");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_settings("[radar]\nlevels = 0").is_err());
        assert!(parse_settings("[radar]\nplanet_size = -1.0").is_err());
        assert!(parse_settings("[cli]\nchart = \"d60\"").is_err());
        assert!(parse_settings("[radar").is_err());
    }
}
