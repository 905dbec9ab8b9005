use chrono::{TimeZone, Utc};
use kundali::aspects::AspectKind;
use kundali::chart::ChartKind;
use kundali::dasha::PeriodStatus;
use kundali::payload::load_response_from_json;
use kundali::rendering::ChartSpecKind;
use kundali::{KundaliAnalysis, KundaliSettings, StrengthTier};

const SAMPLE: &str = include_str!("fixtures/sample_response.json");

fn analyze(json: &str) -> KundaliAnalysis {
    let response = load_response_from_json(json).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
    KundaliAnalysis::from_response(&response, now, &KundaliSettings::default())
}

#[test]
fn test_sample_charts_project_from_their_ascendants() {
    let analysis = analyze(SAMPLE);

    let rasi = analysis.chart(ChartKind::Rasi);
    assert_eq!(rasi.ascendant, 10);
    assert!(rasi.houses[0].bodies.is_empty());
    assert_eq!(rasi.houses[2].bodies, vec!["Sun".to_string()]);
    assert_eq!(rasi.houses[11].bodies, vec!["Saturn".to_string()]);
    assert_eq!(rasi.cells.len(), 12);

    let navamsa = analysis.chart(ChartKind::Navamsa);
    assert_eq!(navamsa.ascendant, 4);
    assert_eq!(navamsa.houses[0].bodies, vec!["Sun".to_string(), "Saturn".to_string()]);
}

#[test]
fn test_sample_aspects_and_summary() {
    let analysis = analyze(SAMPLE);
    let trine = analysis
        .aspects
        .iter()
        .find(|a| a.body1 == "Sun" && a.body2 == "Moon")
        .unwrap();
    assert_eq!(trine.kind, AspectKind::Trine);
    assert_eq!(analysis.aspect_summary.total, analysis.aspects.len());
    assert!(analysis.aspects.iter().any(|a| a.involves("Mandi")));
}

#[test]
fn test_sample_strengths() {
    let analysis = analyze(SAMPLE);
    assert_eq!(analysis.planet_strengths.len(), 7);
    assert_eq!(analysis.planet_strengths[0].tier, StrengthTier::Strong);
    assert_eq!(analysis.planet_strengths[6].tier, StrengthTier::Medium);

    let houses = analysis.house_strengths.as_ref().unwrap();
    assert_eq!(houses.len(), 12);
    assert_eq!(houses[0].lord.as_deref(), Some("Saturn"));
    assert_eq!(analysis.life_areas.len(), 8);
    assert!(analysis.life_areas.iter().all(|a| a.house_score.is_some()));
    assert_eq!(analysis.insights.house_count, 12);
}

#[test]
fn test_sample_radars() {
    let analysis = analyze(SAMPLE);
    assert_eq!(analysis.planet_radar.points.len(), 7);
    assert_eq!(analysis.life_area_radar.points.len(), 8);
    let house_radar = analysis.house_radar.as_ref().unwrap();
    assert_eq!(house_radar.points.len(), 12);
    assert_eq!(house_radar.polygon.split(' ').count(), 12);
    let first = &house_radar.points[0].position;
    assert!(house_radar.polygon.starts_with(&format!("{},{} ", first.x, first.y)));
    assert!(house_radar
        .points
        .iter()
        .all(|p| p.normalized >= 0.5 && p.normalized <= 1.3 && p.position.is_finite()));

    let specs = analysis.chart_specs(&KundaliSettings::default());
    let kinds: Vec<ChartSpecKind> = specs.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ChartSpecKind::Diamond,
            ChartSpecKind::Diamond,
            ChartSpecKind::Radar,
            ChartSpecKind::Radar,
            ChartSpecKind::Radar
        ]
    );
}

#[test]
fn test_sample_dasha_timeline() {
    let analysis = analyze(SAMPLE);
    let dasha = analysis.dasha.as_ref().unwrap();
    assert_eq!(dasha.current_planet, "Sun");
    assert_eq!(dasha.active_index, Some(2));
    assert_eq!(dasha.moon_nakshatra.as_deref(), Some("Magha"));
    let statuses: Vec<PeriodStatus> = dasha.entries.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![
            PeriodStatus::Past,
            PeriodStatus::Past,
            PeriodStatus::Active,
            PeriodStatus::Future
        ]
    );
    assert!(dasha.entries[1].start.is_some());
    assert!(dasha.entries[3].end.is_none());
}

#[test]
fn test_empty_response_degrades_quietly() {
    let analysis = analyze("{}");
    assert!(analysis.rasi.grid.is_empty());
    assert_eq!(analysis.rasi.ascendant, 0);
    assert!(analysis.aspects.is_empty());
    assert!(analysis.house_strengths.is_none());
    assert!(analysis.house_radar.is_none());
    assert!(analysis.dasha.is_none());
    assert!(analysis.planet_strengths.iter().all(|p| p.rupas == 0.0));
    assert_eq!(analysis.chart_specs(&KundaliSettings::default()).len(), 4);
}

#[test]
fn test_analysis_serializes_aspect_type() {
    let analysis = analyze(SAMPLE);
    let value = serde_json::to_value(&analysis).unwrap();
    assert!(value["aspects"][0]["type"].is_string());
    assert!(value["aspects"][0]["pairOneLine"].is_string());
    assert_eq!(value["rasi"]["kind"], "rasi");
}
