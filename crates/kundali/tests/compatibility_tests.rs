use kundali::payload::load_match_from_json;
use kundali::strength::{CompatibilityLevel, ScoreBand};

const MATCH: &str = r#"{
    "chart1_name": "Asha",
    "chart2_name": "Ravi",
    "chart1": {"lagna": {"sign_index": 3}},
    "scores": [
        {"category": "Varna", "score": 1, "maxScore": 1, "description": "Spiritual compatibility"},
        {"category": "Gana", "score": 3, "maxScore": 6, "description": "Temperament"},
        {"category": "Nadi", "score": 0, "maxScore": 8, "description": "Health"},
        "garbled",
        {"category": "Overall Compatibility", "score": 24.5, "maxScore": 36, "description": "Total"}
    ],
    "total_score": 24.5,
    "total_max": 36
}"#;

#[test]
fn test_match_scores_classify_by_share_of_maximum() {
    let matching = load_match_from_json(MATCH).unwrap();
    assert_eq!(matching.chart1_name.as_deref(), Some("Asha"));
    assert_eq!(matching.scores.len(), 4);

    let bands: Vec<ScoreBand> = matching.categories().map(|s| s.band()).collect();
    assert_eq!(bands, [ScoreBand::High, ScoreBand::Mid, ScoreBand::Low]);

    // 24.5 / 36 is just over 68%
    let overall = matching.overall().unwrap();
    assert!((overall.percentage() - 68.0555).abs() < 1e-3);
    assert_eq!(matching.level(), Some(CompatibilityLevel::Good));
    assert_eq!(CompatibilityLevel::Good.label(), "Good Match");
}

#[test]
fn test_match_without_overall_has_no_level() {
    let matching =
        load_match_from_json(r#"{"scores": [{"category": "Yoni", "score": 4, "max_score": 4}]}"#).unwrap();
    assert!(matching.overall().is_none());
    assert!(matching.level().is_none());
    assert_eq!(matching.scores[0].percentage(), 100.0);
}

#[test]
fn test_zero_maximum_scores_as_challenging() {
    let matching = load_match_from_json(
        r#"{"scores": [{"category": "Overall Compatibility", "score": 10, "maxScore": 0}]}"#,
    )
    .unwrap();
    assert_eq!(matching.overall().unwrap().percentage(), 0.0);
    assert_eq!(matching.level(), Some(CompatibilityLevel::Challenging));
}
