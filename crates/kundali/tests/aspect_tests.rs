use kundali::aspects::{
    bodies_from_response, compute_aspects, filter_aspects, pair_interpretation, separation, AspectCalculator, AspectFilter,
    AspectKind, AspectNature, AspectSummary,
};
use kundali::payload::load_response_from_json;
use std::collections::{BTreeSet, HashMap};

fn longitudes(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|(name, lon)| (name.to_string(), *lon)).collect()
}

#[test]
fn test_calculate_aspect_trine() {
    let calculator = AspectCalculator::new();
    let aspect = calculator.calculate_aspect("Sun", 10.0, "Moon", 130.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Trine);
    assert_eq!(aspect.angle, 120.0);
    assert_eq!(aspect.orb, 0.0);
    assert_eq!(aspect.nature, AspectNature::Harmonious);
}

#[test]
fn test_calculate_aspect_opposition_across_zero() {
    let calculator = AspectCalculator::new();
    let aspect = calculator.calculate_aspect("Sun", 0.0, "Mars", 182.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Opposition);
    assert_eq!(aspect.angle, 178.0);
    assert_eq!(aspect.orb, 2.0);
    assert_eq!(aspect.nature, AspectNature::Tense);
}

#[test]
fn test_no_aspect_between_windows() {
    let calculator = AspectCalculator::new();
    // 45 degrees is outside every orb
    assert!(calculator.calculate_aspect("Sun", 0.0, "Venus", 45.0).is_none());
    assert!(calculator.calculate_aspect("Sun", f64::NAN, "Venus", 45.0).is_none());
}

#[test]
fn test_orb_boundary_is_inclusive() {
    let calculator = AspectCalculator::new();
    let aspect = calculator.calculate_aspect("Moon", 0.0, "Venus", 66.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Sextile);
    assert!(calculator.calculate_aspect("Moon", 0.0, "Venus", 66.5).is_none());
}

#[test]
fn test_separation_folds_to_shortest_arc() {
    assert_eq!(separation(350.0, 10.0), Some(20.0));
    assert_eq!(separation(10.0, 350.0), Some(20.0));
    assert_eq!(separation(720.0, 90.0), Some(90.0));
    assert_eq!(separation(f64::INFINITY, 0.0), None);
}

#[test]
fn test_compute_aspects_pairs_are_unique_and_bounded() {
    let bodies = longitudes(&[
        ("Sun", 10.0),
        ("Moon", 130.0),
        ("Mars", 190.0),
        ("Mercury", 15.0),
        ("Jupiter", 250.0),
        ("Venus", 70.0),
        ("Saturn", 100.0),
        ("Rahu", 40.0),
        ("Ketu", 220.0),
        ("Mandi", 310.0),
        ("Gulika", 305.0),
    ]);
    let aspects = compute_aspects(&bodies);
    assert!(!aspects.is_empty());

    let mut seen = BTreeSet::new();
    for aspect in &aspects {
        assert!((0.0..=180.0).contains(&aspect.angle));
        assert!(aspect.orb <= aspect.kind.orb_tolerance());
        let key = (aspect.body1.clone(), aspect.body2.clone());
        let reversed = (aspect.body2.clone(), aspect.body1.clone());
        assert!(!seen.contains(&reversed), "both orders for {key:?}");
        assert!(seen.insert(key));
    }

    // Tightest first
    for window in aspects.windows(2) {
        assert!(window[0].rounded_orb() <= window[1].rounded_orb());
    }
}

#[test]
fn test_missing_bodies_skip_their_pairs() {
    let aspects = compute_aspects(&longitudes(&[("Sun", 0.0), ("Saturn", 90.0), ("Pluto", 0.0)]));
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].body1, "Sun");
    assert_eq!(aspects[0].body2, "Saturn");
    assert_eq!(aspects[0].kind, AspectKind::Square);
}

#[test]
fn test_first_discovered_order_picks_pair_text() {
    let aspects = compute_aspects(&longitudes(&[("Moon", 0.0), ("Sun", 0.0)]));
    let aspect = &aspects[0];
    assert_eq!(aspect.body1, "Sun");
    assert_eq!(aspect.body2, "Moon");
    let expected = pair_interpretation("Sun", "Moon", AspectKind::Conjunction).unwrap();
    assert_eq!(aspect.pair_one_line, expected);
    assert_ne!(aspect.pair_one_line, aspect.one_line);

    // Lookups are directional
    assert!(pair_interpretation("Moon", "Sun", AspectKind::Conjunction).is_none());
}

#[test]
fn test_upagrahas_override_planets() {
    let json = r#"{
        "planets": {"Sun": {"longitude": 0.0}, "Mandi": {"longitude": 10.0}},
        "upagrahas": {"Mandi": {"longitude": 180.0}, "Gulika": {"sign": "Leo"}}
    }"#;
    let response = load_response_from_json(json).unwrap();
    let bodies = bodies_from_response(&response);
    assert_eq!(bodies.get("Mandi"), Some(&180.0));
    assert!(!bodies.contains_key("Gulika"));

    let aspects = compute_aspects(&bodies);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Opposition);
}

#[test]
fn test_filter_and_summary() {
    let aspects = compute_aspects(&longitudes(&[
        ("Sun", 0.0),
        ("Moon", 120.0),
        ("Mars", 180.0),
        ("Venus", 2.0),
    ]));
    let summary = AspectSummary::from_aspects(&aspects);
    assert_eq!(summary.total, aspects.len());
    assert_eq!(summary.harmonious + summary.tense + summary.neutral, summary.total);

    let tense = AspectFilter {
        nature: Some(AspectNature::Tense),
        ..Default::default()
    };
    assert!(filter_aspects(&aspects, &tense).iter().all(|a| a.nature == AspectNature::Tense));

    let mars = AspectFilter {
        body: Some("Mars".to_string()),
        ..Default::default()
    };
    let with_mars = mars.apply(&aspects);
    assert!(!with_mars.is_empty());
    assert!(with_mars.iter().all(|a| a.involves("Mars")));
    assert_eq!(AspectFilter::default().apply(&aspects).len(), aspects.len());
}
