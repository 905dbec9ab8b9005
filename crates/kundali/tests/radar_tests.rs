use kundali::payload::BhavaBalaRecord;
use kundali::rendering::{
    house_dataset, planet_dataset, stretch_ratios, RadarDatum, RadarGeometry, RadarSpecGenerator, Shape,
    TextAnchor, TextBaseline,
};
use kundali::strength::{house_strengths, PlanetStrength};
use std::collections::BTreeMap;

fn uniform_houses(rupas: f64) -> BTreeMap<u8, BhavaBalaRecord> {
    (1..=12u8)
        .map(|house| {
            (
                house,
                BhavaBalaRecord {
                    total_rupas: Some(rupas),
                    ..Default::default()
                },
            )
        })
        .collect()
}

#[test]
fn test_identical_house_ratios_stretch_to_floor() {
    let houses = house_strengths(Some(&uniform_houses(3.0))).unwrap();
    let data = house_dataset(&houses);
    assert_eq!(data.len(), 12);
    for datum in &data {
        assert_eq!(datum.plot_ratio, Some(0.5));
        let percent = datum.display_percent.unwrap();
        assert!((percent - 300.0 / 4.5).abs() < 1e-9);
    }

    let points = RadarGeometry::new(240.0).project(&data);
    for point in &points {
        assert!(point.position.is_finite());
        assert!(point.normalized.is_finite());
        assert_eq!(point.percent_label, "67%");
    }
}

#[test]
fn test_stretch_never_produces_nan() {
    for ratios in [vec![0.0; 5], vec![1.0], vec![0.2, f64::NAN, 0.8], vec![f64::INFINITY]] {
        for plotted in stretch_ratios(&ratios) {
            assert!(plotted.is_finite(), "{ratios:?}");
            assert!((0.5..=1.4).contains(&plotted));
        }
    }
}

#[test]
fn test_direct_mode_caps_at_thirteen_tenths() {
    let geometry = RadarGeometry::new(200.0);
    let data = vec![RadarDatum::direct("Jupiter", "Jup", "", 20.0, 5.0, "#FFD700")];
    let point = &geometry.project(&data)[0];
    assert_eq!(point.ratio, 4.0);
    assert_eq!(point.normalized, 1.3);
    assert_eq!(point.percent_label, "400%");
    let distance = (point.position.y - geometry.center.y).abs();
    assert!((distance - 200.0 * 0.32 * 1.3).abs() < 1e-9);
}

#[test]
fn test_empty_input_gives_empty_polygon() {
    let geometry = RadarGeometry::new(240.0);
    assert!(geometry.project(&[]).is_empty());
    assert!(geometry.spokes(0).is_empty());
    let spec = RadarSpecGenerator::new().generate("Nothing", &geometry, &[]);
    assert!(spec.shapes.iter().all(|shape| match shape {
        Shape::Path { points, .. } => points.is_empty(),
        _ => false,
    }));
}

#[test]
fn test_label_anchors_follow_side_of_center() {
    let geometry = RadarGeometry::new(240.0);
    let data: Vec<RadarDatum> = (0..4)
        .map(|i| RadarDatum::direct(format!("P{i}"), "", "", 1.0, 1.0, "#ffffff"))
        .collect();
    let points = geometry.project(&data);
    assert_eq!(points[0].anchor, TextAnchor::Middle);
    assert_eq!(points[0].baseline, TextBaseline::Auto);
    assert_eq!(points[1].anchor, TextAnchor::Start);
    assert_eq!(points[2].anchor, TextAnchor::Middle);
    assert_eq!(points[2].baseline, TextBaseline::Hanging);
    assert_eq!(points[3].anchor, TextAnchor::End);
}

#[test]
fn test_planet_dataset_uses_required_rupas() {
    let strengths = vec![PlanetStrength::resolve(
        "Mercury",
        Some(&kundali::payload::ShadBalaRecord {
            total_rupas: Some(7.0),
            ..Default::default()
        }),
    )];
    let data = planet_dataset(&strengths);
    assert_eq!(data[0].max_value, 7.0);
    assert_eq!(data[0].ratio(), 1.0);
    assert!(data[0].plot_ratio.is_none());
    assert!(data[0].label.ends_with("Mercury"));
}
