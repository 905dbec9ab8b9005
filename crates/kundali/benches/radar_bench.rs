use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kundali::payload::BhavaBalaRecord;
use kundali::rendering::{house_dataset, RadarGeometry, RadarSpecGenerator};
use kundali::strength::house_strengths;
use std::collections::BTreeMap;

fn bench_house_radar(c: &mut Criterion) {
    let records: BTreeMap<u8, BhavaBalaRecord> = (1..=12u8)
        .map(|house| {
            (
                house,
                BhavaBalaRecord {
                    total_rupas: Some(3.0 + house as f64 * 0.25),
                    ..Default::default()
                },
            )
        })
        .collect();
    let houses = house_strengths(Some(&records)).unwrap_or_default();
    let geometry = RadarGeometry::new(240.0);

    c.bench_function("project_house_radar", |b| {
        b.iter(|| geometry.project(black_box(&house_dataset(&houses))))
    });

    let points = geometry.project(&house_dataset(&houses));
    let generator = RadarSpecGenerator::new();
    c.bench_function("generate_radar_spec", |b| {
        b.iter(|| generator.generate("Houses", black_box(&geometry), black_box(&points)))
    });
}

criterion_group!(benches, bench_house_radar);
criterion_main!(benches);
