use criterion::{criterion_group, criterion_main, Criterion};
use postgis_ewkb::{decode, encode, Geometry, LineString, MultiPolygon, Point, Polygon};

fn build_multi_polygon() -> Geometry {
    let polygons = (0..500)
        .map(|i| {
            let offset = i as f64;
            let ring = LineString::new(
                (0..=64)
                    .map(|j| {
                        let angle = j as f64 / 64. * std::f64::consts::TAU;
                        Point::new_z(offset + angle.cos(), offset + angle.sin(), offset)
                    })
                    .collect(),
            );
            Polygon::new(vec![ring])
        })
        .collect();
    Geometry::MultiPolygon(MultiPolygon::new(polygons).with_srid(4326))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let geom = build_multi_polygon();
    let text = encode(&geom).unwrap();

    c.bench_function("encode MultiPolygon to hex EWKB", |b| {
        b.iter(|| encode(&geom).unwrap())
    });

    c.bench_function("decode hex EWKB to MultiPolygon", |b| {
        b.iter(|| decode(Some(&text)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
