use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hqet_bounds::{BglCoefficients, BglParametrisationBounds, HqetUnitarityBounds, OpeBounds};
use hqet_core::{Options, Parameters, Sector};

fn bench_bgl_table(c: &mut Criterion) {
    let table = BglCoefficients::new(&Parameters::defaults(), &Options::new()).unwrap();
    c.bench_function("bgl_table", |b| {
        b.iter(|| black_box(table.table(black_box(&Sector::ALL))))
    });
}

fn bench_bounds(c: &mut Criterion) {
    let params = Parameters::defaults();
    let options = Options::new();
    c.bench_function("all_bounds", |b| {
        b.iter(|| {
            let hqet = HqetUnitarityBounds::new(black_box(&params), &options).unwrap();
            let ope = OpeBounds::new(black_box(&params)).unwrap();
            let bgl = BglParametrisationBounds::new(black_box(&params), &options).unwrap();
            black_box((hqet.report(), ope.report(), bgl.report()))
        })
    });
}

criterion_group!(benches, bench_bgl_table, bench_bounds);
criterion_main!(benches);
