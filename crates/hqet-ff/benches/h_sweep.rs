use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hqet_core::{Options, Parameters};
use hqet_ff::{FormFactors, Transition};

fn bench_h_sweep(c: &mut Criterion) {
    let params = Parameters::defaults();
    let options = Options::new();
    let engines: Vec<FormFactors> = Transition::ALL
        .into_iter()
        .map(|transition| FormFactors::new(transition, &params, &options).unwrap())
        .collect();

    c.bench_function("h_sweep", |b| {
        b.iter(|| {
            for ff in &engines {
                let q2_max = ff.base().kinematics().q2_max();
                for step in 0..32 {
                    let q2 = q2_max * step as f64 / 32.0;
                    black_box(ff.physical(black_box(q2)));
                }
            }
        })
    });
}

criterion_group!(benches, bench_h_sweep);
criterion_main!(benches);
