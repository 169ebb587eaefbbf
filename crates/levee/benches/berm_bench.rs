//! Criterion benchmarks for the construction algorithms on random levees.

use criterion::{criterion_group, criterion_main, Criterion};
use levee::api::{draw_levee, Algorithm, Berm, BermParams, LeveeCfg, PhreaticLine};

fn bench_algorithms(c: &mut Criterion) {
    let levees: Vec<_> = (0..16u64)
        .map(|seed| draw_levee(&LeveeCfg::default(), seed).expect("generated levee"))
        .collect();
    let berm = Berm::new(
        "clay",
        BermParams {
            width: 6.0,
            height: 1.5,
            ..BermParams::default()
        },
    );
    for cs in &levees {
        if let Err(err) = berm.execute(cs) {
            panic!("berm fails on {}: {err}", cs.name());
        }
        let pl = PhreaticLine::new(0.6 * cs.top(), -0.5);
        if let Err(err) = pl.build(cs) {
            panic!("phreatic line fails on {}: {err}", cs.name());
        }
    }
    c.bench_function("berm_execute_16", |b| {
        b.iter(|| {
            levees
                .iter()
                .map(|cs| berm.execute(cs).map_or(0, |out| out.layers().len()))
                .sum::<usize>()
        })
    });
    c.bench_function("phreatic_build_16", |b| {
        b.iter(|| {
            levees
                .iter()
                .map(|cs| {
                    PhreaticLine::new(0.6 * cs.top(), -0.5)
                        .build(cs)
                        .map_or(0, |line| line.len())
                })
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
