use criterion::*;

use shor_sim::{
    math::matrix::hadamard,
    operator::{apply_to_all, mod_exp, qft},
    register::QReg,
};

fn perf_test(qu_num: usize) {
    let first = qu_num / 2;
    let mut reg = QReg::with_uniform_prefix(qu_num, first).unwrap();
    mod_exp(&mut reg, 7, (1usize << (qu_num - first)).saturating_sub(1).max(3), first).unwrap();
    qft(&mut reg, first).unwrap();
    let _ = reg.measure();
}

fn perf_hadamard(qu_num: usize) {
    let mut reg = QReg::new(qu_num);
    apply_to_all(&mut reg, &hadamard()).unwrap();
    let _ = reg.measure();
}

fn performance(c: &mut Criterion) {
    for qu_num in [12, 14, 16] {
        c.bench_function(format!("shor_round_qu{qu_num}").as_str(), |b| {
            b.iter(|| perf_test(black_box(qu_num)))
        });
        c.bench_function(format!("walsh_hadamard_qu{qu_num}").as_str(), |b| {
            b.iter(|| perf_hadamard(black_box(qu_num)))
        });
    }
}

criterion_group!(benches, performance);
criterion_main!(benches);
