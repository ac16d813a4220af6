use apmv::{apply_apmv_setpoints, resolve_model, ApmvOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn resolve_large_model(c: &mut Criterion) {
    let model = black_box(test_models::get_large_test_model(2000, 10).unwrap());

    c.bench_function("resolve_large_model", |b| {
        b.iter(|| resolve_model(&model).unwrap())
    });
}

pub fn apply_large_model(c: &mut Criterion) {
    let model = test_models::get_large_test_model(200, 10).unwrap();
    let options = ApmvOptions {
        verbose: false,
        other_pmv_related_outputs: false,
        ..ApmvOptions::default()
    };

    c.bench_function("apply_large_model", |b| {
        b.iter(|| {
            let mut m = black_box(model.clone());
            apply_apmv_setpoints(&mut m, &options).unwrap()
        })
    });
}

criterion_group!(benches, resolve_large_model, apply_large_model);
criterion_main!(benches);
