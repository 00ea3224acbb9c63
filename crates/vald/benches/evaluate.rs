//! Benchmarks for evaluating a realistic form validator.

use std::collections::HashMap;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use vald::prelude::*;

fn form() -> Pack {
    pack![
        req("email", pattern(r"^[^@\s]+@[^@\s]+\.[a-z]{2,}$")),
        req("plan", one_of(["free", "team", "enterprise"])),
        opt_def("newsletter", boolean(), "false"),
        cond(
            "company",
            pattern("^.{2,64}$"),
            Some(req("seats", pattern("^[1-9][0-9]{0,3}$")).boxed()),
            None,
        ),
    ]
}

fn bench_evaluate(c: &mut Criterion) {
    let validate = form();

    let valid = HashMap::from([
        ("email", "ops@example.com"),
        ("plan", "team"),
        ("newsletter", "1"),
        ("company", "Example Ltd"),
        ("seats", "25"),
    ]);
    let invalid = HashMap::from([("email", "ops@example.com"), ("plan", "gold")]);

    c.bench_function("map_valid_form", |b| {
        b.iter(|| black_box(validate.map(black_box(&valid))));
    });

    c.bench_function("collect_valid_form", |b| {
        b.iter(|| black_box(validate.collect(black_box(&valid))));
    });

    c.bench_function("map_rejected_form", |b| {
        b.iter(|| black_box(validate.map(black_box(&invalid))));
    });
}

fn bench_checkers(c: &mut Criterion) {
    let plan = one_of(["free", "team", "enterprise"]);
    let email = pattern(r"^[^@\s]+@[^@\s]+\.[a-z]{2,}$");

    c.bench_function("one_of_hit", |b| {
        b.iter(|| black_box(plan.check(black_box("enterprise")).is_ok()));
    });
    c.bench_function("pattern_hit", |b| {
        b.iter(|| black_box(email.check(black_box("ops@example.com")).is_ok()));
    });
    c.bench_function("bool_hit", |b| {
        b.iter(|| black_box(boolean().check(black_box("TRUE")).is_ok()));
    });
}

criterion_group!(benches, bench_evaluate, bench_checkers);
criterion_main!(benches);
