// Success and error paths for every built-in rule and for a field validator.
// Run with: cargo bench -p strand-validator

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strand_validator::prelude::*;

const UUID: &str = "4b9e7348-bdda-4584-88c1-a1e9ac4c6595";
const DATE: &str = "2021-11-20T18:01:24.100+00:00";

fn bench_length(c: &mut Criterion) {
    let rule = length(1, 2);
    c.bench_function("length_success", |b| {
        b.iter(|| rule.validate(black_box("1")));
    });
    c.bench_function("length_error", |b| {
        b.iter(|| rule.validate(black_box("1123")));
    });
}

fn bench_required(c: &mut Criterion) {
    let rule = required(true);
    c.bench_function("required_success", |b| {
        b.iter(|| rule.validate(black_box("1")));
    });
    c.bench_function("required_error", |b| {
        b.iter(|| rule.validate(black_box("")));
    });
}

fn bench_regex(c: &mut Criterion) {
    let rule = RegexRule::from_pattern("string").expect("valid pattern");
    c.bench_function("regex_success", |b| {
        b.iter(|| rule.validate(black_box("string")));
    });
    c.bench_function("regex_error", |b| {
        b.iter(|| rule.validate(black_box("123456")));
    });
}

fn bench_date(c: &mut Criterion) {
    let rule = date(DateLayout::Rfc3339);
    c.bench_function("date_success", |b| {
        b.iter(|| rule.validate(black_box(DATE)));
    });
    c.bench_function("date_error", |b| {
        b.iter(|| rule.validate(black_box("123456")));
    });
}

fn bench_uuid(c: &mut Criterion) {
    let rule = uuid();
    c.bench_function("uuid_success", |b| {
        b.iter(|| rule.validate(black_box(UUID)));
    });
    c.bench_function("uuid_error", |b| {
        b.iter(|| rule.validate(black_box("123456")));
    });
}

fn bench_field(c: &mut Criterion) {
    let field = field_validator!("id", true, uuid(), length(1, 36));
    c.bench_function("field_success", |b| {
        b.iter(|| field.validate(black_box(UUID)));
    });
    c.bench_function("field_error", |b| {
        b.iter(|| field.validate(black_box("12314")));
    });
    c.bench_function("field_empty_optional", |b| {
        let optional = field_validator!("id", false, uuid(), length(1, 36));
        b.iter(|| optional.validate(black_box("")));
    });
}

criterion_group!(
    benches,
    bench_length,
    bench_required,
    bench_regex,
    bench_date,
    bench_uuid,
    bench_field
);
criterion_main!(benches);
