use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vatform::*;

const SAMPLES: &[&str] = &[
    "ATU12345678",
    " be 0123.456.789 ",
    "FRX2345678901",
    "IE1A23456BC",
    "ESX1234567X",
    "NL123456789B01",
    "GB123456789012",
    "XX123456789",
    "DE12345678",
];

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| {
            for s in SAMPLES {
                black_box(normalize(black_box(s)));
            }
        })
    });
}

fn bench_structural(c: &mut Criterion) {
    let validator = VatValidator::new().check_registry(false);
    c.bench_function("validate_structural", |b| {
        b.iter(|| {
            for s in SAMPLES {
                let _ = black_box(validator.validate(Some(black_box(*s)), None));
            }
        })
    });
}

fn bench_form(c: &mut Criterion) {
    let form = VatForm::new(VatValidator::new().check_registry(false));
    let input = VatInput::new("DE 123 456 789").declared_country("DE");
    c.bench_function("form_validate", |b| {
        b.iter(|| black_box(form.validate(black_box(&input))))
    });
}

fn bench_every_country(c: &mut Criterion) {
    let numbers: Vec<String> = Country::ALL
        .iter()
        .map(|c| format!("{}{}", c.code(), "0".repeat(10)))
        .collect();
    c.bench_function("rule_dispatch_all_countries", |b| {
        b.iter(|| {
            for n in &numbers {
                let _ = black_box(validate_vat_format(n));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_structural,
    bench_form,
    bench_every_country
);
criterion_main!(benches);
