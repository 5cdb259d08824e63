use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use printshop_server::shared::utils::currency::{format_inr, format_inr_decimal};
use printshop_server::shared::utils::pickup_code::{GenerateCode, PickupCodeGenerator};
use rust_decimal::Decimal;

fn bench_pickup_codes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pickup_code");
    let generator = PickupCodeGenerator::new();
    let date = NaiveDate::from_ymd_opt(2025, 3, 7).expect("valid date");
    let mut rng = StdRng::seed_from_u64(7);

    group.bench_function("generate", |b| b.iter(|| black_box(generator.generate())));
    group.bench_function("generate_for_date", |b| {
        b.iter(|| black_box(PickupCodeGenerator::generate_for_date(date, &mut rng)))
    });

    group.finish();
}

fn bench_currency(c: &mut Criterion) {
    let mut group = c.benchmark_group("currency");
    let amounts = [0.0, -50.0, 1234567.891, 999.995, 1e15];
    let total = Decimal::new(123456789, 2);

    group.bench_function("format_inr", |b| {
        b.iter(|| {
            for amount in amounts {
                black_box(format_inr(black_box(amount)));
            }
        })
    });
    group.bench_function("format_inr_decimal", |b| {
        b.iter(|| black_box(format_inr_decimal(black_box(total))))
    });

    group.finish();
}

criterion_group!(benches, bench_pickup_codes, bench_currency);
criterion_main!(benches);
