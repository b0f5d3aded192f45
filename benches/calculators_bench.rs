// ABOUTME: Criterion benchmarks for calculator evaluation and catalog search
// ABOUTME: Measures validation, normalization, formula, and classification per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the calculator engine.
//!
//! Each evaluation covers the whole request path below HTTP: parsing raw
//! fields, unit conversion, range checks, the formula, and classification.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_calculators::registry;
use pierre_core::models::CalculatorInput;
use pierre_core::units::UnitSystem;

fn sample_inputs() -> Vec<(&'static str, CalculatorInput)> {
    vec![
        (
            "bmi",
            CalculatorInput::new(UnitSystem::Metric)
                .with_number("weight", 70.0)
                .with_number("height", 175.0),
        ),
        (
            "bmi-imperial-text",
            CalculatorInput::new(UnitSystem::Imperial)
                .with_text("weight", "154.3")
                .with_text("height", "68.9"),
        ),
        (
            "creatinine-clearance",
            CalculatorInput::new(UnitSystem::Metric)
                .with_selector("gender", "female")
                .with_selector("weight_basis", "adjusted")
                .with_number("age", 67.0)
                .with_number("weight", 95.0)
                .with_number("height", 165.0)
                .with_number("serum_creatinine", 1.2),
        ),
        (
            "ldl-cholesterol",
            CalculatorInput::new(UnitSystem::Metric)
                .with_selector("lipid_unit", "mmol/L")
                .with_number("total_cholesterol", 5.2)
                .with_number("hdl", 1.3)
                .with_number("triglycerides", 1.7),
        ),
        (
            "target-heart-rate",
            CalculatorInput::new(UnitSystem::Metric)
                .with_number("age", 40.0)
                .with_number("resting_heart_rate", 60.0)
                .with_number("intensity", 70.0),
        ),
    ]
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (name, input) in sample_inputs() {
        let id = name.trim_end_matches("-imperial-text");
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| registry::evaluate(black_box(id), black_box(input)));
        });
    }

    group.finish();
}

fn bench_invalid_submission(c: &mut Criterion) {
    let input = CalculatorInput::new(UnitSystem::Metric)
        .with_text("weight", "seventy")
        .with_number("height", 900.0);

    c.bench_function("evaluate_invalid_bmi", |b| {
        b.iter(|| registry::evaluate(black_box("bmi"), black_box(&input)));
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let queries = ["", "bmi", "cockcroft-gault", "pressure", "no such calculator"];
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("catalog_queries", |b| {
        b.iter(|| {
            for query in queries {
                black_box(registry::search(black_box(query), None));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_invalid_submission, bench_search);
criterion_main!(benches);
