//! Performance benchmarks for the benefit engine.
//!
//! Covers the pure calculator, the rate table queries and the full HTTP
//! round trip through `/calculate`.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use workers_comp_engine::api::{AppState, create_router};
use workers_comp_engine::calculation::calculate;
use workers_comp_engine::config::ConfigLoader;
use workers_comp_engine::tables::{RateQuery, SortColumn, body_part_schedule, rate_table};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/server.yaml").expect("Failed to load config");
    AppState::new(config)
}

/// Benchmark: one calculation with known identifiers.
fn bench_single_calculation(c: &mut Criterion) {
    c.bench_function("single_calculation", |b| {
        b.iter(|| {
            black_box(calculate(
                black_box("CA"),
                black_box(Decimal::from(1200)),
                black_box("back"),
            ))
        })
    });
}

/// Benchmark: a calculation that takes both fallbacks.
fn bench_fallback_calculation(c: &mut Criterion) {
    c.bench_function("fallback_calculation", |b| {
        b.iter(|| {
            black_box(calculate(
                black_box("ZZ"),
                black_box(Decimal::from(1200)),
                black_box("elbow"),
            ))
        })
    });
}

/// Benchmark: every jurisdiction against every body part.
fn bench_full_matrix(c: &mut Criterion) {
    let codes: Vec<String> = rate_table().iter().map(|r| r.code.clone()).collect();
    let parts: Vec<String> = body_part_schedule().iter().map(|p| p.id.clone()).collect();

    let mut group = c.benchmark_group("full_matrix");
    group.throughput(Throughput::Elements((codes.len() * parts.len()) as u64));
    group.bench_function("all_jurisdictions_all_parts", |b| {
        b.iter(|| {
            for code in &codes {
                for part in &parts {
                    black_box(calculate(code, Decimal::from(1500), part));
                }
            }
        })
    });
    group.finish();
}

/// Benchmark: rate table search and sort.
fn bench_rate_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("rate_queries");

    for (label, query) in [
        ("default", RateQuery::default()),
        ("search", RateQuery::default().with_search("new")),
        ("sort_max", RateQuery::default().sorted_by(SortColumn::Max)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &query, |b, query| {
            b.iter(|| black_box(rate_table().query(query)))
        });
    }

    group.bench_function("statistics", |b| {
        b.iter(|| black_box(rate_table().statistics()))
    });

    group.finish();
}

/// Benchmark: full HTTP round trip through `/calculate`.
fn bench_http_calculate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "jurisdiction": "NY",
        "weekly_wage": "$1,200",
        "body_part": "knee"
    })
    .to_string();

    c.bench_function("http_calculate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_fallback_calculation,
    bench_full_matrix,
    bench_rate_queries,
    bench_http_calculate,
);
criterion_main!(benches);
