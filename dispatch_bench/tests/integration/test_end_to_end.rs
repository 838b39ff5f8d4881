// エンドツーエンドの統合テスト
use crate::fixtures::RecordingReporter;
use dispatch_bench::strategies::{
    ClosedDispatch, DelegatedDispatch, FatInterfaceDispatch, InspectionDispatch,
    MonomorphizedDispatch, OpenDispatch, StaticCastDispatch,
};
use dispatch_bench::{
    generate, BenchmarkConfig, BenchmarkSuite, Harness, NoOpReporter, Normalization,
    PricingStrategy, Record, StrategyKind,
};
use std::cell::Cell;
use tempfile::TempDir;

fn prices_of<S: PricingStrategy>(strategy: S, count: usize) -> Vec<f64> {
    let dataset = generate(count);
    let items = strategy.layout(&dataset);
    strategy.price_all(&items).unwrap()
}

#[test]
fn test_generate_four_and_price_closed() {
    let dataset = generate(4);
    assert_eq!(
        dataset.records(),
        &[
            Record::stock(1.2),
            Record::option(0.8),
            Record::stock(1.2),
            Record::option(0.8),
        ]
    );

    let prices = prices_of(ClosedDispatch::new(), 4);
    let expected = [1.82, 2.5, 1.82, 2.5];
    for (actual, expected) in prices.iter().zip(expected) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }
}

#[test]
fn test_cross_strategy_equivalence() {
    let count = 1_001;
    let reference = prices_of(ClosedDispatch::new(), count);

    assert_eq!(prices_of(OpenDispatch::new(), count), reference);
    assert_eq!(prices_of(MonomorphizedDispatch::new(), count), reference);
    assert_eq!(prices_of(InspectionDispatch::new(), count), reference);
    assert_eq!(prices_of(StaticCastDispatch::new(), count), reference);
    assert_eq!(prices_of(FatInterfaceDispatch::new(), count), reference);
    assert_eq!(prices_of(DelegatedDispatch::new(), count), reference);
}

#[test]
fn test_price_formulas_for_arbitrary_values() {
    use dispatch_bench::instruments::Dataset;

    let values = [0.0, 0.1, 1.2, 7.5, 123.456];
    let records: Vec<Record> = values
        .iter()
        .flat_map(|&v| [Record::stock(v), Record::option(v)])
        .collect();
    let dataset = Dataset::from_records(records);

    let suite = BenchmarkSuite::new(BenchmarkConfig::default(), NoOpReporter::new());
    for kind in StrategyKind::ALL {
        suite.verify_kind(kind, &dataset).unwrap();
    }

    for (i, &v) in values.iter().enumerate() {
        assert_eq!(dataset.records()[2 * i].price(), v * 1.1 + 0.5);
        assert_eq!(dataset.records()[2 * i + 1].price(), v * 2.5 + 0.5);
    }
}

#[test]
fn test_harness_scenario() {
    let harness = Harness::new(NoOpReporter::new());
    let calls = Cell::new(0);

    let measurement = harness.run("x", || calls.set(calls.get() + 1), 100);

    assert_eq!(calls.get(), 100);
    assert!(measurement.average_ns >= 0.0);
}

#[test]
fn test_suite_output_lines() {
    let config = BenchmarkConfig::new(5, 20)
        .with_strategies(vec![StrategyKind::Open, StrategyKind::Closed]);
    let mut suite = BenchmarkSuite::new(config, RecordingReporter::new());

    let summary = suite.run_all().unwrap();
    assert_eq!(summary.measurements.len(), 2);
    assert!(summary.fastest.is_some());

    let lines = suite.reporter().lines.borrow();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "started 2");
    assert!(lines[1].starts_with("open - Average: "));
    assert!(lines[1].ends_with(" ns/iter"));
    assert!(lines[2].starts_with("closed - Average: "));
    assert_eq!(lines[3], "completed 2");
    assert!(suite.reporter().errors.borrow().is_empty());
}

#[test]
fn test_report_round_trip_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dispatch.json");

    let config = BenchmarkConfig::new(2, 8).with_normalization(Normalization::PerSweep);
    let mut suite = BenchmarkSuite::new(config, NoOpReporter::new());
    suite.run_all().unwrap();
    suite.export_json_report(&path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["config"]["normalization"], "per-sweep");
    assert_eq!(
        json["summary"]["measurements"].as_array().unwrap().len(),
        StrategyKind::ALL.len()
    );
}
