// エラーハンドリングの統合テスト
use crate::fixtures::{Bond, ForeignInspection, RecordingReporter};
use dispatch_bench::strategies::InspectionDispatch;
use dispatch_bench::{generate, BenchError, BenchmarkConfig, BenchmarkSuite, NoOpReporter};
use std::path::Path;

#[test]
fn test_inspection_rejects_unknown_type() {
    let result = InspectionDispatch::new().inspect(&Bond { coupon: 1.0 });

    match result {
        Err(BenchError::UnknownVariant { type_name, .. }) => {
            assert!(type_name.contains("Bond"));
        }
        other => panic!("Expected UnknownVariant, got {other:?}"),
    }
}

#[test]
fn test_suite_stops_on_unknown_variant() {
    let mut suite = BenchmarkSuite::new(BenchmarkConfig::new(3, 4), RecordingReporter::new());

    let result = suite.run_strategy(&ForeignInspection::default(), &generate(4));

    assert!(matches!(result, Err(BenchError::UnknownVariant { .. })));
    assert!(suite.results().is_empty());

    let errors = suite.reporter().errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("foreign-inspection"));
    assert!(suite.reporter().lines.borrow().is_empty());
}

#[test]
fn test_unknown_variant_surfaces_without_verification() {
    let config = BenchmarkConfig::new(3, 4).with_verification(false);
    let mut suite = BenchmarkSuite::new(config, RecordingReporter::new());

    let result = suite.run_strategy(&ForeignInspection::default(), &generate(4));

    match result {
        Err(BenchError::UnknownVariant { type_name, .. }) => {
            assert!(type_name.contains("Bond"));
        }
        other => panic!("Expected UnknownVariant, got {other:?}"),
    }
    assert!(suite.results().is_empty());
    assert_eq!(suite.reporter().errors.borrow().len(), 1);
    assert!(suite.reporter().lines.borrow().is_empty());
}

#[test]
fn test_zero_iterations_is_fatal_for_suite() {
    let mut suite = BenchmarkSuite::new(BenchmarkConfig::new(0, 10), NoOpReporter::new());

    match suite.run_all() {
        Err(BenchError::ValidationError { field, .. }) => assert_eq!(field, "iterations"),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_zero_iterations_single_strategy_is_zero_cost() {
    let mut suite = BenchmarkSuite::new(BenchmarkConfig::new(0, 10), NoOpReporter::new());

    let measurement = suite
        .run_strategy(&InspectionDispatch::new(), &generate(10))
        .unwrap();

    assert!(measurement.is_zero_cost());
    assert_eq!(measurement.average_ns, 0.0);
}

#[test]
fn test_missing_config_file() {
    let result = BenchmarkConfig::from_json_file(Path::new("/nonexistent/config.json"));
    assert!(matches!(result, Err(BenchError::ConfigurationError { .. })));
}

#[test]
fn test_report_to_unwritable_path() {
    let suite = BenchmarkSuite::new(BenchmarkConfig::new(1, 1), NoOpReporter::new());
    let result = suite.export_json_report(Path::new("/nonexistent/dir/report.json"));

    assert!(matches!(result, Err(BenchError::ReportError { .. })));
}
