// 計測結果出力の具象実装

use crate::core::{BenchmarkSummary, Measurement, MeasurementReporter};

/// コンソール出力による計測結果の報告
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
    unit_label: Option<&'static str>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    /// 平均値の単位表記を変更（既定は `ns/iter`）
    pub fn with_unit_label(mut self, unit_label: &'static str) -> Self {
        self.unit_label = Some(unit_label);
        self
    }

    /// 1計測分の出力行
    pub fn format_measurement(&self, measurement: &Measurement) -> String {
        format!(
            "{} - Average: {:.4} {}",
            measurement.label,
            measurement.average_ns,
            self.unit_label.unwrap_or("ns/iter")
        )
    }
}

impl MeasurementReporter for ConsoleReporter {
    fn report_started(&self, strategy_count: usize, sample_size: usize, iterations: u64) {
        if !self.quiet {
            println!(
                "🚀 Benchmarking {strategy_count} strategies ({sample_size} records x {iterations} iterations)..."
            );
        }
    }

    fn report_measurement(&self, measurement: &Measurement) {
        if !self.quiet {
            println!("{}", self.format_measurement(measurement));
        }
    }

    fn report_error(&self, label: &str, error: &str) {
        if !self.quiet {
            eprintln!("❌ Error in {label}: {error}");
        }
    }

    fn report_completed(&self, summary: &BenchmarkSummary) {
        if !self.quiet {
            match &summary.fastest {
                Some(fastest) => println!(
                    "✅ Completed! Measured: {}, Fastest: {fastest}",
                    summary.measurements.len()
                ),
                None => println!("✅ Completed! Measured: {}", summary.measurements.len()),
            }
        }
    }
}

/// 何もしない報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl MeasurementReporter for NoOpReporter {
    fn report_started(&self, _strategy_count: usize, _sample_size: usize, _iterations: u64) {
        // 何もしない
    }

    fn report_measurement(&self, _measurement: &Measurement) {
        // 何もしない
    }

    fn report_error(&self, _label: &str, _error: &str) {
        // 何もしない
    }

    fn report_completed(&self, _summary: &BenchmarkSummary) {
        // 何もしない
    }
}
