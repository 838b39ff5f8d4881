//! 計測ハーネス
//!
//! 引数なしの操作を指定回数だけ順に実行し、経過時間を作業単位あたりの
//! 平均ナノ秒に正規化して出力先へ報告する。
//!
//! 正規化: `average_ns = elapsed_ns / iterations / units_per_iteration`。
//! `units_per_iteration` は1回の操作に含まれる作業単位数で、既定値は1。

use crate::core::{Measurement, MeasurementReporter};
use std::hint::black_box;
use std::time::Instant;

/// 計測ハーネス
#[derive(Debug, Clone)]
pub struct Harness<R: MeasurementReporter> {
    reporter: R,
    units_per_iteration: u64,
}

impl<R: MeasurementReporter> Harness<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            reporter,
            units_per_iteration: 1,
        }
    }

    /// 正規化の除数を設定（0は1として扱う）
    pub fn with_units_per_iteration(mut self, units: u64) -> Self {
        self.units_per_iteration = units.max(1);
        self
    }

    pub fn units_per_iteration(&self) -> u64 {
        self.units_per_iteration
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// `operation` を `iterations` 回実行して計測する
    ///
    /// 戻り値は毎回 `black_box` に渡すため、最適化で呼び出しが消えない。
    /// `iterations == 0` の場合は操作を呼ばずにゼロコストの計測を返す。
    pub fn run<F, T>(&self, label: &str, mut operation: F, iterations: u64) -> Measurement
    where
        F: FnMut() -> T,
    {
        let measurement = if iterations == 0 {
            Measurement::zero(label, self.units_per_iteration)
        } else {
            let start = Instant::now();
            for _ in 0..iterations {
                black_box(operation());
            }
            let elapsed = start.elapsed();

            Measurement::from_elapsed(label, iterations, self.units_per_iteration, elapsed)
        };

        self.reporter.report_measurement(&measurement);
        measurement
    }
}
