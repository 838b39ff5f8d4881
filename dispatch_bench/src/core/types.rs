// 計測結果に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 1回のハーネス実行の計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub label: String,
    pub iterations: u64,
    /// 正規化の除数 (1イテレーションあたりの作業単位数)
    pub units_per_iteration: u64,
    pub total_ns: u64,
    /// 作業単位あたりの平均時間 (ns)
    pub average_ns: f64,
}

impl Measurement {
    /// 経過時間から計測結果を作成
    ///
    /// `average_ns = total_ns / iterations / units_per_iteration`
    pub fn from_elapsed(
        label: impl Into<String>,
        iterations: u64,
        units_per_iteration: u64,
        elapsed: Duration,
    ) -> Self {
        if iterations == 0 {
            return Self::zero(label, units_per_iteration);
        }

        let units = units_per_iteration.max(1);
        let total_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        let average_ns = total_ns as f64 / iterations as f64 / units as f64;

        Self {
            label: label.into(),
            iterations,
            units_per_iteration: units,
            total_ns,
            average_ns,
        }
    }

    /// 操作を一度も呼ばなかった場合のゼロコスト計測
    pub fn zero(label: impl Into<String>, units_per_iteration: u64) -> Self {
        Self {
            label: label.into(),
            iterations: 0,
            units_per_iteration: units_per_iteration.max(1),
            total_ns: 0,
            average_ns: 0.0,
        }
    }

    pub fn total(&self) -> Duration {
        Duration::from_nanos(self.total_ns)
    }

    pub fn is_zero_cost(&self) -> bool {
        self.iterations == 0
    }
}

/// 全戦略の計測サマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    pub measurements: Vec<Measurement>,
    pub fastest: Option<String>,
}

impl BenchmarkSummary {
    pub fn from_measurements(measurements: Vec<Measurement>) -> Self {
        let fastest = measurements
            .iter()
            .filter(|m| !m.is_zero_cost())
            .min_by(|a, b| a.average_ns.total_cmp(&b.average_ns))
            .map(|m| m.label.clone());

        Self {
            measurements,
            fastest,
        }
    }

    /// 最速の計測結果を取得
    pub fn fastest_measurement(&self) -> Option<&Measurement> {
        let label = self.fastest.as_ref()?;
        self.measurements.iter().find(|m| &m.label == label)
    }

    /// 最速戦略に対する比率 (1.0 = 最速)
    pub fn ratio_to_fastest(&self, label: &str) -> Option<f64> {
        let fastest = self.fastest_measurement()?;
        let target = self.measurements.iter().find(|m| m.label == label)?;

        if fastest.average_ns > 0.0 {
            Some(target.average_ns / fastest.average_ns)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}
