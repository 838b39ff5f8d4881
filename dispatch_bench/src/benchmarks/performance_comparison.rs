//! ディスパッチ戦略のパフォーマンス比較
//!
//! 各戦略の価格が基準値とビット単位で一致することを確認してから、
//! ハーネスでスイープを計測し、サマリーとJSONレポートを生成する

use crate::core::{
    BenchError, BenchResult, BenchmarkSummary, Measurement, MeasurementReporter, PricingStrategy,
};
use crate::harness::Harness;
use crate::instruments::Dataset;
use crate::services::BenchmarkConfig;
use crate::strategies::{
    ClosedDispatch, DelegatedDispatch, FatInterfaceDispatch, InspectionDispatch,
    MonomorphizedDispatch, OpenDispatch, StaticCastDispatch, StrategyKind,
};
use serde::Serialize;
use std::hint::black_box;
use std::path::Path;

/// JSONレポートの形式
#[derive(Debug, Serialize)]
struct BenchmarkReport<'a> {
    timestamp: String,
    config: &'a BenchmarkConfig,
    summary: BenchmarkSummary,
}

/// 戦略比較テストスイート
pub struct BenchmarkSuite<R: MeasurementReporter> {
    config: BenchmarkConfig,
    harness: Harness<R>,
    results: Vec<Measurement>,
}

impl<R: MeasurementReporter> BenchmarkSuite<R> {
    pub fn new(config: BenchmarkConfig, reporter: R) -> Self {
        let harness = Harness::new(reporter).with_units_per_iteration(config.units_per_iteration());

        Self {
            config,
            harness,
            results: Vec::new(),
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn results(&self) -> &[Measurement] {
        &self.results
    }

    pub fn reporter(&self) -> &R {
        self.harness.reporter()
    }

    /// 戦略の価格列が基準値と一致するか検証
    pub fn verify_strategy<S: PricingStrategy>(
        &self,
        strategy: &S,
        dataset: &Dataset,
    ) -> BenchResult<()> {
        let items = strategy.layout(dataset);
        verify_layout(strategy, &items, dataset)
    }

    /// 種類を指定して検証
    pub fn verify_kind(&self, kind: StrategyKind, dataset: &Dataset) -> BenchResult<()> {
        match kind {
            StrategyKind::Open => self.verify_strategy(&OpenDispatch::new(), dataset),
            StrategyKind::Closed => self.verify_strategy(&ClosedDispatch::new(), dataset),
            StrategyKind::Monomorphized => {
                self.verify_strategy(&MonomorphizedDispatch::new(), dataset)
            }
            StrategyKind::Inspection => self.verify_strategy(&InspectionDispatch::new(), dataset),
            StrategyKind::StaticCast => self.verify_strategy(&StaticCastDispatch::new(), dataset),
            StrategyKind::FatInterface => {
                self.verify_strategy(&FatInterfaceDispatch::new(), dataset)
            }
            StrategyKind::Delegated => self.verify_strategy(&DelegatedDispatch::new(), dataset),
        }
    }

    /// 設定中の全戦略を検証し、戦略ごとの結果を返す
    pub fn verify_all(&self, dataset: &Dataset) -> Vec<(StrategyKind, BenchResult<()>)> {
        self.config
            .strategies()
            .iter()
            .map(|&kind| (kind, self.verify_kind(kind, dataset)))
            .collect()
    }

    /// 1戦略を計測
    ///
    /// 検証が有効な場合、価格が一致しなければ計測せずにエラーを返す。
    /// 検証が無効でも価格計算の失敗は握りつぶさない。
    pub fn run_strategy<S: PricingStrategy>(
        &mut self,
        strategy: &S,
        dataset: &Dataset,
    ) -> BenchResult<Measurement> {
        let items = strategy.layout(dataset);

        let checked = if self.config.verify() {
            verify_layout(strategy, &items, dataset)
        } else {
            strategy.price_all(&items).map(|_| ())
        };
        if let Err(error) = checked {
            self.reporter().report_error(S::NAME, &error.to_string());
            return Err(error);
        }

        // 計測中の最初の失敗
        let mut failure = None;
        let measurement = self.harness.run(
            S::NAME,
            || match sweep(strategy, &items) {
                Ok(total) => total,
                Err(error) => {
                    failure.get_or_insert(error);
                    f64::NAN
                }
            },
            self.config.iterations(),
        );

        if let Some(error) = failure {
            self.reporter().report_error(S::NAME, &error.to_string());
            return Err(error);
        }

        self.results.push(measurement.clone());
        Ok(measurement)
    }

    /// 種類を指定して計測
    pub fn run_kind(&mut self, kind: StrategyKind, dataset: &Dataset) -> BenchResult<Measurement> {
        match kind {
            StrategyKind::Open => self.run_strategy(&OpenDispatch::new(), dataset),
            StrategyKind::Closed => self.run_strategy(&ClosedDispatch::new(), dataset),
            StrategyKind::Monomorphized => {
                self.run_strategy(&MonomorphizedDispatch::new(), dataset)
            }
            StrategyKind::Inspection => self.run_strategy(&InspectionDispatch::new(), dataset),
            StrategyKind::StaticCast => self.run_strategy(&StaticCastDispatch::new(), dataset),
            StrategyKind::FatInterface => self.run_strategy(&FatInterfaceDispatch::new(), dataset),
            StrategyKind::Delegated => self.run_strategy(&DelegatedDispatch::new(), dataset),
        }
    }

    /// 全体的なパフォーマンス比較実行
    pub fn run_all(&mut self) -> BenchResult<BenchmarkSummary> {
        self.config.validate()?;

        let dataset = Dataset::generate(self.config.sample_size());
        let kinds = self.config.strategies().to_vec();

        self.reporter()
            .report_started(kinds.len(), dataset.len(), self.config.iterations());

        for kind in kinds {
            self.run_kind(kind, &dataset)?;
        }

        let summary = self.summary();
        self.reporter().report_completed(&summary);
        Ok(summary)
    }

    pub fn summary(&self) -> BenchmarkSummary {
        BenchmarkSummary::from_measurements(self.results.clone())
    }

    /// 結果サマリーの表示
    pub fn print_summary(&self) {
        let summary = self.summary();
        let unit = self.config.normalization().unit_label();

        println!("📊 ディスパッチ戦略比較サマリー");
        println!("{}", "=".repeat(60));

        for measurement in &summary.measurements {
            let ratio = summary
                .ratio_to_fastest(&measurement.label)
                .map(|r| format!("x{r:.2}"))
                .unwrap_or_else(|| "-".to_string());

            println!(
                "🎯 {:<16} {:>10.4} {unit}  ({ratio})",
                measurement.label, measurement.average_ns
            );
        }

        if let Some(fastest) = summary.fastest_measurement() {
            println!();
            println!("🏆 Best: {} ({:.4} {unit})", fastest.label, fastest.average_ns);
        }
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &Path) -> BenchResult<()> {
        let report = BenchmarkReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            config: &self.config,
            summary: self.summary(),
        };

        let json = serde_json::to_string_pretty(&report).map_err(|e| BenchError::report(e.into()))?;
        std::fs::write(path, json).map_err(|e| BenchError::report(e.into()))?;
        Ok(())
    }
}

/// 価格列を基準値とビット単位で比較
fn verify_layout<S: PricingStrategy>(
    strategy: &S,
    items: &[S::Item],
    dataset: &Dataset,
) -> BenchResult<()> {
    let prices = strategy.price_all(items)?;

    for (index, (record, actual)) in dataset.iter().zip(prices).enumerate() {
        let expected = record.price();
        if expected.to_bits() != actual.to_bits() {
            return Err(BenchError::price_mismatch(S::NAME, index, expected, actual));
        }
    }
    Ok(())
}

/// 1スイープ分の価格を合計する（計測対象の操作）
///
/// 最初の失敗でスイープを打ち切る
#[inline]
fn sweep<S: PricingStrategy>(strategy: &S, items: &[S::Item]) -> BenchResult<f64> {
    let mut total = 0.0;

    for item in items {
        total += strategy.price(black_box(item))?;
    }
    Ok(total)
}
