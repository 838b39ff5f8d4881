// ベンチマークシステムのトレイト定義
// 価格計算戦略と計測結果の出力先を抽象化する

use super::error::BenchResult;
use super::types::{BenchmarkSummary, Measurement};
use crate::instruments::Dataset;
use mockall::automock;

/// 計測結果の出力先を抽象化するトレイト
#[automock]
pub trait MeasurementReporter {
    /// ベンチマーク開始時の報告
    fn report_started(&self, strategy_count: usize, sample_size: usize, iterations: u64);

    /// 1戦略の計測完了時の報告
    fn report_measurement(&self, measurement: &Measurement);

    /// エラー発生時の報告
    fn report_error(&self, label: &str, error: &str);

    /// 全戦略の計測完了時の報告
    fn report_completed(&self, summary: &BenchmarkSummary);
}

// MeasurementReporter for Box<dyn MeasurementReporter>
impl MeasurementReporter for Box<dyn MeasurementReporter> {
    fn report_started(&self, strategy_count: usize, sample_size: usize, iterations: u64) {
        self.as_ref()
            .report_started(strategy_count, sample_size, iterations)
    }

    fn report_measurement(&self, measurement: &Measurement) {
        self.as_ref().report_measurement(measurement)
    }

    fn report_error(&self, label: &str, error: &str) {
        self.as_ref().report_error(label, error)
    }

    fn report_completed(&self, summary: &BenchmarkSummary) {
        self.as_ref().report_completed(summary)
    }
}

/// 価格計算のディスパッチ戦略
///
/// 戦略ごとにデータセットの配置（トレイトオブジェクト、列挙型など）を用意し、
/// その1要素の価格を計算する。ハーネスとジェネレーターは戦略を知らない。
pub trait PricingStrategy {
    /// 戦略が走査する要素の型
    type Item;

    /// 戦略名（コンパイル時文字列）
    const NAME: &'static str;

    /// 説明（コンパイル時文字列）
    const DESCRIPTION: &'static str;

    /// データセットをこの戦略用の配置に変換
    fn layout(&self, dataset: &Dataset) -> Vec<Self::Item>;

    /// 1要素の価格を計算
    fn price(&self, item: &Self::Item) -> BenchResult<f64>;

    /// 配置全体の価格を順に計算
    fn price_all(&self, items: &[Self::Item]) -> BenchResult<Vec<f64>> {
        items.iter().map(|item| self.price(item)).collect()
    }
}
