// 設定管理の具象実装

use crate::core::{BenchError, BenchResult, ValidationError, ValidationResult};
use crate::strategies::StrategyKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// 既定のイテレーション数
pub const DEFAULT_ITERATIONS: u64 = 10_000;

/// 既定のデータセット件数
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;

/// 計測値の正規化方式
///
/// ハーネスの1イテレーションはデータセット全体の1走査（スイープ）。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Normalization {
    /// 価格計算1回あたりのns（除数 = データセット件数）
    #[default]
    PerCall,
    /// スイープ1回あたりのns（除数 = 1）
    PerSweep,
}

impl Normalization {
    /// ハーネスに渡す正規化の除数
    pub fn divisor(self, sample_size: usize) -> u64 {
        match self {
            Self::PerCall => (sample_size as u64).max(1),
            Self::PerSweep => 1,
        }
    }

    pub const fn unit_label(self) -> &'static str {
        match self {
            Self::PerCall => "ns/iter",
            Self::PerSweep => "ns/sweep",
        }
    }
}

/// 設定プリセット
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ConfigPreset {
    /// 元のベンチマークと同じ 10,000 x 10,000
    #[default]
    Default,
    /// 動作確認用の軽量設定
    Quick,
    /// 長時間・高精度設定
    Thorough,
}

impl ConfigPreset {
    pub fn config(self) -> BenchmarkConfig {
        match self {
            Self::Default => BenchmarkConfig::default(),
            Self::Quick => BenchmarkConfig::default()
                .with_iterations(100)
                .with_sample_size(1_000),
            Self::Thorough => BenchmarkConfig::default().with_iterations(50_000),
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Default => "バランスの取れたデフォルト設定",
            Self::Quick => "動作確認用の軽量設定",
            Self::Thorough => "長時間・高精度設定",
        }
    }
}

/// ベンチマーク設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    iterations: u64,
    sample_size: usize,
    normalization: Normalization,
    strategies: Vec<StrategyKind>,
    verify: bool,
}

impl BenchmarkConfig {
    pub fn new(iterations: u64, sample_size: usize) -> Self {
        Self {
            iterations,
            sample_size,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// 計測する戦略（重複は最初の出現だけ残す）
    pub fn with_strategies(mut self, strategies: Vec<StrategyKind>) -> Self {
        self.strategies = strategies;
        self.dedup_strategies();
        self
    }

    fn dedup_strategies(&mut self) {
        let mut seen = HashSet::new();
        self.strategies.retain(|kind| seen.insert(*kind));
    }

    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    pub fn strategies(&self) -> &[StrategyKind] {
        &self.strategies
    }

    pub fn verify(&self) -> bool {
        self.verify
    }

    /// ハーネスに渡す正規化の除数
    pub fn units_per_iteration(&self) -> u64 {
        self.normalization.divisor(self.sample_size)
    }

    /// 実行前の検証
    pub fn validate(&self) -> ValidationResult<()> {
        if self.iterations == 0 {
            return Err(ValidationError::new("iterations", "must be greater than 0"));
        }
        if self.sample_size == 0 {
            return Err(ValidationError::new("sample_size", "must be greater than 0"));
        }
        if self.strategies.is_empty() {
            return Err(ValidationError::new(
                "strategies",
                "at least one strategy must be selected",
            ));
        }
        let mut seen = HashSet::new();
        if let Some(kind) = self.strategies.iter().find(|kind| !seen.insert(**kind)) {
            return Err(ValidationError::new(
                "strategies",
                format!("duplicate strategy: {kind}"),
            ));
        }
        Ok(())
    }

    /// JSON文字列から設定を読み込む（省略したキーは既定値）
    pub fn from_json_str(json: &str) -> BenchResult<Self> {
        let mut config: Self = serde_json::from_str(json)
            .map_err(|e| BenchError::configuration(format!("JSON解析エラー: {e}")))?;
        config.dedup_strategies();
        Ok(config)
    }

    /// JSON設定ファイルから読み込む
    pub fn from_json_file(path: &Path) -> BenchResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            BenchError::configuration(format!("{} を読み込めません: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            sample_size: DEFAULT_SAMPLE_SIZE,
            normalization: Normalization::default(),
            strategies: StrategyKind::ALL.to_vec(),
            verify: true,
        }
    }
}
