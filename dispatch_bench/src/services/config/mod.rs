// 設定管理
// ベンチマーク設定、プリセット、JSON設定ファイルの読み込み

pub mod implementations;

// 公開API
pub use implementations::{
    BenchmarkConfig, ConfigPreset, Normalization, DEFAULT_ITERATIONS, DEFAULT_SAMPLE_SIZE,
};
