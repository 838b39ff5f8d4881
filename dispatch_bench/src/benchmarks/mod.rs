//! パフォーマンス測定とベンチマークモジュール
//!
//! ディスパッチ戦略ごとの性能比較を提供

pub mod performance_comparison;

pub use performance_comparison::BenchmarkSuite;
