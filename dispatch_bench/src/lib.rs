//! ディスパッチ戦略のマイクロベンチマーク
//!
//! 同じ価格計算を異なる多態ディスパッチ方式で実装し、1回あたりの
//! 呼び出しコストを同一のハーネスで比較する。

pub mod benchmarks;
pub mod cli;
pub mod core;
pub mod harness;
pub mod instruments;
pub mod services;
pub mod strategies;

pub use benchmarks::BenchmarkSuite;
pub use crate::core::{
    BenchError, BenchResult, BenchmarkSummary, Measurement, MeasurementReporter, PricingStrategy,
};
pub use harness::Harness;
pub use instruments::{
    generate, Dataset, Instrument, InstrumentKind, OptionContract, Record, Stock,
};
pub use services::{BenchmarkConfig, ConfigPreset, ConsoleReporter, NoOpReporter, Normalization};
pub use strategies::StrategyKind;
