use crate::benchmarks::BenchmarkSuite;
use crate::instruments::Dataset;
use crate::services::{BenchmarkConfig, NoOpReporter};
use crate::strategies::StrategyKind;
use anyhow::Result;

/// Check that every strategy prices the dataset identically
pub fn execute_verify(sample_size: usize, strategies: Vec<StrategyKind>) -> Result<()> {
    let strategies = if strategies.is_empty() {
        StrategyKind::ALL.to_vec()
    } else {
        strategies
    };

    let config = BenchmarkConfig::default()
        .with_sample_size(sample_size)
        .with_strategies(strategies);
    config.validate()?;

    println!("🔍 価格一致検証 ({sample_size} records)");

    let dataset = Dataset::generate(config.sample_size());
    let suite = BenchmarkSuite::new(config, NoOpReporter::new());

    let mut failures = 0;
    for (kind, result) in suite.verify_all(&dataset) {
        match result {
            Ok(()) => println!("✓ {kind}"),
            Err(error) => {
                eprintln!("✗ {kind}: {error}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} strategies disagree with the reference prices");
    }

    println!("✅ 全ての戦略が同一の価格を返しました。");
    Ok(())
}
