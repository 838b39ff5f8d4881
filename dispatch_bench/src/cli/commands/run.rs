use crate::benchmarks::BenchmarkSuite;
use crate::cli::RunArgs;
use crate::services::{BenchmarkConfig, ConsoleReporter};
use anyhow::Result;

/// 引数から設定を組み立てる
///
/// 優先順位: 個別の引数 > 設定ファイル > プリセット
pub fn build_config(args: &RunArgs) -> Result<BenchmarkConfig> {
    let mut config = match &args.config {
        Some(path) => BenchmarkConfig::from_json_file(path)?,
        None => args.preset.unwrap_or_default().config(),
    };

    if !args.strategies.is_empty() {
        config = config.with_strategies(args.strategies.clone());
    }
    if let Some(iterations) = args.iterations {
        config = config.with_iterations(iterations);
    }
    if let Some(sample_size) = args.sample_size {
        config = config.with_sample_size(sample_size);
    }
    if let Some(normalization) = args.normalization {
        config = config.with_normalization(normalization);
    }
    if args.no_verify {
        config = config.with_verification(false);
    }

    config.validate()?;
    Ok(config)
}

/// Run the timed benchmark
pub fn execute_run(args: RunArgs) -> Result<()> {
    let config = build_config(&args)?;

    if !args.quiet {
        println!("🔬 ディスパッチ戦略ベンチマーク");
        println!("⚙️  設定:");
        println!("   - イテレーション数: {}", config.iterations());
        println!("   - データ件数: {}", config.sample_size());
        println!("   - 正規化: {:?}", config.normalization());
        println!();
    }

    let reporter = if args.quiet {
        ConsoleReporter::quiet()
    } else {
        ConsoleReporter::new()
    };
    let reporter = reporter.with_unit_label(config.normalization().unit_label());

    let mut suite = BenchmarkSuite::new(config, reporter);
    suite.run_all()?;

    if !args.quiet {
        println!();
        suite.print_summary();
    }

    if let Some(output) = &args.output {
        suite.export_json_report(output)?;
        if !args.quiet {
            println!("📄 詳細レポートを出力しました: {}", output.display());
        }
    }

    Ok(())
}
