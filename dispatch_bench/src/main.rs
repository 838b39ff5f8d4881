use clap::Parser;

use dispatch_bench::cli::{execute_list, execute_run, execute_verify, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => execute_run(args),
        Commands::Verify {
            sample_size,
            strategies,
        } => execute_verify(sample_size, strategies),
        Commands::List => {
            execute_list();
            Ok(())
        }
    };

    if let Err(error) = result {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }
}
