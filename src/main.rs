use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use squad_scout::{cli::Cli, create_default_scan_engine, run_scan, ScanResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// スキャンを実行してレポートを出力する。全ターゲットが見つかればtrue
async fn run(cli: &Cli) -> ScanResult<bool> {
    let engine = create_default_scan_engine(cli.scan_config(), cli.targets())?;
    let (summary, report) = run_scan(&engine).await?;

    info!("Result:\n{report}");

    Ok(summary.is_complete())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("squad_scout=debug,warn")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("squad_scout=info,warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
