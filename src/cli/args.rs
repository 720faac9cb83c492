use crate::services::config::{
    default_targets, DefaultScanConfig, DEFAULT_URL_TEMPLATE, DEFAULT_WORKER_COUNT,
};
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "squad_scout")]
#[command(about = "Scan numbered team records until every target team is found")]
#[command(version)]
pub struct Cli {
    /// Team name to search for (repeatable). Defaults to the built-in list
    #[arg(short, long = "team", value_name = "NAME")]
    pub teams: Vec<String>,

    /// Number of parallel fetch workers
    #[arg(short, long, default_value_t = DEFAULT_WORKER_COUNT)]
    pub workers: usize,

    /// URL template; `{id}` is replaced by the candidate identifier
    #[arg(long, default_value = DEFAULT_URL_TEMPLATE)]
    pub url_template: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Suppress progress events (worker failures are still logged)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 探索対象チーム。未指定ならデフォルト一覧
    pub fn targets(&self) -> Vec<String> {
        if self.teams.is_empty() {
            default_targets()
        } else {
            self.teams.clone()
        }
    }

    pub fn scan_config(&self) -> DefaultScanConfig {
        DefaultScanConfig::new(self.workers)
            .with_url_template(self.url_template.clone())
            .with_request_timeout(Duration::from_secs(self.timeout_secs))
            .with_progress_reporting(!self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScanConfig;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["squad_scout"]);

        assert_eq!(cli.targets().len(), 10);
        let config = cli.scan_config();
        assert_eq!(config.worker_count(), 10);
        assert_eq!(config.channel_buffer_size(), 10);
        assert_eq!(config.url_template(), DEFAULT_URL_TEMPLATE);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.enable_progress_reporting());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "squad_scout",
            "-t",
            "Arsenal",
            "--team",
            "Real Madrid",
            "-w",
            "3",
            "--url-template",
            "http://localhost:9000/{id}",
            "--timeout-secs",
            "2",
            "-q",
            "-v",
        ]);

        assert_eq!(cli.targets(), vec!["Arsenal", "Real Madrid"]);
        let config = cli.scan_config();
        assert_eq!(config.worker_count(), 3);
        assert_eq!(config.channel_buffer_size(), 3);
        assert_eq!(config.url_template(), "http://localhost:9000/{id}");
        assert_eq!(config.request_timeout(), Duration::from_secs(2));
        assert!(!config.enable_progress_reporting());
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_non_numeric_workers() {
        assert!(Cli::try_parse_from(["squad_scout", "-w", "many"]).is_err());
    }
}
