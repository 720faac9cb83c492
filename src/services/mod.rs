// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod fetch;
pub mod monitoring;
pub mod report;
pub mod tracker;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{default_targets, validate_scan_setup, DefaultScanConfig, UrlTemplate};
pub use fetch::HttpTeamFetcher;
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
pub use report::format_report;
pub use tracker::TargetTracker;
