pub mod cli;
pub mod core;
pub mod engine;
pub mod services;

pub use crate::core::{
    FeedPlayer, Player, PlayerCollection, ProcessOutcome, ScanError, ScanResult, ScanSummary,
    TeamRecord,
};
pub use engine::{create_default_scan_engine, create_quiet_scan_engine, run_scan, ScanEngine};
pub use services::{format_report, DefaultScanConfig, TargetTracker};
