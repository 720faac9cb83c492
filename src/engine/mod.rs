// エンジン層 - 並列スキャンとオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod consumer;
mod pipeline;
pub mod producer;
pub mod scan_engine;

// 公開API - 主要エンジンクラス
pub use api::{create_default_scan_engine, create_quiet_scan_engine, run_scan};
pub use consumer::{spawn_single_worker, spawn_workers};
pub use producer::spawn_id_producer;
pub use scan_engine::ScanEngine;
