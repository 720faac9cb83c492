// 設定管理
// ワーカー数、URLテンプレート、探索対象チームの既定値と検証

pub mod implementations;

// 公開API
pub use implementations::{
    default_targets, validate_scan_setup, DefaultScanConfig, UrlTemplate, DEFAULT_TARGETS,
    DEFAULT_URL_TEMPLATE, DEFAULT_WORKER_COUNT,
};
