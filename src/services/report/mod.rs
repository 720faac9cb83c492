// レポート出力機能

pub mod formatter;

// 公開API
pub use formatter::format_report;
