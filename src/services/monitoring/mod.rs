// 進捗監視機能
// チーム発見、ワーカー脱落、完了の報告

pub mod implementations;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
