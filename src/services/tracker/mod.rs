// 集約機能
// ターゲット集合の追跡、選手の集約、完了シグナルの発火

pub mod target_tracker;

// 公開API
pub use target_tracker::TargetTracker;
