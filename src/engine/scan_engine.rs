// ScanEngine - 依存性注入によるスキャンエンジン
// フェッチャー・設定・レポーター・ターゲット一覧をコンストラクタで受け取る

use super::pipeline::ScanPipeline;
use crate::{
    core::{ProgressReporter, ScanConfig, ScanResult, ScanSummary, TeamFetcher},
    services::{
        config::{validate_scan_setup, UrlTemplate},
        tracker::TargetTracker,
    },
};
use std::sync::Arc;

/// 依存性注入によるスキャンエンジン
///
/// 並列処理で共有される依存関係は初期からArcで管理する。
/// 1回の実行ごとに新しい[`TargetTracker`]を作るため、同じエンジンで複数回スキャンできる。
pub struct ScanEngine<F, C, R> {
    fetcher: Arc<F>,
    config: Arc<C>,
    reporter: Arc<R>,
    targets: Vec<String>,
}

impl<F, C, R> ScanEngine<F, C, R>
where
    F: TeamFetcher + 'static,
    C: ScanConfig,
    R: ProgressReporter + 'static,
{
    /// 新しいスキャンエンジンを作成
    pub fn new<I, S>(fetcher: F, config: C, reporter: R, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut targets: Vec<String> = targets.into_iter().map(Into::into).collect();
        targets.sort();
        targets.dedup();

        Self {
            fetcher: Arc::new(fetcher),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
            targets,
        }
    }

    /// 全ターゲットが見つかるまでスキャンする
    pub async fn run(&self) -> ScanResult<ScanSummary> {
        let template = validate_scan_setup(self.config.as_ref(), &self.targets)?;
        let tracker = Arc::new(TargetTracker::new(self.targets.iter().cloned()));

        self.run_with_tracker(template, tracker).await
    }

    /// 呼び出し側が用意したTrackerでスキャンする
    ///
    /// 実行中に完了シグナルや集約状態を外から観測したい場合に使う。
    pub async fn run_with_tracker(
        &self,
        template: UrlTemplate,
        tracker: Arc<TargetTracker>,
    ) -> ScanResult<ScanSummary> {
        let pipeline = ScanPipeline::new(Arc::clone(&self.fetcher));

        pipeline
            .execute(
                template,
                tracker,
                self.config.as_ref(),
                Arc::clone(&self.reporter),
            )
            .await
    }

    /// 探索対象チーム（重複除去・名前順）
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }
}
