// Pipeline - Producer-Worker パイプライン
// ID配信、ワーカープール、完了シグナルによる停止のオーケストレーション

use super::{consumer::spawn_workers, producer::spawn_id_producer};
use crate::{
    core::{ProgressReporter, ScanConfig, ScanResult, ScanSummary, TeamFetcher},
    services::{config::UrlTemplate, tracker::TargetTracker},
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// スキャン用パイプライン
pub struct ScanPipeline<F> {
    fetcher: Arc<F>,
}

impl<F> ScanPipeline<F>
where
    F: TeamFetcher + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// ターゲットが揃うまでスキャンする
    ///
    /// 完了シグナルでProducerが止まりキューが閉じた後、全ワーカーの終了を待ってから
    /// サマリーを返す。全ワーカーが失敗で終了した場合もキューが閉じるため、
    /// 未発見のターゲットを残したサマリーが返る。
    pub async fn execute<C, R>(
        &self,
        template: UrlTemplate,
        tracker: Arc<TargetTracker>,
        config: &C,
        reporter: Arc<R>,
    ) -> ScanResult<ScanSummary>
    where
        C: ScanConfig + ?Sized,
        R: ProgressReporter + 'static,
    {
        let started_at = Utc::now();
        let start_time = Instant::now();

        let (work_tx, work_rx) = mpsc::channel::<String>(config.channel_buffer_size());

        reporter
            .report_started(config.worker_count(), &tracker.remaining_targets())
            .await;

        // Producer起動
        let producer_handle = spawn_id_producer(template, work_tx, tracker.completion_signal());

        // Worker Pool起動
        let worker_handles = spawn_workers(
            Arc::clone(&self.fetcher),
            Arc::clone(&tracker),
            work_rx,
            Arc::clone(&reporter),
            config.worker_count(),
        );

        // Producer完了を待機
        let ids_dispatched = producer_handle.await??;
        if tracker.is_satisfied() {
            reporter.report_satisfied(ids_dispatched).await;
        }

        // 実行中のフェッチを含め全ワーカーの終了を待機
        let mut records_processed = 0;
        let mut failed_workers = 0;
        for handle in worker_handles {
            let exit = handle.await??;
            records_processed += exit.processed;
            if exit.failed() {
                failed_workers += 1;
            }
        }

        let summary = ScanSummary {
            started_at,
            ids_dispatched,
            records_processed,
            failed_workers,
            teams_found: tracker.teams_found(),
            remaining_targets: tracker.remaining_targets(),
            players: tracker.players(),
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };

        reporter.report_completed(&summary).await;

        Ok(summary)
    }
}
