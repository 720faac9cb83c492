// Consumer - フェッチ・デコードワーカー機能

use crate::{
    core::{ProcessOutcome, ProgressReporter, TeamFetcher, WorkerExit},
    services::tracker::TargetTracker,
};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// 単一ワーカー
///
/// キューが閉じるまでURLを取り出し、取得・デコードしたレコードをTrackerに渡す。
/// 取得・デコードに失敗した場合は報告して終了する（リトライも代替ワーカーの起動もしない）。
pub fn spawn_single_worker<F, R>(
    worker_id: usize,
    fetcher: Arc<F>,
    tracker: Arc<TargetTracker>,
    work_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<String>>>,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<Result<WorkerExit>>
where
    F: TeamFetcher + 'static,
    R: ProgressReporter + 'static,
{
    tokio::spawn(async move {
        let mut processed = 0;

        loop {
            // 次の作業を取得
            let url = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(url) => url,
                    None => break, // チャンネル終了
                }
            };

            let record = match fetcher.fetch_team(&url).await {
                Ok(record) => record,
                Err(error) => {
                    // レポーターの種類に関わらず脱落はログに残す
                    warn!(
                        worker_id,
                        url = %error.url(),
                        timeout = error.is_timeout(),
                        "Worker stopped: {error}"
                    );
                    let message = error.to_string();
                    reporter
                        .report_worker_failed(worker_id, &url, &message)
                        .await;
                    return Ok(WorkerExit {
                        worker_id,
                        processed,
                        failure: Some(message),
                    });
                }
            };
            processed += 1;

            match tracker.process(&record) {
                ProcessOutcome::Ignored => {
                    debug!(worker_id, url = %url, team = %record.name, "Ignored team");
                }
                ProcessOutcome::Matched { remaining, .. } => {
                    reporter.report_team_found(&record.name, remaining).await;
                }
            }
        }

        Ok(WorkerExit {
            worker_id,
            processed,
            failure: None,
        })
    })
}

/// Workers: 固定サイズのワーカープール
pub fn spawn_workers<F, R>(
    fetcher: Arc<F>,
    tracker: Arc<TargetTracker>,
    work_rx: mpsc::Receiver<String>,
    reporter: Arc<R>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<Result<WorkerExit>>>
where
    F: TeamFetcher + 'static,
    R: ProgressReporter + 'static,
{
    let work_rx = Arc::new(tokio::sync::Mutex::new(work_rx));

    (0..worker_count)
        .map(|worker_id| {
            spawn_single_worker(
                worker_id,
                Arc::clone(&fetcher),
                Arc::clone(&tracker),
                Arc::clone(&work_rx),
                Arc::clone(&reporter),
            )
        })
        .collect()
}
