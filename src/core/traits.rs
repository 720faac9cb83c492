// スキャンシステムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::error::FetchError;
use super::types::{ScanSummary, TeamRecord};
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// チームレコードの取得とデコードを抽象化するトレイト
#[automock]
#[async_trait]
pub trait TeamFetcher: Send + Sync {
    /// 指定URLのリソースを取得し、チームレコードにデコードする
    async fn fetch_team(&self, url: &str) -> Result<TeamRecord, FetchError>;
}

// TeamFetcher for Box<dyn TeamFetcher>
#[async_trait]
impl TeamFetcher for Box<dyn TeamFetcher> {
    async fn fetch_team(&self, url: &str) -> Result<TeamRecord, FetchError> {
        self.as_ref().fetch_team(url).await
    }
}

/// スキャン設定を抽象化するトレイト
#[automock]
pub trait ScanConfig: Send + Sync {
    /// ワーカー数を取得
    fn worker_count(&self) -> usize;

    /// IDキューのバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// `{id}`を含むURLテンプレートを取得
    fn url_template(&self) -> String;

    /// 1リクエストのタイムアウト
    fn request_timeout(&self) -> Duration;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// スキャン開始時の報告
    async fn report_started(&self, worker_count: usize, targets: &[String]);

    /// ターゲットチーム発見時の報告
    async fn report_team_found(&self, team_name: &str, remaining: usize);

    /// ワーカーがフェッチ・デコード失敗で終了した時の報告
    async fn report_worker_failed(&self, worker_id: usize, url: &str, error: &str);

    /// 全ターゲット発見時の報告
    async fn report_satisfied(&self, last_dispatched_id: u64);

    /// スキャン完了時の報告
    async fn report_completed(&self, summary: &ScanSummary);
}

// ProgressReporter for Box<dyn ProgressReporter>
#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, worker_count: usize, targets: &[String]) {
        self.as_ref().report_started(worker_count, targets).await
    }

    async fn report_team_found(&self, team_name: &str, remaining: usize) {
        self.as_ref().report_team_found(team_name, remaining).await
    }

    async fn report_worker_failed(&self, worker_id: usize, url: &str, error: &str) {
        self.as_ref().report_worker_failed(worker_id, url, error).await
    }

    async fn report_satisfied(&self, last_dispatched_id: u64) {
        self.as_ref().report_satisfied(last_dispatched_id).await
    }

    async fn report_completed(&self, summary: &ScanSummary) {
        self.as_ref().report_completed(summary).await
    }
}
