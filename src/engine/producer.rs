// Producer - 候補ID配信機能

use crate::services::config::UrlTemplate;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Producer: 1から始まる連番IDをURLにしてキューへ配信
///
/// 送信と停止シグナルの待機を1つの`select!`で競合させるため、停止要求を取りこぼさない。
/// 停止シグナル・キューの受信側消滅・ID枯渇のいずれかで終了し、送信側をドロップして
/// キューを閉じる。戻り値は最後に配信したID（未配信なら0）。
pub fn spawn_id_producer(
    template: UrlTemplate,
    work_tx: mpsc::Sender<String>,
    stop: CancellationToken,
) -> tokio::task::JoinHandle<Result<u64>> {
    tokio::spawn(async move {
        let mut next: u64 = 1;
        let mut last_dispatched: u64 = 0;

        loop {
            let url = template.render(next);

            tokio::select! {
                biased;

                _ = stop.cancelled() => {
                    debug!(last_dispatched, "Stop signal received, closing queue");
                    break;
                }
                sent = work_tx.send(url) => {
                    if sent.is_err() {
                        // 全ワーカーが終了した
                        debug!(last_dispatched, "Queue receivers gone, producer exiting");
                        break;
                    }
                    last_dispatched = next;
                }
            }

            match next.checked_add(1) {
                Some(id) => next = id,
                None => break,
            }
        }

        // work_txをドロップしてチャンネル終了シグナル
        Ok(last_dispatched)
    })
}
