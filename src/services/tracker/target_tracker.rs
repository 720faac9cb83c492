// TargetTracker - ターゲット集合と選手コレクションの集約
// 共有状態の唯一の変更点。全ての変更は1つのロックで直列化される

use crate::core::{FeedPlayer, PlayerCollection, ProcessOutcome, TeamRecord};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
struct TrackerState {
    /// 未発見のターゲット。単調に縮小する
    needs: HashSet<String>,
    /// 発見順のターゲット
    found: Vec<String>,
    players: PlayerCollection,
    signaled: bool,
}

/// ターゲット追跡と選手集約を担う共有コンポーネント
///
/// ワーカーは生のコレクションに触れず、[`TargetTracker::process`]経由でのみ状態を変更する。
/// ターゲット集合が空になった時点で完了シグナル（[`CancellationToken`]）を1度だけ発火する。
#[derive(Debug)]
pub struct TargetTracker {
    state: Mutex<TrackerState>,
    completion: CancellationToken,
}

impl TargetTracker {
    /// ターゲット集合を指定して作成
    ///
    /// 空のターゲット集合で作成した場合、完了シグナルは作成時点で発火済みになる。
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let needs: HashSet<String> = targets.into_iter().map(Into::into).collect();
        let completion = CancellationToken::new();
        let signaled = needs.is_empty();
        if signaled {
            completion.cancel();
        }

        Self {
            state: Mutex::new(TrackerState {
                needs,
                signaled,
                ..TrackerState::default()
            }),
            completion,
        }
    }

    /// 完了シグナルのハンドルを取得
    pub fn completion_signal(&self) -> CancellationToken {
        self.completion.clone()
    }

    /// デコード済みレコードを処理
    pub fn process(&self, record: &TeamRecord) -> ProcessOutcome {
        self.process_team(&record.name, &record.players)
    }

    /// チーム名と選手リストを処理
    ///
    /// 対象外のチームは何もしない。対象チームであればターゲット集合から除去し、
    /// 各選手を選手コレクションに記録する。集合の除去・選手の記録・空判定・シグナル発火は
    /// 全て同じロック内で行う。
    pub fn process_team(&self, team_name: &str, players: &[FeedPlayer]) -> ProcessOutcome {
        let mut state = self.lock();

        if !state.needs.remove(team_name) {
            return ProcessOutcome::Ignored;
        }
        state.found.push(team_name.to_string());

        for player in players {
            state.players.record(player, team_name);
        }

        let remaining = state.needs.len();
        let satisfied = remaining == 0 && !state.signaled;
        if satisfied {
            state.signaled = true;
            // ロック保持中に発火する。cancelはブロックしない
            self.completion.cancel();
        }

        ProcessOutcome::Matched {
            remaining,
            satisfied,
        }
    }

    /// 全ターゲットが見つかったかどうか
    pub fn is_satisfied(&self) -> bool {
        self.lock().needs.is_empty()
    }

    /// 未発見のターゲット（名前順）
    pub fn remaining_targets(&self) -> Vec<String> {
        let mut remaining: Vec<String> = self.lock().needs.iter().cloned().collect();
        remaining.sort();
        remaining
    }

    /// 発見済みのターゲット（発見順）
    pub fn teams_found(&self) -> Vec<String> {
        self.lock().found.clone()
    }

    /// 選手コレクションのスナップショット
    pub fn players(&self) -> PlayerCollection {
        self.lock().players.clone()
    }

    fn lock(&self) -> MutexGuard<'_, TrackerState> {
        // パニックしたワーカーがいても状態自体は一貫しているため継続する
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
