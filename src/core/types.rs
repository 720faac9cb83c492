// スキャン処理に関連するデータ型定義

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// フィードの選手エントリ（デコード直後の生データ）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPlayer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// 数値として解釈しない
    pub age: String,
}

impl FeedPlayer {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: age.into(),
        }
    }

    /// 姓名を半角スペース1つで連結した表示名
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()].join(" ")
    }
}

/// 1件のチームレコード（ワーカー内でのみ生存する）
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub name: String,
    pub players: Vec<FeedPlayer>,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>, players: Vec<FeedPlayer>) -> Self {
        Self {
            name: name.into(),
            players,
        }
    }
}

/// `{ data: { team: { name, players } } }` 形式のレスポンス
#[derive(Debug, Deserialize)]
pub(crate) struct TeamFeed {
    pub data: TeamFeedData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamFeedData {
    pub team: TeamFeedTeam,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamFeedTeam {
    pub name: String,
    /// 欠落・nullは空リストとして扱う
    #[serde(default)]
    pub players: Option<Vec<FeedPlayer>>,
}

impl From<TeamFeed> for TeamRecord {
    fn from(feed: TeamFeed) -> Self {
        TeamRecord::new(
            feed.data.team.name,
            feed.data.team.players.unwrap_or_default(),
        )
    }
}

/// 集約済みの選手レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub age: String,
    /// 発見順
    pub teams: Vec<String>,
}

/// 選手IDをキーとした選手コレクション
///
/// 発見順を保持するため、レコード本体はVecに格納しIDからの索引を別に持つ。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerCollection {
    players: Vec<Player>,
    index: HashMap<String, usize>,
}

impl PlayerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選手をチームに紐付ける
    ///
    /// 既存IDならチーム名を追記し、未知のIDなら新しいレコードを作成する。
    pub fn record(&mut self, player: &FeedPlayer, team_name: &str) {
        if let Some(&pos) = self.index.get(&player.id) {
            self.players[pos].teams.push(team_name.to_string());
            return;
        }

        self.index.insert(player.id.clone(), self.players.len());
        self.players.push(Player {
            id: player.id.clone(),
            name: player.full_name(),
            age: player.age.clone(),
            teams: vec![team_name.to_string()],
        });
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.index.get(id).map(|&pos| &self.players[pos])
    }

    /// 発見順のイテレータ
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// 集約処理の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// 対象外のチーム
    Ignored,
    /// 対象チームを記録した。`satisfied`はターゲット集合を空にした呼び出しでのみtrue
    Matched { remaining: usize, satisfied: bool },
}

/// ワーカー終了時の記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerExit {
    pub worker_id: usize,
    pub processed: usize,
    /// フェッチ・デコード失敗で終了した場合のエラー
    pub failure: Option<String>,
}

impl WorkerExit {
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// スキャン全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSummary {
    pub started_at: DateTime<Utc>,
    pub ids_dispatched: u64,
    pub records_processed: usize,
    pub failed_workers: usize,
    pub teams_found: Vec<String>,
    pub remaining_targets: Vec<String>,
    pub players: PlayerCollection,
    pub elapsed_ms: u64,
}

impl ScanSummary {
    /// 全ターゲットが見つかったかどうか
    pub fn is_complete(&self) -> bool {
        self.remaining_targets.is_empty()
    }
}
