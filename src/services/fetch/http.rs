// HTTP経由のチームレコード取得

use crate::core::types::TeamFeed;
use crate::core::{FetchError, ScanError, ScanResult, TeamFetcher, TeamRecord};
use async_trait::async_trait;
use std::time::Duration;

/// reqwestによるGET + JSONデコード実装
#[derive(Debug, Clone)]
pub struct HttpTeamFetcher {
    client: reqwest::Client,
}

impl HttpTeamFetcher {
    /// タイムアウト付きのクライアントで作成
    pub fn new(timeout: Duration) -> ScanResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("squad_scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScanError::configuration(format!("HTTPクライアント作成エラー: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl TeamFetcher for HttpTeamFetcher {
    async fn fetch_team(&self, url: &str) -> Result<TeamRecord, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        let feed: TeamFeed = serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })?;

        Ok(feed.into())
    }
}
