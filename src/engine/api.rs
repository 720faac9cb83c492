// 高レベル公開API
// ScanEngineを簡単に使用できるようにするための便利な関数

use super::ScanEngine;
use crate::{
    core::{ProgressReporter, ScanConfig, ScanResult, ScanSummary, TeamFetcher},
    services::{
        format_report, ConsoleProgressReporter, DefaultScanConfig, HttpTeamFetcher,
        NoOpProgressReporter,
    },
};

/// 設定からHTTPフェッチャーとコンソールレポーターを組み立てる
///
/// 進捗報告が無効な設定ではquietなレポーターを使う（ワーカー脱落の警告は残る）。
pub fn create_default_scan_engine<I, S>(
    config: DefaultScanConfig,
    targets: I,
) -> ScanResult<ScanEngine<HttpTeamFetcher, DefaultScanConfig, ConsoleProgressReporter>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let fetcher = HttpTeamFetcher::new(config.request_timeout())?;
    let reporter = if config.enable_progress_reporting() {
        ConsoleProgressReporter::new()
    } else {
        ConsoleProgressReporter::quiet()
    };

    Ok(ScanEngine::new(fetcher, config, reporter, targets))
}

/// 静音版のスキャンエンジンを作成（テスト・バックグラウンド用）
pub fn create_quiet_scan_engine<I, S>(
    config: DefaultScanConfig,
    targets: I,
) -> ScanResult<ScanEngine<HttpTeamFetcher, DefaultScanConfig, NoOpProgressReporter>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let fetcher = HttpTeamFetcher::new(config.request_timeout())?;
    Ok(ScanEngine::new(
        fetcher,
        config,
        NoOpProgressReporter::new(),
        targets,
    ))
}

/// スキャンを実行し、サマリーとレポートテキストを返す
pub async fn run_scan<F, C, R>(engine: &ScanEngine<F, C, R>) -> ScanResult<(ScanSummary, String)>
where
    F: TeamFetcher + 'static,
    C: ScanConfig,
    R: ProgressReporter + 'static,
{
    let summary = engine.run().await?;
    let report = format_report(&summary.players);
    Ok((summary, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn team_body(name: &str, players: &[(&str, &str, &str, &str)]) -> String {
        let players: Vec<serde_json::Value> = players
            .iter()
            .map(|(id, first, last, age)| {
                serde_json::json!({"id": id, "firstName": first, "lastName": last, "age": age})
            })
            .collect();
        serde_json::json!({"data": {"team": {"name": name, "players": players}}}).to_string()
    }

    #[test]
    fn test_create_default_scan_engine() {
        let engine = create_default_scan_engine(DefaultScanConfig::default(), ["Arsenal"]).unwrap();

        assert_eq!(engine.config().worker_count(), 10);
        assert!(engine.config().enable_progress_reporting());
        assert_eq!(engine.targets().to_vec(), vec!["Arsenal"]);
    }

    #[test]
    fn test_create_quiet_scan_engine() {
        let engine = create_quiet_scan_engine(
            DefaultScanConfig::new(2).with_progress_reporting(false),
            ["Arsenal", "Chelsea"],
        )
        .unwrap();

        assert_eq!(engine.config().worker_count(), 2);
        assert_eq!(engine.targets().len(), 2);
    }

    #[tokio::test]
    async fn test_run_scan_over_http() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams/1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(team_body("C", &[])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/teams/2.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(team_body("A", &[("1", "J", "D", "30")])),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/teams/3.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(team_body("B", &[("1", "J", "D", "30")])),
            )
            .mount(&mock_server)
            .await;
        // 4以降は存在しないチーム
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(team_body("Other", &[])))
            .with_priority(10)
            .mount(&mock_server)
            .await;

        let config = DefaultScanConfig::new(1)
            .with_url_template(format!("{}/teams/{{id}}.json", mock_server.uri()))
            .with_request_timeout(Duration::from_secs(5));
        let engine = create_quiet_scan_engine(config, ["A", "B"]).unwrap();

        let (summary, report) = run_scan(&engine).await.unwrap();

        assert!(summary.is_complete());
        assert_eq!(report, "1. J D; 30; A, B\n");
    }
}
