// テストユーティリティ
// wiremockで連番チームAPIを模擬するヘルパー
#![allow(dead_code)]

use squad_scout::DefaultScanConfig;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// (id, firstName, lastName, age)
pub type PlayerRow<'a> = (&'a str, &'a str, &'a str, &'a str);

/// チームAPIのレスポンスボディを生成
pub fn team_body(name: &str, players: &[PlayerRow<'_>]) -> String {
    let players: Vec<serde_json::Value> = players
        .iter()
        .map(|(id, first, last, age)| {
            serde_json::json!({
                "id": id,
                "firstName": first,
                "lastName": last,
                "age": age,
                "position": "unknown"
            })
        })
        .collect();

    serde_json::json!({
        "code": 0,
        "data": {"team": {"id": 0, "name": name, "players": players}}
    })
    .to_string()
}

/// 指定IDにチームを配置
pub async fn mount_team(server: &MockServer, id: u64, name: &str, players: &[PlayerRow<'_>]) {
    Mock::given(method("GET"))
        .and(path(format!("/teams/{id}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_string(team_body(name, players)))
        .mount(server)
        .await;
}

/// 指定IDを任意のステータスで応答させる
pub async fn mount_status(server: &MockServer, id: u64, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/teams/{id}.json")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// 指定IDを壊れたボディで応答させる
pub async fn mount_malformed(server: &MockServer, id: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/teams/{id}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": "))
        .mount(server)
        .await;
}

/// 個別に配置していないIDは対象外チームとして応答する
pub async fn mount_fallback(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(team_body("Unlisted FC", &[])),
        )
        .with_priority(10)
        .mount(server)
        .await;
}

/// モックサーバーを指すスキャン設定
pub fn config_for(server: &MockServer, workers: usize) -> DefaultScanConfig {
    DefaultScanConfig::new(workers)
        .with_url_template(format!("{}/teams/{{id}}.json", server.uri()))
        .with_request_timeout(Duration::from_secs(5))
        .with_progress_reporting(false)
}
