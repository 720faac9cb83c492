// リソース取得機能
// 1件のチームレコードをネットワークから取得してデコードする

pub mod http;

// 公開API
pub use http::HttpTeamFetcher;
