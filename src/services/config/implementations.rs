// 設定管理の具象実装

use crate::core::{ScanConfig, ScanError, ScanResult, ValidationError, ValidationResult};
use std::fmt;
use std::time::Duration;

/// 取得元URLのデフォルトテンプレート
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://vintagemonster.onefootball.com/api/teams/en/{id}.json";

/// デフォルトのワーカー数
pub const DEFAULT_WORKER_COUNT: usize = 10;

/// デフォルトのリクエストタイムアウト（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// デフォルトの探索対象チーム
pub const DEFAULT_TARGETS: [&str; 10] = [
    "Germany",
    "England",
    "France",
    "Spain",
    "Manchester Utd",
    "Arsenal",
    "Chelsea",
    "Barcelona",
    "Real Madrid",
    "FC Bayern Munich",
];

const ID_PLACEHOLDER: &str = "{id}";

/// `{id}`プレースホルダをちょうど1つ含むURLテンプレート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn parse(template: impl Into<String>) -> ValidationResult<Self> {
        let template = template.into();
        match template.matches(ID_PLACEHOLDER).count() {
            1 => Ok(Self(template)),
            0 => Err(ValidationError::new(
                "url_template",
                format!("{ID_PLACEHOLDER}が含まれていません: {template}"),
            )),
            _ => Err(ValidationError::new(
                "url_template",
                format!("{ID_PLACEHOLDER}が複数含まれています: {template}"),
            )),
        }
    }

    /// IDを埋め込んだURLを生成
    pub fn render(&self, id: u64) -> String {
        self.0.replace(ID_PLACEHOLDER, &id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// デフォルトのターゲット一覧を所有権付きで取得
pub fn default_targets() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect()
}

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultScanConfig {
    worker_count: usize,
    buffer_size: usize,
    url_template: String,
    request_timeout: Duration,
    enable_progress: bool,
}

impl DefaultScanConfig {
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count,
            buffer_size: worker_count,
            ..Self::default()
        }
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_url_template(mut self, url_template: impl Into<String>) -> Self {
        self.url_template = url_template.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultScanConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            buffer_size: DEFAULT_WORKER_COUNT,
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            enable_progress: true,
        }
    }
}

impl ScanConfig for DefaultScanConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn url_template(&self) -> String {
        self.url_template.clone()
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}

/// 設定とターゲット集合を検証し、URLテンプレートを解析する
///
/// タスクを起動する前に呼ばれる。
pub fn validate_scan_setup<C: ScanConfig + ?Sized>(
    config: &C,
    targets: &[String],
) -> ScanResult<UrlTemplate> {
    if config.worker_count() == 0 {
        return Err(ScanError::configuration(
            "ワーカー数は1以上である必要があります",
        ));
    }

    if config.channel_buffer_size() == 0 {
        return Err(ScanError::configuration(
            "バッファサイズは1以上である必要があります",
        ));
    }

    if config.request_timeout().is_zero() {
        return Err(ScanError::configuration(
            "リクエストタイムアウトは0より大きい必要があります",
        ));
    }

    if targets.is_empty() {
        return Err(ScanError::configuration(
            "探索対象チームを1つ以上指定してください",
        ));
    }

    Ok(UrlTemplate::parse(config.url_template())?)
}
