// Custom error types for team scanning
// スキャン処理専用のカスタムエラー型定義

use thiserror::Error;

/// 1件のフェッチ・デコードに関するエラー
///
/// ワーカー境界より上には伝播しない。発生したワーカーはログを出して終了する。
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("リクエストエラー: {url} - {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTPステータスエラー: {url} - {status}")]
    Status { url: String, status: u16 },

    #[error("デコードエラー: {url} - {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// 対象URLを取得
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }

    /// タイムアウトによる失敗かどうか
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request { source, .. } if source.is_timeout())
    }
}

/// スキャン全体のエラー型
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl ScanError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 起動前に検出される設定系のエラーかどうか
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError { .. } | Self::ValidationError { .. }
        )
    }
}

/// スキャン処理の結果型
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// 検証結果 - バリデーション専用の結果型
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// バリデーション専用エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("バリデーションエラー: {field} - {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    /// 新しいバリデーションエラーを作成
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for ScanError {
    fn from(error: ValidationError) -> Self {
        ScanError::ValidationError {
            field: error.field,
            reason: error.reason,
        }
    }
}

impl From<anyhow::Error> for ScanError {
    fn from(error: anyhow::Error) -> Self {
        ScanError::InternalError { source: error }
    }
}

impl From<tokio::task::JoinError> for ScanError {
    fn from(error: tokio::task::JoinError) -> Self {
        ScanError::TaskError { source: error }
    }
}
