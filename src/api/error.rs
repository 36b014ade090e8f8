/// インフラ層のエラー定義
///
/// Vimeo APIとのやり取り（オプションの組み立て、HTTP通信、JSONデコード）で
/// 発生するエラーを構造化して定義。
/// #[source] を使って原因連鎖を保持する。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    /// クエリオプションが不正（リクエスト送信前に検出）
    #[error("invalid call option '{option}': {message}")]
    InvalidOption { option: String, message: String },

    /// リクエストURLの構築に失敗
    #[error("invalid request URL: {url}")]
    InvalidUrl { url: String },

    /// ネットワークエラー
    #[error("network error: {message}")]
    Network { message: String },

    /// API通信エラー（2xx以外のステータス）
    #[error("API error: {endpoint} - {message}")]
    Api {
        endpoint: String,
        message: String,
        status_code: Option<u16>,
    },

    /// タイムアウトエラー
    #[error("operation timed out: {operation}")]
    Timeout { operation: String },

    /// レスポンスのデコード失敗
    #[error("failed to decode response from {endpoint}")]
    Decode {
        endpoint: String,
        status_code: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl InfraError {
    /// 不正なオプションエラーを作成
    pub fn invalid_option(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }

    /// ネットワークエラーを作成
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// タイムアウトエラーを作成
    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    /// APIエラーを作成
    pub fn api(
        endpoint: impl Into<String>,
        message: impl Into<String>,
        status_code: Option<u16>,
    ) -> Self {
        Self::Api {
            endpoint: endpoint.into(),
            message: message.into(),
            status_code,
        }
    }

    /// エラー発生時に判明していたHTTPステータス
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => *status_code,
            Self::Decode { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// サーバーが404を返したか
    ///
    /// フォルダ内の動画取得では「動画がフォルダに含まれていない」ことを意味する。
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidOption { .. } | Self::InvalidUrl { .. } => ErrorSeverity::ConfigError,
            Self::Api {
                status_code: Some(401 | 403),
                ..
            } => ErrorSeverity::ConfigError,
            Self::Api {
                status_code: Some(404),
                ..
            } => ErrorSeverity::UserError,
            _ => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidOption { .. } => {
                Some("Check --page (>= 1), --per-page (1-100) and --direction (asc|desc).")
            }
            Self::Api {
                status_code: Some(401),
                ..
            } => Some("Your access token was rejected. Run 'vimeo-folders login' again."),
            Self::Api {
                status_code: Some(403),
                ..
            } => Some("The access token lacks the required scope (public, private)."),
            Self::Api {
                status_code: Some(404),
                ..
            } => Some("The folder or video does not exist, or is not visible to you."),
            Self::Timeout { .. } | Self::Network { .. } => {
                Some("Check your network connection and try again.")
            }
            _ => None,
        }
    }
}
