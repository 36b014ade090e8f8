/// アプリケーション設定モジュール
///
/// コンパイル時定数として定義される静的設定を管理します。
/// これらの設定は実行時には変更できません。

/// アプリケーション全体の設定
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// API関連の設定
#[derive(Debug, Clone, Copy)]
pub struct ApiConfig {
    /// Vimeo API のベースURL
    pub endpoint: &'static str,

    /// APIバージョンを指定するAcceptヘッダー
    pub accept_header: &'static str,

    /// User-Agentヘッダー
    pub user_agent: &'static str,

    /// APIリクエストのタイムアウト(秒)
    pub timeout_seconds: u64,
}

/// ロギング関連の設定
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig {
    /// RUST_LOG未指定時のログレベル (trace, debug, info, warn, error)
    pub default_level: &'static str,

    /// --verbose 指定時のログレベル
    pub verbose_level: &'static str,
}

/// グローバル設定
pub const APP_CONFIG: AppConfig = AppConfig {
    api: ApiConfig {
        endpoint: "https://api.vimeo.com",
        accept_header: "application/vnd.vimeo.*+json;version=3.4",
        user_agent: concat!("vimeo-folders/", env!("CARGO_PKG_VERSION")),
        timeout_seconds: 30,
    },
    logging: LoggingConfig {
        default_level: "warn",
        verbose_level: "vimeo_folders=debug",
    },
};
