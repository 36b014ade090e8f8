//! プレゼンテーション層が使用するエラー深刻度
//!
//! 各層のエラー（InfraError, ConfigError, DomainError）はこの分類に写像され、
//! main.rs が終了コードを決定する。このモジュールは他のモジュールに依存しない。

use serde::Serialize;
use std::fmt;

/// エラーの深刻度と対応する終了コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSeverity {
    /// 引数の誤り、存在しないフォルダ・動画など（Exit Code: 1）
    UserError,

    /// トークン未設定・拒否、不正なオプションなど（Exit Code: 2）
    ConfigError,

    /// ネットワーク障害、サーバーエラーなど（Exit Code: 3）
    SystemError,
}

impl ErrorSeverity {
    /// 対応する Unix 終了コードを返す
    pub fn exit_code(self) -> i32 {
        match self {
            Self::UserError => 1,
            Self::ConfigError => 2,
            Self::SystemError => 3,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UserError => "user error",
            Self::ConfigError => "configuration error",
            Self::SystemError => "system error",
        };
        f.write_str(label)
    }
}
