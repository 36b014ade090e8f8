/// ドメイン層のエラー定義
///
/// コマンド引数の制約違反を構造化して定義。
/// 外部クレートのエラーは含まない。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// 必須引数が不足
    #[error("missing argument: {name}")]
    MissingArgument { name: String },

    /// 値として解釈できない
    #[error("invalid value for {name}: '{value}' ({reason})")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    /// 未知のフラグ
    #[error("unknown flag: {flag}")]
    UnknownFlag { flag: String },

    /// 未知のコマンド
    #[error("unknown command: '{command}'")]
    UnknownCommand { command: String },

    /// 余分な位置引数
    #[error("unexpected argument: '{arg}'")]
    UnexpectedArgument { arg: String },

    /// フラグに値がない
    #[error("flag {flag} requires a value")]
    MissingFlagValue { flag: String },
}

impl DomainError {
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    pub fn invalid_value(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::UserError
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::MissingArgument { .. }
            | Self::UnknownFlag { .. }
            | Self::UnknownCommand { .. }
            | Self::UnexpectedArgument { .. } => {
                Some("Run 'vimeo-folders help' to see the expected arguments.")
            }
            Self::InvalidValue { .. } => {
                Some("Video IDs and page numbers are positive integers; --direction is asc or desc.")
            }
            Self::MissingFlagValue { .. } => Some("Pass the value right after the flag, e.g. --page 2"),
        }
    }
}
