/// リソースの所有者スコープ
///
/// 認証済みユーザー自身（`me`）か、IDで指定したユーザー（`users/{id}`）か。
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserScope {
    /// 認証済みユーザー自身
    #[default]
    Me,
    /// 指定ユーザー
    User(String),
}

impl UserScope {
    pub fn user(id: impl Into<String>) -> Self {
        Self::User(id.into())
    }

    /// パスの接頭辞（"me" または "users/{id}"）
    pub fn path_prefix(&self) -> String {
        match self {
            Self::Me => "me".to_string(),
            Self::User(id) => format!("users/{}", urlencoding::encode(id)),
        }
    }
}

/// 空文字列・Noneは自分自身として扱う
impl From<Option<String>> for UserScope {
    fn from(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.is_empty() => Self::User(id),
            _ => Self::Me,
        }
    }
}

impl From<Option<&str>> for UserScope {
    fn from(id: Option<&str>) -> Self {
        id.map(str::to_string).into()
    }
}

impl fmt::Display for UserScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Me => f.write_str("me"),
            Self::User(id) => write!(f, "user {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_prefix() {
        assert_eq!(UserScope::Me.path_prefix(), "me");
        assert_eq!(UserScope::user("alice").path_prefix(), "users/alice");
        assert_eq!(UserScope::user("12345").path_prefix(), "users/12345");
    }

    #[test]
    fn test_from_optional_id() {
        assert_eq!(UserScope::from(None::<String>), UserScope::Me);
        assert_eq!(UserScope::from(Some(String::new())), UserScope::Me);
        assert_eq!(UserScope::from(Some("alice")), UserScope::user("alice"));
    }
}
