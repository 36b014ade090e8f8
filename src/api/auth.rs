/// 認証マネージャー
///
/// 個人アクセストークンからVimeo APIのAuthorizationヘッダー
/// "bearer <token>" を生成します。
///
/// トークンの取得・更新は扱いません。
#[derive(Debug, Clone)]
pub struct AuthManager {
    access_token: String,
}

impl AuthManager {
    /// アクセストークンから認証マネージャーを作成
    pub fn from_access_token(token: impl Into<String>) -> Self {
        Self {
            access_token: token.into(),
        }
    }

    /// HTTP Authorizationヘッダーの値を生成
    pub fn get_auth_header(&self) -> String {
        format!("bearer {}", self.access_token)
    }

    /// トークンをマスキングして表示
    pub fn get_masked_token(&self) -> String {
        let chars: Vec<char> = self.access_token.chars().collect();
        if chars.len() <= 8 {
            "*".repeat(chars.len())
        } else {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{}***{}", head, tail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let manager = AuthManager::from_access_token("abc123");
        assert_eq!(manager.get_auth_header(), "bearer abc123");
    }

    #[test]
    fn test_token_masking() {
        let manager = AuthManager::from_access_token("abcdef123456789");
        let masked = manager.get_masked_token();
        assert_eq!(masked, "abcd***6789");
        assert!(!masked.contains("ef12345"));
    }

    #[test]
    fn test_short_token_masking() {
        let manager = AuthManager::from_access_token("short");
        assert_eq!(manager.get_masked_token(), "*****");
    }
}
