/// ドメインサービス: 引数バリデーション
///
/// CLIから受け取った文字列を、API呼び出しに渡せる値へ変換する。
/// 範囲のチェック（per_page の上限など）はAPI層のオプション検証に任せる。
use crate::domain::error::DomainError;

/// 動画IDを検証する
///
/// Vimeoの動画IDは正の整数。URL（https://vimeo.com/12345）の末尾も受け付ける。
pub fn parse_video_id(value: &str) -> Result<u64, DomainError> {
    let candidate = value.trim().trim_end_matches('/').rsplit('/').next().unwrap_or_default();

    match candidate.parse::<u64>() {
        Ok(0) => Err(DomainError::invalid_value("video id", value, "must be positive")),
        Ok(id) => Ok(id),
        Err(_) => Err(DomainError::invalid_value("video id", value, "not an integer")),
    }
}

/// 数値フラグ（--page, --per-page）を検証する
pub fn parse_count(name: &str, value: &str) -> Result<u32, DomainError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| DomainError::invalid_value(name, value, "not a non-negative integer"))
}

/// フォルダIDを検証する
///
/// 空でなければそのまま使う。
pub fn require_folder_id(value: Option<&String>) -> Result<String, DomainError> {
    match value {
        Some(id) if !id.trim().is_empty() => Ok(id.trim().to_string()),
        _ => Err(DomainError::missing_argument("folder id")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_video_id() {
        assert_eq!(parse_video_id("42"), Ok(42));
        assert_eq!(parse_video_id(" 76979871 "), Ok(76979871));
        assert_eq!(parse_video_id("https://vimeo.com/76979871"), Ok(76979871));
        assert_eq!(parse_video_id("https://vimeo.com/76979871/"), Ok(76979871));
    }

    #[test]
    fn test_parse_video_id_rejects_invalid() {
        assert!(matches!(
            parse_video_id("abc"),
            Err(DomainError::InvalidValue { .. })
        ));
        assert!(parse_video_id("0").is_err());
        assert!(parse_video_id("-5").is_err());
        assert!(parse_video_id("").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("--page", "3"), Ok(3));
        // 0 はAPI層のオプション検証で弾く
        assert_eq!(parse_count("--page", "0"), Ok(0));
        assert!(parse_count("--page", "two").is_err());
    }

    #[test]
    fn test_require_folder_id() {
        assert_eq!(require_folder_id(Some(&"123".to_string())), Ok("123".to_string()));
        assert_eq!(
            require_folder_id(Some(&" ".to_string())),
            Err(DomainError::missing_argument("folder id"))
        );
        assert!(require_folder_id(None).is_err());
    }
}
