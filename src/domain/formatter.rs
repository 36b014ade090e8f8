/// ドメインサービス: 表示用フォーマット
///
/// APIから受け取った日時・再生時間を人間向けの文字列に変換する。
/// タイムゾーンはユーザー設定のオフセット（秒）に従う。
use chrono::{DateTime, FixedOffset, Utc};

/// 日時をユーザー設定のオフセットでフォーマット
///
/// - UTC:       "2024-12-01 14:30:45 UTC"
/// - それ以外:  "2024-12-01 23:30:45 +09:00"
///
/// APIが返したオフセットには依らず、表示はユーザー設定に揃える。
/// 日時が未設定なら "-" を返す。
pub fn format_timestamp(time: Option<&DateTime<FixedOffset>>, offset_seconds: i32) -> String {
    let Some(time) = time.map(|t| t.with_timezone(&Utc)) else {
        return "-".to_string();
    };

    if offset_seconds == 0 {
        return time.format("%Y-%m-%d %H:%M:%S UTC").to_string();
    }

    match FixedOffset::east_opt(offset_seconds) {
        Some(offset) => time.with_timezone(&offset).format("%Y-%m-%d %H:%M:%S %:z").to_string(),
        None => time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    }
}

/// 再生時間（秒）を "m:ss" または "h:mm:ss" に変換
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
