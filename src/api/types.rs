/// API通信用の型定義
///
/// Vimeo APIのレスポンスをデシリアライズするための構造体を定義します。
/// すべて読み取り専用の射影で、デコードのたびに新しく生成されます。
use crate::api::pagination::Pagination;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// フォルダ（APIリソース名は `projects`）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// 正規リソースURI（例: "/users/123/projects/456"）
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uri: String,

    /// 表示名
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// 共有リンク
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,

    /// 作成日時（ISO-8601、サーバーのオフセットを保持）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<FixedOffset>>,

    /// 最終更新日時（ISO-8601）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<DateTime<FixedOffset>>,

    /// 所有ユーザー
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// プライバシー設定
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,
}

impl Folder {
    /// URI末尾のフォルダIDを取得
    pub fn id(&self) -> Option<&str> {
        self.uri.rsplit('/').next().filter(|id| !id.is_empty())
    }
}

/// ユーザー
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uri: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// アカウント種別（basic, plus, pro ...）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<FixedOffset>>,
}

/// プライバシー設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Privacy {
    /// 閲覧権限（anybody, nobody, password, unlisted ...）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add: Option<bool>,
}

/// 動画
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uri: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    /// 再生時間（秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// トランスコード状態（available, uploading, transcoding ...）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_time: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Video {
    /// URI末尾の動画IDを取得
    pub fn id(&self) -> Option<u64> {
        self.uri.rsplit('/').next()?.parse().ok()
    }
}

/// 一覧レスポンスの共通形
///
/// `data` 配列の横にページネーション情報が並ぶ。
#[derive(Debug, Clone, Deserialize)]
pub struct DataList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    #[serde(flatten)]
    pub pagination: Pagination,
}
