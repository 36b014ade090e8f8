/// ページネーション
///
/// 一覧レスポンスに含まれるページ情報と、それを呼び出し側に返す
/// `Response` メタデータを定義します。
///
/// ```json
/// {
///   "total": 42, "page": 1, "per_page": 25,
///   "paging": { "next": "/me/projects?page=2", "previous": null,
///               "first": "/me/projects?page=1", "last": "/me/projects?page=2" },
///   "data": [...]
/// }
/// ```
use serde::{Deserialize, Serialize};

/// 一覧レスポンスのページ情報
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub paging: Paging,
}

/// ページ間ナビゲーション用の相対パス
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Paging {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

/// 呼び出し結果のメタデータ
///
/// 成功時はステータスを、一覧系の呼び出しではページ情報も保持する。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Response {
    pub status: u16,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_page: Option<String>,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    /// ページ情報をレスポンスへ写す
    pub fn set_paging(&mut self, pagination: &Pagination) {
        self.total = pagination.total;
        self.page = pagination.page;
        self.per_page = pagination.per_page;
        self.next_page = pagination.paging.next.clone();
        self.previous_page = pagination.paging.previous.clone();
        self.first_page = pagination.paging.first.clone();
        self.last_page = pagination.paging.last.clone();
    }

    /// 次のページが存在するか
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }
}
