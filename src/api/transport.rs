//! HTTPトランスポートの抽象化
//!
//! サービス層はこのトレイトにのみ依存し、本番ではreqwestベースの
//! `ApiClient`、テストでは記録用の偽トランスポートを注入します。

use crate::api::error::InfraError;
use crate::api::pagination::Response;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// 結果型
pub type ApiResult<T> = Result<T, InfraError>;

/// 送信前のリクエスト
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// 相対リソースパス（例: "me/projects?page=2"）
    pub path: String,
    /// 解決済みの完全URL
    pub url: String,
    pub body: Option<serde_json::Value>,
}

/// デコード前のレスポンス
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTPトランスポート
#[async_trait]
pub trait Transport: Send + Sync {
    /// 相対パスからリクエストを組み立てる
    fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<Request>;

    /// リクエストを送信する（ステータスの判定はしない）
    async fn execute(&self, request: Request) -> ApiResult<RawResponse>;
}

/// Vimeo APIのエラーボディ
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    developer_message: Option<String>,
}

/// リクエストを送信し、JSONを `T` にデコードする
///
/// 2xx以外はステータスコード付きの `InfraError::Api` になる。
pub async fn send_json<C, T>(transport: &C, request: Request) -> ApiResult<(T, Response)>
where
    C: Transport + ?Sized,
    T: DeserializeOwned,
{
    let endpoint = request.path.clone();
    let raw = transport.execute(request).await?;

    if !raw.is_success() {
        tracing::warn!(endpoint = %endpoint, status = raw.status, "request failed");
        return Err(InfraError::api(
            endpoint,
            error_message(&raw),
            Some(raw.status),
        ));
    }

    let value = serde_json::from_slice(&raw.body).map_err(|source| InfraError::Decode {
        endpoint,
        status_code: raw.status,
        source,
    })?;

    Ok((value, Response::new(raw.status)))
}

/// エラーレスポンスから表示用メッセージを取り出す
fn error_message(raw: &RawResponse) -> String {
    if let Ok(body) = serde_json::from_slice::<ErrorBody>(&raw.body) {
        match (body.error, body.developer_message) {
            (Some(error), Some(detail)) => return format!("{} ({})", error, detail),
            (Some(error), None) => return error,
            (None, Some(detail)) => return detail,
            (None, None) => {}
        }
    }

    let text = String::from_utf8_lossy(&raw.body);
    if text.trim().is_empty() {
        format!("HTTP {}", raw.status)
    } else {
        text.into_owned()
    }
}
