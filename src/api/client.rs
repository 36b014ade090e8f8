/// HTTPクライアント
///
/// Vimeo APIとの通信を担当する `Transport` の本番実装。
/// タイムアウト、エラーハンドリング、認証ヘッダーの付与を含みます。
/// リトライは行いません。
use crate::api::auth::AuthManager;
use crate::api::error::InfraError;
use crate::api::transport::{ApiResult, RawResponse, Request, Transport};
use crate::config::APP_CONFIG;
use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use std::time::Duration;

/// APIクライアント
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    auth: Option<AuthManager>,
}

impl ApiClient {
    /// 新しいAPIクライアントを作成
    ///
    /// # Arguments
    /// * `base_url` - APIのベースURL（例: "https://api.vimeo.com"）
    /// * `auth` - 認証マネージャー（未認証アクセスの場合はNone）
    pub fn new(base_url: &str, auth: Option<AuthManager>) -> ApiResult<Self> {
        let timeout = Duration::from_secs(APP_CONFIG.api.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(APP_CONFIG.api.user_agent)
            .build()
            .map_err(|e| InfraError::network(format!("Failed to create HTTP client: {}", e)))?;

        // 相対パスを連結するため末尾のスラッシュを保証する
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized).map_err(|_| InfraError::InvalidUrl {
            url: base_url.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    /// デフォルトのプロダクション環境クライアントを作成
    pub fn production(auth: Option<AuthManager>) -> ApiResult<Self> {
        Self::new(APP_CONFIG.api.endpoint, auth)
    }
}

#[async_trait]
impl Transport for ApiClient {
    fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<Request> {
        let relative = path.trim_start_matches('/');
        let url = self
            .base_url
            .join(relative)
            .map_err(|_| InfraError::InvalidUrl {
                url: path.to_string(),
            })?;

        Ok(Request {
            method,
            path: relative.to_string(),
            url: url.to_string(),
            body,
        })
    }

    async fn execute(&self, request: Request) -> ApiResult<RawResponse> {
        let operation = format!("{} {}", request.method, request.path);
        tracing::debug!(method = %request.method, path = %request.path, "sending request");

        let mut builder = self
            .client
            .request(request.method, &request.url)
            .header(reqwest::header::ACCEPT, APP_CONFIG.api.accept_header);

        if let Some(auth) = &self.auth {
            builder = builder.header(reqwest::header::AUTHORIZATION, auth.get_auth_header());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                InfraError::timeout(operation.clone())
            } else if e.is_connect() {
                InfraError::network(format!("Connection failed for {}: {}", operation, e))
            } else {
                InfraError::network(format!("Request failed for {}: {}", operation, e))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| InfraError::network(format!("Failed to read response body for {}: {}", operation, e)))?;

        tracing::debug!(status, bytes = body.len(), "received response");

        Ok(RawResponse { status, body })
    }
}
