//! テスト用の偽トランスポート
//!
//! 送信されたリクエストを記録し、キューに積んだレスポンスを順に返します。
//! キューが空のときは `200 {}` を返します。

use crate::api::transport::{ApiResult, RawResponse, Request, Transport};
use async_trait::async_trait;
use reqwest::Method;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

const FAKE_BASE_URL: &str = "https://fake.invalid/";

#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    responses: Arc<Mutex<VecDeque<RawResponse>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: RawResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// 送信されたリクエストの相対パス
    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.path.clone())
            .collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<Request> {
        Ok(Request {
            method,
            path: path.to_string(),
            url: format!("{}{}", FAKE_BASE_URL, path),
            body,
        })
    }

    async fn execute(&self, request: Request) -> ApiResult<RawResponse> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| RawResponse::new(200, "{}")))
    }
}
