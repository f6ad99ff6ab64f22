//! HTTP Transport
//!
//! JSON request/response seam under the API client. Paths are relative to
//! the configured base URL.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use crate::config::ShopConfig;
use crate::error::{ApiError, ApiResult};

/// Raw JSON transport. Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, token: Option<&str>) -> ApiResult<Value>;

    async fn post(&self, path: &str, token: Option<&str>, body: &Value) -> ApiResult<Value>;

    async fn delete(&self, path: &str, token: Option<&str>) -> ApiResult<()>;
}

/// `reqwest`-backed transport (browser fetch on wasm32)
pub struct HttpTransport {
    client: Client,
    config: ShopConfig,
}

impl HttpTransport {
    pub fn new(config: ShopConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.normalized(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_url
    }

    fn prepare(&self, request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        let request = match token {
            Some(token) => request.header("Authorization", format!("Token {}", token)),
            None => request,
        };
        // Session cookies identify anonymous carts
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, token: Option<&str>) -> ApiResult<Value> {
        let url = self.config.endpoint(path);
        debug!("GET {}", url);
        let response = self.prepare(self.client.get(&url), token).send().await?;
        read_json(response).await
    }

    async fn post(&self, path: &str, token: Option<&str>, body: &Value) -> ApiResult<Value> {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);
        let response = self
            .prepare(self.client.post(&url), token)
            .json(body)
            .send()
            .await?;
        read_json(response).await
    }

    async fn delete(&self, path: &str, token: Option<&str>) -> ApiResult<()> {
        let url = self.config.endpoint(path);
        debug!("DELETE {}", url);
        let response = self.prepare(self.client.delete(&url), token).send().await?;
        read_json(response).await.map(|_| ())
    }
}

/// Non-2xx becomes `Status`; an empty body (204, logout) reads as `null`
async fn read_json(response: Response) -> ApiResult<Value> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}
