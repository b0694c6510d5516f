//! HTTP transport for the music API.
//!
//! One `reqwest::Client` with a fixed base URL and a JSON content type.
//! Every response goes through [`ApiClient::check`]: 5xx answers are logged
//! with their body before the failure is returned, 4xx answers carry the
//! server's `detail` string. No retries, no auth.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::{extract_detail, ClientError};
use crate::models::{ApiInfo, HealthStatus};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        Self::with_base_url(&config.base_url)
    }

    /// Build a client for `base_url` (e.g. `http://127.0.0.1:8000/api`).
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/usuarios/`.
    pub fn url(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self.send(self.http.get(self.url(path))).await?;
        Self::parse(resp).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let resp = self
            .send(self.http.get(self.url(path)).query(query))
            .await?;
        Self::parse(resp).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .send(self.http.post(self.url(path)).json(body))
            .await?;
        Self::parse(resp).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .send(self.http.put(self.url(path)).json(body))
            .await?;
        Self::parse(resp).await
    }

    /// DELETE answers 204 with no body; any 2xx counts as success.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    /// `GET /api` on the configured base.
    pub async fn api_info(&self) -> Result<ApiInfo, ClientError> {
        self.get("").await
    }

    /// `GET /health` on the origin, outside the `/api` prefix.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = url::Url::parse(&self.base_url)?.join("/health")?;
        let resp = self.send(self.http.get(url)).await?;
        Self::parse(resp).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let resp = request.send().await?;
        debug!(url = %resp.url(), status = %resp.status(), "api response");
        Self::check(resp).await
    }

    async fn check(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let url = resp.url().to_string();
        let body = resp.text().await.unwrap_or_default();

        if status.is_server_error() {
            error!(status = %status, url = %url, body = %body, "server error");
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Err(ClientError::Rejected {
            status: status.as_u16(),
            detail: extract_detail(&body),
        })
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        resp.json().await.map_err(|e| {
            if e.is_decode() {
                ClientError::Decode(e)
            } else {
                ClientError::Network(e)
            }
        })
    }
}
