use std::{fmt::Debug, sync::Arc, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use clashtrack_shared::{
    CocApiError, CocApiResponse, QueryParams, SeasonInfo, traits::api::ApiRequest,
};
use serde::{Deserialize, de::DeserializeOwned};

use super::metrics::RequestMetrics;

pub const DEFAULT_BASE_URL: &str = "https://api.clashofclans.com/v1";

/// Settings used to build a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API token sent as bearer credential.
    pub token: String,
    pub base_url: String,
    /// Per request timeout, none by default.
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Debug)]
pub struct ApiClientBase {
    client: reqwest::Client,
    /// Clash of Clans API token
    token: String,
    base_url: String,
    timeout: Option<Duration>,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClientBase {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: options.token,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            timeout: options.timeout,
            metrics: RequestMetrics::new("coc"),
        }
    }

    pub async fn request(&self, url: String) -> CocApiResponse<Bytes> {
        self.metrics.inc();
        tracing::debug!("[COC::CLIENT] GET {}", url);

        let mut req = self.client.get(url).bearer_auth(&self.token);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let res = req.send().await.map_err(CocApiError::Reqwest)?;
        let status = res.status();
        if status.is_success() {
            return res.bytes().await.map_err(CocApiError::Reqwest);
        }

        // The error body is informative only, a broken one still yields the status.
        let body = res.bytes().await.unwrap_or_default();
        let detail: ClientErrorDto = serde_json::from_slice(&body).unwrap_or_default();
        tracing::warn!(
            "[COC::CLIENT] request failed with {}: {:?}",
            status,
            detail.reason
        );

        Err(CocApiError::Status {
            status: status.as_u16(),
            reason: detail
                .reason
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string()),
            message: detail.message.unwrap_or_default(),
        })
    }
}

/// Error body returned by the API alongside non-2xx statuses.
#[derive(Deserialize, Debug, Default)]
struct ClientErrorDto {
    reason: Option<String>,
    message: Option<String>,
}

/// Client for the Clash of Clans API.
///
/// Cheap to clone, clones share the same connection pool and metrics.
#[derive(Debug, Clone)]
pub struct Client(Arc<ApiClientBase>);

impl Client {
    pub fn new(options: ClientOptions) -> Self {
        Self(Arc::new(ApiClientBase::new(options)))
    }

    /// Client against the official API with no timeout.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(ClientOptions::new(token))
    }

    pub fn metrics(&self) -> &Arc<RequestMetrics> {
        &self.0.metrics
    }

    /// Full URL of a resource, the query part is only added when not empty.
    pub fn url<Q: QueryParams + ?Sized>(&self, path: &str, options: &Q) -> String {
        build_url(&self.0.base_url, path, options)
    }

    /// GET a resource and decode it as any deserializable type.
    pub async fn fetch<T, Q>(&self, path: &str, options: &Q) -> CocApiResponse<T>
    where
        T: DeserializeOwned,
        Q: QueryParams + ?Sized,
    {
        let raw = self.request(self.url(path, options)).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// GET a resource and return the raw JSON body.
    pub async fn get<Q: QueryParams + ?Sized>(
        &self,
        path: &str,
        options: &Q,
    ) -> CocApiResponse<serde_json::Value> {
        self.fetch(path, options).await
    }

    /// Current in-game season window. Does not hit the network.
    pub fn season_info(&self) -> SeasonInfo {
        SeasonInfo::current()
    }
}

#[async_trait]
impl ApiRequest for Client {
    async fn request(&self, url: String) -> CocApiResponse<Bytes> {
        self.0.request(url).await
    }
}

pub fn build_url<Q: QueryParams + ?Sized>(base_url: &str, path: &str, options: &Q) -> String {
    let query = options.to_query_string();
    if query.is_empty() {
        format!("{}/{}", base_url, path)
    } else {
        format!("{}/{}?{}", base_url, path, query)
    }
}
