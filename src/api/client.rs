use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tokio::time::timeout;

use crate::api::error::FetchError;
use crate::api::types::{RawSearchResponse, SearchPage};
use crate::api::ImageSource;
use crate::config::{ApiConfig, CredentialStatus, PER_PAGE_RANGE};

/// Request and connect timeouts for the search endpoint.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub request: Duration,
}

impl From<&ApiConfig> for TimeoutConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            connect: Duration::from_secs(api.connect_timeout_seconds as u64),
            request: Duration::from_secs(api.timeout_seconds as u64),
        }
    }
}

/// `ImageSource` backed by the Pixabay REST API.
pub struct PixabayClient {
    client: Client,
    api: ApiConfig,
    timeouts: TimeoutConfig,
}

impl PixabayClient {
    pub fn new(api: ApiConfig) -> Result<Self, FetchError> {
        let timeouts = TimeoutConfig::from(&api);
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .user_agent(concat!("pixseek/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                FetchError::InvalidRequest(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api,
            timeouts,
        })
    }

    /// Build the request URL. The key is part of the query string, so the
    /// returned URL must never be logged.
    fn search_url(&self, query: &str, page: u32, per_page: u32) -> Result<Url, FetchError> {
        let key = match self.api.resolve_credential() {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                return Err(FetchError::MissingApiKey { reason })
            }
        };

        let per_page = per_page.clamp(*PER_PAGE_RANGE.start(), *PER_PAGE_RANGE.end());
        let page = page.max(1);
        Url::parse_with_params(
            &self.api.base_url,
            &[
                ("key", key.expose().to_string()),
                ("q", query.to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
                ("image_type", self.api.image_type.clone()),
                ("orientation", self.api.orientation.clone()),
                ("safesearch", self.api.safesearch.to_string()),
            ],
        )
        .map_err(|e| {
            FetchError::InvalidRequest(format!("Bad base URL '{}': {}", self.api.base_url, e))
        })
    }

    async fn do_fetch(&self, url: Url) -> Result<SearchPage, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Connection { source: e })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Connection { source: e })?;

        if !status.is_success() {
            return Err(FetchError::status(status.as_u16(), &body));
        }

        let raw: RawSearchResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(SearchPage::from(raw))
    }
}

#[async_trait]
impl ImageSource for PixabayClient {
    async fn fetch_images(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchPage, FetchError> {
        let url = self.search_url(query, page, per_page)?;
        tracing::debug!(query, page, per_page, "fetching search page");

        let result = match timeout(self.timeouts.request, self.do_fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                duration: self.timeouts.request.as_secs(),
            }),
        };

        match &result {
            Ok(page_data) => tracing::debug!(
                query,
                page,
                hits = page_data.hits.len(),
                total_hits = page_data.total_hits,
                "search page received"
            ),
            Err(err) => tracing::warn!(
                query,
                page,
                error_type = err.error_type(),
                error = %err,
                "search request failed"
            ),
        }
        result
    }
}
