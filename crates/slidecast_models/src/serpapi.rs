//! SerpApi image search client.

use crate::http::{check_status, invalid_response, request_failed};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use slidecast_error::{ProviderError, SlidecastResult};
use slidecast_interface::{ImageHit, ImageSearch};
use slidecast_rate_limit::{ImageSearchConfig, api_key_from_env};
use tracing::{debug, instrument};

/// One entry of `images_results`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    /// Full-size image location
    #[serde(default)]
    pub original: Option<String>,
    /// Page title
    #[serde(default)]
    pub title: Option<String>,
    /// Thumbnail location
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Search response body; only the image results are read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked image results
    #[serde(default)]
    pub images_results: Vec<ImageResult>,
}

impl SearchResponse {
    /// Hits with a full-size URL, in rank order.
    pub fn into_hits(self) -> Vec<ImageHit> {
        self.images_results
            .into_iter()
            .filter_map(|result| {
                result.original.map(|original| ImageHit {
                    original,
                    title: result.title,
                    thumbnail: result.thumbnail,
                })
            })
            .collect()
    }
}

/// Client for `GET {base_url}/search.json`.
#[derive(Debug, Clone)]
pub struct SerpApiClient {
    client: reqwest::Client,
    api_key: String,
    config: ImageSearchConfig,
}

impl SerpApiClient {
    /// Create a client with an explicit API key.
    #[instrument(skip(api_key, config), fields(engine = %config.engine))]
    pub fn new(api_key: impl Into<String>, config: ImageSearchConfig) -> Self {
        debug!("Creating image search client");
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            config,
        }
    }

    /// Create a client reading the key from `config.api_key_env`.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when the variable is unset.
    pub fn from_config(config: ImageSearchConfig) -> SlidecastResult<Self> {
        let api_key = api_key_from_env(&config.api_key_env)?;
        Ok(Self::new(api_key, config))
    }

    /// Settings in use.
    pub fn config(&self) -> &ImageSearchConfig {
        &self.config
    }

    /// Build the HTTP request without sending it.
    ///
    /// # Errors
    ///
    /// Returns `ApiRequest` if the URL is invalid.
    pub fn build_request(&self, query: &str) -> Result<reqwest::Request, ProviderError> {
        let url = format!("{}/search.json", self.config.base_url.trim_end_matches('/'));
        self.client
            .get(&url)
            .query(&[
                ("engine", self.config.engine.as_str()),
                ("q", query),
                ("location", self.config.location.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .build()
            .map_err(request_failed)
    }
}

#[async_trait]
impl ImageSearch for SerpApiClient {
    #[instrument(skip(self), fields(provider = "serpapi"))]
    async fn search(&self, query: &str) -> SlidecastResult<Vec<ImageHit>> {
        let request = self.build_request(query)?;
        let response = self.client.execute(request).await.map_err(request_failed)?;
        let response = check_status(response).await?;
        let body: SearchResponse = response.json().await.map_err(invalid_response)?;

        let hits = body.into_hits();
        debug!(hits = hits.len(), "Image search complete");
        Ok(hits)
    }
}
