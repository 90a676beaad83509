use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::{
    error::{ProcessError, Result},
    types::{ProcessedVideo, SearchQuery, VideoRecord},
};

/// Where the processing API listens unless [`API_URL_ENV_VAR`] says otherwise.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV_VAR: &str = "VIDSCRIBE_API_URL";

/// Client for the video processing API.
///
/// The API is treated as a black box: it downloads, transcribes and
/// summarizes on its side; this client only submits URLs and reads results.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ProcessRequest<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    videos: Vec<VideoRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from [`API_URL_ENV_VAR`], falling back to
    /// [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a video URL for processing and wait for the transcript and
    /// summary. An empty URL is rejected locally, before any network call.
    pub async fn process(&self, url: &str) -> Result<ProcessedVideo> {
        if url.trim().is_empty() {
            return Err(ProcessError::EmptyUrl);
        }

        info!(url, "submitting video for processing");
        let response = self
            .http
            .post(format!("{}/api/process", self.base_url))
            .json(&ProcessRequest { url })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        parse_body(response).await
    }

    /// Look up an already processed video by its original URL.
    pub async fn fetch(&self, video_url: &str) -> Result<VideoRecord> {
        let encoded: String = url::form_urlencoded::byte_serialize(video_url.as_bytes()).collect();
        debug!(video_url, "fetching stored video");
        let response = self
            .http
            .get(format!("{}/api/video/{}", self.base_url, encoded))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        parse_body(response).await
    }

    /// Search processed videos by keyword, platform and processing window.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<VideoRecord>> {
        debug!(keyword = ?query.keyword, "searching processed videos");
        let response = self
            .http
            .post(format!("{}/api/search", self.base_url))
            .json(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        let parsed: SearchResponse = parse_body(response).await?;
        Ok(parsed.videos)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self
            .http
            .get(format!("{}/healthz", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        parse_body(response).await
    }
}

/// Turn a non-2xx response into `Rejected`, reading the body
/// opportunistically for a structured `{"detail": ...}` field.
async fn rejection(response: reqwest::Response) -> ProcessError {
    let status = response.status();
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    ProcessError::Rejected { status, detail }
}

async fn parse_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(ProcessError::MalformedResponse)
}
