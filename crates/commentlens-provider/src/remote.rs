//! HTTP client for the remote analysis endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use commentlens_core::VideoAnalysisResult;

use crate::error::ProviderError;
use crate::schema::RemoteAnalysis;

/// Client for a sentiment-analysis backend exposing `GET <endpoint>?url=<video>`.
///
/// One request per analysis, no authentication, no retries. Anything other
/// than `200 OK` with a body matching [`RemoteAnalysis`] is an error.
pub struct RemoteClient {
    client: Client,
    endpoint: Url,
}

impl RemoteClient {
    /// Creates a client for `endpoint` with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute `http`/`https` URL, or [`ProviderError::Http`] if the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ProviderError> {
        let parsed = Url::parse(endpoint.trim()).map_err(|e| ProviderError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProviderError::InvalidEndpoint {
                endpoint: endpoint.to_owned(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: parsed,
        })
    }

    /// Fetches and validates the analysis for `video_url`.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Http`] on network failure or timeout.
    /// - [`ProviderError::UnexpectedStatus`] for any status other than `200`.
    /// - [`ProviderError::Deserialize`] if the body is not JSON or is missing
    ///   or mistypes a required key.
    /// - [`ProviderError::InvalidPayload`] if the values fail validation.
    pub async fn fetch_analysis(
        &self,
        video_url: &str,
    ) -> Result<VideoAnalysisResult, ProviderError> {
        let url = self.build_url(video_url);
        tracing::debug!(%url, "requesting remote analysis");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), %url, "analysis endpoint rejected request");
            return Err(ProviderError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let remote: RemoteAnalysis =
            serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
                context: format!("analysis of {video_url}"),
                source: e,
            })?;

        let result = remote.into_result(video_url)?;
        tracing::info!(
            video_url,
            themes = result.themes.len(),
            similar_videos = result.similar_videos.len(),
            "remote analysis received"
        );
        Ok(result)
    }

    /// Appends `url=<video_url>` to the configured endpoint, keeping any
    /// query parameters the endpoint already carries.
    fn build_url(&self, video_url: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("url", video_url);
        url
    }
}
