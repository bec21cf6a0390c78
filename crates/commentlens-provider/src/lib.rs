//! Data providers for the commentlens dashboard.
//!
//! A provider turns a video URL into a [`VideoAnalysisResult`]. Two strategies
//! exist: [`StaticProvider`] returns built-in sample data (or a fixture file),
//! and [`RemoteClient`] issues a single `GET <endpoint>?url=<video>` and parses
//! the JSON body through a strict schema. Any failure ends the request; there
//! are no retries.

pub mod error;
pub mod fixture;
pub mod remote;
pub mod schema;

use std::time::Duration;

use commentlens_core::{AppConfig, ProviderKind, VideoAnalysisResult};

pub use error::ProviderError;
pub use fixture::{sample_analysis, StaticProvider};
pub use remote::RemoteClient;
pub use schema::RemoteAnalysis;

/// The configured data source for one analysis request.
pub enum DataProvider {
    Static(StaticProvider),
    Remote(RemoteClient),
}

impl DataProvider {
    /// Build the provider selected by `config.provider`.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::InvalidEndpoint`] if the remote provider is selected
    ///   without an endpoint, or the endpoint is not a valid URL.
    /// - [`ProviderError::Http`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        match config.provider {
            ProviderKind::Static => {
                let provider = StaticProvider::new(config.fixture_path.clone())
                    .with_delay(Duration::from_millis(config.simulated_delay_ms));
                Ok(Self::Static(provider))
            }
            ProviderKind::Remote => {
                let endpoint =
                    config
                        .endpoint
                        .as_deref()
                        .ok_or_else(|| ProviderError::InvalidEndpoint {
                            endpoint: String::new(),
                            reason: "no endpoint configured for the remote provider".to_string(),
                        })?;
                let client =
                    RemoteClient::new(endpoint, config.request_timeout_secs, &config.user_agent)?;
                Ok(Self::Remote(client))
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Static(_) => ProviderKind::Static,
            Self::Remote(_) => ProviderKind::Remote,
        }
    }

    /// Obtain the analysis result for `video_url`.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's [`ProviderError`]; see
    /// [`StaticProvider::analyze`] and [`RemoteClient::fetch_analysis`].
    pub async fn analyze(&self, video_url: &str) -> Result<VideoAnalysisResult, ProviderError> {
        match self {
            Self::Static(provider) => provider.analyze(video_url).await,
            Self::Remote(client) => client.fetch_analysis(video_url).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use commentlens_core::Environment;

    use super::*;

    fn config(provider: ProviderKind, endpoint: Option<&str>) -> AppConfig {
        AppConfig {
            env: Environment::Test,
            log_level: "info".to_string(),
            provider,
            endpoint: endpoint.map(ToString::to_string),
            request_timeout_secs: 5,
            user_agent: "commentlens-test".to_string(),
            fixture_path: None,
            simulated_delay_ms: 0,
            export_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn from_config_builds_static_provider() {
        let provider = DataProvider::from_config(&config(ProviderKind::Static, None)).unwrap();
        assert_eq!(provider.kind(), ProviderKind::Static);
    }

    #[test]
    fn from_config_builds_remote_provider() {
        let provider = DataProvider::from_config(&config(
            ProviderKind::Remote,
            Some("http://localhost:8000/analyze"),
        ))
        .unwrap();
        assert_eq!(provider.kind(), ProviderKind::Remote);
    }

    #[test]
    fn from_config_remote_without_endpoint_fails() {
        let result = DataProvider::from_config(&config(ProviderKind::Remote, None));
        assert!(matches!(result, Err(ProviderError::InvalidEndpoint { .. })));
    }

    #[tokio::test]
    async fn static_provider_returns_sample() {
        let provider = DataProvider::from_config(&config(ProviderKind::Static, None)).unwrap();
        let result = provider
            .analyze("https://youtu.be/abc123")
            .await
            .expect("static analysis");
        assert_eq!(result, sample_analysis());
    }
}
