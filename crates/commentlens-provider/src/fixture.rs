//! Static data strategy: built-in sample data or a fixture file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use commentlens_core::{
    SentimentBreakdown, SimilarVideo, TemporalPoint, Theme, VideoAnalysisResult, VideoInfo,
};

use crate::error::ProviderError;
use crate::schema::validate_analysis;

/// Returns the same analysis for every URL.
///
/// With no fixture path the built-in [`sample_analysis`] is used. The
/// optional delay imitates backend processing time.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    fixture_path: Option<PathBuf>,
    delay: Duration,
}

impl StaticProvider {
    #[must_use]
    pub fn new(fixture_path: Option<PathBuf>) -> Self {
        Self {
            fixture_path,
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Produce the static analysis result. `video_url` is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::FixtureIo`] / [`ProviderError::FixtureParse`]
    /// when a configured fixture file cannot be read or parsed, and
    /// [`ProviderError::InvalidPayload`] when its values fail validation.
    pub async fn analyze(&self, video_url: &str) -> Result<VideoAnalysisResult, ProviderError> {
        if !self.delay.is_zero() {
            tracing::debug!(delay = ?self.delay, "simulating analysis latency");
            tokio::time::sleep(self.delay).await;
        }

        let result = match &self.fixture_path {
            Some(path) => load_fixture(path)?,
            None => sample_analysis(),
        };

        tracing::info!(
            video_url,
            fixture = ?self.fixture_path,
            "static analysis ready"
        );
        Ok(result)
    }
}

/// Load a [`VideoAnalysisResult`] from a `.yaml`/`.yml` or JSON file.
///
/// # Errors
///
/// Returns [`ProviderError::FixtureIo`] if the file cannot be read,
/// [`ProviderError::FixtureParse`] if it does not match the result schema,
/// and [`ProviderError::InvalidPayload`] if its values fail validation.
pub fn load_fixture(path: &Path) -> Result<VideoAnalysisResult, ProviderError> {
    let content = std::fs::read_to_string(path).map_err(|e| ProviderError::FixtureIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let parsed: VideoAnalysisResult = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| ProviderError::FixtureParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| ProviderError::FixtureParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
    };

    validate_analysis(&parsed)?;
    Ok(parsed)
}

/// Built-in sample analysis shown when no backend is configured.
#[must_use]
pub fn sample_analysis() -> VideoAnalysisResult {
    let theme = |name: &str, mention_count: u64| Theme {
        name: name.to_string(),
        mention_count,
    };
    let point = |period: &str, sentiment_score: f64| TemporalPoint {
        period_label: period.to_string(),
        sentiment_score,
    };
    let similar = |n: u8, performance_score: f64| SimilarVideo {
        title: format!("Similar Video {n}"),
        url: format!("https://youtube.com/watch{n}"),
        performance_score,
    };

    VideoAnalysisResult {
        video_info: VideoInfo {
            title: "Sample Video".to_string(),
            views: 150_000,
            likes: 12_000,
            comments: 3_500,
        },
        sentiment: SentimentBreakdown {
            positive: 65.0,
            neutral: 20.0,
            negative: 15.0,
        },
        themes: vec![
            theme("Product Quality", 450),
            theme("Customer Service", 320),
            theme("Price", 280),
            theme("Features", 250),
            theme("User Experience", 200),
        ],
        temporal: vec![
            point("2024-01", 0.8),
            point("2024-02", 0.75),
            point("2024-03", 0.85),
            point("2024-04", 0.82),
        ],
        similar_videos: vec![similar(1, 0.92), similar(2, 0.88), similar(3, 0.85)],
        key_themes: None,
    }
}
