//! Response schema of the remote analysis endpoint.
//!
//! Every required key is a non-optional field, so a missing or mistyped key
//! fails deserialization instead of surfacing later as a blank widget.

use serde::Deserialize;

use commentlens_core::{
    KeyThemes, SentimentBreakdown, SimilarVideo, TemporalPoint, Theme, VideoAnalysisResult,
    VideoInfo,
};

use crate::error::ProviderError;

/// Body of a successful `GET <endpoint>?url=<video>` response.
#[derive(Debug, Deserialize)]
pub struct RemoteAnalysis {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub key_themes: RemoteKeyThemes,
    pub suggested_videos: Vec<RemoteSuggestedVideo>,
    #[serde(default)]
    pub video_info: Option<VideoInfo>,
    #[serde(default)]
    pub top_themes: Option<Vec<Theme>>,
    #[serde(default)]
    pub temporal_data: Option<Vec<TemporalPoint>>,
}

#[derive(Debug, Deserialize)]
pub struct RemoteKeyThemes {
    pub engagement: String,
    pub topics: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RemoteSuggestedVideo {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub performance_score: Option<f64>,
}

impl RemoteAnalysis {
    /// Convert the wire shape into the dashboard's result model.
    ///
    /// Without `video_info` the requested URL becomes the title and all
    /// counters are zero. Without `top_themes` each key topic becomes a theme
    /// with zero mentions, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidPayload`] if the converted result fails
    /// [`validate_analysis`].
    pub fn into_result(self, video_url: &str) -> Result<VideoAnalysisResult, ProviderError> {
        let video_info = self.video_info.unwrap_or_else(|| VideoInfo {
            title: video_url.to_string(),
            views: 0,
            likes: 0,
            comments: 0,
        });

        let themes = self.top_themes.unwrap_or_else(|| {
            self.key_themes
                .topics
                .iter()
                .map(|topic| Theme {
                    name: topic.clone(),
                    mention_count: 0,
                })
                .collect()
        });

        let similar_videos = self
            .suggested_videos
            .into_iter()
            .map(|video| SimilarVideo {
                title: video.title,
                url: video.url,
                performance_score: video.performance_score.unwrap_or(0.0),
            })
            .collect();

        let result = VideoAnalysisResult {
            video_info,
            sentiment: SentimentBreakdown {
                positive: self.positive,
                neutral: self.neutral,
                negative: self.negative,
            },
            themes,
            temporal: self.temporal_data.unwrap_or_default(),
            similar_videos,
            key_themes: Some(KeyThemes {
                engagement: self.key_themes.engagement,
                topics: self.key_themes.topics,
                improvements: self.key_themes.improvements,
            }),
        };

        validate_analysis(&result)?;
        Ok(result)
    }
}

/// Reject values no dashboard widget can display.
///
/// See [`VideoAnalysisResult::check_values`]; finite scores outside `[0, 1]`
/// pass because the renderer clamps them.
///
/// # Errors
///
/// Returns [`ProviderError::InvalidPayload`] naming the first offending field.
pub fn validate_analysis(result: &VideoAnalysisResult) -> Result<(), ProviderError> {
    result
        .check_values()
        .map_err(|e| ProviderError::InvalidPayload(e.to_string()))
}
