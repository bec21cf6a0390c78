//! Analysis result model shared by providers and the renderer.
//!
//! Field names on the wire follow the dashboard report format: `video_info`,
//! `sentiment_analysis`, `top_themes`, `temporal_data`, `similar_videos`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Headline counters for the analyzed video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
}

impl VideoInfo {
    /// `(likes + comments) / views * 100`, rounded to two decimal places.
    ///
    /// Rounding goes through fixed-precision formatting, which rounds the
    /// exact binary value with ties to even, so `1 / 800` gives `0.12`.
    /// Returns `None` when `views` is zero.
    #[must_use]
    pub fn engagement_rate(&self) -> Option<f64> {
        if self.views == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = self.likes.saturating_add(self.comments) as f64 / self.views as f64 * 100.0;
        format!("{rate:.2}").parse().ok()
    }
}

/// One of the three fixed sentiment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Display order used everywhere a breakdown is listed.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage of comments per sentiment label.
///
/// The three values are not guaranteed to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentBreakdown {
    #[must_use]
    pub fn get(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// Label/value pairs in positive, neutral, negative order.
    #[must_use]
    pub fn entries(&self) -> [(SentimentLabel, f64); 3] {
        SentimentLabel::ALL.map(|label| (label, self.get(label)))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }
}

/// A recurring comment topic and how often it was mentioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(rename = "theme")]
    pub name: String,
    #[serde(rename = "mentions")]
    pub mention_count: u64,
}

/// Average sentiment for one period, e.g. `"2024-01"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalPoint {
    #[serde(rename = "date")]
    pub period_label: String,
    pub sentiment_score: f64,
}

/// A recommended video with a normalized `[0, 1]` performance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarVideo {
    pub title: String,
    pub url: String,
    pub performance_score: f64,
}

/// Qualitative highlights returned by the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyThemes {
    pub engagement: String,
    pub topics: Vec<String>,
    pub improvements: Vec<String>,
}

/// Everything the dashboard renders for one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoAnalysisResult {
    pub video_info: VideoInfo,
    #[serde(rename = "sentiment_analysis")]
    pub sentiment: SentimentBreakdown,
    #[serde(rename = "top_themes")]
    pub themes: Vec<Theme>,
    #[serde(rename = "temporal_data")]
    pub temporal: Vec<TemporalPoint>,
    pub similar_videos: Vec<SimilarVideo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_themes: Option<KeyThemes>,
}

/// A value in an analysis result that no dashboard widget can display.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidValue {
    #[error("{field} is not a finite number: {value}")]
    NonFinite { field: String, value: f64 },

    #[error("sentiment '{label}' is negative: {value}")]
    NegativeSentiment { label: SentimentLabel, value: f64 },
}

impl VideoAnalysisResult {
    /// Check every float the dashboard displays.
    ///
    /// Sentiment percentages must be finite and non-negative, and every score
    /// must be finite. Finite scores outside `[0, 1]` pass; display clamps
    /// them.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidValue`] found, checking sentiment, then the
    /// temporal series, then similar videos.
    pub fn check_values(&self) -> Result<(), InvalidValue> {
        for (label, value) in self.sentiment.entries() {
            require_finite(|| format!("sentiment '{label}'"), value)?;
            if value < 0.0 {
                return Err(InvalidValue::NegativeSentiment { label, value });
            }
        }
        for point in &self.temporal {
            require_finite(
                || format!("sentiment_score for '{}'", point.period_label),
                point.sentiment_score,
            )?;
        }
        for video in &self.similar_videos {
            require_finite(
                || format!("performance_score for '{}'", video.title),
                video.performance_score,
            )?;
        }
        Ok(())
    }
}

fn require_finite(field: impl FnOnce() -> String, value: f64) -> Result<(), InvalidValue> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidValue::NonFinite {
            field: field(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(views: u64, likes: u64, comments: u64) -> VideoInfo {
        VideoInfo {
            title: "Sample Video".to_string(),
            views,
            likes,
            comments,
        }
    }

    #[test]
    fn engagement_rate_rounds_to_two_decimals() {
        assert_eq!(info(150_000, 12_000, 3_500).engagement_rate(), Some(10.33));
    }

    #[test]
    fn engagement_rate_rounds_the_exact_value() {
        assert_eq!(info(800, 1, 0).engagement_rate(), Some(0.12));
        assert_eq!(info(800, 3, 2).engagement_rate(), Some(0.62));
        assert_eq!(info(40_000, 1_000, 70).engagement_rate(), Some(2.67));
    }

    #[test]
    fn engagement_rate_is_none_without_views() {
        assert_eq!(info(0, 5, 5).engagement_rate(), None);
    }

    #[test]
    fn engagement_rate_can_exceed_one_hundred() {
        assert_eq!(info(10, 20, 5).engagement_rate(), Some(250.0));
    }

    #[test]
    fn breakdown_entries_follow_fixed_order() {
        let breakdown: SentimentBreakdown =
            serde_json::from_str(r#"{"negative": 15, "neutral": 20, "positive": 65}"#).unwrap();
        let labels: Vec<SentimentLabel> = breakdown.entries().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, SentimentLabel::ALL.to_vec());
        assert!((breakdown.total() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn breakdown_missing_label_fails_to_parse() {
        let result: Result<SentimentBreakdown, _> =
            serde_json::from_str(r#"{"positive": 65, "neutral": 20}"#);
        assert!(result.is_err());
    }

    fn valid_result() -> VideoAnalysisResult {
        VideoAnalysisResult {
            video_info: info(1, 0, 0),
            sentiment: SentimentBreakdown {
                positive: 65.0,
                neutral: 20.0,
                negative: 15.0,
            },
            themes: vec![],
            temporal: vec![TemporalPoint {
                period_label: "2024-01".to_string(),
                sentiment_score: 1.3,
            }],
            similar_videos: vec![SimilarVideo {
                title: "Similar Video 1".to_string(),
                url: "https://youtube.com/watch1".to_string(),
                performance_score: -0.2,
            }],
            key_themes: None,
        }
    }

    #[test]
    fn check_values_accepts_out_of_range_scores() {
        assert_eq!(valid_result().check_values(), Ok(()));
    }

    #[test]
    fn check_values_rejects_negative_sentiment() {
        let mut result = valid_result();
        result.sentiment.neutral = -1.0;
        assert_eq!(
            result.check_values(),
            Err(InvalidValue::NegativeSentiment {
                label: SentimentLabel::Neutral,
                value: -1.0
            })
        );
    }

    #[test]
    fn check_values_names_non_finite_field() {
        let mut result = valid_result();
        result.similar_videos[0].performance_score = f64::INFINITY;
        match result.check_values() {
            Err(InvalidValue::NonFinite { field, .. }) => {
                assert_eq!(field, "performance_score for 'Similar Video 1'");
            }
            other => panic!("expected NonFinite, got: {other:?}"),
        }

        let mut result = valid_result();
        result.sentiment.positive = f64::NAN;
        assert!(matches!(
            result.check_values(),
            Err(InvalidValue::NonFinite { .. })
        ));
    }

    #[test]
    fn result_uses_report_field_names() {
        let result = VideoAnalysisResult {
            video_info: info(1, 0, 0),
            sentiment: SentimentBreakdown {
                positive: 1.0,
                neutral: 0.0,
                negative: 0.0,
            },
            themes: vec![Theme {
                name: "Price".to_string(),
                mention_count: 280,
            }],
            temporal: vec![TemporalPoint {
                period_label: "2024-01".to_string(),
                sentiment_score: 0.8,
            }],
            similar_videos: vec![],
            key_themes: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["top_themes"][0]["theme"], "Price");
        assert_eq!(value["top_themes"][0]["mentions"], 280);
        assert_eq!(value["temporal_data"][0]["date"], "2024-01");
        assert!(value.get("sentiment_analysis").is_some());
        assert!(value.get("key_themes").is_none());
    }
}
