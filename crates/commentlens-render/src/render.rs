//! The result renderer.

use chrono::{DateTime, Utc};
use commentlens_core::{
    KeyThemes, SentimentBreakdown, SentimentLabel, SimilarVideo, TemporalPoint, Theme,
    VideoAnalysisResult, VideoInfo,
};

use crate::error::RenderError;
use crate::export::{export_file_name, serialize_export, EXPORT_CONTENT_TYPE};
use crate::format;
use crate::sections::{
    Dashboard, ExportArtifact, Metric, MetricsRow, RecommendationEntry, RecommendationList,
    SentimentChart, SentimentSlice, TemporalChart, TemporalChartPoint, ThemeBar, ThemeChart,
};

/// Allowed distance between the sentiment total and 100 before the renderer
/// reports the breakdown as normalized.
const SENTIMENT_TOTAL_TOLERANCE: f64 = 0.5;

const SENTIMENT_HOLE: f64 = 0.3;

/// Render one analysis result into the six dashboard sections.
///
/// `generated_at` stamps the export payload and its filename; passing it in
/// keeps rendering deterministic.
///
/// Out-of-range scores are clamped to `[0, 1]` for display and logged; the
/// export keeps the original values.
///
/// # Errors
///
/// - [`RenderError::NonFiniteValue`] if any float is NaN or infinite.
/// - [`RenderError::NegativeSentiment`] if a sentiment percentage is negative.
/// - [`RenderError::Json`] if the export payload cannot be serialized.
///
/// No partial dashboard is returned on error.
pub fn render(
    result: &VideoAnalysisResult,
    generated_at: DateTime<Utc>,
) -> Result<Dashboard, RenderError> {
    result.check_values()?;

    let dashboard = Dashboard {
        video_title: result.video_info.title.clone(),
        metrics: metrics_row(&result.video_info),
        sentiment: sentiment_chart(&result.sentiment),
        themes: theme_chart(&result.themes, result.key_themes.as_ref()),
        temporal: temporal_chart(&result.temporal),
        recommendations: recommendation_list(&result.similar_videos),
        export: export_artifact(result, generated_at)?,
    };

    tracing::debug!(
        title = %dashboard.video_title,
        file_name = %dashboard.export.file_name,
        "dashboard rendered"
    );
    Ok(dashboard)
}

/// Clamp a nominal `[0, 1]` score, logging when the input was outside.
fn clamp_unit(field: &str, value: f64) -> f64 {
    if (0.0..=1.0).contains(&value) {
        return value;
    }
    let clamped = value.clamp(0.0, 1.0);
    tracing::warn!(field, value, clamped, "score outside [0, 1]; clamped for display");
    clamped
}

pub(crate) fn metrics_row(info: &VideoInfo) -> MetricsRow {
    let engagement_rate = info.engagement_rate();
    if engagement_rate.is_none() {
        tracing::debug!(title = %info.title, "video has no views; engagement rate unavailable");
    }

    MetricsRow {
        metrics: [
            Metric {
                label: "Views",
                value: format::thousands(info.views),
            },
            Metric {
                label: "Likes",
                value: format::thousands(info.likes),
            },
            Metric {
                label: "Comments",
                value: format::thousands(info.comments),
            },
            Metric {
                label: "Engagement Rate",
                value: format::percent(engagement_rate),
            },
        ],
        engagement_rate,
    }
}

fn sentiment_color(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "#2ecc71",
        SentimentLabel::Neutral => "#95a5a6",
        SentimentLabel::Negative => "#e74c3c",
    }
}

pub(crate) fn sentiment_chart(breakdown: &SentimentBreakdown) -> SentimentChart {
    let total = breakdown.total();
    let normalized = (total - 100.0).abs() > SENTIMENT_TOTAL_TOLERANCE;
    if normalized {
        tracing::warn!(
            total,
            "sentiment percentages do not sum to 100; displaying normalized shares"
        );
    }

    let slices = breakdown.entries().map(|(label, value)| SentimentSlice {
        label,
        color: sentiment_color(label),
        value,
        share: if total > 0.0 {
            value / total * 100.0
        } else {
            0.0
        },
    });

    SentimentChart {
        title: "Comment Sentiment Distribution",
        hole: SENTIMENT_HOLE,
        slices,
        normalized,
    }
}

pub(crate) fn theme_chart(themes: &[Theme], highlights: Option<&KeyThemes>) -> ThemeChart {
    let mut bars: Vec<ThemeBar> = themes
        .iter()
        .map(|theme| ThemeBar {
            name: theme.name.clone(),
            mentions: theme.mention_count,
        })
        .collect();
    bars.sort_by_key(|bar| bar.mentions);

    ThemeChart {
        title: "Top Comment Themes",
        bars,
        highlights: highlights.cloned(),
    }
}

pub(crate) fn temporal_chart(points: &[TemporalPoint]) -> TemporalChart {
    let points = points
        .iter()
        .map(|point| TemporalChartPoint {
            label: point.period_label.clone(),
            score: clamp_unit(
                &format!("sentiment_score for '{}'", point.period_label),
                point.sentiment_score,
            ),
        })
        .collect();

    TemporalChart {
        title: "Sentiment Trend Over Time",
        points,
        y_domain: (0.0, 1.0),
    }
}

pub(crate) fn recommendation_list(videos: &[SimilarVideo]) -> RecommendationList {
    let entries = videos
        .iter()
        .map(|video| {
            let score_label = format::score(video.performance_score);
            RecommendationEntry {
                heading: format!(
                    "\u{1f4f9} {} (Performance Score: {score_label})",
                    video.title
                ),
                title: video.title.clone(),
                url: video.url.clone(),
                progress: clamp_unit(
                    &format!("performance_score for '{}'", video.title),
                    video.performance_score,
                ),
                score_label,
            }
        })
        .collect();

    RecommendationList {
        title: "Similar High-Performing Videos",
        entries,
    }
}

fn export_artifact(
    result: &VideoAnalysisResult,
    generated_at: DateTime<Utc>,
) -> Result<ExportArtifact, RenderError> {
    Ok(ExportArtifact {
        label: "Download Analysis Report (JSON)",
        file_name: export_file_name(generated_at),
        content_type: EXPORT_CONTENT_TYPE,
        generated_at,
        body: serialize_export(result, generated_at)?,
    })
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
