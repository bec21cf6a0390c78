//! Display section specs produced by [`render`](crate::render).
//!
//! Sections describe what to draw, not how. A page UI could map them onto
//! chart widgets; [`present`](crate::present) maps them onto terminal text.

use chrono::{DateTime, Utc};
use commentlens_core::{KeyThemes, SentimentLabel};

/// A labeled value in the metrics row.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// Views, likes, comments, and engagement rate, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRow {
    pub metrics: [Metric; 4],
    /// Unformatted engagement rate; `None` when the video has no views.
    pub engagement_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentSlice {
    pub label: SentimentLabel,
    pub color: &'static str,
    /// Percentage as supplied by the provider.
    pub value: f64,
    /// Percentage of the three-slice total, so shares always sum to 100
    /// when the total is positive.
    pub share: f64,
}

/// Donut chart of the sentiment breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentChart {
    pub title: &'static str,
    pub hole: f64,
    /// Always positive, neutral, negative.
    pub slices: [SentimentSlice; 3],
    /// `true` when the supplied percentages did not add up to 100.
    pub normalized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeBar {
    pub name: String,
    pub mentions: u64,
}

/// Horizontal bar ranking. Bars run from fewest to most mentions.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeChart {
    pub title: &'static str,
    pub bars: Vec<ThemeBar>,
    pub highlights: Option<KeyThemes>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemporalChartPoint {
    pub label: String,
    /// Score clamped to the y-axis domain.
    pub score: f64,
}

/// Line series over time with a fixed y-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalChart {
    pub title: &'static str,
    pub points: Vec<TemporalChartPoint>,
    pub y_domain: (f64, f64),
}

/// One collapsible entry of the recommendation list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationEntry {
    /// Collapsed header, e.g. `📹 Similar Video 1 (Performance Score: 0.92)`.
    pub heading: String,
    pub title: String,
    pub url: String,
    pub score_label: String,
    /// Progress bar fill in `[0, 1]`.
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationList {
    pub title: &'static str,
    pub entries: Vec<RecommendationEntry>,
}

/// The download button: serialized report plus its file metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub label: &'static str,
    pub file_name: String,
    pub content_type: &'static str,
    pub generated_at: DateTime<Utc>,
    pub body: Vec<u8>,
}

/// A rendered dashboard. Build one with [`render`](crate::render).
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub video_title: String,
    pub metrics: MetricsRow,
    pub sentiment: SentimentChart,
    pub themes: ThemeChart,
    pub temporal: TemporalChart,
    pub recommendations: RecommendationList,
    pub export: ExportArtifact,
}

/// Borrowed view of one dashboard section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section<'a> {
    Metrics(&'a MetricsRow),
    Sentiment(&'a SentimentChart),
    Themes(&'a ThemeChart),
    Temporal(&'a TemporalChart),
    Recommendations(&'a RecommendationList),
    Export(&'a ExportArtifact),
}

impl Dashboard {
    /// All sections in display order.
    #[must_use]
    pub fn sections(&self) -> [Section<'_>; 6] {
        [
            Section::Metrics(&self.metrics),
            Section::Sentiment(&self.sentiment),
            Section::Themes(&self.themes),
            Section::Temporal(&self.temporal),
            Section::Recommendations(&self.recommendations),
            Section::Export(&self.export),
        ]
    }
}

impl Section<'_> {
    /// Heading shown above the section.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Metrics(_) => "Video Overview",
            Section::Sentiment(chart) => chart.title,
            Section::Themes(chart) => chart.title,
            Section::Temporal(_) => "Sentiment Trend Analysis",
            Section::Recommendations(list) => list.title,
            Section::Export(_) => "Export Analysis",
        }
    }
}
