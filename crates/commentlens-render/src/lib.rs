//! Result rendering pipeline for the commentlens dashboard.
//!
//! [`render`] turns one [`VideoAnalysisResult`](commentlens_core::VideoAnalysisResult)
//! and a generation timestamp into a [`Dashboard`]: six display sections in a
//! fixed order (metrics, sentiment chart, theme chart, temporal chart,
//! recommendations, export). Rendering is pure; the same input and timestamp
//! always produce the same dashboard. [`export`] holds the lossless JSON
//! export format and [`present`] draws a dashboard as terminal text or markdown.

pub mod error;
pub mod export;
pub mod format;
pub mod present;
pub mod render;
pub mod sections;

pub use error::RenderError;
pub use export::{
    deserialize_export, export_file_name, serialize_export, write_export, EXPORT_CONTENT_TYPE,
};
pub use present::{to_markdown, to_text, write_markdown, write_text};
pub use render::render;
pub use sections::{
    Dashboard, ExportArtifact, Metric, MetricsRow, RecommendationEntry, RecommendationList,
    Section, SentimentChart, SentimentSlice, TemporalChart, TemporalChartPoint, ThemeBar,
    ThemeChart,
};
