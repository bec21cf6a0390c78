//! Shared data model, input validation, and configuration for commentlens.

pub mod analysis;
pub mod app_config;
pub mod config;
pub mod input;

use thiserror::Error;

pub use analysis::{
    InvalidValue, KeyThemes, SentimentBreakdown, SentimentLabel, SimilarVideo, TemporalPoint,
    Theme, VideoAnalysisResult, VideoInfo,
};
pub use app_config::{AppConfig, Environment, ProviderKind};
pub use config::{load_app_config, load_app_config_from_env};
pub use input::require_video_url;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The submitted video URL was empty or whitespace only.
    #[error("video URL is required")]
    InputMissing,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
