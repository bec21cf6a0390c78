//! The `analyze` command: one request-render cycle.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use commentlens_core::{require_video_url, AppConfig, ProviderKind};
use commentlens_provider::DataProvider;
use commentlens_render::{render, to_markdown, to_text, write_export, Dashboard};

use crate::OutputFormat;

/// Flags given to `analyze`, before they are merged into the config.
#[derive(Debug)]
pub(crate) struct AnalyzeRequest {
    pub url: String,
    pub provider: Option<ProviderKind>,
    pub endpoint: Option<String>,
    pub fixture: Option<PathBuf>,
    pub format: OutputFormat,
    pub export: bool,
    pub export_dir: Option<PathBuf>,
}

/// Apply command-line overrides on top of the env-derived config.
pub(crate) fn apply_overrides(config: &AppConfig, request: &AnalyzeRequest) -> AppConfig {
    let mut config = config.clone();
    if let Some(provider) = request.provider {
        config.provider = provider;
    }
    if let Some(endpoint) = &request.endpoint {
        config.endpoint = Some(endpoint.clone());
    }
    if let Some(fixture) = &request.fixture {
        config.fixture_path = Some(fixture.clone());
    }
    if let Some(dir) = &request.export_dir {
        config.export_dir = dir.clone();
    }
    config
}

/// Validate the URL, fetch its analysis, and render the dashboard.
///
/// An empty URL prints a warning and stops before the provider is called.
/// A provider failure stops before anything is rendered.
///
/// # Errors
///
/// Returns an error if the URL is blank, the provider fails, or the result
/// cannot be rendered.
pub(crate) async fn analyze_video(
    provider: &DataProvider,
    raw_url: &str,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<Dashboard> {
    let video_url = match require_video_url(raw_url) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Please enter a valid YouTube URL");
            return Err(e.into());
        }
    };

    tracing::info!(video_url, provider = %provider.kind(), "analyzing video");
    let result = provider
        .analyze(video_url)
        .await
        .context("Error fetching analysis")?;

    render(&result, generated_at).context("failed to render analysis")
}

/// Run `analyze` end to end: print the dashboard and optionally export it.
///
/// # Errors
///
/// Returns an error if the provider cannot be built, analysis fails, or the
/// export file cannot be written.
pub(crate) async fn run_analyze(config: &AppConfig, request: AnalyzeRequest) -> anyhow::Result<()> {
    let config = apply_overrides(config, &request);
    let provider = DataProvider::from_config(&config)?;

    let dashboard = analyze_video(&provider, &request.url, Utc::now()).await?;
    let output = match request.format {
        OutputFormat::Text => to_text(&dashboard),
        OutputFormat::Markdown => to_markdown(&dashboard),
    };
    print!("{output}");

    if request.export {
        let path = write_export(&config.export_dir, &dashboard.export)
            .with_context(|| format!("failed to export to {}", config.export_dir.display()))?;
        println!("Exported analysis report to {}", path.display());
    }

    Ok(())
}
