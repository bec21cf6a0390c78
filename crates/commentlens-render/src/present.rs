//! Terminal presentation of a rendered [`Dashboard`].
//!
//! Charts become labeled rows of block characters and the recommendation
//! list becomes indented entries with a progress bar. Horizontal bar charts
//! are drawn largest-first so the top row is the biggest bar, matching the
//! bottom-up bar order stored in [`ThemeChart`].

use std::fmt::{self, Write};

use commentlens_core::KeyThemes;

use crate::sections::{
    Dashboard, ExportArtifact, MetricsRow, RecommendationList, SentimentChart, TemporalChart,
    ThemeChart,
};

const BAR_WIDTH: usize = 30;
const PROGRESS_WIDTH: usize = 20;

/// Draw a bar `width` cells wide, filled to `fraction` of its length.
fn bar(fraction: f64, width: usize) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let mut out = "\u{2588}".repeat(filled);
    out.push_str(&"\u{2591}".repeat(width - filled));
    out
}

#[allow(clippy::cast_precision_loss)]
fn fraction_of(value: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 / max as f64
    }
}

/// Render the dashboard as plain terminal text.
#[must_use]
pub fn to_text(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(dashboard, &mut out);
    out
}

/// Render the dashboard as a markdown report.
#[must_use]
pub fn to_markdown(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_markdown(dashboard, &mut out);
    out
}

/// Write the plain-text dashboard into `out`.
///
/// # Errors
///
/// Returns [`fmt::Error`] if the underlying writer fails.
pub fn write_text<W: Write>(dashboard: &Dashboard, out: &mut W) -> fmt::Result {
    writeln!(out, "== {} ==", dashboard.video_title)?;
    writeln!(out)?;
    text_metrics(&dashboard.metrics, out)?;
    writeln!(out)?;
    text_sentiment(&dashboard.sentiment, out)?;
    writeln!(out)?;
    text_themes(&dashboard.themes, out)?;
    writeln!(out)?;
    text_temporal(&dashboard.temporal, out)?;
    writeln!(out)?;
    text_recommendations(&dashboard.recommendations, out)?;
    writeln!(out)?;
    text_export(&dashboard.export, out)
}

fn text_metrics<W: Write>(metrics: &MetricsRow, out: &mut W) -> fmt::Result {
    writeln!(out, "Video Overview")?;
    for metric in &metrics.metrics {
        writeln!(out, "  {:<17}{}", metric.label, metric.value)?;
    }
    Ok(())
}

fn text_sentiment<W: Write>(chart: &SentimentChart, out: &mut W) -> fmt::Result {
    writeln!(out, "{}", chart.title)?;
    for slice in &chart.slices {
        writeln!(
            out,
            "  {:<10}{:>6.1}%  {}",
            slice.label.as_str(),
            slice.share,
            bar(slice.share / 100.0, BAR_WIDTH)
        )?;
    }
    if chart.normalized {
        writeln!(
            out,
            "  (reported percentages did not sum to 100; shown as shares of the total)"
        )?;
    }
    Ok(())
}

fn text_highlights<W: Write>(highlights: &KeyThemes, out: &mut W) -> fmt::Result {
    writeln!(out, "  Audience Engagement: {}", highlights.engagement)?;
    if !highlights.topics.is_empty() {
        writeln!(out, "  Popular Topics: {}", highlights.topics.join(", "))?;
    }
    if !highlights.improvements.is_empty() {
        writeln!(
            out,
            "  Suggested Improvements: {}",
            highlights.improvements.join(", ")
        )?;
    }
    Ok(())
}

fn text_themes<W: Write>(chart: &ThemeChart, out: &mut W) -> fmt::Result {
    writeln!(out, "{}", chart.title)?;
    if chart.bars.is_empty() {
        writeln!(out, "  (no themes)")?;
    }
    let max = chart.bars.iter().map(|b| b.mentions).max().unwrap_or(0);
    let name_width = chart
        .bars
        .iter()
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(0);
    for theme in chart.bars.iter().rev() {
        writeln!(
            out,
            "  {:<name_width$}  {:>6}  {}",
            theme.name,
            theme.mentions,
            bar(fraction_of(theme.mentions, max), BAR_WIDTH)
        )?;
    }
    if let Some(highlights) = &chart.highlights {
        text_highlights(highlights, out)?;
    }
    Ok(())
}

fn text_temporal<W: Write>(chart: &TemporalChart, out: &mut W) -> fmt::Result {
    writeln!(out, "Sentiment Trend Analysis")?;
    writeln!(
        out,
        "  {} (y: {:.1} to {:.1})",
        chart.title, chart.y_domain.0, chart.y_domain.1
    )?;
    if chart.points.is_empty() {
        writeln!(out, "  (no data)")?;
    }
    let span = chart.y_domain.1 - chart.y_domain.0;
    for point in &chart.points {
        writeln!(
            out,
            "  {:<10}{:>5.2}  {}",
            point.label,
            point.score,
            bar((point.score - chart.y_domain.0) / span, BAR_WIDTH)
        )?;
    }
    Ok(())
}

fn text_recommendations<W: Write>(list: &RecommendationList, out: &mut W) -> fmt::Result {
    writeln!(out, "{}", list.title)?;
    if list.entries.is_empty() {
        writeln!(out, "  (no recommendations)")?;
    }
    for entry in &list.entries {
        writeln!(out, "  \u{25b8} {}", entry.heading)?;
        writeln!(out, "      URL: {}", entry.url)?;
        writeln!(
            out,
            "      [{}] {:.0}%",
            bar(entry.progress, PROGRESS_WIDTH),
            entry.progress * 100.0
        )?;
    }
    Ok(())
}

fn text_export<W: Write>(artifact: &ExportArtifact, out: &mut W) -> fmt::Result {
    writeln!(out, "Export Analysis")?;
    writeln!(
        out,
        "  {}: {} ({}, {} bytes)",
        artifact.label,
        artifact.file_name,
        artifact.content_type,
        artifact.body.len()
    )
}

/// Write the markdown report into `out`.
///
/// # Errors
///
/// Returns [`fmt::Error`] if the underlying writer fails.
pub fn write_markdown<W: Write>(dashboard: &Dashboard, out: &mut W) -> fmt::Result {
    writeln!(out, "# \u{1f4ca} {}", dashboard.video_title)?;
    writeln!(out)?;
    writeln!(
        out,
        "**Generated**: {}",
        dashboard.export.generated_at.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(out)?;

    writeln!(out, "## Video Overview")?;
    writeln!(out)?;
    writeln!(out, "| Metric | Value |")?;
    writeln!(out, "|--------|-------|")?;
    for metric in &dashboard.metrics.metrics {
        writeln!(out, "| {} | {} |", metric.label, metric.value)?;
    }
    writeln!(out)?;

    let sentiment = &dashboard.sentiment;
    writeln!(out, "## {}", sentiment.title)?;
    writeln!(out)?;
    writeln!(out, "| Sentiment | Reported | Share | Color |")?;
    writeln!(out, "|-----------|----------|-------|-------|")?;
    for slice in &sentiment.slices {
        writeln!(
            out,
            "| {} | {} | {:.1}% | `{}` |",
            slice.label, slice.value, slice.share, slice.color
        )?;
    }
    if sentiment.normalized {
        writeln!(out)?;
        writeln!(
            out,
            "_Reported percentages did not sum to 100; shares are normalized._"
        )?;
    }
    writeln!(out)?;

    let themes = &dashboard.themes;
    writeln!(out, "## {}", themes.title)?;
    writeln!(out)?;
    writeln!(out, "| Theme | Mentions |")?;
    writeln!(out, "|-------|----------|")?;
    for theme in themes.bars.iter().rev() {
        writeln!(out, "| {} | {} |", theme.name, theme.mentions)?;
    }
    if let Some(highlights) = &themes.highlights {
        writeln!(out)?;
        writeln!(out, "- **Audience Engagement**: {}", highlights.engagement)?;
        writeln!(
            out,
            "- **Popular Topics**: {}",
            highlights.topics.join(", ")
        )?;
        writeln!(
            out,
            "- **Suggested Improvements**: {}",
            highlights.improvements.join(", ")
        )?;
    }
    writeln!(out)?;

    let temporal = &dashboard.temporal;
    writeln!(out, "## Sentiment Trend Analysis")?;
    writeln!(out)?;
    writeln!(out, "| Period | Sentiment Score |")?;
    writeln!(out, "|--------|-----------------|")?;
    for point in &temporal.points {
        writeln!(out, "| {} | {:.2} |", point.label, point.score)?;
    }
    writeln!(out)?;

    let recommendations = &dashboard.recommendations;
    writeln!(out, "## {}", recommendations.title)?;
    writeln!(out)?;
    for entry in &recommendations.entries {
        writeln!(out, "<details><summary>{}</summary>", entry.heading)?;
        writeln!(out)?;
        writeln!(out, "URL: <{}>", entry.url)?;
        writeln!(out)?;
        writeln!(
            out,
            "`{}` {:.0}%",
            bar(entry.progress, PROGRESS_WIDTH),
            entry.progress * 100.0
        )?;
        writeln!(out)?;
        writeln!(out, "</details>")?;
    }
    writeln!(out)?;

    let export = &dashboard.export;
    writeln!(out, "## Export Analysis")?;
    writeln!(out)?;
    writeln!(
        out,
        "- {}: `{}` ({})",
        export.label, export.file_name, export.content_type
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use commentlens_core::{
        SentimentBreakdown, SimilarVideo, TemporalPoint, Theme, VideoAnalysisResult, VideoInfo,
    };

    use super::*;
    use crate::render::render;

    fn dashboard(key_themes: Option<KeyThemes>) -> Dashboard {
        let result = VideoAnalysisResult {
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
                Theme {
                    name: "Price".to_string(),
                    mention_count: 280,
                },
                Theme {
                    name: "Quality".to_string(),
                    mention_count: 450,
                },
            ],
            temporal: vec![TemporalPoint {
                period_label: "2024-01".to_string(),
                sentiment_score: 0.8,
            }],
            similar_videos: vec![SimilarVideo {
                title: "Similar Video 1".to_string(),
                url: "https://youtube.com/watch1".to_string(),
                performance_score: 1.4,
            }],
            key_themes,
        };
        render(&result, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()).unwrap()
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0.5, 4), "\u{2588}\u{2588}\u{2591}\u{2591}");
        assert_eq!(bar(0.0, 3), "\u{2591}\u{2591}\u{2591}");
        assert_eq!(bar(2.0, 3), "\u{2588}\u{2588}\u{2588}");
    }

    #[test]
    fn text_lists_sections_in_order() {
        let text = to_text(&dashboard(None));
        let positions: Vec<usize> = [
            "Video Overview",
            "Comment Sentiment Distribution",
            "Top Comment Themes",
            "Sentiment Trend Analysis",
            "Similar High-Performing Videos",
            "Export Analysis",
        ]
        .iter()
        .map(|heading| text.find(heading).expect(heading))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
        assert!(text.contains("Engagement Rate  10.33%"));
        assert!(text.contains("sentiment_analysis_20240102_030405.json"));
    }

    #[test]
    fn text_draws_largest_theme_first() {
        let text = to_text(&dashboard(None));
        let quality = text.find("Quality").unwrap();
        let price = text.find("Price").unwrap();
        assert!(quality < price, "{text}");
    }

    #[test]
    fn text_progress_uses_clamped_fill() {
        let text = to_text(&dashboard(None));
        assert!(text.contains("(Performance Score: 1.40)"));
        assert!(text.contains("] 100%"), "{text}");
    }

    #[test]
    fn text_includes_highlights_when_present() {
        let text = to_text(&dashboard(Some(KeyThemes {
            engagement: "High".to_string(),
            topics: vec!["humor".to_string(), "editing style".to_string()],
            improvements: vec![],
        })));
        assert!(text.contains("Audience Engagement: High"));
        assert!(text.contains("Popular Topics: humor, editing style"));
        assert!(!text.contains("Suggested Improvements"));
    }

    #[test]
    fn string_helpers_match_writer_output() {
        let dashboard = dashboard(None);
        let mut text = String::new();
        write_text(&dashboard, &mut text).unwrap();
        let mut md = String::new();
        write_markdown(&dashboard, &mut md).unwrap();
        assert_eq!(to_text(&dashboard), text);
        assert_eq!(to_markdown(&dashboard), md);
    }

    #[test]
    fn markdown_has_tables_and_details() {
        let md = to_markdown(&dashboard(None));
        assert!(md.starts_with("# \u{1f4ca} Sample Video"));
        assert!(md.contains("| Views | 150,000 |"));
        assert!(md.contains("| positive | 65 | 65.0% | `#2ecc71` |"));
        assert!(md.contains("<details><summary>"));
        assert!(md.contains("**Generated**: 2024-01-02 03:04 UTC"));
    }
}
