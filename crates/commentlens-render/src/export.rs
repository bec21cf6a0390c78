//! JSON export of an analysis result.
//!
//! The export is an indented JSON object:
//!
//! ```json
//! {
//!   "generated_at": "2024-05-01T12:30:45Z",
//!   "analysis": { "video_info": { ... }, "sentiment_analysis": { ... }, ... }
//! }
//! ```
//!
//! Floats are written with shortest round-trip precision and parsed back
//! exactly (`serde_json/float_roundtrip`), so [`deserialize_export`] returns
//! the same values [`serialize_export`] was given.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use commentlens_core::VideoAnalysisResult;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::sections::ExportArtifact;

pub const EXPORT_CONTENT_TYPE: &str = "application/json";

#[derive(Serialize)]
struct ExportEnvelope<'a> {
    generated_at: DateTime<Utc>,
    analysis: &'a VideoAnalysisResult,
}

#[derive(Deserialize)]
struct OwnedExportEnvelope {
    generated_at: DateTime<Utc>,
    analysis: VideoAnalysisResult,
}

/// Serialize `result` and its generation time as indented JSON.
///
/// Identical inputs produce identical bytes.
///
/// # Errors
///
/// Returns [`RenderError::NonFiniteValue`] / [`RenderError::NegativeSentiment`]
/// for values JSON cannot carry losslessly, and [`RenderError::Json`] if
/// serialization fails.
pub fn serialize_export(
    result: &VideoAnalysisResult,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, RenderError> {
    result.check_values()?;
    let envelope = ExportEnvelope {
        generated_at,
        analysis: result,
    };
    serde_json::to_vec_pretty(&envelope).map_err(|e| RenderError::Json {
        context: "serializing export".to_string(),
        source: e,
    })
}

/// Parse bytes written by [`serialize_export`].
///
/// # Errors
///
/// Returns [`RenderError::Json`] if the bytes are not a valid export.
pub fn deserialize_export(
    bytes: &[u8],
) -> Result<(VideoAnalysisResult, DateTime<Utc>), RenderError> {
    let envelope: OwnedExportEnvelope =
        serde_json::from_slice(bytes).map_err(|e| RenderError::Json {
            context: "parsing export".to_string(),
            source: e,
        })?;
    Ok((envelope.analysis, envelope.generated_at))
}

/// `sentiment_analysis_YYYYMMDD_HHMMSS.json`, from the UTC generation time.
#[must_use]
pub fn export_file_name(generated_at: DateTime<Utc>) -> String {
    format!(
        "sentiment_analysis_{}.json",
        generated_at.format("%Y%m%d_%H%M%S")
    )
}

/// Write the artifact into `dir` under its generated file name.
///
/// Creates `dir` if needed and overwrites an existing file of the same name.
///
/// # Errors
///
/// Returns [`RenderError::ExportIo`] if the directory cannot be created or
/// the file cannot be written.
pub fn write_export(dir: &Path, artifact: &ExportArtifact) -> Result<PathBuf, RenderError> {
    std::fs::create_dir_all(dir).map_err(|e| RenderError::ExportIo {
        path: dir.display().to_string(),
        source: e,
    })?;

    let path = dir.join(&artifact.file_name);
    std::fs::write(&path, &artifact.body).map_err(|e| RenderError::ExportIo {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), bytes = artifact.body.len(), "analysis report exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use commentlens_core::{
        KeyThemes, SentimentBreakdown, SimilarVideo, TemporalPoint, Theme, VideoInfo,
    };

    use super::*;

    fn awkward_result() -> VideoAnalysisResult {
        VideoAnalysisResult {
            video_info: VideoInfo {
                title: "Übertragung \"live\" \u{1f3a5}".to_string(),
                views: u64::MAX,
                likes: 12_000,
                comments: 3_500,
            },
            sentiment: SentimentBreakdown {
                positive: 0.1 + 0.2,
                neutral: 1.0 / 3.0,
                negative: 1e-300,
            },
            themes: vec![
                Theme {
                    name: "Quality".to_string(),
                    mention_count: 450,
                },
                Theme {
                    name: "Price".to_string(),
                    mention_count: 280,
                },
            ],
            temporal: vec![
                TemporalPoint {
                    period_label: "2024-02".to_string(),
                    sentiment_score: 0.750_000_000_000_000_1,
                },
                TemporalPoint {
                    period_label: "2024-01".to_string(),
                    sentiment_score: std::f64::consts::FRAC_1_SQRT_2,
                },
            ],
            similar_videos: vec![SimilarVideo {
                title: "Similar Video 1".to_string(),
                url: "https://youtube.com/watch1".to_string(),
                performance_score: 1.4,
            }],
            key_themes: Some(KeyThemes {
                engagement: "High".to_string(),
                topics: vec!["humor".to_string()],
                improvements: vec![],
            }),
        }
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap()
            + chrono::Duration::nanoseconds(123_456_789)
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let result = awkward_result();
        let bytes = serialize_export(&result, timestamp()).unwrap();
        let (parsed, generated_at) = deserialize_export(&bytes).unwrap();

        assert_eq!(parsed, result);
        assert_eq!(generated_at, timestamp());
        assert_eq!(
            parsed.sentiment.positive.to_bits(),
            result.sentiment.positive.to_bits()
        );
    }

    #[test]
    fn serialization_is_deterministic() {
        let result = awkward_result();
        let first = serialize_export(&result, timestamp()).unwrap();
        let second = serialize_export(&result, timestamp()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn export_is_indented_json_with_timestamp() {
        let bytes = serialize_export(&awkward_result(), timestamp()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("{\n  \"generated_at\""), "got: {text}");
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value["analysis"]["similar_videos"][0]["performance_score"],
            1.4
        );
    }

    #[test]
    fn non_finite_values_are_not_exported() {
        let mut result = awkward_result();
        result.temporal[0].sentiment_score = f64::NAN;
        assert!(matches!(
            serialize_export(&result, timestamp()),
            Err(RenderError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_deserialize() {
        assert!(matches!(
            deserialize_export(b"{\"analysis\": 1}"),
            Err(RenderError::Json { .. })
        ));
    }

    #[test]
    fn file_name_embeds_timestamp() {
        assert_eq!(
            export_file_name(timestamp()),
            "sentiment_analysis_20240501_123045.json"
        );
    }

    #[test]
    fn write_export_creates_file() {
        let dir = std::env::temp_dir().join(format!("commentlens-export-{}", std::process::id()));
        let body = serialize_export(&awkward_result(), timestamp()).unwrap();
        let artifact = ExportArtifact {
            label: "Download Analysis Report (JSON)",
            file_name: export_file_name(timestamp()),
            content_type: EXPORT_CONTENT_TYPE,
            generated_at: timestamp(),
            body: body.clone(),
        };

        let path = write_export(&dir.join("nested"), &artifact).unwrap();
        assert!(path.ends_with("sentiment_analysis_20240501_123045.json"));
        assert_eq!(std::fs::read(&path).unwrap(), body);

        std::fs::remove_dir_all(&dir).ok();
    }
}
