use crate::CoreError;

/// Trim the submitted video URL and reject it when nothing is left.
///
/// No URL-format validation is performed; any non-blank string is passed on
/// to the data provider as-is.
///
/// # Errors
///
/// Returns [`CoreError::InputMissing`] for an empty or whitespace-only value.
pub fn require_video_url(raw: &str) -> Result<&str, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InputMissing);
    }
    Ok(trimmed)
}
