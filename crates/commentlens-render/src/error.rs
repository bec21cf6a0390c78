use commentlens_core::InvalidValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// A float in the input is NaN or infinite.
    #[error("{field} is not a finite number: {value}")]
    NonFiniteValue { field: String, value: f64 },

    #[error("sentiment '{label}' is negative: {value}")]
    NegativeSentiment { label: String, value: f64 },

    #[error("JSON error while {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write export {path}: {source}")]
    ExportIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<InvalidValue> for RenderError {
    fn from(err: InvalidValue) -> Self {
        match err {
            InvalidValue::NonFinite { field, value } => Self::NonFiniteValue { field, value },
            InvalidValue::NegativeSentiment { label, value } => Self::NegativeSentiment {
                label: label.to_string(),
                value,
            },
        }
    }
}
