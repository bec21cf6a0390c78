use thiserror::Error;

/// Reasons a data provider could not produce an analysis result.
///
/// Every variant is a fetch failure from the dashboard's point of view:
/// nothing is rendered and the request is not retried.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The analysis endpoint answered with anything other than `200 OK`.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body is not JSON or does not match the expected schema.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body parsed but carries values the dashboard cannot display.
    #[error("invalid analysis payload: {0}")]
    InvalidPayload(String),

    #[error("invalid analysis endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("failed to read fixture {path}: {source}")]
    FixtureIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture {path}: {reason}")]
    FixtureParse { path: String, reason: String },
}
