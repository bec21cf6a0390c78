use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Where analysis results come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Built-in sample data or a local fixture file.
    Static,
    /// One `GET <endpoint>?url=<video>` against an analysis backend.
    Remote,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Static => write!(f, "static"),
            ProviderKind::Remote => write!(f, "remote"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub provider: ProviderKind,
    pub endpoint: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub fixture_path: Option<PathBuf>,
    pub simulated_delay_ms: u64,
    pub export_dir: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("provider", &self.provider)
            .field("endpoint", &self.endpoint.as_ref().map(|_| "[redacted]"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("fixture_path", &self.fixture_path)
            .field("simulated_delay_ms", &self.simulated_delay_ms)
            .field("export_dir", &self.export_dir)
            .finish()
    }
}
