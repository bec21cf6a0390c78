mod analyze;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use commentlens_core::ProviderKind;
use tracing_subscriber::EnvFilter;

use crate::analyze::{run_analyze, AnalyzeRequest};

#[derive(Debug, Parser)]
#[command(name = "commentlens-cli")]
#[command(about = "Comment sentiment dashboard for a single video")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze one video's comments and print the dashboard
    Analyze {
        /// Video URL to analyze
        url: String,

        /// Data source; overrides `COMMENTLENS_PROVIDER`
        #[arg(long, value_enum)]
        provider: Option<ProviderArg>,

        /// Analysis backend for the remote provider; overrides `COMMENTLENS_ENDPOINT`
        #[arg(long)]
        endpoint: Option<String>,

        /// JSON or YAML fixture for the static provider
        #[arg(long)]
        fixture: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the JSON analysis report to the export directory
        #[arg(long)]
        export: bool,

        /// Directory for the exported report; overrides `COMMENTLENS_EXPORT_DIR`
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProviderArg {
    Static,
    Remote,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Static => ProviderKind::Static,
            ProviderArg::Remote => ProviderKind::Remote,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = commentlens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Analyze {
            url,
            provider,
            endpoint,
            fixture,
            format,
            export,
            export_dir,
        }) => {
            let request = AnalyzeRequest {
                url,
                provider: provider.map(ProviderKind::from),
                endpoint,
                fixture,
                format,
                export,
                export_dir,
            };
            run_analyze(&config, request).await?;
        }
        None => println!("commentlens-cli ready; run `commentlens-cli analyze <URL>`"),
    }

    Ok(())
}
