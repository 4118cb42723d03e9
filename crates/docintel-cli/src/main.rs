use anyhow::Result;
use clap::{Parser, Subcommand};
use docintel_application::AppBootstrap;
use docintel_core::config::{LatencySettings, RootConfig};
use docintel_infrastructure::ConfigService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

use commands::Output;

#[derive(Parser, Debug)]
#[command(name = "docintel")]
#[command(
    version,
    about = "DocIntel CLI - in-memory document intelligence stores",
    long_about = None
)]
struct Cli {
    /// Path to configuration file (defaults to the platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skip every simulated latency
    #[arg(long, global = true)]
    instant: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse, upload and delete documents
    Documents {
        #[command(subcommand)]
        action: commands::documents::DocumentAction,
    },
    /// Manage automation workflows
    Workflows {
        #[command(subcommand)]
        action: commands::workflows::WorkflowAction,
    },
    /// Talk to the document assistant
    Chat {
        #[command(subcommand)]
        action: commands::chat::ChatAction,
    },
    /// Browse and generate analytics insights
    Insights {
        #[command(subcommand)]
        action: commands::insights::InsightAction,
    },
    /// Search documents, workflows and insights at once
    Search { query: String },
    /// Show the dashboard overview
    Dashboard,
    /// Sign in (any credentials are accepted)
    Login {
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn load_config(cli: &Cli) -> Result<RootConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigService::load_from_path(path).await?,
        None => ConfigService::with_default_path()?.load().await?,
    };
    if cli.instant {
        config.latency = LatencySettings::none();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.json);

    if let Commands::Config { action } = &cli.command {
        init_tracing(&docintel_core::config::LogSettings::default().level);
        return commands::config::handle(action, cli.config.as_deref(), &output).await;
    }

    let config = load_config(&cli).await?;
    init_tracing(&config.logging.level);
    tracing::debug!(instant = cli.instant, seed = ?config.random.seed, "Configuration loaded");

    let app = AppBootstrap::from_config(&config);
    app.auth.initialize().await;

    match cli.command {
        Commands::Documents { action } => {
            commands::documents::handle(&app, action, &config.latency, &output).await?
        }
        Commands::Workflows { action } => commands::workflows::handle(&app, action, &output).await?,
        Commands::Chat { action } => commands::chat::handle(&app, action, &output).await?,
        Commands::Insights { action } => commands::insights::handle(&app, action, &output).await?,
        Commands::Search { query } => commands::search::handle(&app, &query, &output).await?,
        Commands::Dashboard => commands::dashboard::handle(&app, &output).await?,
        Commands::Login { email, password } => {
            commands::auth::login(&app, &email, &password, &output).await?
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}
