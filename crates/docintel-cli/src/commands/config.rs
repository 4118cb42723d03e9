use super::Output;
use anyhow::{Result, bail};
use clap::Subcommand;
use colored::Colorize;
use docintel_core::config::RootConfig;
use docintel_infrastructure::ConfigService;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Target path (defaults to --config, then the platform config dir)
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

fn service_for(path: Option<&Path>) -> Result<ConfigService> {
    Ok(match path {
        Some(path) => ConfigService::new(path),
        None => ConfigService::with_default_path()?,
    })
}

pub async fn handle(
    action: &ConfigAction,
    config_path: Option<&Path>,
    output: &Output,
) -> Result<()> {
    match action {
        ConfigAction::Init { path, force } => {
            let service = service_for(path.as_deref().or(config_path))?;
            if !force && tokio::fs::try_exists(service.path()).await? {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    service.path().display()
                );
            }
            service.save(&RootConfig::default()).await?;
            println!(
                "{}",
                format!("Wrote default configuration to {}", service.path().display()).green()
            );
        }
        ConfigAction::Show => {
            let service = service_for(config_path)?;
            let config = service.load().await?;
            output.emit(&config, |config| match toml::to_string_pretty(config) {
                Ok(text) => {
                    println!("{}", format!("# {}", service.path().display()).dimmed());
                    print!("{}", text);
                }
                Err(e) => eprintln!("{}", format!("Failed to render configuration: {}", e).red()),
            })?;
        }
    }
    Ok(())
}
