use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::DockerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "regcred")]
#[command(about = "Registry credentials - resolve a registry login from Docker config auths", long_about = None)]
pub struct Args {
    /// Registry hostname to look up (defaults to index.docker.io)
    #[arg(long, value_name = "HOST", default_value = "")]
    pub hostname: String,

    /// Docker config file (located via DOCKER_AUTH_CONFIG, DOCKER_CONFIG or ~/.docker if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (json, text)
    #[arg(short = 'f', long, default_value = "json")]
    pub format: OutputFormat,

    /// Print the password in text output instead of masking it
    #[arg(long)]
    pub show_secret: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref config_path) = self.config {
            validate_config_path(config_path)?;
        }
        Ok(())
    }

    pub fn load_config(&self) -> Result<DockerConfig> {
        match self.config {
            Some(ref path) => DockerConfig::from_path(path)
                .with_context(|| format!("Cannot load docker config: {}", path.display())),
            None => DockerConfig::locate().context("Cannot locate docker config"),
        }
    }
}

pub fn validate_config_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Config file does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Config path is not a file: {}", path.display());
    }
    std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}
