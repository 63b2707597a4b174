use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::document::LastWinsValue;
use crate::auth::ProviderChain;
use crate::error::{ConfigError, IoError, Result};

pub const DOCKER_AUTH_CONFIG_ENV: &str = "DOCKER_AUTH_CONFIG";
pub const DOCKER_CONFIG_ENV: &str = "DOCKER_CONFIG";
const CONFIG_FILE_NAME: &str = "config.json";
const DOCKER_DIR: &str = ".docker";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// JSON text taken from `DOCKER_AUTH_CONFIG`.
    Environment,
    File(PathBuf),
    /// Nothing was found; the document is `{}`.
    Empty,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => write!(f, "${DOCKER_AUTH_CONFIG_ENV}"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Empty => write!(f, "<none>"),
        }
    }
}

/// A parsed Docker config document and where it came from.
#[derive(Debug, Clone)]
pub struct DockerConfig {
    document: Value,
    source: ConfigSource,
}

impl DockerConfig {
    /// Locates the config the way the Docker CLI does, with
    /// `DOCKER_AUTH_CONFIG` taking precedence over any file.
    pub fn locate() -> Result<Self> {
        Self::locate_with(|key| std::env::var(key).ok(), dirs::home_dir())
    }

    pub fn locate_with<F>(env: F, home: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(json) = env(DOCKER_AUTH_CONFIG_ENV).filter(|v| !v.trim().is_empty()) {
            debug!("using docker config from {DOCKER_AUTH_CONFIG_ENV}");
            let document = parse_document(&json, &ConfigSource::Environment)?;
            return Ok(Self {
                document,
                source: ConfigSource::Environment,
            });
        }

        let candidate = match env(DOCKER_CONFIG_ENV).filter(|v| !v.is_empty()) {
            Some(dir) => Some(PathBuf::from(dir).join(CONFIG_FILE_NAME)),
            None => home.map(|h| h.join(DOCKER_DIR).join(CONFIG_FILE_NAME)),
        };

        match candidate {
            Some(path) if path.is_file() => Self::from_path(path),
            other => {
                debug!(candidate = ?other, "no docker config found");
                Ok(Self::empty())
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::file_not_found(path).into());
        }
        let text = std::fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;

        let source = ConfigSource::File(path.to_path_buf());
        let document = parse_document(&text, &source)?;
        debug!(path = %path.display(), "loaded docker config");
        Ok(Self { document, source })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let source = ConfigSource::Environment;
        let document = parse_document(json, &source)?;
        Ok(Self { document, source })
    }

    pub fn empty() -> Self {
        Self {
            document: Value::Object(Default::default()),
            source: ConfigSource::Empty,
        }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    pub fn chain(&self) -> ProviderChain<'_> {
        ProviderChain::for_document(&self.document)
    }
}

fn parse_document(text: &str, source: &ConfigSource) -> Result<Value> {
    let LastWinsValue(document) =
        serde_json::from_str(text).map_err(|e| ConfigError::invalid_json(source.to_string(), e))?;
    if !document.is_object() {
        return Err(ConfigError::not_an_object(source.to_string()).into());
    }
    Ok(document)
}
