use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid JSON in docker config {source_name}: {source}")]
    InvalidJson {
        source_name: String,
        source: serde_json::Error,
    },

    #[error("docker config {source_name} is not a JSON object")]
    NotAnObject { source_name: String },
}

impl ConfigError {
    pub fn invalid_json(source_name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidJson {
            source_name: source_name.into(),
            source,
        }
    }

    pub fn not_an_object(source_name: impl Into<String>) -> Self {
        Self::NotAnObject {
            source_name: source_name.into(),
        }
    }
}
