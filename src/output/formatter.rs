use anyhow::Result;
use serde::Serialize;

use crate::auth::Credential;
use crate::cli::OutputFormat;

/// The shape a Docker credential helper prints for `get`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HelperOutput<'a> {
    #[serde(rename = "ServerURL")]
    pub server_url: &'a str,
    pub username: &'a str,
    pub secret: &'a str,
}

impl<'a> From<&'a Credential> for HelperOutput<'a> {
    fn from(credential: &'a Credential) -> Self {
        Self {
            server_url: &credential.registry,
            username: &credential.username,
            secret: &credential.password,
        }
    }
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(credential: &Credential, format: OutputFormat, show_secret: bool) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&HelperOutput::from(
                credential,
            ))?),
            OutputFormat::Text => Ok(Self::format_text(credential, show_secret)),
        }
    }

    fn format_text(credential: &Credential, show_secret: bool) -> String {
        let password = if show_secret {
            credential.password.as_str()
        } else {
            credential.masked_password()
        };
        format!(
            "registry: {}\nusername: {}\npassword: {}",
            credential.registry, credential.username, password
        )
    }
}
