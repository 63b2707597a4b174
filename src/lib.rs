/// Registry Credentials
///
/// Resolves container registry logins from the `auths` section of a Docker
/// configuration document, through a chain of credential providers.
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use auth::{AuthProvider, Credential, LookupFailure, ProviderChain};
pub use config::{ConfigSource, DockerConfig};
