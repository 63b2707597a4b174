pub mod document;
pub mod loader;

pub use document::LastWinsValue;
pub use loader::{ConfigSource, DockerConfig};
