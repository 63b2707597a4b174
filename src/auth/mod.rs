pub mod credential;
pub mod failure;
pub mod providers;

pub use credential::Credential;
pub use failure::LookupFailure;
pub use providers::Base64Provider;

use serde_json::Value;
use tracing::debug;

/// Registry queried when the caller gives no hostname. Docker Hub image
/// references carry no registry part.
pub const DEFAULT_REGISTRY: &str = "index.docker.io";

pub trait AuthProvider: Send + Sync {
    fn name(&self) -> &'static str;
    fn is_applicable(&self) -> bool;
    fn resolve(&self, hostname: &str) -> Option<Credential>;
}

pub struct ProviderChain<'a> {
    providers: Vec<Box<dyn AuthProvider + 'a>>,
    default_registry: String,
}

impl<'a> ProviderChain<'a> {
    pub fn for_document(document: &'a Value) -> Self {
        Self::builder(document).build()
    }

    fn default_providers(document: &'a Value) -> Vec<Box<dyn AuthProvider + 'a>> {
        vec![Box::new(Base64Provider::new(document))]
    }

    pub fn builder(document: &'a Value) -> ProviderChainBuilder<'a> {
        ProviderChainBuilder::new(document)
    }

    /// Returns the first credential any applicable provider has for
    /// `hostname`. A blank hostname means the default registry.
    pub fn resolve(&self, hostname: &str) -> Option<Credential> {
        let hostname = match hostname.trim() {
            "" => self.default_registry.as_str(),
            trimmed => trimmed,
        };

        for provider in &self.providers {
            if !provider.is_applicable() {
                debug!(provider = provider.name(), "skipping inapplicable provider");
                continue;
            }
            if let Some(credential) = provider.resolve(hostname) {
                return Some(credential);
            }
        }
        None
    }

    pub fn default_registry(&self) -> &str {
        &self.default_registry
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

pub struct ProviderChainBuilder<'a> {
    document: &'a Value,
    providers: Vec<Box<dyn AuthProvider + 'a>>,
    default_registry: String,
    include_defaults: bool,
}

impl<'a> ProviderChainBuilder<'a> {
    pub fn new(document: &'a Value) -> Self {
        Self {
            document,
            providers: Vec::new(),
            default_registry: DEFAULT_REGISTRY.to_string(),
            include_defaults: true,
        }
    }

    /// Appends `provider`; it is consulted after the default providers.
    pub fn with_provider<P: AuthProvider + 'a>(mut self, provider: P) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn with_default_registry(mut self, registry: impl Into<String>) -> Self {
        self.default_registry = registry.into();
        self
    }

    pub fn without_defaults(mut self) -> Self {
        self.include_defaults = false;
        self
    }

    pub fn build(self) -> ProviderChain<'a> {
        let mut providers = if self.include_defaults {
            ProviderChain::default_providers(self.document)
        } else {
            Vec::new()
        };
        providers.extend(self.providers);

        ProviderChain {
            providers,
            default_registry: self.default_registry,
        }
    }
}
