use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine as _;
use serde_json::{Map, Value};
use tracing::{debug, info, trace};

use crate::auth::{AuthProvider, Credential, LookupFailure};

const SOURCE: &str = "Auths";
const AUTHS_KEY: &str = "auths";
const AUTH_FIELD: &str = "auth";

/// Reads base64 `user:pass` payloads from the `auths` section of a Docker
/// config document.
#[derive(Clone, Copy)]
pub struct Base64Provider<'a> {
    auths: Option<&'a Map<String, Value>>,
}

impl<'a> Base64Provider<'a> {
    /// Binds to `document`. A missing or non-object `auths` value leaves the
    /// provider inapplicable.
    pub fn new(document: &'a Value) -> Self {
        Self {
            auths: document.get(AUTHS_KEY).and_then(Value::as_object),
        }
    }

    /// Resolves `hostname`, reporting which step rejected the lookup.
    pub fn try_resolve(&self, hostname: &str) -> Result<Credential, LookupFailure> {
        debug!(source = SOURCE, "searching for a registry credential");

        let result = self.lookup(hostname);
        match &result {
            Ok(_) => info!(hostname, "registry credential found"),
            Err(failure) => trace!(hostname, failure = failure.as_str(), "no credential"),
        }
        result
    }

    fn lookup(&self, hostname: &str) -> Result<Credential, LookupFailure> {
        let auths = self
            .auths
            .filter(|auths| !auths.is_empty())
            .ok_or(LookupFailure::MissingSection)?;

        let (registry, entry) = last_match(auths, hostname).ok_or(LookupFailure::NoMatch)?;

        // Wrapped payloads decode as if unwrapped.
        let encoded: String = entry
            .get(AUTH_FIELD)
            .and_then(Value::as_str)
            .ok_or(LookupFailure::MissingAuthField)?
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        if encoded.is_empty() {
            return Err(LookupFailure::EmptyAuthField);
        }

        let decoded = STANDARD
            .decode(&encoded)
            .map_err(|_| LookupFailure::MalformedBase64)?;
        let payload = String::from_utf8(decoded).map_err(|_| LookupFailure::MalformedPayload)?;

        Credential::from_payload(registry.as_str(), &payload).ok_or(LookupFailure::MalformedPayload)
    }
}

impl AuthProvider for Base64Provider<'_> {
    fn name(&self) -> &'static str {
        "auths"
    }

    fn is_applicable(&self) -> bool {
        self.auths.is_some_and(|auths| !auths.is_empty())
    }

    fn resolve(&self, hostname: &str) -> Option<Credential> {
        self.try_resolve(hostname).ok()
    }
}

/// Last entry in document order whose key contains `hostname`, ignoring case.
fn last_match<'m>(
    auths: &'m Map<String, Value>,
    hostname: &str,
) -> Option<(&'m String, &'m Value)> {
    let needle = hostname.to_lowercase();
    auths
        .iter()
        .filter(|(registry, _)| registry.to_lowercase().contains(&needle))
        .last()
}
