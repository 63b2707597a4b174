use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Map, Value};

pub fn encode(payload: &str) -> String {
    STANDARD.encode(payload)
}

/// Builds `{"auths": {...}}` keeping the entries in the given order.
pub fn auths_document(entries: &[(&str, &str)]) -> Value {
    let auths: Map<String, Value> = entries
        .iter()
        .map(|(registry, payload)| (registry.to_string(), json!({ "auth": encode(payload) })))
        .collect();
    json!({ "auths": auths })
}
