//! Base64Provider tests over realistic config documents

use pretty_assertions::assert_eq;
use regcred::auth::{AuthProvider, Base64Provider, Credential, LookupFailure};
use serde_json::json;

use super::test_utils::{auths_document, encode};

// =============================================================================
// Applicability
// =============================================================================

#[test]
fn test_document_without_auths() {
    let doc = json!({
        "credsStore": "osxkeychain",
        "currentContext": "desktop-linux"
    });
    let provider = Base64Provider::new(&doc);

    assert!(!provider.is_applicable());
    for host in ["docker.io", "ghcr.io", ""] {
        assert!(provider.resolve(host).is_none(), "{host}");
    }
}

#[test]
fn test_document_with_empty_auths() {
    let doc = json!({ "auths": {} });
    let provider = Base64Provider::new(&doc);

    assert!(!provider.is_applicable());
    assert!(provider.resolve("docker.io").is_none());
}

#[test]
fn test_applicable_with_entries_lacking_auth() {
    let doc = json!({ "auths": { "ghcr.io": {} } });
    let provider = Base64Provider::new(&doc);

    assert!(provider.is_applicable());
    assert_eq!(
        provider.try_resolve("ghcr.io"),
        Err(LookupFailure::MissingAuthField)
    );
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn test_full_url_identifier_matches_bare_host() {
    let doc = auths_document(&[("https://my.registry.com", "alice:s3cr3t")]);
    let cred = Base64Provider::new(&doc).resolve("my.registry.com").unwrap();

    assert_eq!(
        cred,
        Credential::new("https://my.registry.com", "alice", "s3cr3t")
    );
}

#[test]
fn test_docker_hub_url_matches_docker_io() {
    let doc = auths_document(&[("https://index.docker.io/v1/", "hub:token")]);
    let cred = Base64Provider::new(&doc).resolve("docker.io").unwrap();

    assert_eq!(cred.registry, "https://index.docker.io/v1/");
}

#[test]
fn test_match_is_case_insensitive_both_ways() {
    let doc = auths_document(&[("Quay.IO", "q:pw")]);
    let provider = Base64Provider::new(&doc);

    assert!(provider.resolve("quay.io").is_some());
    assert!(provider.resolve("QUAY.io").is_some());
}

#[test]
fn test_later_entry_wins_when_declared_last() {
    let doc = auths_document(&[("registry.io", "alice:first"), ("sub.registry.io", "bob:pw")]);
    let cred = Base64Provider::new(&doc).resolve("registry.io").unwrap();

    assert_eq!(cred, Credential::new("sub.registry.io", "bob", "pw"));
}

#[test]
fn test_later_entry_wins_in_reverse_order() {
    let doc = auths_document(&[("sub.registry.io", "bob:pw"), ("registry.io", "alice:first")]);
    let cred = Base64Provider::new(&doc).resolve("registry.io").unwrap();

    assert_eq!(cred, Credential::new("registry.io", "alice", "first"));
}

#[test]
fn test_short_hostname_matches_broadly() {
    let doc = auths_document(&[("ghcr.io", "gh:1"), ("quay.io", "q:2"), ("example.com", "e:3")]);
    let cred = Base64Provider::new(&doc).resolve("io").unwrap();

    assert_eq!(cred.registry, "quay.io");
}

#[test]
fn test_no_entry_matches() {
    let doc = auths_document(&[("ghcr.io", "gh:1")]);

    assert_eq!(
        Base64Provider::new(&doc).try_resolve("registry.gitlab.com"),
        Err(LookupFailure::NoMatch)
    );
}

#[test]
fn test_last_match_without_auth_does_not_fall_back() {
    let doc = json!({
        "auths": {
            "ghcr.io": { "auth": encode("gh:1") },
            "https://ghcr.io/v2/": { "identitytoken": "abc" }
        }
    });

    assert_eq!(
        Base64Provider::new(&doc).try_resolve("ghcr.io"),
        Err(LookupFailure::MissingAuthField)
    );
}

// =============================================================================
// Payload decoding
// =============================================================================

#[test]
fn test_invalid_base64_is_absent() {
    let doc = json!({ "auths": { "ghcr.io": { "auth": "not-base64!!" } } });
    let provider = Base64Provider::new(&doc);

    assert!(provider.resolve("ghcr.io").is_none());
    assert_eq!(
        provider.try_resolve("ghcr.io"),
        Err(LookupFailure::MalformedBase64)
    );
}

#[test]
fn test_unpadded_base64_is_rejected() {
    let doc = json!({ "auths": { "ghcr.io": { "auth": "YTpiYw" } } });

    assert_eq!(
        Base64Provider::new(&doc).try_resolve("ghcr.io"),
        Err(LookupFailure::MalformedBase64)
    );
}

#[test]
fn test_payload_without_colon_is_absent() {
    let doc = auths_document(&[("ghcr.io", "justastring")]);

    assert_eq!(
        Base64Provider::new(&doc).try_resolve("ghcr.io"),
        Err(LookupFailure::MalformedPayload)
    );
}

#[test]
fn test_password_keeps_extra_colons() {
    let doc = auths_document(&[("ghcr.io", "user:pass:extra")]);
    let cred = Base64Provider::new(&doc).resolve("ghcr.io").unwrap();

    assert_eq!(cred, Credential::new("ghcr.io", "user", "pass:extra"));
}

#[test]
fn test_empty_auth_is_absent() {
    let doc = json!({ "auths": { "ghcr.io": { "auth": "" } } });

    assert_eq!(
        Base64Provider::new(&doc).try_resolve("ghcr.io"),
        Err(LookupFailure::EmptyAuthField)
    );
}

// =============================================================================
// Repeatability
// =============================================================================

#[test]
fn test_repeated_calls_are_identical() {
    let doc = auths_document(&[("ghcr.io", "gh:1"), ("quay.io", "q:2")]);
    let before = doc.clone();
    let provider = Base64Provider::new(&doc);

    let first = (provider.is_applicable(), provider.resolve("quay.io"));
    for _ in 0..3 {
        assert_eq!((provider.is_applicable(), provider.resolve("quay.io")), first);
        assert_eq!(provider.try_resolve("gitlab.com"), Err(LookupFailure::NoMatch));
    }
    assert_eq!(doc, before);
}

#[test]
fn test_concurrent_lookups_share_document() {
    let doc = auths_document(&[("ghcr.io", "gh:1"), ("quay.io", "q:2")]);
    let provider = Base64Provider::new(&doc);

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["ghcr.io", "quay.io"]
            .into_iter()
            .map(|host| scope.spawn(move || provider.resolve(host)))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_some());
        }
    });
}
