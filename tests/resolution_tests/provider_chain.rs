//! ProviderChain tests over loaded configs

use regcred::auth::DEFAULT_REGISTRY;
use regcred::{ConfigSource, DockerConfig, ProviderChain};
use std::fs;
use tempfile::TempDir;

use super::test_utils::{auths_document, encode};

#[test]
fn test_chain_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        format!(
            r#"{{"auths": {{"https://index.docker.io/v1/": {{"auth": "{}"}}}}}}"#,
            encode("hub:pw")
        ),
    )
    .unwrap();

    let config = DockerConfig::from_path(&path).unwrap();
    assert_eq!(config.source(), &ConfigSource::File(path.clone()));

    let cred = config.chain().resolve("docker.io").unwrap();
    assert_eq!(cred.username, "hub");
    assert_eq!(cred.password, "pw");
}

#[test]
fn test_file_key_order_is_preserved() {
    let json = format!(
        r#"{{"auths": {{"zzz.registry.io": {{"auth": "{}"}}, "aaa.registry.io": {{"auth": "{}"}}}}}}"#,
        encode("z:1"),
        encode("a:2")
    );
    let config = DockerConfig::from_json(&json).unwrap();

    let cred = config.chain().resolve("registry.io").unwrap();
    assert_eq!(cred.registry, "aaa.registry.io");
}

#[test]
fn test_blank_hostname_resolves_docker_hub() {
    let doc = auths_document(&[("ghcr.io", "gh:1"), ("https://index.docker.io/v1/", "hub:pw")]);
    let chain = ProviderChain::for_document(&doc);

    assert_eq!(chain.default_registry(), DEFAULT_REGISTRY);
    assert_eq!(chain.resolve("").unwrap().username, "hub");
}

#[test]
fn test_empty_config_resolves_nothing() {
    let config = DockerConfig::empty();
    assert_eq!(config.source(), &ConfigSource::Empty);
    assert!(config.chain().resolve("docker.io").is_none());
}
