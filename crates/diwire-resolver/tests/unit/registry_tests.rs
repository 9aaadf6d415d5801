//! Unit tests for the token registry

use diwire_domain::value_objects::{Cardinality, TokenId, TokenOrigin};
use diwire_resolver::TokenRegistry;
use std::path::Path;

#[test]
fn test_register_mints_once() {
    let mut registry = TokenRegistry::new("Token");

    let first = registry
        .register_or_get("Logger", Cardinality::Multi, TokenOrigin::Annotated)
        .clone();
    let second = registry
        .register_or_get("Logger", Cardinality::Single, TokenOrigin::Implicit)
        .clone();

    assert_eq!(first, second);
    assert_eq!(second.cardinality, Cardinality::Multi);
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.entry(&TokenId::from("LoggerToken")).map(|e| e.origin),
        Some(TokenOrigin::Annotated)
    );
}

#[test]
fn test_registry_keeps_insertion_order() {
    let mut registry = TokenRegistry::new("Token");
    for name in ["Zeta", "Alpha", "Mid"] {
        registry.register_or_get(name, Cardinality::Single, TokenOrigin::Implicit);
    }

    let names: Vec<_> = registry.iter().map(|r| r.token.display_name.as_str()).collect();
    assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    assert_eq!(registry.index_of(&TokenId::from("AlphaToken")), Some(1));
    assert_eq!(
        registry.at(2).map(|r| r.token.id.as_str()),
        Some("MidToken")
    );
}

#[test]
fn test_custom_suffix() {
    let mut registry = TokenRegistry::new("Key");
    let token = registry.register_or_get("Http.Client", Cardinality::Single, TokenOrigin::Implicit);

    assert_eq!(token.id.as_str(), "Http.ClientKey");
    assert!(registry.contains("Http.Client"));
    assert_eq!(registry.id_for("Other").as_str(), "OtherKey");
    assert!(registry.get("Other").is_none());
}

#[test]
fn test_first_declaring_file_wins() {
    let mut registry = TokenRegistry::new("Token");
    let id = registry
        .register_or_get("Config", Cardinality::Single, TokenOrigin::Implicit)
        .id
        .clone();

    registry.record_declaring_file(&id, Path::new(""));
    registry.record_declaring_file(&id, Path::new("src/config.ts"));
    registry.record_declaring_file(&id, Path::new("src/other.ts"));
    registry.record_declaring_file(&TokenId::from("MissingToken"), Path::new("src/missing.ts"));

    assert_eq!(registry.imports().len(), 1);
    assert_eq!(registry.imports()[&id], Path::new("src/config.ts"));
}
