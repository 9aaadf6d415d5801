//! Unit tests for token and factory value objects

use diwire_domain::value_objects::{Cardinality, Lifecycle, Token, TokenId, TypeMetadata};

#[test]
fn test_token_id_derived_from_display_name() {
    let token = Token::new("Logger", "Token", Cardinality::Single);

    assert_eq!(token.id, TokenId::from("LoggerToken"));
    assert_eq!(token.display_name, "Logger");
    assert!(!token.is_multi());
}

#[test]
fn test_token_id_honours_custom_suffix() {
    let token = Token::new("Plugin", "Key", Cardinality::Multi);

    assert_eq!(token.id.as_str(), "PluginKey");
    assert!(token.is_multi());
}

#[test]
fn test_token_serializes_cardinality_lowercase() {
    let token = Token::new("Plugin", "Token", Cardinality::Multi);
    let json = serde_json::to_value(&token).expect("serialization should succeed");

    assert_eq!(json["id"], "PluginToken");
    assert_eq!(json["cardinality"], "multi");
}

#[test]
fn test_lifecycle_parse_is_case_insensitive() {
    assert_eq!(Lifecycle::parse("SCOPED"), Some(Lifecycle::Scoped));
    assert_eq!(Lifecycle::parse(" transient "), Some(Lifecycle::Transient));
    assert_eq!(Lifecycle::parse("request"), None);
    assert_eq!(Lifecycle::default(), Lifecycle::Transient);
}

#[test]
fn test_type_metadata_references_lists_implements_first() {
    let metadata = TypeMetadata {
        implements: vec![TokenId::from("AToken")],
        generics: vec![TokenId::from("BToken")],
    };

    let refs: Vec<&str> = metadata.references().map(TokenId::as_str).collect();
    assert_eq!(refs, vec!["AToken", "BToken"]);
    assert!(!metadata.is_empty());
    assert!(TypeMetadata::default().is_empty());
}
