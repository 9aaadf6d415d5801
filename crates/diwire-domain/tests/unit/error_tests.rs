//! Unit tests for error types

use diwire_domain::error::{Error, ResolveError};
use diwire_domain::value_objects::TokenId;

#[test]
fn test_cycle_error_formats_chain() {
    let error = ResolveError::cycle(vec![
        TokenId::from("AToken"),
        TokenId::from("BToken"),
        TokenId::from("AToken"),
    ]);

    assert_eq!(
        error.to_string(),
        "cyclic token dependency: AToken -> BToken -> AToken"
    );
}

#[test]
fn test_structural_type_error_names_declaration_and_type() {
    let error = ResolveError::structural_type("createServer", "{ port: number }");
    let message = error.to_string();

    assert!(message.contains("createServer"));
    assert!(message.contains("{ port: number }"));
}

#[test]
fn test_resolve_error_converts_into_domain_error() {
    let error: Error = ResolveError::structural_type("f", "{}").into();

    assert!(error.is_resolution());
    assert!(error.to_string().starts_with("Resolution failed"));
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::configuration_with_source("cannot read diwire.toml", io);

    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "cannot read diwire.toml");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
}
