//! Unit tests for the token graph

use diwire_domain::ResolveError;
use diwire_domain::value_objects::{Cardinality, TokenId, TokenOrigin, TypeMetadata};
use diwire_resolver::TokenRegistry;
use diwire_resolver::phases::TokenGraph;
use indexmap::IndexMap;

fn registry(names: &[&str]) -> TokenRegistry {
    let mut registry = TokenRegistry::new("Token");
    for name in names {
        registry.register_or_get(name, Cardinality::Single, TokenOrigin::Annotated);
    }
    registry
}

fn implements(ids: &[&str]) -> TypeMetadata {
    TypeMetadata {
        implements: ids.iter().map(|id| TokenId::from(*id)).collect(),
        generics: Vec::new(),
    }
}

fn as_strs(order: &[TokenId]) -> Vec<&str> {
    order.iter().map(TokenId::as_str).collect()
}

#[test]
fn test_referenced_tokens_come_first() {
    let registry = registry(&["Admin", "User", "Entity"]);
    let mut metadata = IndexMap::new();
    metadata.insert(TokenId::from("AdminToken"), implements(&["UserToken"]));
    metadata.insert(TokenId::from("UserToken"), implements(&["EntityToken"]));

    let order = TokenGraph::build(&registry, &metadata)
        .topological_order()
        .expect("acyclic");

    assert_eq!(as_strs(&order), ["EntityToken", "UserToken", "AdminToken"]);
}

#[test]
fn test_unrelated_tokens_keep_registry_order() {
    let registry = registry(&["Logger", "Clock", "Config"]);
    let order = TokenGraph::build(&registry, &IndexMap::new())
        .topological_order()
        .expect("acyclic");

    assert_eq!(as_strs(&order), ["LoggerToken", "ClockToken", "ConfigToken"]);
}

#[test]
fn test_self_reference_is_not_a_cycle() {
    let registry = registry(&["Money"]);
    let mut metadata = IndexMap::new();
    metadata.insert(
        TokenId::from("MoneyToken"),
        TypeMetadata {
            implements: Vec::new(),
            generics: vec![TokenId::from("MoneyToken")],
        },
    );

    let graph = TokenGraph::build(&registry, &metadata);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.topological_order().is_ok());
}

#[test]
fn test_cycle_reports_chain() {
    let registry = registry(&["A", "B", "C"]);
    let mut metadata = IndexMap::new();
    metadata.insert(TokenId::from("AToken"), implements(&["BToken"]));
    metadata.insert(TokenId::from("BToken"), implements(&["CToken"]));
    metadata.insert(TokenId::from("CToken"), implements(&["AToken"]));

    let err = TokenGraph::build(&registry, &metadata)
        .topological_order()
        .expect_err("cyclic");

    match err {
        ResolveError::Cycle { chain } => {
            assert_eq!(as_strs(&chain), ["AToken", "BToken", "CToken", "AToken"]);
        }
        other => panic!("expected cycle, got {other:?}"),
    }
}

#[test]
fn test_duplicate_references_collapse_to_one_edge() {
    let registry = registry(&["Repo", "Entity"]);
    let mut metadata = IndexMap::new();
    metadata.insert(
        TokenId::from("RepoToken"),
        TypeMetadata {
            implements: vec![TokenId::from("EntityToken")],
            generics: vec![TokenId::from("EntityToken")],
        },
    );

    assert_eq!(TokenGraph::build(&registry, &metadata).edge_count(), 1);
}
