//! Unit tests for annotation normalisation

use diwire_domain::value_objects::{
    AnnotationKind, AnnotationTags, Cardinality, Declaration, Lifecycle, TypeId,
};
use diwire_resolver::annotations::normalize;

fn declaration() -> Declaration {
    Declaration::interface("Logger", TypeId(0))
}

#[test]
fn test_service_defaults_to_single() {
    let annotations = normalize(&declaration().annotated("service"), &AnnotationTags::default());

    assert_eq!(annotations.service, Some(Cardinality::Single));
    assert!(annotations.has(AnnotationKind::Service));
    assert!(!annotations.injectable);
}

#[test]
fn test_service_multi_keyword() {
    let decl = declaration().annotated_with("service", "  Multi  implementations");
    let annotations = normalize(&decl, &AnnotationTags::default());

    assert_eq!(annotations.service, Some(Cardinality::Multi));
}

#[test]
fn test_leading_at_sign_is_accepted() {
    let annotations = normalize(&declaration().annotated("@service"), &AnnotationTags::default());

    assert_eq!(annotations.service, Some(Cardinality::Single));
}

#[test]
fn test_injectable_with_lifecycle_payload() {
    let decl = declaration().annotated_with("injectable", "singleton");
    let annotations = normalize(&decl, &AnnotationTags::default());

    assert!(annotations.injectable);
    assert_eq!(annotations.lifecycle, Some(Lifecycle::Singleton));
}

#[test]
fn test_lifecycle_shorthand_tags() {
    let decl = declaration().annotated("injectable").annotated("scoped");
    let annotations = normalize(&decl, &AnnotationTags::default());

    assert_eq!(annotations.lifecycle, Some(Lifecycle::Scoped));
    assert_eq!(annotations.entries.len(), 2);
}

#[test]
fn test_unknown_lifecycle_is_kept_for_reporting() {
    let decl = declaration().annotated_with("lifecycle", "eternal");
    let annotations = normalize(&decl, &AnnotationTags::default());

    assert_eq!(annotations.lifecycle, None);
    assert_eq!(annotations.invalid_lifecycle.as_deref(), Some("eternal"));
}

#[test]
fn test_first_lifecycle_wins() {
    let decl = declaration()
        .annotated_with("lifecycle", "singleton")
        .annotated("transient");
    let annotations = normalize(&decl, &AnnotationTags::default());

    assert_eq!(annotations.lifecycle, Some(Lifecycle::Singleton));
}

#[test]
fn test_module_requires_payload() {
    let tags = AnnotationTags::default();

    let named = normalize(&declaration().annotated_with("module", " web "), &tags);
    assert_eq!(named.module.as_deref(), Some("web"));

    let empty = normalize(&declaration().annotated("module"), &tags);
    assert_eq!(empty.module, None);
    assert!(empty.is_empty());
}

#[test]
fn test_unknown_tags_are_ignored() {
    let decl = declaration().annotated("deprecated").annotated_with("see", "Logger");
    let annotations = normalize(&decl, &AnnotationTags::default());

    assert!(annotations.is_empty());
}

#[test]
fn test_custom_tag_names() {
    let tags = AnnotationTags {
        service: "token".to_string(),
        multi_keyword: "many".to_string(),
        ..AnnotationTags::default()
    };
    let decl = declaration().annotated_with("token", "many");
    let annotations = normalize(&decl, &tags);

    assert_eq!(annotations.service, Some(Cardinality::Multi));
    assert_eq!(
        normalize(&declaration().annotated("service"), &tags).service,
        None
    );
}
