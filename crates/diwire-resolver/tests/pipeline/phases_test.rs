//! Individual passes driven through the resolution context

use crate::test_utils::*;
use diwire_domain::value_objects::{Cardinality, ResolverConfig, TokenId, TokenOrigin};
use diwire_resolver::ResolutionContext;
use diwire_resolver::pipeline::Pass;
use diwire_resolver::phases::{
    collect_metadata, detect_tokens, order_tokens, plan_registrations, register_services,
    resolve_factories,
};

fn origins<'a>(ctx: &'a ResolutionContext<'_>) -> Vec<(&'a str, TokenOrigin)> {
    ctx.registry()
        .iter()
        .map(|r| (r.token.id.as_str(), r.origin))
        .collect()
}

#[test]
fn test_registration_only_mints_annotated_services() {
    let snapshot = layered_app();
    let config = ResolverConfig::default();
    let ctx = register_services(ResolutionContext::new(&snapshot, &config)).expect("pass");

    assert_eq!(
        origins(&ctx),
        [
            ("LoggerToken", TokenOrigin::Annotated),
            ("RepositoryToken", TokenOrigin::Annotated),
            ("PluginToken", TokenOrigin::Annotated),
        ]
    );
    assert_eq!(
        ctx.registry().get("Plugin").map(|t| t.cardinality),
        Some(Cardinality::Multi)
    );
}

#[test]
fn test_auto_detection_follows_registration() {
    let snapshot = layered_app();
    let config = ResolverConfig::default();
    let ctx = ResolutionContext::new(&snapshot, &config);
    let ctx = detect_tokens(register_services(ctx).expect("pass")).expect("pass");

    assert_eq!(ctx.registry().len(), 4);
    assert_eq!(
        origins(&ctx).last(),
        Some(&("AppLoggerToken", TokenOrigin::AutoDetected))
    );
    assert!(!ctx.registry().contains("Config"));
}

#[test]
fn test_factories_mint_dependency_tokens() {
    let snapshot = layered_app();
    let config = ResolverConfig::default();
    let mut ctx = ResolutionContext::new(&snapshot, &config);
    let passes: [Pass; 3] = [register_services, detect_tokens, resolve_factories];
    for pass in passes {
        ctx = pass(ctx).expect("pass");
    }

    let names: Vec<_> = ctx.factories().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        ["createLogger", "Database", "UserRepository", "auditPlugin", "Metrics.plugin", "legacyPlugin"]
    );
    assert_eq!(
        ctx.registry().entry(&TokenId::from("ConfigToken")).map(|e| e.origin),
        Some(TokenOrigin::Implicit)
    );
    assert_eq!(
        ctx.registry().entry(&TokenId::from("Metrics.pluginToken")).map(|e| e.origin),
        Some(TokenOrigin::Factory)
    );
    assert_eq!(ctx.pending_diagnostics().len(), 3);
    assert!(ctx.order().is_empty());
}

#[test]
fn test_metadata_pass_mints_generic_arguments() {
    let snapshot = layered_app();
    let config = ResolverConfig::default();
    let mut ctx = ResolutionContext::new(&snapshot, &config);
    let passes: [Pass; 3] = [register_services, detect_tokens, resolve_factories];
    for pass in passes {
        ctx = pass(ctx).expect("pass");
    }
    assert!(!ctx.registry().contains("User"));

    let ctx = collect_metadata(ctx).expect("pass");

    assert!(ctx.registry().contains("User"));
    let metadata = ctx
        .metadata(&TokenId::from("UserRepositoryToken"))
        .expect("metadata");
    assert_eq!(ids(&metadata.generics), ["UserToken"]);
    assert!(ctx.metadata(&TokenId::from("LoggerToken")).is_none());
}

#[test]
fn test_planning_groups_by_module() {
    let snapshot = layered_app();
    let config = ResolverConfig::default();
    let mut ctx = ResolutionContext::new(&snapshot, &config);
    let passes: [Pass; 6] = [
        register_services,
        detect_tokens,
        resolve_factories,
        collect_metadata,
        order_tokens,
        plan_registrations,
    ];
    for pass in passes {
        ctx = pass(ctx).expect("pass");
    }

    let data: Vec<_> = ctx.bindings("data").iter().map(|b| b.factory.as_str()).collect();
    assert_eq!(data, ["Database", "UserRepository"]);
    assert!(ctx.bindings("missing").is_empty());
    assert_eq!(ctx.order().len(), ctx.registry().len());
}
