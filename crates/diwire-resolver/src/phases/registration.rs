//! Pass 1: explicit service tokens.

use crate::context::ResolutionContext;
use diwire_domain::ResolveError;
use diwire_domain::value_objects::{DeclarationKind, TokenOrigin};
use tracing::debug;

/// Mint a token for every exported type declaration tagged as a service
pub fn register_services(mut ctx: ResolutionContext<'_>) -> Result<ResolutionContext<'_>, ResolveError> {
    let mut registered = 0usize;

    for normalized in &ctx.declarations {
        let decl = normalized.declaration;
        let Some(cardinality) = normalized.annotations.service else {
            continue;
        };
        if !decl.exported
            || !matches!(
                decl.kind,
                DeclarationKind::Interface | DeclarationKind::TypeAlias | DeclarationKind::Class
            )
        {
            continue;
        }

        let id = ctx
            .registry
            .register_or_get(&decl.qualified_name(), cardinality, TokenOrigin::Annotated)
            .id
            .clone();
        ctx.registry.record_declaring_file(&id, &decl.file);
        registered += 1;
    }

    debug!(registered, "explicit service tokens");
    Ok(ctx)
}
