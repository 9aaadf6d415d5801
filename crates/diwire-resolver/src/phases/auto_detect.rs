//! Pass 2: token auto-detection.
//!
//! An exported interface or alias without a service tag inherits a token
//! when it aliases or extends a type that already has one. The pass repeats
//! until no new token appears, so chains of aliases and extensions resolve
//! regardless of declaration order.

use super::metadata::generic_argument_tokens;
use crate::context::ResolutionContext;
use crate::type_keys;
use diwire_domain::ResolveError;
use diwire_domain::value_objects::{
    Cardinality, DeclarationKind, TokenOrigin, TypeId, TypeMetadata,
};
use tracing::{debug, trace};

/// Mint derived tokens for declarations that alias or extend a tokenised type
pub fn detect_tokens(mut ctx: ResolutionContext<'_>) -> Result<ResolutionContext<'_>, ResolveError> {
    let oracle = ctx.oracle;
    let mut detected = 0usize;
    let mut rounds = 0usize;

    loop {
        rounds += 1;
        let mut minted = 0usize;

        for index in 0..ctx.declarations.len() {
            let decl = ctx.declarations[index].declaration;
            if !decl.exported || !decl.kind.is_type_like() {
                continue;
            }
            let name = decl.qualified_name();
            if ctx.registry.contains(&name) {
                continue;
            }

            let candidates: &[TypeId] = match &decl.aliased {
                Some(target) => std::slice::from_ref(target),
                None if decl.kind == DeclarationKind::Interface => oracle.base_types(decl.ty),
                None => &[],
            };

            for &candidate in candidates {
                let Some(base_name) = type_keys::named(oracle, candidate) else {
                    continue;
                };
                let Some(base) = ctx.registry.get(&base_name).map(|t| t.id.clone()) else {
                    continue;
                };

                let id = ctx
                    .registry
                    .register_or_get(&name, Cardinality::Single, TokenOrigin::AutoDetected)
                    .id
                    .clone();
                ctx.registry.record_declaring_file(&id, &decl.file);
                let generics = generic_argument_tokens(oracle, &mut ctx.registry, candidate, &id, &name)?;
                trace!(token = %id, base = %base, "auto-detected token");
                ctx.derivations.insert(
                    id,
                    TypeMetadata {
                        implements: vec![base],
                        generics,
                    },
                );
                minted += 1;
                break;
            }
        }

        detected += minted;
        if minted == 0 {
            break;
        }
    }

    debug!(detected, rounds, "auto-detected tokens");
    Ok(ctx)
}
