//! Pass 6: per-module registration plan.

use crate::context::ResolutionContext;
use diwire_domain::ResolveError;
use diwire_domain::value_objects::{Binding, Factory, TokenId};
use tracing::debug;

/// Group factory bindings by module, keeping first-seen module order
pub fn plan_registrations(mut ctx: ResolutionContext<'_>) -> Result<ResolutionContext<'_>, ResolveError> {
    for factory in &ctx.factories {
        let target = binding_target(factory);
        ctx.modules
            .entry(factory.module.clone())
            .or_default()
            .push(Binding {
                token: target.clone(),
                factory: factory.name.clone(),
            });
        ctx.targets.push(target);
    }

    debug!(
        modules = ctx.modules.len(),
        bindings = ctx.targets.len(),
        "planned registrations"
    );
    Ok(ctx)
}

/// Token a factory is registered under
///
/// Multi factories and factories carrying metadata bind their own token so
/// several implementations of one interface never collide; every other
/// factory binds the token of the type it produces.
pub fn binding_target(factory: &Factory) -> TokenId {
    if factory.multi || !factory.metadata.is_empty() {
        factory.own_token.clone()
    } else {
        factory.produced_token.clone()
    }
}
