//! Pass 3: factory resolution.
//!
//! Every exported declaration tagged injectable becomes a factory record.
//! Classes contribute their constructor parameters; functions and callable
//! variables contribute their first call signature. Types are classified
//! before anything is minted, so a structural parameter aborts the run
//! without leaving partial tokens behind for that declaration.

use crate::context::{NormalizedDeclaration, ResolutionContext};
use crate::type_keys::{TypeKey, require_key};
use diwire_domain::ResolveError;
use diwire_domain::value_objects::{
    Cardinality, DeclarationKind, Diagnostic, Factory, FactoryKind, Lifecycle, Parameter, Token,
    TokenOrigin, TypeId, TypeMetadata,
};
use tracing::{debug, trace};

/// Build factory records for injectable declarations
pub fn resolve_factories(mut ctx: ResolutionContext<'_>) -> Result<ResolutionContext<'_>, ResolveError> {
    let oracle = ctx.oracle;
    let config = ctx.config;
    let mut skipped = 0usize;

    for index in 0..ctx.declarations.len() {
        let NormalizedDeclaration {
            declaration: decl,
            annotations,
        } = &ctx.declarations[index];
        let decl = *decl;
        if !annotations.injectable || !decl.exported {
            continue;
        }
        let name = decl.qualified_name();

        let (kind, parameters, produced): (FactoryKind, &[Parameter], TypeId) = match decl.kind {
            DeclarationKind::Class => (FactoryKind::Class, decl.parameters.as_slice(), decl.ty),
            DeclarationKind::Function | DeclarationKind::Variable => {
                match oracle.call_signatures(decl.ty).first() {
                    Some(signature) => (
                        FactoryKind::Function,
                        signature.parameters.as_slice(),
                        signature.returns,
                    ),
                    None => {
                        trace!(declaration = %name, "injectable without call signature");
                        ctx.pending
                            .push(Diagnostic::unresolvable_callable(&name, &decl.file));
                        skipped += 1;
                        continue;
                    }
                }
            }
            DeclarationKind::Interface | DeclarationKind::TypeAlias => {
                ctx.pending.push(Diagnostic::ignored_annotation(
                    &name,
                    &decl.file,
                    &config.annotations.injectable,
                ));
                continue;
            }
        };

        let produced_key = require_key(oracle, produced, &name)?;
        let parameter_keys = parameters
            .iter()
            .map(|param| require_key(oracle, param.ty, &name))
            .collect::<Result<Vec<_>, _>>()?;

        let TypeKey::Named(produced_type) = produced_key else {
            trace!(declaration = %name, "injectable produces an unbindable type");
            ctx.pending.push(Diagnostic::unbindable_product(
                &name,
                &decl.file,
                oracle.type_text(produced),
            ));
            skipped += 1;
            continue;
        };

        let mut deps = Vec::with_capacity(parameters.len());
        for (param, key) in parameters.iter().zip(parameter_keys) {
            if let TypeKey::Named(dependency) = key {
                let id = ctx
                    .registry
                    .register_or_get(&dependency, Cardinality::Single, TokenOrigin::Implicit)
                    .id
                    .clone();
                if let Some(file) = oracle.declaring_file(param.ty) {
                    ctx.registry.record_declaring_file(&id, file);
                }
                deps.push(id);
            }
        }

        let multi = ctx.registry.get(&produced_type).is_some_and(Token::is_multi);
        let produced_token = ctx
            .registry
            .register_or_get(&produced_type, Cardinality::Single, TokenOrigin::Implicit)
            .id
            .clone();
        if let Some(file) = oracle.declaring_file(produced) {
            ctx.registry.record_declaring_file(&produced_token, file);
        }

        let own_token = if multi {
            let id = ctx
                .registry
                .register_or_get(&name, Cardinality::Single, TokenOrigin::Factory)
                .id
                .clone();
            ctx.registry.record_declaring_file(&id, &decl.file);
            id
        } else {
            ctx.registry.id_for(&name)
        };

        let lifecycle = match (annotations.lifecycle, &annotations.invalid_lifecycle) {
            (Some(lifecycle), _) => lifecycle,
            (None, Some(value)) => {
                trace!(declaration = %name, lifecycle = %value, "unknown lifecycle");
                ctx.pending
                    .push(Diagnostic::unknown_lifecycle(&name, &decl.file, value));
                Lifecycle::default()
            }
            (None, None) => Lifecycle::default(),
        };
        let module = annotations
            .module
            .clone()
            .unwrap_or_else(|| config.default_module.clone());

        trace!(factory = %name, produced = %produced_token, multi, "resolved factory");
        ctx.factories.push(Factory {
            name,
            kind,
            declaring_module_path: decl.file.clone(),
            deps,
            produced_type,
            produced_token,
            own_token,
            multi,
            lifecycle,
            module,
            metadata: TypeMetadata::default(),
        });
        ctx.factory_types.push(produced);
    }

    debug!(factories = ctx.factories.len(), skipped, "resolved factories");
    Ok(ctx)
}
