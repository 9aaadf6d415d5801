//! Pass 4: reflective metadata.
//!
//! For every token this pass records which other tokens its type implements
//! (through aliasing, extension or implementation, transitively) and which
//! tokens appear as generic arguments of those supertypes. Multi factories
//! get the same treatment for the type they return, keyed by their own
//! token. Generic arguments may mint implicit tokens; those are appended to
//! the registry and visited by the same loop.

use crate::context::ResolutionContext;
use crate::registry::TokenRegistry;
use crate::type_keys::{self, TypeKey, require_key};
use diwire_domain::ResolveError;
use diwire_domain::ports::SemanticOracle;
use diwire_domain::value_objects::{Cardinality, TokenId, TokenOrigin, TypeId, TypeMetadata};
use indexmap::IndexSet;
use std::collections::HashSet;
use tracing::debug;

/// Compute implements/generics metadata for tokens and multi factories
pub fn collect_metadata(mut ctx: ResolutionContext<'_>) -> Result<ResolutionContext<'_>, ResolveError> {
    let oracle = ctx.oracle;

    for (factory, &produced) in ctx.factories.iter_mut().zip(&ctx.factory_types) {
        if !factory.multi {
            continue;
        }
        let mut walker = MetadataWalker::new(
            oracle,
            &mut ctx.registry,
            factory.own_token.clone(),
            &factory.name,
        );
        walker.walk(produced)?;
        let metadata = walker.finish();
        if !metadata.is_empty() {
            ctx.token_metadata
                .insert(factory.own_token.clone(), metadata.clone());
        }
        factory.metadata = metadata;
    }

    let mut index = 0;
    while let Some(entry) = ctx.registry.at(index).cloned() {
        index += 1;
        if entry.origin == TokenOrigin::Factory {
            continue;
        }
        let subject = entry.token.id;
        let mut walker = MetadataWalker::new(
            oracle,
            &mut ctx.registry,
            subject.clone(),
            &entry.token.display_name,
        );
        if let Some(derived) = ctx.derivations.get(&subject) {
            walker.seed(derived);
        }
        if let Some(&ty) = ctx.declared_types.get(&entry.token.display_name) {
            walker.walk(ty)?;
        }
        let metadata = walker.finish();
        if !metadata.is_empty() {
            ctx.token_metadata.insert(subject, metadata);
        }
    }

    debug!(
        tokens = ctx.registry.len(),
        with_metadata = ctx.token_metadata.len(),
        "collected metadata"
    );
    Ok(ctx)
}

/// Tokens of the generic arguments of `ty` as seen from `subject`, nested
/// arguments included
///
/// Named arguments mint implicit tokens; primitives and type parameters are
/// skipped; anonymous arguments abort with a structural type error. The
/// subject itself is never listed.
pub(crate) fn generic_argument_tokens(
    oracle: &dyn SemanticOracle,
    registry: &mut TokenRegistry,
    ty: TypeId,
    subject: &TokenId,
    declaration: &str,
) -> Result<Vec<TokenId>, ResolveError> {
    let mut walker = MetadataWalker::new(oracle, registry, subject.clone(), declaration);
    walker.collect_arguments(ty)?;
    Ok(walker.generics.into_iter().collect())
}

struct MetadataWalker<'o, 'r> {
    oracle: &'o dyn SemanticOracle,
    registry: &'r mut TokenRegistry,
    subject: TokenId,
    declaration: String,
    implements: IndexSet<TokenId>,
    generics: IndexSet<TokenId>,
    visited: HashSet<TypeId>,
    expanded: HashSet<TypeId>,
}

impl<'o, 'r> MetadataWalker<'o, 'r> {
    fn new(
        oracle: &'o dyn SemanticOracle,
        registry: &'r mut TokenRegistry,
        subject: TokenId,
        declaration: &str,
    ) -> Self {
        Self {
            oracle,
            registry,
            subject,
            declaration: declaration.to_string(),
            implements: IndexSet::new(),
            generics: IndexSet::new(),
            visited: HashSet::new(),
            expanded: HashSet::new(),
        }
    }

    fn seed(&mut self, metadata: &TypeMetadata) {
        self.implements.extend(metadata.implements.iter().cloned());
        self.generics.extend(metadata.generics.iter().cloned());
    }

    /// Visit a type and everything it extends
    fn walk(&mut self, ty: TypeId) -> Result<(), ResolveError> {
        if !self.visited.insert(ty) {
            return Ok(());
        }

        if let Some(name) = type_keys::named(self.oracle, ty) {
            let token = self.registry.get(&name).map(|t| t.id.clone());
            if let Some(token) = token.filter(|t| *t != self.subject) {
                self.implements.insert(token);
                self.collect_arguments(ty)?;
            }
        }

        for &base in self.oracle.base_types(ty) {
            self.walk(base)?;
        }
        Ok(())
    }

    fn collect_arguments(&mut self, ty: TypeId) -> Result<(), ResolveError> {
        for &argument in self.oracle.type_arguments(ty) {
            if let TypeKey::Named(name) = require_key(self.oracle, argument, &self.declaration)? {
                let id = self
                    .registry
                    .register_or_get(&name, Cardinality::Single, TokenOrigin::Implicit)
                    .id
                    .clone();
                if let Some(file) = self.oracle.declaring_file(argument) {
                    self.registry.record_declaring_file(&id, file);
                }
                if id != self.subject {
                    self.generics.insert(id);
                }
            }
            if self.expanded.insert(argument) {
                self.collect_arguments(argument)?;
            }
        }
        Ok(())
    }

    fn finish(self) -> TypeMetadata {
        TypeMetadata {
            implements: self.implements.into_iter().collect(),
            generics: self.generics.into_iter().collect(),
        }
    }
}
