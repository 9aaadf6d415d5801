//! Type key classification
//!
//! Decides whether a type can serve as a dependency key. Named types key
//! their token by display name; primitives and type parameters never carry
//! a token; anonymous structural types have no stable identity and are
//! rejected wherever a key is required.

use diwire_domain::constants::PRIMITIVE_TYPES;
use diwire_domain::ports::{SemanticOracle, strip_generic_arguments};
use diwire_domain::value_objects::{SymbolKind, TypeId};
use diwire_domain::ResolveError;

/// Classification of a type used at a token-key site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKey {
    /// `string`, `number`, `boolean`, `any`, `void` or `unknown`
    Primitive,
    /// Generic type parameter such as `T`
    TypeParameter,
    /// Named type; the token display name
    Named(String),
}

/// Classify a type, `None` when it is anonymous or structural
pub fn classify(oracle: &dyn SemanticOracle, ty: TypeId) -> Option<TypeKey> {
    let text = oracle.type_text(ty).trim();
    if PRIMITIVE_TYPES.iter().any(|p| *p == text) {
        return Some(TypeKey::Primitive);
    }
    match oracle.symbol(ty) {
        Some(symbol) if symbol.kind == SymbolKind::TypeParameter => Some(TypeKey::TypeParameter),
        Some(symbol) if is_type_reference(&symbol.name) => Some(TypeKey::Named(symbol.name.clone())),
        Some(_) => None,
        None => {
            let name = strip_generic_arguments(text);
            is_type_reference(name).then(|| TypeKey::Named(name.to_string()))
        }
    }
}

/// Classify a type at a site that requires a key
///
/// Anonymous types abort resolution with a structural type error naming the
/// declaration and the offending type text.
pub fn require_key(
    oracle: &dyn SemanticOracle,
    ty: TypeId,
    declaration: &str,
) -> Result<TypeKey, ResolveError> {
    classify(oracle, ty)
        .ok_or_else(|| ResolveError::structural_type(declaration, oracle.type_text(ty)))
}

/// Display name of a type if it is named, without failing on anonymous types
pub fn named(oracle: &dyn SemanticOracle, ty: TypeId) -> Option<String> {
    match classify(oracle, ty) {
        Some(TypeKey::Named(name)) => Some(name),
        _ => None,
    }
}

/// Whether `text` is a plain, possibly qualified, identifier like `Http.Client`
pub fn is_type_reference(text: &str) -> bool {
    !text.is_empty()
        && text.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}
