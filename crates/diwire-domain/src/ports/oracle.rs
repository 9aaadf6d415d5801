//! Semantic Oracle Interface
//!
//! The resolution core never parses or type-checks source itself. Everything
//! it knows about declarations and types comes through this port.

use crate::value_objects::{Declaration, Signature, TypeId, TypeSymbol};
use std::path::Path;

// ============================================================================
// Semantic Oracle Interface
// ============================================================================

/// Semantic Oracle Interface
///
/// Answers the queries the resolution passes need over an immutable snapshot
/// of a codebase. Unknown type handles answer with empty results.
///
/// # Example
///
/// ```
/// use diwire_domain::ports::SemanticOracle;
/// use diwire_domain::value_objects::SymbolKind;
/// use diwire_domain::SnapshotBuilder;
///
/// let mut builder = SnapshotBuilder::new();
/// let store = builder.named("Store", SymbolKind::Interface, "src/store.ts");
/// let user = builder.named("User", SymbolKind::Interface, "src/user.ts");
/// let user_store = builder.instantiate(store, &[user]);
/// let snapshot = builder.build();
///
/// assert_eq!(snapshot.type_text(user_store), "Store<User>");
/// assert_eq!(snapshot.type_name(user_store), "Store");
/// assert_eq!(snapshot.type_arguments(user_store), &[user]);
/// ```
pub trait SemanticOracle {
    /// Every declaration of the snapshot in discovery order
    fn declarations(&self) -> &[Declaration];

    /// Symbol behind a type, `None` for anonymous and primitive types
    fn symbol(&self, ty: TypeId) -> Option<&TypeSymbol>;

    /// Textual representation of a type, including generic arguments
    fn type_text(&self, ty: TypeId) -> &str;

    /// Generic type arguments of an instantiated type
    fn type_arguments(&self, ty: TypeId) -> &[TypeId];

    /// Extended or implemented base types
    fn base_types(&self, ty: TypeId) -> &[TypeId];

    /// Call signatures of a callable type
    fn call_signatures(&self, ty: TypeId) -> &[Signature];

    /// Symbolic name of a type, falling back to its text without generic arguments
    fn type_name(&self, ty: TypeId) -> String {
        match self.symbol(ty) {
            Some(symbol) => symbol.name.clone(),
            None => strip_generic_arguments(self.type_text(ty)).to_string(),
        }
    }

    /// Declaring file of a type's symbol
    fn declaring_file(&self, ty: TypeId) -> Option<&Path> {
        self.symbol(ty).and_then(|s| s.file.as_deref())
    }
}

/// Drop everything from the first `<` on, e.g. `Map<K, V>` becomes `Map`
pub fn strip_generic_arguments(text: &str) -> &str {
    let text = text.trim();
    match text.find('<') {
        Some(idx) => text[..idx].trim_end(),
        None => text,
    }
}
