//! Token registry
//!
//! The global symbol table of the run. Tokens are minted at most once per
//! display name and never change afterwards; insertion order is kept so
//! every later pass iterates deterministically.

use diwire_domain::value_objects::{Cardinality, Token, TokenId, TokenOrigin};
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::path::{Path, PathBuf};
use tracing::trace;

/// A registry entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredToken {
    /// The token
    pub token: Token,
    /// How it was minted
    pub origin: TokenOrigin,
}

/// Insertion-ordered token table with import bookkeeping
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    suffix: String,
    tokens: IndexMap<TokenId, RegisteredToken>,
    imports: IndexMap<TokenId, PathBuf>,
}

impl TokenRegistry {
    /// Create an empty registry minting ids with `suffix`
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            tokens: IndexMap::new(),
            imports: IndexMap::new(),
        }
    }

    /// Token id a display name maps to, whether minted or not
    pub fn id_for(&self, display_name: &str) -> TokenId {
        TokenId::derive(display_name, &self.suffix)
    }

    /// Return the token for `display_name`, minting it on first request
    ///
    /// Cardinality and origin are fixed by the first call; later calls with
    /// a different cardinality return the existing token unchanged.
    pub fn register_or_get(
        &mut self,
        display_name: &str,
        cardinality: Cardinality,
        origin: TokenOrigin,
    ) -> &Token {
        let id = self.id_for(display_name);
        match self.tokens.entry(id) {
            Entry::Occupied(entry) => &entry.into_mut().token,
            Entry::Vacant(entry) => {
                trace!(token = %entry.key(), ?cardinality, ?origin, "minted token");
                let token = Token::new(display_name, &self.suffix, cardinality);
                &entry.insert(RegisteredToken { token, origin }).token
            }
        }
    }

    /// Look up a token by display name
    pub fn get(&self, display_name: &str) -> Option<&Token> {
        self.tokens.get(&self.id_for(display_name)).map(|r| &r.token)
    }

    /// Look up a registry entry by id
    pub fn entry(&self, id: &TokenId) -> Option<&RegisteredToken> {
        self.tokens.get(id)
    }

    /// Whether a token exists for `display_name`
    pub fn contains(&self, display_name: &str) -> bool {
        self.tokens.contains_key(&self.id_for(display_name))
    }

    /// Entry at an insertion position
    pub fn at(&self, index: usize) -> Option<&RegisteredToken> {
        self.tokens.get_index(index).map(|(_, r)| r)
    }

    /// Insertion position of a token
    pub fn index_of(&self, id: &TokenId) -> Option<usize> {
        self.tokens.get_index_of(id)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredToken> {
        self.tokens.values()
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no token has been minted
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Record the file a token's type is declared in; the first record wins
    pub fn record_declaring_file(&mut self, id: &TokenId, file: &Path) {
        if file.as_os_str().is_empty() || !self.tokens.contains_key(id) {
            return;
        }
        self.imports
            .entry(id.clone())
            .or_insert_with(|| file.to_path_buf());
    }

    /// Declaring file per token, in recording order
    pub fn imports(&self) -> &IndexMap<TokenId, PathBuf> {
        &self.imports
    }
}
