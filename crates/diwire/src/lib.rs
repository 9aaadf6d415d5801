//! # diwire
//!
//! Compiles the annotated declarations of a codebase into a
//! dependency-injection registration plan.
//!
//! A front end exports a [`SourceSnapshot`](domain::SourceSnapshot) of the
//! codebase; diwire mints a token per service type, resolves every
//! injectable factory to its dependency tokens, orders tokens so each
//! follows what it references and groups `(token, factory)` bindings per
//! module.
//!
//! ## Example
//!
//! ```
//! use diwire::domain::value_objects::{Declaration, SymbolKind};
//! use diwire::domain::SnapshotBuilder;
//!
//! let mut builder = SnapshotBuilder::new();
//! let clock = builder.named("Clock", SymbolKind::Interface, "src/clock.ts");
//! let system_clock = builder.callable(vec![], clock);
//! builder
//!     .declare(Declaration::interface("Clock", clock).annotated("service"))
//!     .declare(Declaration::function("systemClock", system_clock).annotated("injectable"));
//!
//! let plan = diwire::resolve(&builder.build(), &Default::default())?;
//! assert_eq!(plan.binding_count(), 1);
//! # Ok::<(), diwire::domain::ResolveError>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Tokens, factories, the plan artifact, the semantic oracle port
//! - `resolver` - The six-pass resolution pipeline
//! - `infrastructure` - Configuration, logging, snapshot loading, plan output

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use diwire_domain::*;
}

/// Resolution pipeline
///
/// Re-exports from the resolver crate for convenience
pub mod resolver {
    pub use diwire_resolver::*;
}

/// Infrastructure layer - config, logging and I/O
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use diwire_infrastructure::*;
}

mod run;

// Re-export commonly used types at the crate root
pub use diwire_domain::{Error, Plan, ResolveError, Result, SourceSnapshot};
pub use resolver::{resolve, resolve_with_sink};
pub use run::{RunOptions, bootstrap, run};
