//! Resolution Pipeline - diwire
//!
//! Turns the annotated declarations of an immutable semantic snapshot into a
//! dependency-injection registration [`Plan`](diwire_domain::Plan).
//!
//! # Pipeline
//!
//! ```text
//! SemanticOracle → normalise annotations → ResolutionContext
//!     1. registration   explicit service tokens
//!     2. auto_detect    tokens inherited through aliasing / extension
//!     3. factories      factory records with dependency tokens
//!     4. metadata       implements / generics per token and multi factory
//!     5. ordering       cycle check and emission order
//!     6. planning       per-module (token, factory) bindings
//! → Plan
//! ```
//!
//! Every pass takes the context by value and hands it back. A fatal
//! [`ResolveError`](diwire_domain::ResolveError) aborts the run and no plan
//! is produced; recoverable diagnostics are forwarded to a
//! [`DiagnosticSink`](diwire_domain::DiagnosticSink) after each pass.
//!
//! # Usage
//!
//! ```
//! use diwire_domain::value_objects::{Declaration, ResolverConfig, SymbolKind};
//! use diwire_domain::SnapshotBuilder;
//!
//! let mut builder = SnapshotBuilder::new();
//! let logger = builder.named("Logger", SymbolKind::Interface, "src/logger.ts");
//! let create = builder.callable(vec![], logger);
//! builder
//!     .declare(Declaration::interface("Logger", logger).annotated("service"))
//!     .declare(Declaration::function("createLogger", create).annotated("injectable"));
//! let snapshot = builder.build();
//!
//! let plan = diwire_resolver::resolve(&snapshot, &ResolverConfig::default())?;
//! assert_eq!(plan.modules[0].bindings[0].token.as_str(), "LoggerToken");
//! # Ok::<(), diwire_domain::ResolveError>(())
//! ```

pub mod annotations;
pub mod context;
pub mod diagnostics;
pub mod phases;
pub mod pipeline;
pub mod registry;
pub mod type_keys;

pub use context::ResolutionContext;
pub use diagnostics::CollectingSink;
pub use pipeline::{resolve, resolve_with_sink};
pub use registry::TokenRegistry;
