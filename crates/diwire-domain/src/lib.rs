//! Domain Layer - diwire
//!
//! Core types shared by every layer of the dependency-injection planner:
//! tokens, factories, the registration plan artifact, the semantic oracle
//! port and an immutable in-memory semantic snapshot.
//!
//! ## Architecture
//!
//! The domain layer has no knowledge of how declarations are discovered or
//! how a plan is emitted. It defines:
//! - `value_objects::*`: Tokens, factories, annotations, diagnostics and the `Plan`
//! - `ports::*`: The `SemanticOracle` and `DiagnosticSink` contracts
//! - `snapshot::*`: `SourceSnapshot`, a serialisable oracle implementation
//! - `error::*`: Fatal resolution errors and the workspace error type

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port interfaces implemented by outer layers
pub mod ports;
/// Immutable semantic snapshot
pub mod snapshot;
/// Value objects
pub mod value_objects;

pub use error::{Error, ResolveError, Result};
pub use ports::{DiagnosticSink, SemanticOracle};
pub use snapshot::{SnapshotBuilder, SourceSnapshot};
pub use value_objects::*;
