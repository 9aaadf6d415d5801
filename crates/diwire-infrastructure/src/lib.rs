//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the resolution core.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration through figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`diagnostics`] | Diagnostic sink forwarding to tracing |
//!
//! ### Input & Output
//! | Module | Description |
//! |--------|-------------|
//! | [`snapshot`] | Loading semantic snapshots from disk |
//! | [`report`] | Writing plans and summaries |

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error_ext;
pub mod logging;
pub mod report;
pub mod snapshot;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use diagnostics::TracingDiagnosticSink;
pub use error_ext::ErrorContext;
pub use report::PlanWriter;
pub use snapshot::load_snapshot;
