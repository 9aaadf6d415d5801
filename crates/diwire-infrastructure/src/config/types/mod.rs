//! Configuration types module

pub mod app;
pub mod logging;
pub mod output;

// Re-export main types
pub use app::*;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
