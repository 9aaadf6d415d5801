//! Configuration
//!
//! Layered application configuration: defaults, then an optional TOML file,
//! then `DIWIRE__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
