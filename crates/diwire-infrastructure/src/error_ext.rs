//! Error extension utilities
//!
//! Context extension methods converting foreign errors into the domain
//! [`Error`] type.

use diwire_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```
/// use diwire_domain::Error;
/// use diwire_infrastructure::error_ext::ErrorContext;
///
/// let result: Result<String, _> = std::fs::read_to_string("/definitely/missing.json");
/// let err = result.io_context("failed to read snapshot").unwrap_err();
/// assert!(matches!(err, Error::Io { .. }));
/// ```
pub trait ErrorContext<T> {
    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::io_with_source(format!("{context}: {err}"), err))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}
