//! Error Extension Tests

use diwire_domain::error::{Error, Result};
use diwire_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read snapshot");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read snapshot"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let io_error = io::Error::other("bad value");

    let result: Result<()> = Err(io_error).config_context("invalid resolver section");

    assert!(matches!(result, Err(Error::Configuration { .. })));
}
