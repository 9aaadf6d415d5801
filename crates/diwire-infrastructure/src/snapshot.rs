//! Snapshot loading

use crate::error_ext::ErrorContext;
use diwire_domain::error::{Error, Result};
use diwire_domain::snapshot::SourceSnapshot;
use std::path::Path;
use tracing::{debug, info};

/// Read and validate a JSON semantic snapshot
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<SourceSnapshot> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .io_context(format!("Failed to read snapshot {}", path.display()))?;

    let snapshot = SourceSnapshot::from_json(&json).map_err(|err| match err {
        Error::InvalidSnapshot { message } => {
            Error::invalid_snapshot(format!("{}: {message}", path.display()))
        }
        Error::Json { source } => Error::invalid_snapshot(format!("{}: {source}", path.display())),
        other => other,
    })?;

    debug!(types = snapshot.types.len(), "snapshot type table loaded");
    info!(
        path = %path.display(),
        declarations = snapshot.declarations.len(),
        "Snapshot loaded"
    );
    Ok(snapshot)
}
