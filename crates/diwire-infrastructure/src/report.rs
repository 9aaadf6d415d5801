//! Plan output
//!
//! Serialises a resolved [`Plan`] as JSON to a file or stdout and renders a
//! short human-readable summary.

use crate::config::OutputConfig;
use crate::error_ext::ErrorContext;
use diwire_domain::error::Result;
use diwire_domain::value_objects::Plan;
use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes plan artifacts
#[derive(Debug, Clone, Default)]
pub struct PlanWriter {
    pretty: bool,
    path: Option<PathBuf>,
}

impl PlanWriter {
    /// Writer for the given output configuration
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            pretty: config.pretty,
            path: config.path.clone(),
        }
    }

    /// Override pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Override the destination file
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Destination file, `None` for stdout
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Serialise the plan as JSON
    pub fn render(&self, plan: &Plan) -> Result<String> {
        let mut json = if self.pretty {
            serde_json::to_string_pretty(plan)?
        } else {
            serde_json::to_string(plan)?
        };
        json.push('\n');
        Ok(json)
    }

    /// Write the plan to the configured destination
    pub fn write(&self, plan: &Plan) -> Result<()> {
        let json = self.render(plan)?;
        match &self.path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .io_context(format!("Failed to create {}", parent.display()))?;
                }
                std::fs::write(path, json)
                    .io_context(format!("Failed to write plan {}", path.display()))?;
                info!(path = %path.display(), "Plan written");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(json.as_bytes())
                    .and_then(|()| stdout.flush())
                    .io_context("Failed to write plan to stdout")?;
            }
        }
        Ok(())
    }
}

/// One-screen summary of a plan
pub fn summarize(plan: &Plan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} tokens, {} factories, {} modules, {} diagnostics",
        plan.tokens.len(),
        plan.factories.len(),
        plan.modules.len(),
        plan.diagnostics.len()
    );
    for module in &plan.modules {
        let _ = writeln!(out, "module {}", module.name);
        for binding in &module.bindings {
            let _ = writeln!(out, "  {} <- {}", binding.token, binding.factory);
        }
    }
    for diagnostic in &plan.diagnostics {
        let _ = writeln!(out, "{diagnostic}");
    }
    out
}
