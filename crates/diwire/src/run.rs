//! End-to-end run: snapshot in, plan out

use diwire_domain::error::Result;
use diwire_domain::value_objects::Plan;
use diwire_infrastructure::config::{AppConfig, ConfigLoader};
use diwire_infrastructure::logging::{init_logging, log_config_loaded};
use diwire_infrastructure::report::summarize;
use diwire_infrastructure::{PlanWriter, TracingDiagnosticSink, load_snapshot};
use diwire_resolver::resolve_with_sink;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Options of a single run, usually taken from the command line
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Semantic snapshot to resolve
    pub snapshot: PathBuf,

    /// Plan destination overriding the configured one
    pub output: Option<PathBuf>,

    /// Pretty printing overriding the configured one
    pub pretty: Option<bool>,

    /// Print a summary to stderr after writing the plan
    pub summary: bool,
}

/// Load configuration from `path` or the default locations, install logging
/// from it, then report the source file
pub fn bootstrap(path: Option<&Path>) -> Result<AppConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let source = loader.source_path()?;
    let config = loader.load()?;
    init_logging(&config.logging)?;
    log_config_loaded(source.as_deref());
    Ok(config)
}

/// Resolve the snapshot and write the plan
///
/// Nothing is written when resolution fails.
pub fn run(options: &RunOptions, config: &AppConfig) -> Result<Plan> {
    let snapshot = load_snapshot(&options.snapshot)?;

    let mut sink = TracingDiagnosticSink::new();
    let plan = resolve_with_sink(&snapshot, &config.resolver, &mut sink)?;
    if sink.warnings() > 0 {
        warn!(warnings = sink.warnings(), "Resolution finished with warnings");
    }

    let mut writer = PlanWriter::new(&config.output);
    if let Some(path) = &options.output {
        writer = writer.with_path(path);
    }
    if let Some(pretty) = options.pretty {
        writer = writer.with_pretty(pretty);
    }
    writer.write(&plan)?;

    if options.summary {
        eprint!("{}", summarize(&plan));
    }
    info!(bindings = plan.binding_count(), "Run complete");
    Ok(plan)
}
