//! Pipeline driver
//!
//! Owns the [`ResolutionContext`], runs the passes in fixed order and
//! forwards each pass's diagnostics to the caller's sink before the next
//! pass starts.

use crate::context::ResolutionContext;
use crate::phases;
use diwire_domain::ResolveError;
use diwire_domain::ports::{DiagnosticSink, NullSink, SemanticOracle};
use diwire_domain::value_objects::{Plan, ResolverConfig};
use tracing::{debug, debug_span, error, info};

/// A resolution pass
pub type Pass = for<'a> fn(ResolutionContext<'a>) -> Result<ResolutionContext<'a>, ResolveError>;

/// Every pass, in execution order
pub const PASSES: [(&str, Pass); 6] = [
    ("registration", phases::register_services),
    ("auto_detect", phases::detect_tokens),
    ("factories", phases::resolve_factories),
    ("metadata", phases::collect_metadata),
    ("ordering", phases::order_tokens),
    ("planning", phases::plan_registrations),
];

/// Resolve a plan, discarding diagnostics other than those kept in the plan
///
/// # Errors
///
/// Returns [`ResolveError`] when a structural type appears at a key site or
/// the token graph is cyclic. No partial plan is produced.
pub fn resolve(oracle: &dyn SemanticOracle, config: &ResolverConfig) -> Result<Plan, ResolveError> {
    resolve_with_sink(oracle, config, &mut NullSink)
}

/// Resolve a plan, reporting diagnostics to `sink` as each pass completes
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_with_sink(
    oracle: &dyn SemanticOracle,
    config: &ResolverConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<Plan, ResolveError> {
    info!(
        declarations = oracle.declarations().len(),
        "resolving injection plan"
    );
    let mut ctx = ResolutionContext::new(oracle, config);
    let mut reported = Vec::new();

    for (name, pass) in PASSES {
        let _span = debug_span!("pass", pass = name).entered();
        ctx = pass(ctx).inspect_err(|err| error!(pass = name, error = %err, "resolution aborted"))?;
        for diagnostic in ctx.take_diagnostics() {
            sink.report(&diagnostic);
            reported.push(diagnostic);
        }
        debug!(
            tokens = ctx.registry().len(),
            factories = ctx.factories().len(),
            "pass complete"
        );
    }

    let plan = ctx.into_plan(reported);
    info!(
        tokens = plan.tokens.len(),
        factories = plan.factories.len(),
        modules = plan.modules.len(),
        diagnostics = plan.diagnostics.len(),
        "resolution complete"
    );
    Ok(plan)
}
