//! Resolution passes
//!
//! Each pass consumes the [`ResolutionContext`](crate::ResolutionContext)
//! produced by its predecessor and returns it extended. The driver in
//! [`pipeline`](crate::pipeline) runs them in declaration order below.

mod auto_detect;
mod factories;
mod metadata;
mod ordering;
mod planning;
mod registration;

pub use auto_detect::detect_tokens;
pub use factories::resolve_factories;
pub use metadata::collect_metadata;
pub use ordering::{TokenGraph, order_tokens};
pub use planning::{binding_target, plan_registrations};
pub use registration::register_services;
