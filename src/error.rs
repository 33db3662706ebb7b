//! Error types for ray query validation.
//!
//! The resolver itself never returns errors: degenerate input collapses to a
//! miss so the per-tick hot path stays infallible. `QueryError` exists for
//! hosts that want to diagnose a bad query before submitting it, via
//! [`RayQuery::validate`](crate::raycast::RayQuery::validate).

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QueryError {
    #[error("ray direction has zero length")]
    ZeroDirection,

    #[error("ray origin or direction is not finite")]
    NonFinite,

    #[error("max distance must be positive, got {0}")]
    NonPositiveDistance(f64),
}
