//! HTTP plumbing shared by Holonet services.
//!
//! Nothing in here knows about the catalog domain: only tracing setup,
//! request-id propagation and the liveness probe.

pub mod health;
pub mod middleware;
pub mod tracing;
