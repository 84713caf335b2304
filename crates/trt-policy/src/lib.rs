//! `trt-policy` — pluggable routing policies for the rust_trt testbed.
//!
//! The simulation driver invokes a [`RouteController`] once per timestep with
//! the batch of vehicles that just entered a new segment; the policy answers
//! with a local target per vehicle.  Any decision-making algorithm can be
//! plugged in as long as it implements the one-method trait.
//!
//! Shipped policies:
//!
//! | Policy                  | Behavior                                        |
//! |-------------------------|-------------------------------------------------|
//! | [`RandomPolicy`]        | Seeded random walk of valid turn directions     |
//! | [`ShortestQueuePolicy`] | Greedy: shortest, least-occupied outgoing edge  |
//! | [`NoopPolicy`]          | Never redirects anything                        |

pub mod controller;
pub mod error;
pub mod noop;
pub mod random;
pub mod shortest_queue;
pub mod target;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use controller::{PolicyContext, RouteController, RouteDecisions};
pub use error::{PolicyError, PolicyResult};
pub use noop::NoopPolicy;
pub use random::RandomPolicy;
pub use shortest_queue::ShortestQueuePolicy;
pub use target::{MIN_LOOKAHEAD_M, compute_local_target};
