//! `trt-core` — foundational types for the `rust_trt` routing testbed.
//!
//! This crate is a dependency of every other `trt-*` crate.  It intentionally
//! has no `trt-*` dependencies and minimal external ones (only `rustc-hash`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `VehicleId`, `EdgeId`                                 |
//! | [`road`]      | `RoadIndex`, `RoadIndexBuilder`, `Direction`          |
//! | [`vehicle`]   | The mutable per-vehicle routing record                |
//! | [`occupancy`] | `EdgeOccupancy` — per-edge vehicle counts             |
//! | [`error`]     | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod occupancy;
pub mod road;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{EdgeId, VehicleId};
pub use occupancy::EdgeOccupancy;
pub use road::{Direction, RoadIndex, RoadIndexBuilder};
pub use vehicle::Vehicle;
