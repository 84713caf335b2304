//! The `RouteController` trait — the main extension point for user code.

use rustc_hash::FxHashMap;

use trt_core::{EdgeId, EdgeOccupancy, RoadIndex, Vehicle, VehicleId};

use crate::PolicyResult;

/// Per-timestep routing decisions: vehicle → chosen next local target.
///
/// Ephemeral — valid only for the timestep it was produced in.  A vehicle
/// omitted from the map receives no redirect command that step.
pub type RouteDecisions = FxHashMap<VehicleId, EdgeId>;

/// Read-only simulation state passed to every `decide` call.
///
/// Built once per timestep by the driver after the occupancy refresh, so the
/// counts a policy sees are never more than one step stale.  Policies must
/// treat everything here as read-only for the duration of the call.
pub struct PolicyContext<'a> {
    /// The recognized-segment index: names, lengths, outgoing connections.
    pub road: &'a RoadIndex,

    /// Vehicle count per edge, as of this timestep's refresh.
    pub occupancy: &'a EdgeOccupancy,
}

/// Pluggable routing policy.
///
/// Implement this trait to define how newly-redirectable vehicles pick their
/// next local target.  The driver calls [`decide`][Self::decide] at most once
/// per timestep, with `batch` containing exactly the controlled vehicles that
/// entered a new recognized segment that step.
///
/// A policy must be pure with respect to simulation side effects: it never
/// commands the simulator itself.  The driver alone applies the returned
/// decisions, and it ignores entries for vehicles outside `batch`.
///
/// `decide` takes `&mut self` so policies can own internal state such as a
/// seeded RNG; the driver is single-threaded, so no `Send + Sync` bound is
/// needed.
pub trait RouteController {
    /// Choose a next local target for each vehicle in `batch` (or a subset).
    ///
    /// # Errors
    ///
    /// An error aborts the run; prefer omitting undecidable vehicles.
    fn decide(
        &mut self,
        batch: &[&Vehicle],
        ctx:   &PolicyContext<'_>,
    ) -> PolicyResult<RouteDecisions>;
}
