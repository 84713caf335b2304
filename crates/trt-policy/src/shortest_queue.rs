//! A greedy congestion-aware policy.

use std::cmp::Ordering;

use trt_core::Vehicle;

use crate::{PolicyContext, PolicyResult, RouteController, RouteDecisions};

/// Sends each vehicle onto the outgoing edge that is shortest and, among
/// equally short edges, least occupied.
///
/// Purely local: only the current edge's direct successors are considered,
/// ranked by `(length, occupancy count)`.  Vehicles on edges with no outgoing
/// connections are omitted (no redirect that step).
pub struct ShortestQueuePolicy;

impl RouteController for ShortestQueuePolicy {
    fn decide(
        &mut self,
        batch: &[&Vehicle],
        ctx:   &PolicyContext<'_>,
    ) -> PolicyResult<RouteDecisions> {
        let mut decisions = RouteDecisions::default();

        for vehicle in batch {
            if !ctx.road.contains(vehicle.current_edge) {
                continue;
            }
            let best = ctx
                .road
                .outgoing(vehicle.current_edge)
                .values()
                .copied()
                .min_by(|&a, &b| {
                    ctx.road
                        .length(a)
                        .partial_cmp(&ctx.road.length(b))
                        .unwrap_or(Ordering::Equal)
                        .then(ctx.occupancy.count(a).cmp(&ctx.occupancy.count(b)))
                        // Tie-break on the ID itself so the choice is stable
                        // regardless of map iteration order.
                        .then(a.cmp(&b))
                });

            if let Some(target) = best {
                decisions.insert(vehicle.id, target);
            }
        }

        Ok(decisions)
    }
}
