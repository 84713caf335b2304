//! A seeded random-walk policy — the reference example for custom policies.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use trt_core::{Direction, Vehicle};

use crate::{
    PolicyContext, PolicyResult, RouteController, RouteDecisions, compute_local_target,
};

/// How many turn choices to draw per vehicle before converting them into a
/// local target.  Not all choices are necessarily consumed — the walk stops
/// once the lookahead distance is covered.
const MAX_DECISIONS: usize = 10;

/// Picks random valid turn directions until the lookahead is covered, then
/// targets the nearest viable edge.  Deterministic for a given seed.
///
/// Mostly useful as a baseline and as the template for writing real policies:
/// build a direction list per vehicle, then let
/// [`compute_local_target`] turn it into a target the simulator will accept.
pub struct RandomPolicy {
    rng: SmallRng,
}

impl RandomPolicy {
    /// A policy drawing from a deterministic, seeded RNG.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RouteController for RandomPolicy {
    fn decide(
        &mut self,
        batch: &[&Vehicle],
        ctx:   &PolicyContext<'_>,
    ) -> PolicyResult<RouteDecisions> {
        let mut decisions = RouteDecisions::default();

        for vehicle in batch {
            if !ctx.road.contains(vehicle.current_edge) {
                continue; // batch vehicles are on recognized edges; omit anything else
            }
            let mut choices: Vec<Direction> = Vec::new();
            let mut edge = vehicle.current_edge;

            while choices.len() < MAX_DECISIONS {
                let outgoing = ctx.road.outgoing(edge);
                if outgoing.is_empty() {
                    break; // dead end
                }
                let pick = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
                let Some(next) = outgoing.get(&pick).copied() else {
                    continue; // not a valid turn here; redraw
                };
                choices.push(pick);
                edge = next;

                // Two turn-arounds in a row pin the vehicle in a loop; stop
                // extending the walk.
                if choices.len() >= 2
                    && choices[choices.len() - 1] == Direction::TurnAround
                    && choices[choices.len() - 2] == Direction::TurnAround
                {
                    break;
                }
            }

            let target = compute_local_target(&choices, vehicle, ctx.road);
            decisions.insert(vehicle.id, target);
        }

        Ok(decisions)
    }
}
