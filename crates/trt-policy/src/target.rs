//! Local-target computation shared by direction-based policies.

use trt_core::{Direction, EdgeId, RoadIndex, Vehicle};

/// Minimum lookahead distance in metres when converting turn choices into a
/// local target.
///
/// Reported vehicle speed is frequently zero right after a segment entry, so
/// the walk always covers at least this distance.  A target closer than the
/// lookahead risks the simulator retiring the vehicle at its *local* target
/// before it ever reaches its true destination.
pub const MIN_LOOKAHEAD_M: f64 = 20.0;

/// Convert a list of turn `choices` into the nearest viable local target.
///
/// Walks the choices edge-by-edge from the vehicle's current segment,
/// accumulating edge lengths, and stops as soon as one of these holds:
///
/// - the walk reached the vehicle's final destination;
/// - the accumulated path length exceeds `max(current_speed, MIN_LOOKAHEAD_M)`;
/// - two consecutive turn-arounds were taken (the vehicle is pinned in a
///   back-and-forth loop; going further cannot help);
/// - the choices ran out, or the next choice is not a valid turn from the
///   current walk position.
///
/// In every case the last edge reached is returned — best effort, never an
/// error.  With an empty or immediately-invalid choice list this is the
/// vehicle's current edge.
pub fn compute_local_target(
    choices: &[Direction],
    vehicle: &Vehicle,
    road:    &RoadIndex,
) -> EdgeId {
    let lookahead = vehicle.current_speed.max(MIN_LOOKAHEAD_M);
    let mut target = vehicle.current_edge;
    let mut path_length = 0.0;

    for (i, &choice) in choices.iter().enumerate() {
        if path_length > lookahead || target == vehicle.destination {
            break;
        }
        let Some(next) = road.next_edge(target, choice) else {
            break;
        };
        target = next;
        path_length += road.length(target);

        if i > 0 && choice == Direction::TurnAround && choices[i - 1] == Direction::TurnAround {
            break;
        }
    }

    target
}
