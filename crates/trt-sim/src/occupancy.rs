//! Occupancy refresh — one full overwrite per timestep.

use trt_client::{ClientResult, SimulationClient};
use trt_core::{EdgeOccupancy, RoadIndex};

/// Overwrite every tracked edge's count with what the client reports now.
///
/// The driver calls this once per timestep, *before* the routing policy runs,
/// so decision input is never more than one step stale.  Calling it again
/// without an intervening simulation step yields identical counts.
pub fn refresh_occupancy<C: SimulationClient>(
    occupancy: &mut EdgeOccupancy,
    road:      &RoadIndex,
    client:    &C,
) -> ClientResult<()> {
    for edge in road.edges() {
        let count = client.edge_vehicle_count(edge)?;
        occupancy.set(edge, count as u32);
    }
    Ok(())
}
