//! The `SimulationClient` trait — the seam between the testbed and the
//! external simulation process.

use trt_core::{EdgeId, VehicleId};

use crate::ClientResult;

/// An RGB vehicle color, used only for the cosmetic highlight of controlled
/// vehicles.
pub type Rgb = (u8, u8, u8);

/// Synchronous step/query/command surface of the external micro-simulator.
///
/// All calls are blocking and non-reentrant; the driver is the only caller
/// and never issues a call while another is in flight.  Implementations map
/// these methods onto their simulator's wire protocol and intern the
/// simulator's string identifiers into [`VehicleId`]/[`EdgeId`] at that
/// boundary.
///
/// # Errors
///
/// Any `Err` aborts the run in progress; there are no per-call retries.
pub trait SimulationClient {
    /// Lower bound on vehicles still to be handled (active plus pending
    /// insertions).  The driver loops while this is non-zero.
    fn min_expected_vehicles(&self) -> ClientResult<usize>;

    /// Identifiers of all vehicles currently active in the simulation,
    /// controlled or not.
    fn active_vehicles(&self) -> ClientResult<Vec<VehicleId>>;

    /// The segment `id` currently occupies.  May be a segment outside the
    /// recognized road index (junction-internal state); callers must apply
    /// their own recognition test before routing on it.
    fn vehicle_edge(&self, id: VehicleId) -> ClientResult<EdgeId>;

    /// Latest scalar speed of `id` in m/s.
    fn vehicle_speed(&self, id: VehicleId) -> ClientResult<f64>;

    /// Cosmetic: highlight `id` in the simulator's UI.
    fn set_vehicle_color(&mut self, id: VehicleId, color: Rgb) -> ClientResult<()>;

    /// Re-target `id` toward `target`.  Takes effect from the next step.
    fn redirect_vehicle(&mut self, id: VehicleId, target: EdgeId) -> ClientResult<()>;

    /// Number of vehicles currently on `edge`.
    fn edge_vehicle_count(&self, edge: EdgeId) -> ClientResult<usize>;

    /// Vehicles that reached their route end during the last step.
    fn arrived_vehicles(&self) -> ClientResult<Vec<VehicleId>>;

    /// Advance simulated time by one step.
    fn advance_step(&mut self) -> ClientResult<()>;

    /// Current simulated time in seconds.
    fn current_time(&self) -> ClientResult<f64>;
}
