//! `ScriptedClient` — deterministic frame playback behind the client trait.
//!
//! Each [`StepFrame`] is the complete observable simulator state for one
//! timestep.  `advance_step` moves the cursor to the next frame; once the
//! script is exhausted every query reports an empty simulation
//! (`min_expected_vehicles` = 0), which is the driver's normal termination
//! signal.
//!
//! Every command the driver issues (`redirect_vehicle`, `set_vehicle_color`)
//! is recorded so tests can assert exactly what was commanded and when.  A
//! failure can be armed at a given step to exercise the abort path.

use rustc_hash::FxHashMap;

use trt_core::{EdgeId, VehicleId};

use crate::{ClientError, ClientResult, Rgb, SimulationClient};

// ── StepFrame ─────────────────────────────────────────────────────────────────

/// Observable simulator state for one timestep of a scripted run.
#[derive(Clone, Debug, Default)]
pub struct StepFrame {
    /// Vehicles active during this step.
    pub active: Vec<VehicleId>,

    /// Segment each active vehicle occupies.  Vehicles missing here answer
    /// `vehicle_edge` with an error, as a real simulator would for an unknown
    /// identifier.
    pub edges: FxHashMap<VehicleId, EdgeId>,

    /// Speed per vehicle in m/s.  Missing vehicles read 0.0 (a stopped
    /// vehicle), matching the underlying simulator's habit of reporting zero
    /// speed right after insertion.
    pub speeds: FxHashMap<VehicleId, f64>,

    /// Vehicle count per edge.  Missing edges read 0.
    pub counts: FxHashMap<EdgeId, u32>,

    /// Vehicles that arrived at their route end during the previous step.
    pub arrived: Vec<VehicleId>,

    /// Override for `min_expected_vehicles`.  Defaults to
    /// `max(active.len(), 1)` while the script has frames left, so a quiet
    /// frame (insertion gap) does not end the run early.
    pub min_expected: Option<usize>,
}

impl StepFrame {
    /// A frame with no vehicles at all (an insertion gap).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Place `vehicle` on `edge` at `speed`, marking it active.
    pub fn with_vehicle(mut self, vehicle: VehicleId, edge: EdgeId, speed: f64) -> Self {
        self.active.push(vehicle);
        self.edges.insert(vehicle, edge);
        self.speeds.insert(vehicle, speed);
        self
    }

    /// Report `vehicle` as arrived this step.
    pub fn with_arrival(mut self, vehicle: VehicleId) -> Self {
        self.arrived.push(vehicle);
        self
    }

    /// Report `count` vehicles on `edge`.
    pub fn with_count(mut self, edge: EdgeId, count: u32) -> Self {
        self.counts.insert(edge, count);
        self
    }

    /// Force a specific `min_expected_vehicles` answer for this frame.
    pub fn with_min_expected(mut self, n: usize) -> Self {
        self.min_expected = Some(n);
        self
    }
}

// ── ScriptedClient ────────────────────────────────────────────────────────────

/// A [`SimulationClient`] that replays a fixed frame script.
pub struct ScriptedClient {
    frames:      Vec<StepFrame>,
    cursor:      usize,
    step_length: f64,
    fail_at:     Option<usize>,

    /// Every redirect command issued, as `(step, vehicle, target)`.
    pub redirects: Vec<(usize, VehicleId, EdgeId)>,

    /// Every vehicle the driver colored, in order.
    pub colored: Vec<VehicleId>,
}

impl ScriptedClient {
    /// Play back `frames` at the default step length of 1 s.
    pub fn new(frames: Vec<StepFrame>) -> Self {
        Self {
            frames,
            cursor:      0,
            step_length: 1.0,
            fail_at:     None,
            redirects:   Vec::new(),
            colored:     Vec::new(),
        }
    }

    /// Simulated seconds per step (affects `current_time`).
    pub fn with_step_length(mut self, secs: f64) -> Self {
        self.step_length = secs;
        self
    }

    /// Arm a connection failure: once the cursor reaches `step`, the next
    /// `min_expected_vehicles` call returns [`ClientError::Disconnected`].
    pub fn with_failure_at(mut self, step: usize) -> Self {
        self.fail_at = Some(step);
        self
    }

    /// Steps played back so far.
    pub fn step(&self) -> usize {
        self.cursor
    }

    fn frame(&self) -> Option<&StepFrame> {
        self.frames.get(self.cursor)
    }
}

impl SimulationClient for ScriptedClient {
    fn min_expected_vehicles(&self) -> ClientResult<usize> {
        if self.fail_at == Some(self.cursor) {
            return Err(ClientError::Disconnected);
        }
        Ok(match self.frame() {
            None        => 0,
            Some(frame) => frame.min_expected.unwrap_or(frame.active.len().max(1)),
        })
    }

    fn active_vehicles(&self) -> ClientResult<Vec<VehicleId>> {
        Ok(self.frame().map(|f| f.active.clone()).unwrap_or_default())
    }

    fn vehicle_edge(&self, id: VehicleId) -> ClientResult<EdgeId> {
        self.frame()
            .and_then(|f| f.edges.get(&id).copied())
            .ok_or(ClientError::UnknownVehicle(id))
    }

    fn vehicle_speed(&self, id: VehicleId) -> ClientResult<f64> {
        Ok(self
            .frame()
            .and_then(|f| f.speeds.get(&id).copied())
            .unwrap_or(0.0))
    }

    fn set_vehicle_color(&mut self, id: VehicleId, _color: Rgb) -> ClientResult<()> {
        self.colored.push(id);
        Ok(())
    }

    fn redirect_vehicle(&mut self, id: VehicleId, target: EdgeId) -> ClientResult<()> {
        self.redirects.push((self.cursor, id, target));
        Ok(())
    }

    fn edge_vehicle_count(&self, edge: EdgeId) -> ClientResult<usize> {
        Ok(self
            .frame()
            .and_then(|f| f.counts.get(&edge).copied())
            .unwrap_or(0) as usize)
    }

    fn arrived_vehicles(&self) -> ClientResult<Vec<VehicleId>> {
        Ok(self.frame().map(|f| f.arrived.clone()).unwrap_or_default())
    }

    fn advance_step(&mut self) -> ClientResult<()> {
        self.cursor += 1;
        Ok(())
    }

    fn current_time(&self) -> ClientResult<f64> {
        Ok(self.cursor as f64 * self.step_length)
    }
}
