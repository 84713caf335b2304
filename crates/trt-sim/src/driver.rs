//! The `Driver` struct and its timestep loop.

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use trt_client::{Rgb, SimulationClient};
use trt_core::{EdgeOccupancy, RoadIndex, Vehicle, VehicleId};
use trt_policy::{PolicyContext, RouteController};

use crate::occupancy::refresh_occupancy;
use crate::registry::VehicleRegistry;
use crate::report::{ArrivalRecord, RunOutcome, RunReport};
use crate::{DriverError, DriverResult};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Default hard ceiling on timesteps per run.
pub const DEFAULT_MAX_STEPS: u64 = 5_000;

/// Default highlight color for controlled vehicles (red).
const DEFAULT_VEHICLE_COLOR: Rgb = (255, 0, 0);

/// Tunables passed to the driver at construction.
#[derive(Clone, Debug)]
pub struct DriverConfig {
    /// Hard ceiling on timesteps.  Reaching it ends the run with
    /// [`RunOutcome::StepCeiling`] — a normal termination, not an error.
    pub max_steps: u64,

    /// Cosmetic highlight applied to each controlled vehicle on first
    /// sighting.
    pub vehicle_color: Rgb,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_steps:     DEFAULT_MAX_STEPS,
            vehicle_color: DEFAULT_VEHICLE_COLOR,
        }
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// Outcome of one processed timestep.
enum StepOutcome {
    /// Keep looping.
    Continue,

    /// The simulation has no vehicles left to track — normal termination.
    Drained,
}

/// The timestep loop tying client, registry, occupancy, and policy together.
///
/// `Driver<C, P>` owns all run state.  Create via [`DriverBuilder`], then
/// call [`run`][Self::run] exactly once; the fields stay accessible
/// afterwards for inspection.
pub struct Driver<C: SimulationClient, P: RouteController> {
    /// The external simulation process, behind its query/command surface.
    pub client: C,

    /// The recognized-segment index of the map under simulation.
    pub road: RoadIndex,

    /// Routing state for every controlled vehicle.
    pub registry: VehicleRegistry,

    /// Per-edge vehicle counts, refreshed at the top of every step.
    pub occupancy: EdgeOccupancy,

    /// The routing policy.  Called at most once per timestep.
    pub policy: P,

    pub config: DriverConfig,
}

impl<C: SimulationClient, P: RouteController> Driver<C, P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the loop to termination and return the accumulated results.
    ///
    /// Always returns a [`RunReport`]; an aborting client or policy error is
    /// carried in [`RunOutcome::Fault`] alongside whatever was accumulated
    /// before the fault.
    pub fn run(&mut self) -> RunReport {
        let mut report = RunReport::empty();

        let start_time = match self.client.current_time() {
            Ok(t) => t,
            Err(e) => {
                let err = DriverError::from(e);
                warn!(error = %err, "run aborted before the first step");
                report.outcome = RunOutcome::Fault(err);
                return report;
            }
        };

        loop {
            match self.step(&mut report) {
                Ok(StepOutcome::Drained) => {
                    report.outcome = RunOutcome::Completed;
                    break;
                }
                Ok(StepOutcome::Continue) => {}
                Err(err) => {
                    warn!(error = %err, steps = report.steps, "run aborted");
                    report.outcome = RunOutcome::Fault(err);
                    break;
                }
            }

            if report.steps >= self.config.max_steps {
                info!(steps = report.steps, "step ceiling reached; ending run");
                report.outcome = RunOutcome::StepCeiling;
                break;
            }
        }

        if let Ok(end_time) = self.client.current_time() {
            report.total_time = end_time - start_time;
        }
        report
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn step(&mut self, report: &mut RunReport) -> DriverResult<StepOutcome> {
        // ── Phase 0: continuation predicate ───────────────────────────────
        if self.client.min_expected_vehicles()? == 0 {
            return Ok(StepOutcome::Drained);
        }
        let active = self.client.active_vehicles()?;
        let now = self.client.current_time()?;

        // ── Phase 1: occupancy refresh ────────────────────────────────────
        //
        // Must precede the policy call: decision input is at most one step
        // stale.
        refresh_occupancy(&mut self.occupancy, &self.road, &self.client)?;

        // ── Phase 2+3: sightings and segment-entry detection ──────────────
        //
        // A vehicle joins the decision batch only when the client reports it
        // on a recognized segment different from its recorded one, so
        // `current_edge` changes at most once per step and decisions happen
        // exactly once per segment entry.
        let mut batch: Vec<VehicleId> = Vec::new();
        for &id in &active {
            let Some(vehicle) = self.registry.get_mut(id) else {
                continue; // not a controlled vehicle
            };

            if !vehicle.has_departed() {
                self.client.set_vehicle_color(id, self.config.vehicle_color)?;
                vehicle.depart(now);
            }

            let edge = self.client.vehicle_edge(id)?;
            if !self.road.contains(edge) {
                continue; // transient junction-internal state; not an error
            }
            if edge == vehicle.current_edge {
                continue; // still on the same segment; no new decision needed
            }

            let speed = self.client.vehicle_speed(id)?;
            vehicle.enter_edge(edge, speed);
            batch.push(id);
        }

        // ── Phase 4: decide and apply ─────────────────────────────────────
        if !batch.is_empty() {
            let decisions = {
                let ctx = PolicyContext {
                    road:      &self.road,
                    occupancy: &self.occupancy,
                };
                let batch_refs: Vec<&Vehicle> = batch
                    .iter()
                    .filter_map(|&id| self.registry.get(id))
                    .collect();
                self.policy.decide(&batch_refs, &ctx)?
            };
            debug!(batch = batch.len(), decisions = decisions.len(), "routing decisions");

            // Decisions for vehicles outside this step's batch are ignored;
            // batch membership implies the vehicle is still active.
            let batch_set: FxHashSet<VehicleId> = batch.iter().copied().collect();
            for (&id, &target) in &decisions {
                if !batch_set.contains(&id) {
                    continue;
                }
                self.client.redirect_vehicle(id, target)?;
                if let Some(vehicle) = self.registry.get_mut(id) {
                    vehicle.local_target = Some(target);
                }
            }
        }

        // ── Phase 5: arrivals and deadline accounting ─────────────────────
        for id in self.client.arrived_vehicles()? {
            let Some(vehicle) = self.registry.get(id) else {
                continue;
            };
            let Some(elapsed) = vehicle.elapsed(now) else {
                continue; // arrived without ever being sighted; nothing to account
            };
            let missed = vehicle.misses_deadline(elapsed);

            report.arrived += 1;
            if missed {
                report.deadline_missed += 1;
            }
            info!(vehicle = %id, elapsed, missed, "vehicle arrived");
            report.arrivals.push(ArrivalRecord {
                vehicle: id,
                arrival_time: now,
                elapsed,
                missed_deadline: missed,
            });
        }

        // ── Phase 6: advance ──────────────────────────────────────────────
        self.client.advance_step()?;
        report.steps += 1;
        Ok(StepOutcome::Continue)
    }
}

// ── DriverBuilder ─────────────────────────────────────────────────────────────

/// Validating builder for [`Driver`].
///
/// # Required inputs
///
/// - the [`SimulationClient`]
/// - the [`RoadIndex`]
/// - a `P: RouteController`
///
/// # Optional inputs
///
/// | Method          | Default                  |
/// |-----------------|--------------------------|
/// | `.vehicles(v)`  | no controlled vehicles   |
/// | `.config(c)`    | `DriverConfig::default()`|
pub struct DriverBuilder<C: SimulationClient, P: RouteController> {
    client:   C,
    road:     RoadIndex,
    policy:   P,
    vehicles: Vec<Vehicle>,
    config:   DriverConfig,
}

impl<C: SimulationClient, P: RouteController> DriverBuilder<C, P> {
    pub fn new(client: C, road: RoadIndex, policy: P) -> Self {
        Self {
            client,
            road,
            policy,
            vehicles: Vec::new(),
            config: DriverConfig::default(),
        }
    }

    /// Declare the controlled vehicles (destination and deadline pre-set).
    pub fn vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.vehicles = vehicles;
        self
    }

    pub fn config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the declared vehicles and assemble a ready-to-run [`Driver`].
    ///
    /// # Errors
    ///
    /// - [`DriverError::DuplicateVehicle`] if an ID is declared twice.
    /// - [`DriverError::UnknownDestination`] if a destination is not in the
    ///   road index.
    pub fn build(self) -> DriverResult<Driver<C, P>> {
        let mut seen = FxHashSet::default();
        for vehicle in &self.vehicles {
            if !seen.insert(vehicle.id) {
                return Err(DriverError::DuplicateVehicle(vehicle.id));
            }
            if !self.road.contains(vehicle.destination) {
                return Err(DriverError::UnknownDestination {
                    vehicle:     vehicle.id,
                    destination: vehicle.destination,
                });
            }
        }

        let occupancy = EdgeOccupancy::for_road(&self.road);
        Ok(Driver {
            client:   self.client,
            registry: VehicleRegistry::from_vehicles(self.vehicles),
            road:     self.road,
            occupancy,
            policy:   self.policy,
            config:   self.config,
        })
    }
}
