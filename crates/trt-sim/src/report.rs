//! Run results — totals, per-arrival records, and the CSV report writer.

use std::io;

use trt_core::VehicleId;

use crate::DriverError;

// ── ArrivalRecord ─────────────────────────────────────────────────────────────

/// One controlled vehicle reaching its destination.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalRecord {
    pub vehicle: VehicleId,

    /// Simulation time of arrival in seconds.
    pub arrival_time: f64,

    /// Seconds between the vehicle's first controlled observation and its
    /// arrival.
    pub elapsed: f64,

    /// `true` iff `elapsed` is strictly greater than the vehicle's deadline.
    pub missed_deadline: bool,
}

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// How a run ended.
///
/// `StepCeiling` and `Fault` are early terminations whose reports carry
/// whatever was accumulated up to that point; callers detect incomplete runs
/// by comparing [`RunReport::arrived`] against the controlled-vehicle count.
#[derive(Debug)]
pub enum RunOutcome {
    /// The simulation drained: no vehicles left to track.
    Completed,

    /// The configured step ceiling was reached with vehicles still active.
    /// A normal termination, not an error.
    StepCeiling,

    /// A simulation-client or policy error aborted the loop.
    Fault(DriverError),
}

impl RunOutcome {
    /// `true` only for the normal, fully-drained termination.
    pub fn is_complete(&self) -> bool {
        matches!(self, RunOutcome::Completed)
    }
}

// ── RunReport ─────────────────────────────────────────────────────────────────

/// Everything a run produced.  Always returned, even on the fault path.
#[derive(Debug)]
pub struct RunReport {
    /// Total elapsed simulation seconds across the whole run.
    pub total_time: f64,

    /// Controlled vehicles that reached their destination.
    pub arrived: usize,

    /// Of the arrived, how many exceeded their deadline.
    pub deadline_missed: usize,

    /// Timesteps executed.
    pub steps: u64,

    /// One record per arrival, in arrival order.
    pub arrivals: Vec<ArrivalRecord>,

    pub outcome: RunOutcome,
}

impl RunReport {
    pub(crate) fn empty() -> Self {
        Self {
            total_time:      0.0,
            arrived:         0,
            deadline_missed: 0,
            steps:           0,
            arrivals:        Vec::new(),
            outcome:         RunOutcome::Completed,
        }
    }

    /// Vehicles that neither arrived nor ran to completion, given the
    /// original controlled-vehicle count.
    pub fn still_active(&self, controlled: usize) -> usize {
        controlled.saturating_sub(self.arrived)
    }
}

// ── CSV report ────────────────────────────────────────────────────────────────

/// Write one CSV row per arrival to `out`, with a header row.
///
/// Columns: `vehicle_id,arrival_time,elapsed,missed_deadline`.
pub fn write_arrivals_csv<W: io::Write>(report: &RunReport, out: W) -> Result<(), csv::Error> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["vehicle_id", "arrival_time", "elapsed", "missed_deadline"])?;
    for rec in &report.arrivals {
        w.write_record(&[
            rec.vehicle.0.to_string(),
            rec.arrival_time.to_string(),
            rec.elapsed.to_string(),
            (rec.missed_deadline as u8).to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
