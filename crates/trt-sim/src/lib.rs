//! `trt-sim` — the timestep loop that drives deadline-aware routing.
//!
//! # Per-step phases
//!
//! ```text
//! while client.min_expected_vehicles() > 0:
//!   ① Occupancy — overwrite every tracked edge count from the client.
//!   ② Sightings — first-seen controlled vehicles get colored and start their
//!                 personal clock.
//!   ③ Detect    — vehicles whose recognized segment changed since the last
//!                 step form this step's decision batch.
//!   ④ Decide    — one RouteController::decide call for the batch; apply each
//!                 in-batch decision as a redirect command.
//!   ⑤ Arrivals  — elapsed vs. deadline accounting, one record per arrival.
//!   ⑥ Advance   — one simulator step; stop early at the step ceiling.
//! ```
//!
//! A client or policy error aborts the loop; the run still returns whatever
//! was accumulated, with the cause in [`RunOutcome::Fault`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use trt_policy::RandomPolicy;
//! use trt_sim::DriverBuilder;
//!
//! let mut driver = DriverBuilder::new(client, road, RandomPolicy::seeded(42))
//!     .vehicles(controlled)
//!     .build()?;
//! let report = driver.run();
//! println!("{} arrived, {} missed", report.arrived, report.deadline_missed);
//! ```

pub mod driver;
pub mod error;
pub mod occupancy;
pub mod registry;
pub mod report;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use driver::{DEFAULT_MAX_STEPS, Driver, DriverBuilder, DriverConfig};
pub use error::{DriverError, DriverResult};
pub use occupancy::refresh_occupancy;
pub use registry::VehicleRegistry;
pub use report::{ArrivalRecord, RunOutcome, RunReport, write_arrivals_csv};
