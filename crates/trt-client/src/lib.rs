//! `trt-client` — the step/query/command surface of the external simulator.
//!
//! The micro-simulation itself is an external, stateful process.  Everything
//! the testbed needs from it is captured by the [`SimulationClient`] trait:
//! advance one timestep, report active vehicles and their segments/speeds,
//! report per-edge vehicle counts and arrivals, and accept redirect commands.
//!
//! A transport adapter for a concrete simulator protocol implements the trait
//! on one side; [`ScriptedClient`] implements it over a pre-built frame
//! script for tests and offline runs.

pub mod client;
pub mod error;
pub mod scripted;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use client::{Rgb, SimulationClient};
pub use error::{ClientError, ClientResult};
pub use scripted::{ScriptedClient, StepFrame};
