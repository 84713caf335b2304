use thiserror::Error;

use trt_core::{EdgeId, VehicleId};

/// Failures surfaced by a [`SimulationClient`][crate::SimulationClient]
/// implementation.
///
/// The driver does not retry any of these; a client error aborts the run and
/// the accumulated results are returned as a partial report.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("simulator connection lost")]
    Disconnected,

    #[error("simulator does not know vehicle {0}")]
    UnknownVehicle(VehicleId),

    #[error("simulator does not know edge {0}")]
    UnknownEdge(EdgeId),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
