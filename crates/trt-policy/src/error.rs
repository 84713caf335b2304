use thiserror::Error;

use trt_core::{EdgeId, VehicleId};

/// Failures a routing policy may raise from `decide`.
///
/// Policies should prefer *omitting* a vehicle from the returned decisions
/// over erroring — an omission just means "no redirect this step".  An error
/// aborts the whole run, matching a client fault.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("edge {0} has no outgoing connections")]
    DeadEnd(EdgeId),

    #[error("vehicle {0} is not on a recognized edge")]
    OffNetwork(VehicleId),

    #[error("policy failure: {0}")]
    Other(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
