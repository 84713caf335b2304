use thiserror::Error;

use trt_client::ClientError;
use trt_core::{EdgeId, VehicleId};
use trt_policy::PolicyError;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("vehicle {0} declared twice")]
    DuplicateVehicle(VehicleId),

    #[error("vehicle {vehicle} has unrecognized destination {destination}")]
    UnknownDestination {
        vehicle:     VehicleId,
        destination: EdgeId,
    },

    #[error("simulation client error: {0}")]
    Client(#[from] ClientError),

    #[error("routing policy error: {0}")]
    Policy(#[from] PolicyError),
}

pub type DriverResult<T> = Result<T, DriverError>;
