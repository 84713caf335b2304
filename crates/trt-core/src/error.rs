//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{EdgeId, VehicleId};

/// The top-level error type for `trt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("edge {0} is not part of the road index")]
    UnknownEdge(EdgeId),

    #[error("edge name {0:?} registered twice")]
    DuplicateEdge(String),

    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),
}

/// Shorthand result type for all `trt-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
