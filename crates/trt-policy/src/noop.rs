//! A no-op policy — vehicles are never redirected.

use trt_core::Vehicle;

use crate::{PolicyContext, PolicyResult, RouteController, RouteDecisions};

/// A [`RouteController`] that always returns an empty decision map.
///
/// Useful as a placeholder in tests and for runs where vehicles should just
/// follow their pre-recorded routes.
pub struct NoopPolicy;

impl RouteController for NoopPolicy {
    fn decide(
        &mut self,
        _batch: &[&Vehicle],
        _ctx:   &PolicyContext<'_>,
    ) -> PolicyResult<RouteDecisions> {
        Ok(RouteDecisions::default())
    }
}
