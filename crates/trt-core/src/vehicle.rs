//! The mutable per-vehicle routing record.

use crate::{EdgeId, VehicleId};

/// Routing state for one controlled vehicle.
///
/// Created when the vehicle is declared to the registry (destination and
/// deadline are fixed then); the remaining fields are mutated in place by the
/// simulation driver as it observes the vehicle, and become inert once the
/// vehicle arrives or the run ends.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    /// Stable identifier within the external simulation.
    pub id: VehicleId,

    /// Final target segment.  Fixed at creation.
    pub destination: EdgeId,

    /// Maximum permitted elapsed simulated seconds between first controlled
    /// observation and arrival.  An arrival at exactly `deadline` is on time.
    pub deadline: f64,

    /// Simulation time at which the vehicle first came under control.
    /// `None` until the driver first observes it active.
    pub start_time: Option<f64>,

    /// Segment the vehicle was last observed on.  `EdgeId::INVALID` until the
    /// first observation on a recognized segment.
    pub current_edge: EdgeId,

    /// Last local target the driver commanded, if any.
    pub local_target: Option<EdgeId>,

    /// Latest observed scalar speed in m/s.
    pub current_speed: f64,
}

impl Vehicle {
    /// A freshly declared vehicle: not yet departed, nowhere, speed 0.
    pub fn new(id: VehicleId, destination: EdgeId, deadline: f64) -> Self {
        Self {
            id,
            destination,
            deadline,
            start_time:    None,
            current_edge:  EdgeId::INVALID,
            local_target:  None,
            current_speed: 0.0,
        }
    }

    /// `true` once the driver has recorded a `start_time`.
    #[inline]
    pub fn has_departed(&self) -> bool {
        self.start_time.is_some()
    }

    /// Record the first controlled observation at simulation time `now`.
    #[inline]
    pub fn depart(&mut self, now: f64) {
        self.start_time = Some(now);
    }

    /// Record entry onto a new segment.
    #[inline]
    pub fn enter_edge(&mut self, edge: EdgeId, speed: f64) {
        self.current_edge = edge;
        self.current_speed = speed;
    }

    /// Seconds elapsed since the vehicle came under control, or `None` if it
    /// never departed.  Always computed from this vehicle's own `start_time`.
    #[inline]
    pub fn elapsed(&self, now: f64) -> Option<f64> {
        self.start_time.map(|start| now - start)
    }

    /// Deadline test: strictly later than `deadline` is a miss.
    #[inline]
    pub fn misses_deadline(&self, elapsed: f64) -> bool {
        elapsed > self.deadline
    }
}
