//! The `VehicleRegistry` — owned routing state for every controlled vehicle.

use rustc_hash::FxHashMap;

use trt_core::{Vehicle, VehicleId};

/// The set of vehicles under the testbed's control.
///
/// Pre-populated at construction with one [`Vehicle`] per controlled
/// identifier (destination and deadline fixed); the driver is the only
/// mutator afterwards.  Vehicles are never removed — an arrived vehicle's
/// record simply goes inert.  Single-threaded by design.
#[derive(Default)]
pub struct VehicleRegistry {
    vehicles: FxHashMap<VehicleId, Vehicle>,
}

impl VehicleRegistry {
    /// Build a registry from pre-declared vehicles.
    ///
    /// Later duplicates overwrite earlier ones; the driver builder rejects
    /// duplicates before this is reached.
    pub fn from_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        Self {
            vehicles: vehicles.into_iter().map(|v| (v.id, v)).collect(),
        }
    }

    /// Is `id` a controlled vehicle?
    #[inline]
    pub fn contains(&self, id: VehicleId) -> bool {
        self.vehicles.contains_key(&id)
    }

    #[inline]
    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(&id)
    }

    /// Number of controlled vehicles.
    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }
}
