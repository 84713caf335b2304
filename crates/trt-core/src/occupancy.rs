//! Per-edge vehicle counts — the situational input to routing policies.

use crate::{EdgeId, RoadIndex};

/// Vehicle count per recognized edge, overwritten wholesale on every refresh.
///
/// Counts are a *snapshot*, not an accumulator: whatever the simulator
/// reports for an edge replaces the stored value.  The driver refreshes this
/// once per timestep before any policy call, so policies never see data more
/// than one step stale.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeOccupancy {
    /// Count per edge.  Indexed by `EdgeId`; always length `edge_count`.
    counts: Vec<u32>,
}

impl EdgeOccupancy {
    /// All-zero occupancy sized for `road`.
    pub fn for_road(road: &RoadIndex) -> Self {
        Self {
            counts: vec![0; road.edge_count()],
        }
    }

    /// Current count on a recognized edge.
    ///
    /// Unrecognized edges report 0 rather than panicking — the tracker only
    /// ever stores counts for registered edges.
    #[inline]
    pub fn count(&self, edge: EdgeId) -> u32 {
        self.counts.get(edge.index()).copied().unwrap_or(0)
    }

    /// Overwrite the count for one edge.  No-op for unrecognized edges.
    #[inline]
    pub fn set(&mut self, edge: EdgeId, count: u32) {
        if let Some(slot) = self.counts.get_mut(edge.index()) {
            *slot = count;
        }
    }

    /// Number of tracked edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
