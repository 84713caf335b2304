//! The road-segment index and its builder.
//!
//! # Data layout
//!
//! The map is stored edge-centric: every recognized (routable) segment gets a
//! dense [`EdgeId`] at registration time, and all per-edge tables (`names`,
//! `lengths`, `outgoing`) are `Vec`s indexed by that ID.  Topology is kept as
//! a per-edge map from local turn [`Direction`] to the next edge, which is
//! exactly the shape the underlying micro-simulator reports connections in.
//!
//! Segments the simulator may report but that are *not* registered here
//! (junction-internal segments, parking areas) simply have no `EdgeId`;
//! [`RoadIndex::contains`] is the recognition test the driver applies before
//! making any routing decision.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{CoreError, CoreResult, EdgeId};

// ── Direction ─────────────────────────────────────────────────────────────────

/// Local turn codes, matching the single-character link directions reported
/// by the underlying simulator.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Straight,
    TurnAround,
    Left,
    Right,
    SlightLeft,
    SlightRight,
}

impl Direction {
    /// All six turn codes, in the simulator's canonical order.
    pub const ALL: [Direction; 6] = [
        Direction::Straight,
        Direction::TurnAround,
        Direction::SlightRight,
        Direction::Right,
        Direction::SlightLeft,
        Direction::Left,
    ];

    /// The simulator's single-character code for this direction.
    pub fn code(self) -> char {
        match self {
            Direction::Straight    => 's',
            Direction::TurnAround  => 't',
            Direction::Left        => 'l',
            Direction::Right       => 'r',
            Direction::SlightLeft  => 'L',
            Direction::SlightRight => 'R',
        }
    }

    /// Parse a simulator direction code.
    pub fn from_code(code: char) -> Option<Direction> {
        match code {
            's' => Some(Direction::Straight),
            't' => Some(Direction::TurnAround),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            'L' => Some(Direction::SlightLeft),
            'R' => Some(Direction::SlightRight),
            _   => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ── RoadIndex ─────────────────────────────────────────────────────────────────

/// The recognized-segment index of the map under simulation.
///
/// Holds, per edge: its external name, its length in metres, and its outgoing
/// connections keyed by turn direction.  Do not construct directly; use
/// [`RoadIndexBuilder`].
pub struct RoadIndex {
    /// External segment name of each edge.  Indexed by `EdgeId`.
    names: Vec<String>,

    /// Reverse lookup: external name → dense `EdgeId`.
    index: FxHashMap<String, EdgeId>,

    /// Length of each edge in metres.  Indexed by `EdgeId`.
    lengths: Vec<f64>,

    /// Outgoing connections of each edge.  Indexed by `EdgeId`.
    outgoing: Vec<FxHashMap<Direction, EdgeId>>,
}

impl RoadIndex {
    /// Number of recognized edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.names.len()
    }

    /// Recognition test: is `edge` a registered segment of this map?
    ///
    /// `EdgeId::INVALID` and any out-of-range ID are unrecognized.
    #[inline]
    pub fn contains(&self, edge: EdgeId) -> bool {
        edge.index() < self.names.len()
    }

    /// Dense `EdgeId` for an external segment name, if registered.
    pub fn lookup(&self, name: &str) -> Option<EdgeId> {
        self.index.get(name).copied()
    }

    /// External name of a recognized edge.
    ///
    /// # Panics
    /// Panics if `edge` is not recognized; call [`contains`][Self::contains]
    /// first when the ID comes from outside.
    pub fn name(&self, edge: EdgeId) -> &str {
        &self.names[edge.index()]
    }

    /// Length of a recognized edge in metres.
    #[inline]
    pub fn length(&self, edge: EdgeId) -> f64 {
        self.lengths[edge.index()]
    }

    /// Outgoing connections of a recognized edge.
    #[inline]
    pub fn outgoing(&self, edge: EdgeId) -> &FxHashMap<Direction, EdgeId> {
        &self.outgoing[edge.index()]
    }

    /// The edge reached by taking `dir` from `from`, if that turn exists.
    #[inline]
    pub fn next_edge(&self, from: EdgeId, dir: Direction) -> Option<EdgeId> {
        self.outgoing.get(from.index())?.get(&dir).copied()
    }

    /// Iterator over every recognized `EdgeId`, in dense order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.names.len() as u32).map(EdgeId)
    }
}

// ── RoadIndexBuilder ──────────────────────────────────────────────────────────

/// Incremental builder for [`RoadIndex`].
///
/// # Example
///
/// ```rust,ignore
/// let mut b = RoadIndexBuilder::new();
/// let a = b.add_edge("A", 100.0)?;
/// let c = b.add_edge("C", 250.0)?;
/// b.connect(a, Direction::Straight, c)?;
/// let road = b.build();
/// ```
pub struct RoadIndexBuilder {
    names:    Vec<String>,
    index:    FxHashMap<String, EdgeId>,
    lengths:  Vec<f64>,
    outgoing: Vec<FxHashMap<Direction, EdgeId>>,
}

impl RoadIndexBuilder {
    pub fn new() -> Self {
        Self {
            names:    Vec::new(),
            index:    FxHashMap::default(),
            lengths:  Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Register a segment and return its dense `EdgeId`.
    ///
    /// # Errors
    /// Returns [`CoreError::DuplicateEdge`] if `name` was already registered.
    pub fn add_edge(&mut self, name: impl Into<String>, length_m: f64) -> CoreResult<EdgeId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(CoreError::DuplicateEdge(name));
        }
        let id = EdgeId(self.names.len() as u32);
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.lengths.push(length_m);
        self.outgoing.push(FxHashMap::default());
        Ok(id)
    }

    /// Declare that taking `dir` from `from` leads onto `to`.
    ///
    /// A later `connect` for the same `(from, dir)` pair overwrites the
    /// earlier one.
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownEdge`] if either endpoint is unregistered.
    pub fn connect(&mut self, from: EdgeId, dir: Direction, to: EdgeId) -> CoreResult<()> {
        if from.index() >= self.names.len() {
            return Err(CoreError::UnknownEdge(from));
        }
        if to.index() >= self.names.len() {
            return Err(CoreError::UnknownEdge(to));
        }
        self.outgoing[from.index()].insert(dir, to);
        Ok(())
    }

    pub fn build(self) -> RoadIndex {
        RoadIndex {
            names:    self.names,
            index:    self.index,
            lengths:  self.lengths,
            outgoing: self.outgoing,
        }
    }
}

impl Default for RoadIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
