// Core types shared across the router.
//
// Defines world-space points (`Point3`), integer lattice coordinates
// (`LatticeCoord`), the lattice dimensions that map between coordinates and
// dense node indices (`GridDims`), and the strongly-typed IDs that address
// the graph arenas (`NodeId`, `EdgeId`).
//
// See also: `grid.rs` which owns the arenas these IDs index into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A position in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Squared Euclidean distance. Cheaper than `distance` and monotone in it.
    pub fn distance_squared(self, other: Self) -> f64 {
        let d = self - other;
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl Add for Point3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Integer coordinates of a lattice cell, before scaling into world space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatticeCoord {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl LatticeCoord {
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Offset by signed deltas, or `None` if any component would go negative.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add_signed(dx)?,
            self.y.checked_add_signed(dy)?,
            self.z.checked_add_signed(dz)?,
        ))
    }
}

impl fmt::Display for LatticeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

/// Number of lattice cells along each axis.
///
/// Node indices are dense: `index = x + y * x_count + z * x_count * y_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub x_count: u32,
    pub y_count: u32,
    pub z_count: u32,
}

impl GridDims {
    pub const fn new(x_count: u32, y_count: u32, z_count: u32) -> Self {
        Self {
            x_count,
            y_count,
            z_count,
        }
    }

    /// Total number of lattice cells. Computed in `u64` so callers can
    /// reject dimensions whose product does not fit a `NodeId`.
    pub fn cell_count(self) -> u64 {
        self.x_count as u64 * self.y_count as u64 * self.z_count as u64
    }

    pub fn contains(self, coord: LatticeCoord) -> bool {
        coord.x < self.x_count && coord.y < self.y_count && coord.z < self.z_count
    }

    /// Dense node ID for a lattice coordinate. The coordinate must be in range.
    pub fn node_id(self, coord: LatticeCoord) -> NodeId {
        NodeId(coord.x + coord.y * self.x_count + coord.z * self.x_count * self.y_count)
    }

    /// Inverse of `node_id`.
    pub fn coord_of(self, id: NodeId) -> LatticeCoord {
        let layer = self.x_count * self.y_count;
        LatticeCoord::new(
            id.0 % self.x_count,
            (id.0 / self.x_count) % self.y_count,
            id.0 / layer,
        )
    }
}

// ---------------------------------------------------------------------------
// Arena IDs
// ---------------------------------------------------------------------------

/// Index of a node in `Graph`. Dense and 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of an edge in `Graph`. Assigned at creation and never reused
/// within one build; removed edges leave a tombstone behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
