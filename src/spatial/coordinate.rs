//! Grid coordinates and the directed edges that connect them

use crate::math::vector::Displacement;
use std::fmt;

/// Integer grid position in (row, col) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Vector pointing from this coordinate to `other`
    pub fn displacement_to(&self, other: &Self) -> Displacement {
        Displacement::new(
            other.row as f64 - self.row as f64,
            other.col as f64 - self.col as f64,
        )
    }

    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.displacement_to(other).magnitude()
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Directed segment between two distinct coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: Coordinate,
    endpoint: Coordinate,
}

impl Edge {
    /// Create an edge, rejecting the degenerate case where both ends coincide
    pub fn try_new(source: Coordinate, endpoint: Coordinate) -> Option<Self> {
        (source != endpoint).then_some(Self { source, endpoint })
    }

    /// Coordinate the edge starts from
    pub const fn source(&self) -> Coordinate {
        self.source
    }

    /// Coordinate the edge ends at
    pub const fn endpoint(&self) -> Coordinate {
        self.endpoint
    }

    /// Vector from source to endpoint
    pub fn displacement(&self) -> Displacement {
        self.source.displacement_to(&self.endpoint)
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        self.source.distance_to(&self.endpoint)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.endpoint)
    }
}
