use crate::spatial::coordinate::Coordinate;
use bitvec::prelude::*;
use std::fmt;

/// Insertion-only set of coordinates that have served as edge sources
///
/// Backed by a row-major bitmap sized to the feature map, giving O(1)
/// membership tests. Coordinates outside the grid are never members.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    cols: usize,
    count: usize,
}

impl VisitedSet {
    /// Create an empty set for a grid of `bounds` = (rows, cols)
    pub fn new(bounds: (usize, usize)) -> Self {
        let (rows, cols) = bounds;
        Self {
            bits: bitvec![0; rows * cols],
            cols,
            count: 0,
        }
    }

    fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        (coordinate.col < self.cols)
            .then(|| coordinate.row * self.cols + coordinate.col)
            .filter(|&index| index < self.bits.len())
    }

    /// Insert a coordinate
    ///
    /// Returns `true` if it was not already present. Out-of-grid coordinates are ignored.
    pub fn insert(&mut self, coordinate: Coordinate) -> bool {
        let Some(index) = self.index_of(coordinate) else {
            return false;
        };
        let was_set = self.bits.replace(index, true);
        if !was_set {
            self.count += 1;
        }
        !was_set
    }

    /// Test coordinate membership
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.index_of(coordinate)
            .and_then(|index| self.bits.get(index).map(|bit| *bit))
            .unwrap_or(false)
    }

    /// Number of visited coordinates
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Test if nothing has been visited
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate visited coordinates in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let cols = self.cols.max(1);
        self.bits
            .iter_ones()
            .map(move |index| Coordinate::new(index / cols, index % cols))
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VisitedSet({} coordinates)", self.count)
    }
}
