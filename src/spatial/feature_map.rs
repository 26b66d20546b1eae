//! Immutable eligibility grid produced by an external feature detector
//!
//! A walk may only place edge sources and endpoints on eligible cells. The map is
//! read-only once built, so a single instance can back any number of concurrent walks.

use crate::spatial::coordinate::Coordinate;
use ndarray::Array2;

/// Fixed-size grid of eligible coordinates
#[derive(Debug, Clone)]
pub struct FeatureMap {
    cells: Array2<bool>,
    eligible_count: usize,
}

impl FeatureMap {
    /// Build a map from a boolean mask in (row, col) layout
    pub fn from_mask(cells: Array2<bool>) -> Self {
        let eligible_count = cells.iter().filter(|&&on| on).count();
        Self {
            cells,
            eligible_count,
        }
    }

    /// Build a map of the given size with only the listed coordinates eligible
    ///
    /// Coordinates outside the grid are ignored.
    pub fn from_coordinates<I>(rows: usize, cols: usize, coordinates: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut cells = Array2::from_elem((rows, cols), false);
        for coordinate in coordinates {
            if let Some(cell) = cells.get_mut([coordinate.row, coordinate.col]) {
                *cell = true;
            }
        }
        Self::from_mask(cells)
    }

    /// Build a map where every cell is eligible
    pub fn filled(rows: usize, cols: usize) -> Self {
        Self::from_mask(Array2::from_elem((rows, cols), true))
    }

    /// Check whether a coordinate may serve as an edge source or endpoint
    ///
    /// Coordinates outside the grid are never eligible.
    pub fn is_eligible(&self, coordinate: Coordinate) -> bool {
        self.cells
            .get([coordinate.row, coordinate.col])
            .copied()
            .unwrap_or(false)
    }

    /// Grid dimensions as (rows, cols)
    pub fn bounds(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of eligible coordinates
    pub const fn eligible_count(&self) -> usize {
        self.eligible_count
    }

    /// Iterate over eligible coordinates in row-major order
    pub fn eligible_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &on)| on)
            .map(|((row, col), _)| Coordinate::new(row, col))
    }
}
