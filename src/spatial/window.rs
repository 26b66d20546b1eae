//! Axis-aligned search windows clipped to map bounds

use crate::spatial::coordinate::Coordinate;
use std::ops::RangeInclusive;

/// Square region of candidate cells around a center coordinate
///
/// Spans `center ± radius` on both axes, clamped to the grid. Both spans are
/// inclusive so a window always holds at least its center when the center is in bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchWindow {
    /// Row span (inclusive)
    pub rows: RangeInclusive<usize>,
    /// Column span (inclusive)
    pub cols: RangeInclusive<usize>,
}

impl SearchWindow {
    /// Build the window around `center`, clipped to a grid of `bounds` = (rows, cols)
    ///
    /// Returns `None` for an empty grid.
    pub fn around(center: Coordinate, radius: usize, bounds: (usize, usize)) -> Option<Self> {
        let (rows, cols) = bounds;
        if rows == 0 || cols == 0 {
            return None;
        }

        let row_start = center.row.saturating_sub(radius).min(rows - 1);
        let row_end = center.row.saturating_add(radius).min(rows - 1);
        let col_start = center.col.saturating_sub(radius).min(cols - 1);
        let col_end = center.col.saturating_add(radius).min(cols - 1);

        Some(Self {
            rows: row_start..=row_end,
            cols: col_start..=col_end,
        })
    }

    /// Window covering an entire grid
    pub const fn full(bounds: (usize, usize)) -> Option<Self> {
        let (rows, cols) = bounds;
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self {
            rows: 0..=rows - 1,
            cols: 0..=cols - 1,
        })
    }

    /// Number of cells inside the window
    pub fn cell_count(&self) -> usize {
        let height = self.rows.end() - self.rows.start() + 1;
        let width = self.cols.end() - self.cols.start() + 1;
        height * width
    }

    /// Check if a coordinate lies inside the window
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.rows.contains(&coordinate.row) && self.cols.contains(&coordinate.col)
    }
}
