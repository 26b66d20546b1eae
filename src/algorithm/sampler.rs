use crate::spatial::{coordinate::Coordinate, window::SearchWindow};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Uniform coordinate sampling over an explicit random source
///
/// Draws are pure rejection-sampling proposals: the sampler never checks
/// eligibility, visitation or distance. Acceptance belongs to the caller.
pub struct CoordinateSampler<R = StdRng> {
    rng: R,
}

impl CoordinateSampler<StdRng> {
    /// Create a deterministic sampler from a seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> CoordinateSampler<R> {
    /// Wrap an existing random source
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw uniformly from the square of half-width `radius` around `center`
    ///
    /// The square is clipped to `bounds` = (rows, cols). Returns `None` only for an
    /// empty grid.
    pub fn sample_within(
        &mut self,
        center: Coordinate,
        radius: usize,
        bounds: (usize, usize),
    ) -> Option<Coordinate> {
        let window = SearchWindow::around(center, radius, bounds)?;
        Some(self.sample_window(&window))
    }

    /// Draw uniformly from the whole grid
    ///
    /// Returns `None` for an empty grid.
    pub fn sample_anywhere(&mut self, bounds: (usize, usize)) -> Option<Coordinate> {
        let window = SearchWindow::full(bounds)?;
        Some(self.sample_window(&window))
    }

    /// Draw uniformly from a prepared window
    pub fn sample_window(&mut self, window: &SearchWindow) -> Coordinate {
        let row = self.rng.random_range(window.rows.clone());
        let col = self.rng.random_range(window.cols.clone());
        Coordinate::new(row, col)
    }
}
