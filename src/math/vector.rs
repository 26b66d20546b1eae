//! Planar displacement vectors used for edge length and direction comparisons

/// Difference between two grid coordinates, in (row, col) order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    /// Row delta
    pub d_row: f64,
    /// Column delta
    pub d_col: f64,
}

impl Displacement {
    /// Create a displacement from row and column deltas
    pub const fn new(d_row: f64, d_col: f64) -> Self {
        Self { d_row, d_col }
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.d_row.hypot(self.d_col)
    }

    /// Check for a vector with no defined direction
    pub fn is_zero(&self) -> bool {
        self.magnitude() <= f64::EPSILON
    }

    /// Scale to unit length
    ///
    /// Returns `None` for zero-length displacements, which have no direction.
    pub fn normalized(&self) -> Option<Self> {
        let magnitude = self.magnitude();
        (magnitude > f64::EPSILON)
            .then(|| Self::new(self.d_row / magnitude, self.d_col / magnitude))
    }

    /// Dot product with another displacement
    pub fn dot(&self, other: &Self) -> f64 {
        self.d_row.mul_add(other.d_row, self.d_col * other.d_col)
    }

    /// Cosine of the angle between two displacements
    ///
    /// Returns `None` if either vector is zero-length.
    pub fn cosine_with(&self, other: &Self) -> Option<f64> {
        let a = self.normalized()?;
        let b = other.normalized()?;
        // Rounding can push collinear unit vectors just past ±1
        Some(a.dot(&b).clamp(-1.0, 1.0))
    }
}
