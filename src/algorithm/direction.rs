use crate::spatial::coordinate::Edge;

/// Directional bias between consecutive edges
///
/// Compares the cosine of the turn angle against a flexibility threshold.
/// Positive thresholds keep the walk heading roughly forward, negative
/// thresholds admit sharp turns and partial backtracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalFilter {
    flexibility: f64,
}

impl DirectionalFilter {
    /// Create a filter with the given threshold
    ///
    /// The threshold is expected to lie strictly inside (-1, 1); walk
    /// configuration validation enforces this before a filter is built.
    pub const fn new(flexibility: f64) -> Self {
        Self { flexibility }
    }

    /// Cosine similarity between the two edge directions
    ///
    /// Returns `None` when either edge has no defined direction.
    pub fn alignment(&self, previous: &Edge, candidate: &Edge) -> Option<f64> {
        previous.displacement().cosine_with(&candidate.displacement())
    }

    /// Check whether `candidate` may follow `previous`
    ///
    /// Degenerate (zero-length) directions are always rejected.
    pub fn accepts(&self, previous: &Edge, candidate: &Edge) -> bool {
        self.alignment(previous, candidate)
            .is_some_and(|cosine| cosine >= self.flexibility)
    }
}
