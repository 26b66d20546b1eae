//! Mathematical utilities for the walk

/// Displacement vectors with distance and direction operations
pub mod vector;
