//! Spatial data structures for the walk
//!
//! This module contains spatial-related functionality including:
//! - Coordinate and edge value types
//! - The immutable feature map of eligible cells
//! - Clipped search windows around a source

/// Grid coordinates and directed edges
pub mod coordinate;
/// Eligibility grid supplied by the feature detector
pub mod feature_map;
/// Search windows clipped to map bounds
pub mod window;

pub use coordinate::{Coordinate, Edge};
pub use feature_map::FeatureMap;
