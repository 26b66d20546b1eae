//! Constrained random edge walks for generative line art
//!
//! A walk hops across the "on" cells of a binary feature map, producing a chain of
//! edges whose lengths stay inside an annulus and whose turns respect a directional
//! flexibility threshold. Local starvation is handled by relocating to a fresh
//! source, and a global stall guard turns a hopeless search into a typed error.

#![forbid(unsafe_code)]

/// Walk engine: sampling, directional filtering, the walk state machine and sequence assembly
pub mod algorithm;
/// Input/output operations, configuration defaults and error handling
pub mod io;
/// Vector utilities for distances and directions
pub mod math;
/// Coordinates, edges, feature maps and search windows
pub mod spatial;

pub use algorithm::sequence::EdgeSequence;
pub use algorithm::walker::{EdgeWalker, WalkConfig, walk_edges};
pub use io::error::{Result, WalkError};
pub use spatial::{Coordinate, Edge, FeatureMap};
