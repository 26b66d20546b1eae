/// Directional bias between consecutive edges
pub mod direction;
/// Uniform coordinate sampling over a seedable random source
pub mod sampler;
/// Edge sequence assembly and invariant checks
pub mod sequence;
/// Insertion-only bitmap of consumed sources
pub mod visited;
/// Walk state machine with relocation and stall guard
pub mod walker;
