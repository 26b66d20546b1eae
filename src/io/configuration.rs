//! Walk constants and runtime configuration defaults

// Default values for configurable walk parameters
/// Fixed seed for reproducible walks
pub const DEFAULT_SEED: u64 = 42;

/// Default number of edges per walk
pub const DEFAULT_EDGE_COUNT: usize = 500;

/// Default minimum edge length in pixels
pub const DEFAULT_MIN_REACH: f64 = 8.0;

/// Default maximum edge length in pixels
pub const DEFAULT_MAX_REACH: f64 = 40.0;

// Zero allows any turn up to perpendicular
/// Default directional flexibility threshold
pub const DEFAULT_FLEXIBILITY: f64 = 0.0;

// Search tuning
/// Local attempts allowed per cell of the search budget area before relocating
pub const DEFAULT_ATTEMPT_FACTOR: usize = 4;

/// Relocations allowed per eligible coordinate before the walk gives up
pub const DEFAULT_STALL_FACTOR: usize = 4;

// Feature mask interpretation
/// Luma value at or above which a mask pixel is eligible
pub const DEFAULT_LUMA_THRESHOLD: u8 = 128;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed feature map dimension
pub const MAX_MAP_DIMENSION: usize = 20_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_edges";
/// Extension of exported edge lists
pub const OUTPUT_EXTENSION: &str = "csv";
