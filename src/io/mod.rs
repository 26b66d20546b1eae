/// Command-line interface and batch file processing
pub mod cli;
/// Default parameter values and limits
pub mod configuration;
/// Error types for walks and file operations
pub mod error;
/// Edge list export for downstream renderers
pub mod export;
/// Feature map loading from mask images
pub mod image;
/// Progress display for batch walks
pub mod progress;
