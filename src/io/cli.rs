//! Command-line interface for batch edge walks over PNG feature masks

use crate::algorithm::sampler::CoordinateSampler;
use crate::algorithm::walker::{EdgeWalker, RelocationBudget, SearchLimits, WalkConfig};
use crate::io::configuration::{
    DEFAULT_ATTEMPT_FACTOR, DEFAULT_EDGE_COUNT, DEFAULT_FLEXIBILITY, DEFAULT_LUMA_THRESHOLD,
    DEFAULT_MAX_REACH, DEFAULT_MIN_REACH, DEFAULT_SEED, DEFAULT_STALL_FACTOR, OUTPUT_EXTENSION,
    OUTPUT_SUFFIX,
};
use crate::io::error::{Result, WalkError};
use crate::io::export::export_edges_csv;
use crate::io::image::{MaskOptions, load_feature_map};
use crate::io::progress::ProgressManager;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Attempt budget sizing selectable from the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BudgetArg {
    /// Cells in the clipped search window
    #[default]
    WindowArea,
    /// Square of the maximum reach
    ReachSquared,
}

impl From<BudgetArg> for RelocationBudget {
    fn from(arg: BudgetArg) -> Self {
        match arg {
            BudgetArg::WindowArea => Self::WindowArea,
            BudgetArg::ReachSquared => Self::ReachSquared,
        }
    }
}

#[derive(Parser)]
#[command(name = "edgewalk")]
#[command(
    author,
    version,
    about = "Generate line-art edge walks over binary feature masks"
)]
/// Command-line arguments for the edge walk tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG mask or directory of masks
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible walks
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of edges to generate per mask
    #[arg(short, long, default_value_t = DEFAULT_EDGE_COUNT)]
    pub edges: usize,

    /// Minimum edge length in pixels
    #[arg(long, default_value_t = DEFAULT_MIN_REACH)]
    pub min_reach: f64,

    /// Maximum edge length in pixels
    #[arg(long, default_value_t = DEFAULT_MAX_REACH)]
    pub max_reach: f64,

    /// Minimum cosine between consecutive edges, strictly between -1 and 1
    #[arg(short, long, default_value_t = DEFAULT_FLEXIBILITY, allow_negative_numbers = true)]
    pub flexibility: f64,

    /// Luma value at or above which a mask pixel is eligible
    #[arg(short, long, default_value_t = DEFAULT_LUMA_THRESHOLD)]
    pub threshold: u8,

    /// Treat dark mask pixels as eligible
    #[arg(long)]
    pub invert: bool,

    /// How the local attempt budget is sized before relocating
    #[arg(long, value_enum, default_value_t = BudgetArg::WindowArea)]
    pub budget: BudgetArg,

    /// Local attempts per budget cell before relocating
    #[arg(long, default_value_t = DEFAULT_ATTEMPT_FACTOR)]
    pub attempt_factor: usize,

    /// Relocations per eligible point before giving up
    #[arg(long, default_value_t = DEFAULT_STALL_FACTOR)]
    pub stall_factor: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Walk parameters assembled from the arguments
    pub const fn walk_config(&self) -> WalkConfig {
        WalkConfig::new(self.min_reach, self.max_reach, self.flexibility, self.edges)
    }

    /// Search limits assembled from the arguments
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            relocation_budget: self.budget.into(),
            attempt_factor: self.attempt_factor,
            stall_factor: self.stall_factor,
        }
    }

    /// Mask interpretation assembled from the arguments
    pub const fn mask_options(&self) -> MaskOptions {
        MaskOptions {
            threshold: self.threshold,
            invert: self.invert,
        }
    }

    /// Default tracing filter directive for the chosen verbosity
    pub const fn log_directive(&self) -> &'static str {
        if self.verbose {
            "edgewalk=debug"
        } else {
            "edgewalk=warn"
        }
    }
}

/// Orchestrates batch walks over PNG masks with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Parameters are validated once up front so a bad configuration fails before
    /// any mask is decoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the target is not a PNG
    /// file or directory, or any walk fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.walk_config().validate()?;

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            let outcome = self.process_file(file, index);
            if outcome.is_err() {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.fail_file(index);
                    pm.finish();
                }
            }
            outcome?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_png(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error("Target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = list_masks(&self.cli.target)?;
            files.retain(|path| self.should_process_file(path));
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);
        let config = self.cli.walk_config();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, config.edge_count);
        }

        let map = load_feature_map(input_path, self.cli.mask_options())?;
        debug!(
            "Loaded {}: {}x{} with {} eligible points",
            input_path.display(),
            map.rows(),
            map.cols(),
            map.eligible_count()
        );

        let mut walker = EdgeWalker::new(&map, config, CoordinateSampler::seeded(self.cli.seed))?
            .with_limits(self.cli.search_limits());

        while walker.execute_step()? {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_edges(index, walker.edges_produced());
            }
        }

        let stats = walker.stats();
        let sequence = walker.finish()?;
        export_edges_csv(&sequence, &output_path)?;

        info!(
            "{} -> {}: {} edges in {} segments, {} sampling attempts",
            input_path.display(),
            output_path.display(),
            sequence.len(),
            sequence.relocation_count() + 1,
            stats.sampling_attempts
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    /// Output path for an input mask: `<stem>_edges.csv` alongside the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// PNG files directly inside `dir`, sorted by path
///
/// # Errors
///
/// Returns a file system error naming `dir` if it cannot be listed
pub fn list_masks(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| WalkError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if is_png(&path) {
            files.push(path);
        }
    }
    // Batch order must not depend on the platform
    files.sort();
    Ok(files)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
