//! Multi-file walk progress with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static EDGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.green/white}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━╸ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Masks: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Outcome of a single file's walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Walk still producing edges
    Walking,
    /// Walk finished after the given duration
    Done(Duration),
    /// Walk stopped with an error
    Failed,
}

/// Display state for one file
#[derive(Debug, Clone)]
struct FileProgress {
    name: String,
    edges_done: usize,
    edges_requested: usize,
    status: FileStatus,
}

impl FileProgress {
    fn label(&self) -> String {
        match self.status {
            FileStatus::Walking => self.name.clone(),
            FileStatus::Done(elapsed) => format!("✓ {} ({elapsed:.1?})", self.name),
            FileStatus::Failed => format!("✗ {}", self.name),
        }
    }
}

/// Coordinates progress display for batch walks
///
/// Shows one edge-count bar per file for small batches, keeping the most recent
/// files visible, plus an overall file bar once the batch grows large.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    files: Vec<Option<FileProgress>>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Create the bars for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(EDGE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
        self.files = vec![None; file_count];
    }

    /// Register the walk for file `index`
    pub fn start_file(&mut self, index: usize, path: &Path, edge_count: usize) {
        if index >= self.files.len() {
            self.files.resize(index + 1, None);
        }
        if let Some(slot) = self.files.get_mut(index) {
            *slot = Some(FileProgress {
                name: path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned(),
                edges_done: 0,
                edges_requested: edge_count,
                status: FileStatus::Walking,
            });
        }
        self.redraw();
    }

    /// Report edges produced so far for file `index`
    pub fn update_edges(&mut self, index: usize, edges_done: usize) {
        if let Some(Some(file)) = self.files.get_mut(index) {
            file.edges_done = edges_done;
        }
        self.redraw();
    }

    /// Mark file `index` as walked in `elapsed`
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(Some(file)) = self.files.get_mut(index) {
            file.edges_done = file.edges_requested;
            file.status = FileStatus::Done(elapsed);
        }
        self.advance_batch();
        self.redraw();
    }

    /// Mark file `index` as failed, keeping its partial count visible
    pub fn fail_file(&mut self, index: usize) {
        if let Some(Some(file)) = self.files.get_mut(index) {
            file.status = FileStatus::Failed;
        }
        self.advance_batch();
        self.redraw();
    }

    /// Status of file `index`, if it has been started
    pub fn status(&self, index: usize) -> Option<FileStatus> {
        self.files
            .get(index)
            .and_then(Option::as_ref)
            .map(|file| file.status)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All masks processed");
        }
        let _ = self.multi_progress.clear();
    }

    fn advance_batch(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Show the most recently started files on the available bars
    fn redraw(&self) {
        let started: Vec<&FileProgress> = self.files.iter().flatten().collect();
        let first_visible = started.len().saturating_sub(self.file_bars.len());
        let visible = started.get(first_visible..).unwrap_or(&[]);

        for (slot, bar) in self.file_bars.iter().enumerate() {
            if let Some(file) = visible.get(slot) {
                bar.set_length(file.edges_requested as u64);
                bar.set_position(file.edges_done as u64);
                let width = file.edges_requested.to_string().len();
                bar.set_message(format!(
                    "{:>width$}/{}",
                    file.edges_done, file.edges_requested
                ));
                bar.set_prefix(file.label());
            } else {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
