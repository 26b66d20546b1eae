//! Edge list export for downstream renderers

use crate::algorithm::sequence::EdgeSequence;
use crate::io::error::{Result, WalkError};
use std::fmt::Write as _;
use std::path::Path;

/// Column header of exported edge lists
pub const CSV_HEADER: &str = "index,source_row,source_col,endpoint_row,endpoint_col,segment";

/// Render an edge sequence as CSV
///
/// `segment` counts relocation-free chains from zero, so a renderer can lift
/// the pen wherever it changes.
pub fn edges_to_csv(sequence: &EdgeSequence) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + sequence.len() * 24);
    out.push_str(CSV_HEADER);
    out.push('\n');

    let mut segment = 0usize;
    for (index, edge) in sequence.iter().enumerate() {
        if sequence.is_relocation_boundary(index) {
            segment += 1;
        }
        let source = edge.source();
        let endpoint = edge.endpoint();
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{index},{},{},{},{},{segment}",
            source.row, source.col, endpoint.row, endpoint.col
        );
    }

    out
}

/// Write an edge sequence as CSV, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn export_edges_csv(sequence: &EdgeSequence, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| WalkError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, edges_to_csv(sequence)).map_err(|e| WalkError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write edge list",
        source: e,
    })
}
