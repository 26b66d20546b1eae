//! Assembly and validation of the final edge sequence

use crate::io::error::{Result, invalid_sequence};
use crate::spatial::coordinate::{Coordinate, Edge};
use std::collections::HashSet;

/// Ordered walk output with the positions where the chain was broken by relocation
///
/// Edge `i` continues edge `i - 1` (its source is the previous endpoint) unless
/// `i` is listed as a relocation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSequence {
    edges: Vec<Edge>,
    relocation_boundaries: Vec<usize>,
}

impl EdgeSequence {
    /// Edges in walk order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Indices of edges that start a fresh chain after a relocation
    pub fn relocation_boundaries(&self) -> &[usize] {
        &self.relocation_boundaries
    }

    /// Check if edge `index` starts after a relocation
    pub fn is_relocation_boundary(&self, index: usize) -> bool {
        self.relocation_boundaries.binary_search(&index).is_ok()
    }

    /// Number of relocations that broke the chain
    pub fn relocation_count(&self) -> usize {
        self.relocation_boundaries.len()
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Test if the sequence holds no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate edges in walk order
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Split into contiguous chains, one per relocation-free run
    pub fn segments(&self) -> impl Iterator<Item = &[Edge]> + '_ {
        let mut starts = Vec::with_capacity(self.relocation_boundaries.len() + 1);
        if !self.edges.is_empty() {
            starts.push(0);
        }
        starts.extend(
            self.relocation_boundaries
                .iter()
                .copied()
                .filter(|&index| index > 0),
        );

        let total = self.edges.len();
        (0..starts.len()).filter_map(move |i| {
            let start = starts.get(i).copied()?;
            let end = starts.get(i + 1).copied().unwrap_or(total);
            self.edges.get(start..end)
        })
    }

    /// Consume the sequence, keeping only the edges
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

impl<'a> IntoIterator for &'a EdgeSequence {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects accepted edges and re-asserts the walk invariants on build
#[derive(Debug, Clone)]
pub struct EdgeSequenceBuilder {
    requested: usize,
    edges: Vec<Edge>,
    relocation_boundaries: Vec<usize>,
}

impl EdgeSequenceBuilder {
    /// Create a builder expecting exactly `requested` edges
    pub fn new(requested: usize) -> Self {
        Self {
            requested,
            edges: Vec::with_capacity(requested),
            relocation_boundaries: Vec::new(),
        }
    }

    /// Append an accepted edge
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Record that the next pushed edge starts after a relocation
    ///
    /// Relocations before the first edge or repeated before the same edge are
    /// recorded once.
    pub fn mark_relocation(&mut self) {
        let next = self.edges.len();
        if next > 0 && self.relocation_boundaries.last() != Some(&next) {
            self.relocation_boundaries.push(next);
        }
    }

    /// Edges collected so far
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Test if no edges have been collected
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Most recently pushed edge
    pub fn last(&self) -> Option<&Edge> {
        self.edges.last()
    }

    /// Validate and produce the final sequence
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The number of edges differs from the requested count
    /// - An edge does not start at the previous endpoint and no relocation was recorded there
    /// - Two edges share the same source coordinate
    pub fn build(self) -> Result<EdgeSequence> {
        if self.edges.len() != self.requested {
            return Err(invalid_sequence(
                self.edges.len(),
                &format!(
                    "expected {} edges, collected {}",
                    self.requested,
                    self.edges.len()
                ),
            ));
        }

        let mut sources: HashSet<Coordinate> = HashSet::with_capacity(self.edges.len());
        let mut previous: Option<&Edge> = None;

        for (index, edge) in self.edges.iter().enumerate() {
            if !sources.insert(edge.source()) {
                return Err(invalid_sequence(
                    index,
                    &format!("source {} already used by an earlier edge", edge.source()),
                ));
            }

            if let Some(prev) = previous {
                let continues = prev.endpoint() == edge.source();
                let relocated = self.relocation_boundaries.binary_search(&index).is_ok();
                if !continues && !relocated {
                    return Err(invalid_sequence(
                        index,
                        &format!(
                            "source {} does not continue previous endpoint {}",
                            edge.source(),
                            prev.endpoint()
                        ),
                    ));
                }
            }

            previous = Some(edge);
        }

        Ok(EdgeSequence {
            edges: self.edges,
            relocation_boundaries: self.relocation_boundaries,
        })
    }
}
