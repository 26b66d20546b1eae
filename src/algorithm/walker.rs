//! Constrained random edge walk over a feature map
//!
//! The walker grows a chain of edges one at a time. Each edge is found by
//! rejection sampling inside the `max_reach` window around the current source:
//! a candidate must be unvisited, lie in the `[min_reach, max_reach]` annulus,
//! be eligible, and (when a previous edge exists) keep the turn within the
//! flexibility threshold. A neighborhood that keeps rejecting candidates is
//! abandoned for a fresh, globally sampled source, and a global stall guard
//! converts a starved search into [`WalkError::SearchExhausted`].

use crate::{
    algorithm::{
        direction::DirectionalFilter,
        sampler::CoordinateSampler,
        sequence::{EdgeSequence, EdgeSequenceBuilder},
        visited::VisitedSet,
    },
    io::configuration::{
        DEFAULT_ATTEMPT_FACTOR, DEFAULT_EDGE_COUNT, DEFAULT_FLEXIBILITY, DEFAULT_MAX_REACH,
        DEFAULT_MIN_REACH, DEFAULT_STALL_FACTOR,
    },
    io::error::{Result, WalkError, invalid_configuration},
    spatial::{
        coordinate::{Coordinate, Edge},
        feature_map::FeatureMap,
        window::SearchWindow,
    },
};
use rand::{Rng, rngs::StdRng};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, trace, warn};

/// Walk parameters, validated once before any sampling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkConfig {
    /// Shortest accepted edge length
    pub min_reach: f64,
    /// Longest accepted edge length, also the half-width of the search window
    pub max_reach: f64,
    /// Minimum cosine between consecutive edge directions, strictly inside (-1, 1)
    pub flexibility: f64,
    /// Number of edges to produce
    pub edge_count: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            min_reach: DEFAULT_MIN_REACH,
            max_reach: DEFAULT_MAX_REACH,
            flexibility: DEFAULT_FLEXIBILITY,
            edge_count: DEFAULT_EDGE_COUNT,
        }
    }
}

impl WalkConfig {
    /// Create a configuration
    pub const fn new(min_reach: f64, max_reach: f64, flexibility: f64, edge_count: usize) -> Self {
        Self {
            min_reach,
            max_reach,
            flexibility,
            edge_count,
        }
    }

    /// Check the parameters that do not depend on a feature map
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either reach is not finite or `min_reach` is not positive
    /// - `min_reach` is not strictly below `max_reach`
    /// - `flexibility` lies outside the open interval (-1, 1)
    /// - `edge_count` is zero
    pub fn validate(&self) -> Result<()> {
        if !self.min_reach.is_finite() || self.min_reach <= 0.0 {
            return Err(invalid_configuration(
                "min_reach",
                &self.min_reach,
                &"must be a positive finite distance",
            ));
        }
        if !self.max_reach.is_finite() {
            return Err(invalid_configuration(
                "max_reach",
                &self.max_reach,
                &"must be a finite distance",
            ));
        }
        if self.min_reach >= self.max_reach {
            return Err(invalid_configuration(
                "max_reach",
                &self.max_reach,
                &format!("must exceed min_reach ({})", self.min_reach),
            ));
        }
        if !(self.flexibility > -1.0 && self.flexibility < 1.0) {
            return Err(invalid_configuration(
                "flexibility",
                &self.flexibility,
                &"must lie strictly between -1 and 1",
            ));
        }
        if self.edge_count == 0 {
            return Err(invalid_configuration(
                "edge_count",
                &self.edge_count,
                &"at least one edge must be requested",
            ));
        }
        Ok(())
    }

    /// Check all parameters against the extent of a feature map
    ///
    /// # Errors
    ///
    /// Returns an error if [`WalkConfig::validate`] fails or `min_reach`
    /// exceeds either map dimension.
    pub fn validate_for(&self, map: &FeatureMap) -> Result<()> {
        self.validate()?;
        let (rows, cols) = map.bounds();
        if self.min_reach > rows as f64 || self.min_reach > cols as f64 {
            return Err(invalid_configuration(
                "min_reach",
                &self.min_reach,
                &format!("exceeds map extent {rows}x{cols}"),
            ));
        }
        Ok(())
    }

    /// Half-width of the square sampling window
    ///
    /// Integer offsets larger than `floor(max_reach)` can never satisfy the
    /// annulus, so the window stops there.
    pub fn search_radius(&self) -> usize {
        self.max_reach.floor() as usize
    }
}

/// How the per-neighborhood attempt bound is sized
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RelocationBudget {
    /// `ceil(max_reach)²` with the reach capped at the larger map dimension,
    /// a coarse approximation of the window area
    ReachSquared,
    /// Actual number of cells in the window around the current source, clipped to the map
    #[default]
    WindowArea,
}

/// Tunable bounds on rejection sampling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    /// Area measure the local attempt bound is proportional to
    pub relocation_budget: RelocationBudget,
    /// Local attempts allowed per unit of budget area before relocating
    pub attempt_factor: usize,
    /// Relocations allowed per eligible coordinate before giving up
    pub stall_factor: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            relocation_budget: RelocationBudget::default(),
            attempt_factor: DEFAULT_ATTEMPT_FACTOR,
            stall_factor: DEFAULT_STALL_FACTOR,
        }
    }
}

/// Why a walk stopped without completing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// The global stall guard tripped or no unvisited eligible coordinate remained
    SearchExhausted,
    /// The caller's cancellation flag was raised
    Interrupted,
}

/// Position of the walker in its state machine
///
/// Initialization happens inside [`EdgeWalker::new`], so a constructed walker
/// starts in `Seeking { edge_index: 0 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkPhase {
    /// Drawing candidates for the given edge
    Seeking {
        /// Index of the edge being searched for
        edge_index: usize,
    },
    /// Replacing a starved source with a globally sampled one
    Relocating {
        /// Index of the edge being searched for
        edge_index: usize,
    },
    /// The given edge has just been accepted
    Accepted {
        /// Index of the accepted edge
        edge_index: usize,
    },
    /// All requested edges were produced
    Completed,
    /// The walk stopped early
    Failed(FailureReason),
}

/// Counters accumulated over one walk
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Local candidate draws across all edges
    pub sampling_attempts: usize,
    /// Neighborhoods abandoned for a fresh source
    pub relocations: usize,
}

/// Mutable walk state, owned by one walker for one run
struct WalkState {
    current_source: Coordinate,
    previous_edge: Option<Edge>,
    visited: VisitedSet,
    edges: EdgeSequenceBuilder,
}

/// Drives a single constrained random walk to completion or failure
///
/// The feature map is only borrowed, so any number of walkers may share one map.
pub struct EdgeWalker<'a, R = StdRng> {
    map: &'a FeatureMap,
    config: WalkConfig,
    limits: SearchLimits,
    filter: DirectionalFilter,
    sampler: CoordinateSampler<R>,
    origin: Coordinate,
    state: WalkState,
    phase: WalkPhase,
    stats: WalkStats,
}

impl<'a, R: Rng> EdgeWalker<'a, R> {
    /// Validate inputs and choose the walk origin
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The map has no more eligible points than requested edges (`InsufficientPoints`)
    /// - The configuration is invalid for this map (`InvalidConfiguration`)
    pub fn new(
        map: &'a FeatureMap,
        config: WalkConfig,
        mut sampler: CoordinateSampler<R>,
    ) -> Result<Self> {
        let available = map.eligible_count();
        if config.edge_count >= available {
            return Err(WalkError::InsufficientPoints {
                requested: config.edge_count,
                available,
            });
        }

        config.validate_for(map)?;

        // Terminates: the checks above guarantee at least two eligible cells
        let bounds = map.bounds();
        let origin = loop {
            let Some(candidate) = sampler.sample_anywhere(bounds) else {
                return Err(WalkError::InsufficientPoints {
                    requested: config.edge_count,
                    available,
                });
            };
            if map.is_eligible(candidate) {
                break candidate;
            }
        };

        let mut visited = VisitedSet::new(bounds);
        visited.insert(origin);

        debug!(
            "Walk origin {origin}, {} edges over {available} eligible points",
            config.edge_count
        );

        Ok(Self {
            map,
            config,
            limits: SearchLimits::default(),
            filter: DirectionalFilter::new(config.flexibility),
            sampler,
            origin,
            state: WalkState {
                current_source: origin,
                previous_edge: None,
                visited,
                edges: EdgeSequenceBuilder::new(config.edge_count),
            },
            phase: WalkPhase::Seeking { edge_index: 0 },
            stats: WalkStats::default(),
        })
    }

    /// Replace the default search limits
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Current state machine phase
    pub const fn phase(&self) -> WalkPhase {
        self.phase
    }

    /// Coordinate the walk started from
    pub const fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Source the next edge will be searched from
    pub const fn current_source(&self) -> Coordinate {
        self.state.current_source
    }

    /// Edges accepted so far
    pub fn edges_produced(&self) -> usize {
        self.state.edges.len()
    }

    /// Counters accumulated so far
    pub const fn stats(&self) -> WalkStats {
        self.stats
    }

    /// Configuration this walk runs with
    pub const fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Coordinates consumed as sources so far
    pub const fn visited(&self) -> &VisitedSet {
        &self.state.visited
    }

    /// Produce the next edge
    ///
    /// Returns `Ok(false)` once the walk has completed, or when called again after
    /// a failure was reported.
    ///
    /// # Errors
    ///
    /// Returns `SearchExhausted` if the stall guard trips while searching
    pub fn execute_step(&mut self) -> Result<bool> {
        self.advance(None)
    }

    /// Run to completion and assemble the edge sequence
    ///
    /// # Errors
    ///
    /// Returns `SearchExhausted` if the stall guard trips, or an invalid sequence
    /// error if the assembled edges break a walk invariant
    pub fn run(mut self) -> Result<EdgeSequence> {
        while self.advance(None)? {}
        self.finish()
    }

    /// Run to completion, checking `interrupt` before every sampling attempt
    ///
    /// A raised flag discards all edges produced so far.
    ///
    /// # Errors
    ///
    /// Returns `Interrupted` if the flag is raised, otherwise the same errors as [`EdgeWalker::run`]
    pub fn run_until(mut self, interrupt: &AtomicBool) -> Result<EdgeSequence> {
        while self.advance(Some(interrupt))? {}
        self.finish()
    }

    /// Hand the produced edges to the sequence builder
    ///
    /// # Errors
    ///
    /// Returns an error if the walk failed or has not produced every requested edge
    pub fn finish(self) -> Result<EdgeSequence> {
        match self.phase {
            WalkPhase::Failed(reason) => Err(self.failure(reason)),
            _ => self.state.edges.build(),
        }
    }

    fn advance(&mut self, interrupt: Option<&AtomicBool>) -> Result<bool> {
        let edge_index = match self.phase {
            WalkPhase::Completed | WalkPhase::Failed(_) => return Ok(false),
            WalkPhase::Seeking { edge_index } | WalkPhase::Relocating { edge_index } => edge_index,
            WalkPhase::Accepted { edge_index } => edge_index + 1,
        };

        if edge_index >= self.config.edge_count {
            self.phase = WalkPhase::Completed;
            return Ok(false);
        }

        self.phase = WalkPhase::Seeking { edge_index };
        self.state.visited.insert(self.state.current_source);

        let edge = self.seek(edge_index, interrupt)?;

        trace!("Edge {edge_index}: {edge}");
        self.state.edges.push(edge);
        self.state.previous_edge = Some(edge);
        self.state.current_source = edge.endpoint();

        if self.state.edges.len() >= self.config.edge_count {
            self.phase = WalkPhase::Completed;
            info!(
                "Walk completed: {} edges, {} relocations, {} sampling attempts",
                self.state.edges.len(),
                self.stats.relocations,
                self.stats.sampling_attempts
            );
        } else {
            self.phase = WalkPhase::Accepted { edge_index };
        }

        Ok(true)
    }

    /// Rejection-sample around the current source until a candidate is accepted
    fn seek(&mut self, edge_index: usize, interrupt: Option<&AtomicBool>) -> Result<Edge> {
        let radius = self.config.search_radius();
        let bounds = self.map.bounds();
        let mut attempts = 0;
        let mut budget = self.attempt_budget();

        loop {
            if is_raised(interrupt) {
                return Err(self.fail(FailureReason::Interrupted));
            }

            if attempts >= budget {
                self.phase = WalkPhase::Relocating { edge_index };
                self.relocate(interrupt)?;
                self.phase = WalkPhase::Seeking { edge_index };
                attempts = 0;
                budget = self.attempt_budget();
                continue;
            }

            attempts += 1;
            self.stats.sampling_attempts += 1;

            let Some(candidate) =
                self.sampler
                    .sample_within(self.state.current_source, radius, bounds)
            else {
                return Err(self.fail(FailureReason::SearchExhausted));
            };

            if let Some(edge) = self.evaluate(candidate) {
                return Ok(edge);
            }
        }
    }

    /// Apply the acceptance tests in order: visitation, annulus, eligibility, direction
    fn evaluate(&self, candidate: Coordinate) -> Option<Edge> {
        if self.state.visited.contains(candidate) {
            return None;
        }

        let source = self.state.current_source;
        let distance = source.distance_to(&candidate);
        if distance < self.config.min_reach || distance > self.config.max_reach {
            return None;
        }

        if !self.map.is_eligible(candidate) {
            return None;
        }

        let edge = Edge::try_new(source, candidate)?;
        match &self.state.previous_edge {
            Some(previous) if !self.filter.accepts(previous, &edge) => None,
            _ => Some(edge),
        }
    }

    /// Local attempts allowed before the neighborhood counts as exhausted
    fn attempt_budget(&self) -> usize {
        let area = match self.limits.relocation_budget {
            RelocationBudget::ReachSquared => {
                // Reach beyond the map extent adds no candidate cells
                let (rows, cols) = self.map.bounds();
                let reach = (self.config.max_reach.ceil() as usize).min(rows.max(cols));
                reach.saturating_mul(reach)
            }
            RelocationBudget::WindowArea => SearchWindow::around(
                self.state.current_source,
                self.config.search_radius(),
                self.map.bounds(),
            )
            .map_or(1, |window| window.cell_count()),
        };
        area.saturating_mul(self.limits.attempt_factor).max(1)
    }

    /// Move to a fresh eligible, unvisited source anywhere on the map
    ///
    /// Relocation breaks chain continuity and resets the directional bias.
    fn relocate(&mut self, interrupt: Option<&AtomicBool>) -> Result<()> {
        self.stats.relocations += 1;

        let eligible = self.map.eligible_count();
        let ceiling = self.limits.stall_factor.saturating_mul(eligible);
        // Visited coordinates are always eligible, so equality means none are left
        if self.stats.relocations > ceiling || self.state.visited.len() >= eligible {
            warn!(
                "Search exhausted after {} edges ({} relocations, {}/{eligible} points visited)",
                self.state.edges.len(),
                self.stats.relocations,
                self.state.visited.len()
            );
            return Err(self.fail(FailureReason::SearchExhausted));
        }

        let bounds = self.map.bounds();
        loop {
            if is_raised(interrupt) {
                return Err(self.fail(FailureReason::Interrupted));
            }

            let Some(candidate) = self.sampler.sample_anywhere(bounds) else {
                return Err(self.fail(FailureReason::SearchExhausted));
            };

            if self.map.is_eligible(candidate) && !self.state.visited.contains(candidate) {
                debug!(
                    "Relocating from {} to {candidate} before edge {}",
                    self.state.current_source,
                    self.state.edges.len()
                );
                self.state.current_source = candidate;
                self.state.visited.insert(candidate);
                self.state.previous_edge = None;
                self.state.edges.mark_relocation();
                return Ok(());
            }
        }
    }

    fn fail(&mut self, reason: FailureReason) -> WalkError {
        self.phase = WalkPhase::Failed(reason);
        if reason == FailureReason::Interrupted {
            warn!("Walk interrupted after {} edges", self.state.edges.len());
        }
        self.failure(reason)
    }

    fn failure(&self, reason: FailureReason) -> WalkError {
        match reason {
            FailureReason::SearchExhausted => WalkError::SearchExhausted {
                edges_produced: self.state.edges.len(),
                requested: self.config.edge_count,
                relocations: self.stats.relocations,
            },
            FailureReason::Interrupted => WalkError::Interrupted {
                edges_produced: self.state.edges.len(),
            },
        }
    }
}

fn is_raised(interrupt: Option<&AtomicBool>) -> bool {
    interrupt.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

/// Run a complete walk with a seeded sampler and default search limits
///
/// # Errors
///
/// Returns the same errors as [`EdgeWalker::new`] and [`EdgeWalker::run`]
pub fn walk_edges(map: &FeatureMap, config: WalkConfig, seed: u64) -> Result<EdgeSequence> {
    EdgeWalker::new(map, config, CoordinateSampler::seeded(seed))?.run()
}
