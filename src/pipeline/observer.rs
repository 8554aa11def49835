//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::cards::FlashcardSet;
use crate::graph::DenseGraph;
use crate::nlp::Sentence;
use crate::pagerank::PageRankResult;

/// Segmentation stage name.
pub const STAGE_SEGMENT: &str = "segment";
/// Embedding stage name.
pub const STAGE_EMBED: &str = "embed";
/// Graph construction stage name.
pub const STAGE_GRAPH: &str = "graph";
/// Ranking stage name.
pub const STAGE_RANK: &str = "rank";
/// Card selection stage name.
pub const STAGE_SELECT: &str = "select";

/// Wall-clock timer for a single stage.
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time elapsed since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Per-stage metrics delivered to [`PipelineObserver::on_stage_end`].
///
/// Every report carries the elapsed time; the optional fields are filled
/// only by the stages they describe (graph size by the graph stage,
/// convergence data by the ranking stage).
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    elapsed: Duration,
    nodes: Option<usize>,
    edges: Option<usize>,
    iterations: Option<usize>,
    converged: Option<bool>,
    residual: Option<f64>,
}

impl StageReport {
    /// A report carrying only the elapsed time.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    /// Stage wall-clock time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Graph node count, when reported.
    pub fn nodes(&self) -> Option<usize> {
        self.nodes
    }

    /// Graph edge count, when reported.
    pub fn edges(&self) -> Option<usize> {
        self.edges
    }

    /// Ranking iteration count, when reported.
    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    /// Whether ranking converged, when reported.
    pub fn converged(&self) -> Option<bool> {
        self.converged
    }

    /// Final ranking delta, when reported.
    pub fn residual(&self) -> Option<f64> {
        self.residual
    }
}

/// Builder for reports with stage-specific metrics.
#[derive(Debug)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    /// Start from the elapsed time.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    /// Record the graph node count.
    pub fn nodes(mut self, nodes: usize) -> Self {
        self.report.nodes = Some(nodes);
        self
    }

    /// Record the graph edge count.
    pub fn edges(mut self, edges: usize) -> Self {
        self.report.edges = Some(edges);
        self
    }

    /// Record the ranking iteration count.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.report.iterations = Some(iterations);
        self
    }

    /// Record whether ranking converged.
    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    /// Record the final ranking delta.
    pub fn residual(mut self, residual: f64) -> Self {
        self.report.residual = Some(residual);
        self
    }

    /// Finish the report.
    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Stage-boundary callbacks for a pipeline run.
///
/// All methods default to no-ops, so observers implement only what they
/// need. On empty input the pipeline returns after the segmentation stage,
/// so later callbacks are not invoked.
pub trait PipelineObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}
    /// A stage finished with the given metrics.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
    /// Segmentation output.
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}
    /// Embedding output, one vector per sentence.
    fn on_embeddings(&mut self, _embeddings: &[Vec<f32>]) {}
    /// The similarity graph.
    fn on_graph(&mut self, _graph: &DenseGraph) {}
    /// Centrality scores.
    fn on_rank(&mut self, _rank: &PageRankResult) {}
    /// The final card set.
    fn on_cards(&mut self, _cards: &FlashcardSet) {}
}

/// Observer that ignores everything, for zero-overhead execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records one [`StageReport`] per completed stage.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an empty timing observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed stages in execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
