//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`FlashcardPipeline`] owns the injected embedding backend and executes
//! one generation call as a strict sequence: segment → embed → graph →
//! rank → select. There is no streaming, no partial result, and no
//! mid-pipeline cancellation; a caller that needs a timeout imposes it
//! outside and simply skips the next call.
//!
//! The encoder is the only expensive piece of state. Load it once per
//! process (see [`crate::embed::SentenceEncoder::load`]) and hand it to
//! the pipeline; the pipeline itself is stateless between calls.

use crate::cards::{select_cards, target_card_count, FlashcardSet};
use crate::config::PipelineConfig;
use crate::embed::{EmbedError, EmbeddingBackend};
use crate::graph::{DenseGraph, SimilarityMatrix};
use crate::nlp::segment_sentences;
use crate::pagerank::StandardPageRank;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_EMBED,
    STAGE_GRAPH, STAGE_RANK, STAGE_SEGMENT, STAGE_SELECT,
};

/// The flashcard generation pipeline.
///
/// Generic over the embedding backend so production code injects a loaded
/// [`crate::embed::SentenceEncoder`] while tests substitute a
/// deterministic double. The pipeline is `Sync` whenever its encoder is;
/// both shipped backends embed through `&self`, so one pipeline instance
/// may serve concurrent callers.
#[derive(Debug)]
pub struct FlashcardPipeline<E> {
    encoder: E,
    config: PipelineConfig,
}

impl<E: EmbeddingBackend> FlashcardPipeline<E> {
    /// Build a pipeline around a loaded encoder with default ranking
    /// parameters.
    pub fn new(encoder: E) -> Self {
        Self::with_config(encoder, PipelineConfig::default())
    }

    /// Build a pipeline with explicit ranking parameters.
    pub fn with_config(encoder: E, config: PipelineConfig) -> Self {
        Self { encoder, config }
    }

    /// The injected encoder.
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// The active ranking parameters.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Generate labeled flashcards for the given text.
    ///
    /// Returns an empty set (not an error) when the text contains no
    /// segmentable content. The only error surfaced here is an embedding
    /// backend failure; every other degenerate condition shapes the
    /// successful return value.
    pub fn generate_flashcards(&self, text: &str) -> Result<FlashcardSet, EmbedError> {
        self.run(text, &mut NoopObserver)
    }

    /// Execute the pipeline, notifying `observer` at each stage boundary.
    pub fn run(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<FlashcardSet, EmbedError> {
        // Stage 1: Segment
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = segment_sentences(text);
        observer.on_stage_end(STAGE_SEGMENT, &StageReport::new(clock.elapsed()));
        observer.on_sentences(&sentences);

        if sentences.is_empty() {
            tracing::debug!("no segmentable content, returning empty card set");
            return Ok(FlashcardSet::new());
        }

        // Stage 2: Embed
        observer.on_stage_start(STAGE_EMBED);
        let clock = StageClock::start();
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        let embeddings = self.encoder.embed(&texts)?;
        observer.on_stage_end(STAGE_EMBED, &StageReport::new(clock.elapsed()));
        observer.on_embeddings(&embeddings);

        debug_assert_eq!(embeddings.len(), sentences.len());

        // Stage 3: Build graph
        observer.on_stage_start(STAGE_GRAPH);
        let clock = StageClock::start();
        let graph = DenseGraph::from_similarity(SimilarityMatrix::from_embeddings(&embeddings));
        let report = StageReportBuilder::new(clock.elapsed())
            .nodes(graph.num_nodes())
            .edges(graph.num_edges())
            .build();
        observer.on_stage_end(STAGE_GRAPH, &report);
        observer.on_graph(&graph);

        // Stage 4: Rank
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let rank = StandardPageRank::from(&self.config).run(&graph);
        let report = StageReportBuilder::new(clock.elapsed())
            .iterations(rank.iterations)
            .converged(rank.converged)
            .residual(rank.delta)
            .build();
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_rank(&rank);

        // Stage 5: Select
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let target = target_card_count(text);
        let cards = select_cards(&sentences, &rank.scores, target);
        observer.on_stage_end(STAGE_SELECT, &StageReport::new(clock.elapsed()));
        observer.on_cards(&cards);

        tracing::debug!(
            sentences = sentences.len(),
            target,
            cards = cards.len(),
            "flashcard generation complete"
        );
        Ok(cards)
    }
}
