//! Unsupervised flashcard extraction from study text.
//!
//! Given a block of natural-language text, `cardrank` selects the most
//! representative sentences as flashcard content, with no supervision and
//! no summary corpus. Sentences are embedded with a pre-trained sentence
//! encoder, pairwise cosine similarity forms a fully-connected weighted
//! graph, PageRank scores each sentence by centrality, and the top-ranked
//! sentences are cleaned, deduplicated, and labeled.
//!
//! # Usage
//!
//! Load the encoder once per process and reuse it across calls; the model
//! load is the only expensive initialization:
//!
//! ```no_run
//! use cardrank::{EncoderConfig, FlashcardPipeline, SentenceEncoder};
//!
//! # fn main() -> Result<(), cardrank::EmbedError> {
//! let encoder = SentenceEncoder::load(&EncoderConfig::default())?;
//! let pipeline = FlashcardPipeline::new(encoder);
//!
//! let cards = pipeline.generate_flashcards("Your study notes here...")?;
//! for (label, content) in cards.iter() {
//!     println!("{label}: {content}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The number of cards scales with input length (3 for short notes up to
//! 10 for long ones); empty or whitespace-only input yields an empty set
//! rather than an error.

pub mod cards;
pub mod config;
pub mod embed;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;

pub use cards::{flashcard_word_count, Flashcard, FlashcardSet};
pub use config::{EncoderConfig, PipelineConfig};
pub use embed::{EmbedError, EmbeddingBackend, SentenceEncoder};
pub use nlp::Sentence;
pub use pagerank::PageRankResult;
pub use pipeline::FlashcardPipeline;
