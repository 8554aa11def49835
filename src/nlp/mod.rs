//! Natural Language Processing components
//!
//! This module provides sentence boundary segmentation.

pub mod segmenter;

pub use segmenter::{segment_sentences, Sentence};
