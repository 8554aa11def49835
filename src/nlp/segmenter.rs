//! Sentence boundary segmentation
//!
//! Splits raw text into an ordered sequence of candidate sentences using
//! the UAX #29 sentence boundary rules rather than naive punctuation
//! splitting. The rules keep decimals ("3.14") and lowercase continuations
//! after abbreviation periods ("vs. the rest") inside one sentence.

use unicode_segmentation::UnicodeSegmentation;

/// A sentence in document order.
///
/// The index is assigned once at segmentation time and is stable for the
/// rest of the pipeline run: embeddings, similarity rows, and centrality
/// scores are all addressed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Position within the document (0-based).
    pub index: usize,
    /// Trimmed sentence text.
    pub text: String,
}

impl Sentence {
    /// Create a sentence at the given document position.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Split raw text into trimmed, non-empty sentences in document order.
///
/// Returns an empty vector when the input contains no segmentable content
/// (empty or whitespace-only text). Downstream stages treat that as "no
/// flashcards producible", not as an error.
pub fn segment_sentences(text: &str) -> Vec<Sentence> {
    text.split_sentence_bounds()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(index, s)| Sentence::new(index, s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_sentence_boundaries() {
        let sentences = segment_sentences("Rust is fast. It is also safe. Many people use it.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text, "Rust is fast.");
        assert_eq!(sentences[2].text, "Many people use it.");
    }

    #[test]
    fn test_indices_are_document_order() {
        let sentences = segment_sentences("One. Two. Three.");
        let indices: Vec<_> = sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_decimal_is_not_a_boundary() {
        let sentences = segment_sentences("Pi is roughly 3.14 in value. The radius is fixed.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].text.contains("3.14"));
    }

    #[test]
    fn test_lowercase_continuation_is_not_a_boundary() {
        // A period followed by a lowercase word is an abbreviation, not an end.
        let sentences = segment_sentences("We compared it vs. the baseline. It won.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].text.contains("vs. the baseline"));
    }

    #[test]
    fn test_trims_whitespace() {
        let sentences = segment_sentences("  First sentence.   \n\n  Second sentence.  ");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "First sentence.");
        assert_eq!(sentences[1].text, "Second sentence.");
    }

    #[test]
    fn test_empty_input() {
        assert!(segment_sentences("").is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(segment_sentences("   \n\t  ").is_empty());
    }

    #[test]
    fn test_multiple_paragraphs() {
        let text = "Paragraph one has a sentence.\n\nParagraph two has another. And one more.";
        let sentences = segment_sentences(text);
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn test_single_sentence_without_terminator() {
        let sentences = segment_sentences("just a fragment without punctuation");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].index, 0);
    }
}
