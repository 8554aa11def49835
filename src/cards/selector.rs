//! Rank-order card selection
//!
//! Walks sentences from highest centrality down, cleaning and truncating
//! each candidate, skipping exact duplicates, until the target count is
//! reached or candidates run out.

use rustc_hash::FxHashSet;

use super::set::FlashcardSet;
use crate::nlp::Sentence;

/// Maximum clause-sentences kept per card by the truncation heuristic.
const MAX_CLAUSES: usize = 3;

/// Flashcard budget as a step function of the input's word count.
///
/// The count is taken over the ORIGINAL text, whitespace-delimited, before
/// segmentation. Fixed thresholds, not configurable at call time.
pub fn target_card_count(text: &str) -> usize {
    let word_count = text.split_whitespace().count();
    if word_count < 100 {
        3
    } else if word_count < 300 {
        5
    } else if word_count < 600 {
        7
    } else {
        10
    }
}

/// Select up to `target` cards from scored sentences.
///
/// Sentences are sorted by centrality score descending with a stable sort,
/// so exact score ties keep document order. Each accepted candidate is
/// trimmed, truncated to its first three `". "`-separated segments, and
/// terminated with a period; candidates whose cleaned form exactly matches
/// an already-accepted card are skipped. Returns fewer than `target` cards
/// when distinct candidates run out.
pub fn select_cards(sentences: &[Sentence], scores: &[f64], target: usize) -> FlashcardSet {
    let mut ranked: Vec<&Sentence> = sentences.iter().collect();
    ranked.sort_by(|a, b| {
        let sa = scores.get(a.index).copied().unwrap_or(0.0);
        let sb = scores.get(b.index).copied().unwrap_or(0.0);
        sb.total_cmp(&sa)
    });

    let mut accepted: FxHashSet<String> = FxHashSet::default();
    let mut cards = FlashcardSet::new();

    for sentence in ranked {
        if cards.len() >= target {
            break;
        }

        let trimmed = sentence.text.trim();
        if trimmed.is_empty() {
            continue;
        }

        let cleaned = truncate_clauses(trimmed);
        if accepted.contains(&cleaned) {
            continue;
        }

        accepted.insert(cleaned.clone());
        cards.push(cleaned);
    }

    cards
}

/// Truncate to at most the first [`MAX_CLAUSES`] segments split on the
/// literal `". "`, ensuring a trailing period.
///
/// This is a deliberately weak heuristic boundary. It does not re-invoke
/// the segmenter, so it can disagree with the linguistic sentence model
/// and occasionally cut mid-thought (e.g. after an abbreviation).
fn truncate_clauses(text: &str) -> String {
    let mut cleaned = text
        .split(". ")
        .take(MAX_CLAUSES)
        .collect::<Vec<_>>()
        .join(". ")
        .trim()
        .to_string();

    if !cleaned.ends_with('.') {
        cleaned.push('.');
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences_from(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(i, *t))
            .collect()
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_count_boundaries() {
        assert_eq!(target_card_count(&words(99)), 3);
        assert_eq!(target_card_count(&words(100)), 5);
        assert_eq!(target_card_count(&words(299)), 5);
        assert_eq!(target_card_count(&words(300)), 7);
        assert_eq!(target_card_count(&words(599)), 7);
        assert_eq!(target_card_count(&words(600)), 10);
    }

    #[test]
    fn test_count_of_empty_text() {
        // Zero words falls in the lowest band; selection still returns
        // nothing because there are no sentences.
        assert_eq!(target_card_count(""), 3);
    }

    #[test]
    fn test_selects_highest_scores_first() {
        let sentences = sentences_from(&["low priority.", "top priority.", "middle priority."]);
        let scores = vec![0.1, 0.6, 0.3];
        let cards = select_cards(&sentences, &scores, 3);

        assert_eq!(cards.get("Point 1"), Some("top priority."));
        assert_eq!(cards.get("Point 2"), Some("middle priority."));
        assert_eq!(cards.get("Point 3"), Some("low priority."));
    }

    #[test]
    fn test_ties_keep_document_order() {
        let sentences = sentences_from(&["first tie.", "second tie.", "third tie."]);
        let scores = vec![0.25, 0.25, 0.25];
        let cards = select_cards(&sentences, &scores, 3);

        assert_eq!(cards.get("Point 1"), Some("first tie."));
        assert_eq!(cards.get("Point 2"), Some("second tie."));
        assert_eq!(cards.get("Point 3"), Some("third tie."));
    }

    #[test]
    fn test_stops_at_target() {
        let sentences = sentences_from(&["a one.", "b two.", "c three.", "d four."]);
        let scores = vec![0.4, 0.3, 0.2, 0.1];
        let cards = select_cards(&sentences, &scores, 2);
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn test_exact_duplicates_collapse() {
        let sentences = sentences_from(&["repeated point.", "repeated point.", "unique point."]);
        let scores = vec![0.5, 0.4, 0.1];
        let cards = select_cards(&sentences, &scores, 3);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards.get("Point 1"), Some("repeated point."));
        assert_eq!(cards.get("Point 2"), Some("unique point."));
    }

    #[test]
    fn test_duplicates_after_truncation_collapse() {
        // Distinct raw sentences whose first three clauses coincide.
        let sentences = sentences_from(&[
            "One. Two. Three. Four.",
            "One. Two. Three. Five and more.",
        ]);
        let scores = vec![0.6, 0.4];
        let cards = select_cards(&sentences, &scores, 5);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards.get("Point 1"), Some("One. Two. Three."));
    }

    #[test]
    fn test_truncates_to_three_clauses() {
        let sentences = sentences_from(&["Alpha beta. Gamma delta. Epsilon zeta. Eta theta."]);
        let scores = vec![1.0];
        let cards = select_cards(&sentences, &scores, 3);

        assert_eq!(
            cards.get("Point 1"),
            Some("Alpha beta. Gamma delta. Epsilon zeta.")
        );
    }

    #[test]
    fn test_appends_missing_period() {
        let sentences = sentences_from(&["no terminator here"]);
        let scores = vec![1.0];
        let cards = select_cards(&sentences, &scores, 3);
        assert_eq!(cards.get("Point 1"), Some("no terminator here."));
    }

    #[test]
    fn test_question_mark_still_gets_period() {
        // Only '.' counts as a terminator for the heuristic.
        let sentences = sentences_from(&["is this a question?"]);
        let scores = vec![1.0];
        let cards = select_cards(&sentences, &scores, 3);
        assert_eq!(cards.get("Point 1"), Some("is this a question?."));
    }

    #[test]
    fn test_blank_candidates_are_skipped() {
        let sentences = vec![
            Sentence::new(0, "   "),
            Sentence::new(1, "real content."),
        ];
        let scores = vec![0.9, 0.1];
        let cards = select_cards(&sentences, &scores, 3);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards.get("Point 1"), Some("real content."));
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        let cards = select_cards(&[], &[], 3);
        assert!(cards.is_empty());
    }

    #[test]
    fn test_fewer_candidates_than_target() {
        let sentences = sentences_from(&["only one."]);
        let scores = vec![1.0];
        let cards = select_cards(&sentences, &scores, 10);
        assert_eq!(cards.len(), 1);
    }
}
