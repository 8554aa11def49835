//! Flashcard output types
//!
//! The produced set is an ordered mapping: insertion order is final rank
//! order, labels are `"Point 1"`, `"Point 2"`, … with no gaps. A set is
//! built once per generation call and never mutated afterwards; callers
//! replace any previous set wholesale.

use serde::{Deserialize, Serialize};

/// A single labeled flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Display label ("Point k").
    pub label: String,
    /// Cleaned, truncated sentence content.
    pub content: String,
}

/// An ordered set of flashcards, highest-centrality first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardSet {
    cards: Vec<Flashcard>,
}

impl FlashcardSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card with the next sequential label.
    pub(crate) fn push(&mut self, content: String) {
        let label = format!("Point {}", self.cards.len() + 1);
        self.cards.push(Flashcard { label, content });
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the set holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in rank order.
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Look up a card's content by its label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.content.as_str())
    }

    /// Iterate over (label, content) pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cards
            .iter()
            .map(|c| (c.label.as_str(), c.content.as_str()))
    }

    /// Sum of whitespace-delimited word counts across all card contents.
    pub fn word_count(&self) -> usize {
        self.cards
            .iter()
            .map(|c| c.content.split_whitespace().count())
            .sum()
    }
}

impl<'a> IntoIterator for &'a FlashcardSet {
    type Item = &'a Flashcard;
    type IntoIter = std::slice::Iter<'a, Flashcard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Sum of whitespace-delimited word counts across all flashcard contents.
///
/// Pure function, no side effects; an empty set counts as 0.
pub fn flashcard_word_count(flashcards: &FlashcardSet) -> usize {
    flashcards.word_count()
}
