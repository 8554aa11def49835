//! Flashcard selection and output types
//!
//! Turns ranked sentences into the final labeled flashcard set: budget the
//! card count from input length, walk candidates in rank order, clean and
//! truncate each one, and drop exact duplicates.

pub mod selector;
pub mod set;

pub use selector::{select_cards, target_card_count};
pub use set::{flashcard_word_count, Flashcard, FlashcardSet};
