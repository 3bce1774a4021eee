//! Spaced repetition engine for the flashcard study app.
//!
//! Provides:
//! - SM-2 review scheduling with injectable time
//! - Collection queries (due cards, status buckets, progress, interval labels)
//! - Study session bookkeeping
//! - Shared types (Card, ReviewState, Quality, Rating, etc.)
//!
//! Everything here is pure and synchronous. Loading and saving cards is the
//! caller's job; records should pass [`ReviewState::validate`] on the way in.

pub mod algorithm;
pub mod calendar;
pub mod classify;
pub mod error;
pub mod session;
pub mod types;

pub use algorithm::{compute_next_review, get_algorithm, Sm2, SpacedRepetitionAlgorithm};
pub use classify::{
    card_status, due_count_by_deck, format_interval, get_cards_by_status, get_due_cards,
    StatusBuckets, StudyProgress,
};
pub use error::{Result, StateError};
pub use session::{ReviewRecord, StudySession};
pub use types::{
    Card, CardStatus, ClassifierSettings, Deck, Quality, Rating, ReviewState, INITIAL_EASE,
    MINIMUM_EASE, PASSING_QUALITY,
};
