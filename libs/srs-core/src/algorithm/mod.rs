//! Spaced repetition scheduling.

pub mod sm2;

use crate::types::{Quality, Rating, ReviewState};
use chrono::{DateTime, Utc};

pub use sm2::{compute_next_review, Sm2};

/// Trait for spaced repetition algorithms.
///
/// Implementations are pure: the returned state depends only on the inputs,
/// and the caller is responsible for persisting it.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Calculate the next review state after a review.
    fn schedule(&self, state: &ReviewState, quality: Quality, now: DateTime<Utc>) -> ReviewState;

    /// Initial state for a new card.
    fn initial_state(&self, now: DateTime<Utc>) -> ReviewState;

    /// Interval each rating button would produce, in button order.
    fn preview_intervals(&self, state: &ReviewState, now: DateTime<Utc>) -> Vec<(Rating, u32)> {
        Rating::ALL
            .iter()
            .map(|&rating| (rating, self.schedule(state, rating.quality(), now).interval))
            .collect()
    }
}

/// Get algorithm by name.
pub fn get_algorithm(name: &str) -> Option<Box<dyn SpacedRepetitionAlgorithm>> {
    match name {
        "sm2" => Some(Box::new(Sm2::default())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(get_algorithm("sm2").map(|a| a.name()), Some("sm2"));
        assert!(get_algorithm("fsrs").is_none());
    }
}
