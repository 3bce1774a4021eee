//! SM-2 spaced repetition algorithm.
//!
//! Based on SuperMemo 2:
//! - Quality below 3 resets the streak and schedules the card for tomorrow
//! - Passing reviews step through 1 day, 6 days, then grow by the ease factor
//! - The ease factor moves with every review and never drops below 1.3

use super::SpacedRepetitionAlgorithm;
use crate::calendar;
use crate::types::{Quality, ReviewState, INITIAL_EASE, MINIMUM_EASE};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// SM-2 algorithm with configurable parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Interval after a failed review or the first passing one.
    pub first_interval: u32,
    /// Interval after the second passing review in a streak.
    pub second_interval: u32,
    /// Upper bound on any scheduled interval, in days.
    pub maximum_interval: u32,
    /// Hour (0-23, UTC) at which `next_review` dates are anchored.
    pub daily_reset_hour: u32,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: INITIAL_EASE,
            minimum_ease: MINIMUM_EASE,
            first_interval: 1,
            second_interval: 6,
            maximum_interval: 36500,
            daily_reset_hour: 0,
        }
    }
}

impl SpacedRepetitionAlgorithm for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn initial_state(&self, now: DateTime<Utc>) -> ReviewState {
        ReviewState {
            ease_factor: self.initial_ease,
            ..ReviewState::new(now)
        }
    }

    fn schedule(&self, state: &ReviewState, quality: Quality, now: DateTime<Utc>) -> ReviewState {
        let ease_factor = self.next_ease(state.ease_factor, quality);

        let (interval, repetitions) = if quality.is_passing() {
            let interval = match state.repetitions {
                0 => self.first_interval,
                1 => self.second_interval,
                _ => grow(state.interval, ease_factor),
            };
            (self.clamp_interval(interval), state.repetitions.saturating_add(1))
        } else {
            (self.clamp_interval(self.first_interval), 0)
        };

        let due = now
            .checked_add_signed(Duration::days(i64::from(interval)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let next_review = calendar::start_of_day(due, self.daily_reset_hour);

        tracing::debug!(
            quality = quality.value(),
            interval_before = state.interval,
            interval_after = interval,
            ease_before = state.ease_factor,
            ease_after = ease_factor,
            repetitions,
            "scheduled review"
        );

        ReviewState {
            interval,
            repetitions,
            ease_factor,
            next_review,
            last_reviewed: Some(now),
        }
    }
}

impl Sm2 {
    /// EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), floored at `minimum_ease`.
    fn next_ease(&self, ease_factor: f64, quality: Quality) -> f64 {
        let miss = f64::from(Quality::MAX - quality.value());
        (ease_factor + (0.1 - miss * (0.08 + miss * 0.02))).max(self.minimum_ease)
    }

    /// Keep intervals within 1..=maximum_interval days.
    fn clamp_interval(&self, interval: u32) -> u32 {
        interval.min(self.maximum_interval).max(1)
    }
}

/// Multiply an interval by the already-updated ease factor, rounding half up.
/// Results past `u32::MAX` saturate; the caller clamps them.
fn grow(interval: u32, ease_factor: f64) -> u32 {
    (f64::from(interval) * ease_factor).round() as u32
}

/// Schedule a review with the default SM-2 parameters.
pub fn compute_next_review(state: &ReviewState, quality: Quality, now: DateTime<Utc>) -> ReviewState {
    Sm2::default().schedule(state, quality, now)
}
