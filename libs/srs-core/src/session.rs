//! Study session bookkeeping.
//!
//! A session picks its working set from the due cards of one deck, runs each
//! rating through the scheduler and writes the new state back into the
//! in-memory collection. Persisting cards and sessions is left to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::SpacedRepetitionAlgorithm;
use crate::classify::get_due_cards;
use crate::types::{Card, Quality};

/// One study sitting over a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    pub deck_id: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub cards_studied: u32,
    pub correct_answers: u32,
}

/// Before/after snapshot of a single review, for the caller to log or sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub card_id: String,
    pub quality: Quality,
    pub reviewed_at: DateTime<Utc>,
    pub algorithm: String,
    pub interval_before: u32,
    pub interval_after: u32,
    pub ease_before: f64,
    pub ease_after: f64,
}

impl StudySession {
    pub fn new(deck_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            deck_id: deck_id.into(),
            started_at: now,
            completed_at: None,
            cards_studied: 0,
            correct_answers: 0,
        }
    }

    /// Cards of this session's deck that are due today, in collection order.
    pub fn queue<'a>(&self, cards: &'a [Card], now: DateTime<Utc>) -> Vec<&'a Card> {
        get_due_cards(cards, now)
            .into_iter()
            .filter(|card| card.deck_id == self.deck_id)
            .collect()
    }

    /// Schedule `card` and replace its review state with the result.
    ///
    /// `card` must belong to this session's deck; the counters are per deck.
    pub fn review(
        &mut self,
        algorithm: &dyn SpacedRepetitionAlgorithm,
        card: &mut Card,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> ReviewRecord {
        debug_assert_eq!(card.deck_id, self.deck_id, "card from another deck");
        let updated = algorithm.schedule(&card.review, quality, now);
        let record = ReviewRecord {
            card_id: card.id.clone(),
            quality,
            reviewed_at: now,
            algorithm: algorithm.name().to_string(),
            interval_before: card.review.interval,
            interval_after: updated.interval,
            ease_before: card.review.ease_factor,
            ease_after: updated.ease_factor,
        };
        card.review = updated;

        self.cards_studied += 1;
        if quality.is_passing() {
            self.correct_answers += 1;
        }

        record
    }

    /// Look a card up by id and review it in place. Returns `None` for unknown ids.
    pub fn review_by_id(
        &mut self,
        algorithm: &dyn SpacedRepetitionAlgorithm,
        cards: &mut [Card],
        card_id: &str,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> Option<ReviewRecord> {
        let card = cards.iter_mut().find(|card| card.id == card_id)?;
        Some(self.review(algorithm, card, quality, now))
    }

    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.completed_at = Some(now);
        tracing::info!(
            session = %self.id,
            deck = %self.deck_id,
            studied = self.cards_studied,
            correct = self.correct_answers,
            "study session completed"
        );
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Share of passing reviews, 0.0 before the first review.
    pub fn accuracy(&self) -> f64 {
        if self.cards_studied == 0 {
            0.0
        } else {
            f64::from(self.correct_answers) / f64::from(self.cards_studied)
        }
    }
}
