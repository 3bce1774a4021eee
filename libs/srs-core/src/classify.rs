//! Card collection queries for study sessions and the dashboard.
//!
//! Two notions of "due" live here on purpose:
//! - [`get_due_cards`] picks the study working set and counts anything
//!   scheduled up to the end of the current study day.
//! - [`get_cards_by_status`] feeds dashboard counts and compares against the
//!   exact instant.
//!
//! Since the scheduler anchors `next_review` at the start of a study day, the
//! two only disagree for cards whose `next_review` is later today, and such
//! cards are always new ones (which land in the `new` bucket first).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::calendar;
use crate::types::{Card, CardStatus, ClassifierSettings};

/// Cards partitioned by learning status.
#[derive(Debug, Default, Serialize)]
pub struct StatusBuckets<'a> {
    pub new: Vec<&'a Card>,
    pub due: Vec<&'a Card>,
    pub learning: Vec<&'a Card>,
    pub learned: Vec<&'a Card>,
}

impl StatusBuckets<'_> {
    pub fn len(&self) -> usize {
        self.new.len() + self.due.len() + self.learning.len() + self.learned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-status counts plus the share of mastered cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyProgress {
    pub total: usize,
    pub new: usize,
    pub due: usize,
    pub learning: usize,
    pub learned: usize,
    /// Learned cards as a percentage of all cards, 0.0 for an empty collection.
    pub mastered_percent: f64,
}

impl StudyProgress {
    pub fn from_cards(cards: &[Card], now: DateTime<Utc>) -> Self {
        ClassifierSettings::default().progress(cards, now)
    }
}

impl ClassifierSettings {
    /// Cards due at any point up to the end of the current study day, in input order.
    pub fn due_cards<'a>(&self, cards: &'a [Card], now: DateTime<Utc>) -> Vec<&'a Card> {
        let cutoff = calendar::end_of_day(now, self.daily_reset_hour);
        cards
            .iter()
            .filter(|card| card.review.next_review <= cutoff)
            .collect()
    }

    /// Status of a single card. Rules are checked in order: new, due, learning, learned.
    pub fn status(&self, card: &Card, now: DateTime<Utc>) -> CardStatus {
        let review = &card.review;
        if review.repetitions == 0 {
            CardStatus::New
        } else if review.next_review <= now {
            CardStatus::Due
        } else if review.repetitions < self.learned_repetitions {
            CardStatus::Learning
        } else {
            CardStatus::Learned
        }
    }

    /// Partition cards into disjoint status buckets, preserving input order in each.
    pub fn by_status<'a>(&self, cards: &'a [Card], now: DateTime<Utc>) -> StatusBuckets<'a> {
        let buckets = cards
            .iter()
            .fold(StatusBuckets::default(), |mut acc, card| {
                match self.status(card, now) {
                    CardStatus::New => acc.new.push(card),
                    CardStatus::Due => acc.due.push(card),
                    CardStatus::Learning => acc.learning.push(card),
                    CardStatus::Learned => acc.learned.push(card),
                }
                acc
            });

        tracing::trace!(
            new = buckets.new.len(),
            due = buckets.due.len(),
            learning = buckets.learning.len(),
            learned = buckets.learned.len(),
            "classified cards"
        );

        buckets
    }

    pub fn progress(&self, cards: &[Card], now: DateTime<Utc>) -> StudyProgress {
        let buckets = self.by_status(cards, now);
        let total = cards.len();
        let mastered_percent = if total > 0 {
            buckets.learned.len() as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        StudyProgress {
            total,
            new: buckets.new.len(),
            due: buckets.due.len(),
            learning: buckets.learning.len(),
            learned: buckets.learned.len(),
            mastered_percent,
        }
    }

    /// Pending cards for every deck present in `cards`: due today, or with no
    /// active streak (never passed, or just failed).
    pub fn due_count_by_deck(&self, cards: &[Card], now: DateTime<Utc>) -> BTreeMap<String, usize> {
        let cutoff = calendar::end_of_day(now, self.daily_reset_hour);
        let mut counts = BTreeMap::new();
        for card in cards {
            let count = counts.entry(card.deck_id.clone()).or_insert(0);
            if card.review.next_review <= cutoff || card.review.repetitions == 0 {
                *count += 1;
            }
        }
        counts
    }
}

/// Cards due today or overdue.
pub fn get_due_cards(cards: &[Card], now: DateTime<Utc>) -> Vec<&Card> {
    ClassifierSettings::default().due_cards(cards, now)
}

/// Learning status of one card.
pub fn card_status(card: &Card, now: DateTime<Utc>) -> CardStatus {
    ClassifierSettings::default().status(card, now)
}

/// Partition cards into new, due, learning and learned.
pub fn get_cards_by_status(cards: &[Card], now: DateTime<Utc>) -> StatusBuckets<'_> {
    ClassifierSettings::default().by_status(cards, now)
}

/// Pending card count per deck id.
pub fn due_count_by_deck(cards: &[Card], now: DateTime<Utc>) -> BTreeMap<String, usize> {
    ClassifierSettings::default().due_count_by_deck(cards, now)
}

/// Human-readable label for an interval in days.
pub fn format_interval(days: u32) -> String {
    let per = |unit: f64| (f64::from(days) / unit).round() as u32;
    match days {
        0 => "Now".to_string(),
        1 => "Tomorrow".to_string(),
        2..=6 => format!("{} days", days),
        7..=29 => format!("{} weeks", per(7.0)),
        30..=364 => format!("{} months", per(30.0)),
        _ => format!("{} years", per(365.0)),
    }
}
