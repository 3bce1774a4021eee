//! Core types for the scheduling engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StateError};

/// Ease factor assigned to a freshly created card.
pub const INITIAL_EASE: f64 = 2.5;

/// Lowest ease factor the scheduler will ever produce.
pub const MINIMUM_EASE: f64 = 1.3;

/// Lowest quality that counts as a successful recall.
pub const PASSING_QUALITY: u8 = 3;

/// Card learning status, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    New,
    Due,
    Learning,
    Learned,
}

/// Self-assessed recall quality on the 0-5 SM-2 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

impl Quality {
    pub const MAX: u8 = 5;

    /// Raw 0-5 value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this quality keeps the review streak going.
    pub fn is_passing(self) -> bool {
        self.0 >= PASSING_QUALITY
    }
}

impl TryFrom<u8> for Quality {
    type Error = StateError;

    fn try_from(value: u8) -> Result<Self> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(StateError::InvalidQuality(value))
        }
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

impl From<Rating> for Quality {
    fn from(rating: Rating) -> Self {
        rating.quality()
    }
}

/// The four rating buttons offered after a card is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// All ratings in button order.
    pub const ALL: [Rating; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    /// Quality value passed to the scheduler (0, 3, 4 or 5).
    pub fn quality(self) -> Quality {
        Quality(match self {
            Self::Again => 0,
            Self::Hard => 3,
            Self::Good => 4,
            Self::Easy => 5,
        })
    }

    /// Map a quality back to its button, if it is one of the four canonical values.
    pub fn from_quality(quality: Quality) -> Option<Self> {
        match quality.value() {
            0 => Some(Self::Again),
            3 => Some(Self::Hard),
            4 => Some(Self::Good),
            5 => Some(Self::Easy),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Again => "Again",
            Self::Hard => "Hard",
            Self::Good => "Good",
            Self::Easy => "Easy",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Again => "Complete blackout",
            Self::Hard => "Difficult recall",
            Self::Good => "Correct with effort",
            Self::Easy => "Perfect recall",
        }
    }
}

/// Review state of a single card.
///
/// Field names match the stored card record, so a record loaded by the
/// persistence layer deserializes straight into this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    /// Days until the next scheduled review. Zero only before the first review.
    pub interval: u32,
    /// Consecutive passing reviews since creation or the last failure.
    pub repetitions: u32,
    pub ease_factor: f64,
    pub next_review: DateTime<Utc>,
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl ReviewState {
    /// State of a card that has never been reviewed. It is due immediately.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            interval: 0,
            repetitions: 0,
            ease_factor: INITIAL_EASE,
            next_review: now,
            last_reviewed: None,
        }
    }

    /// Check a record loaded from storage before handing it to the engine.
    pub fn validate(&self) -> Result<()> {
        if !self.ease_factor.is_finite() {
            return Err(StateError::NonFiniteEase(self.ease_factor));
        }
        if self.ease_factor < MINIMUM_EASE {
            return Err(StateError::EaseBelowFloor(self.ease_factor));
        }
        if self.last_reviewed.is_some() && self.interval == 0 {
            return Err(StateError::ZeroIntervalAfterReview);
        }
        Ok(())
    }
}

/// A flashcard with its review state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub deck_id: String,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub review: ReviewState,
}

impl Card {
    /// Create a card with a fresh id and the initial review state.
    pub fn new(
        deck_id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            deck_id: deck_id.into(),
            question: question.into(),
            answer: answer.into(),
            created_at: now,
            review: ReviewState::new(now),
        }
    }
}

/// A named collection of cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub card_count: usize,
}

impl Deck {
    /// Create an empty deck with a fresh id.
    pub fn new(name: impl Into<String>, description: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.unwrap_or_default(),
            created_at: now,
            card_count: 0,
        }
    }
}

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// Hour (0-23, UTC) at which a new study day begins.
    pub daily_reset_hour: u32,
    /// Streak length at which a card counts as learned.
    pub learned_repetitions: u32,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            daily_reset_hour: 0,
            learned_repetitions: 3,
        }
    }
}

impl ClassifierSettings {
    pub fn validate(&self) -> Result<()> {
        if self.daily_reset_hour > 23 {
            return Err(StateError::InvalidResetHour(self.daily_reset_hour));
        }
        Ok(())
    }
}
