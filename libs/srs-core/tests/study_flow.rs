//! Multi-day study flow across the scheduler, classifier and session.

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

use srs_core::{
    card_status, format_interval, get_due_cards, Card, CardStatus, Rating, ReviewState, Sm2,
    SpacedRepetitionAlgorithm, StudyProgress, StudySession,
};

fn at(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, 0, 0).unwrap()
}

fn study(cards: &mut [Card], deck: &str, rating: Rating, now: DateTime<Utc>) -> usize {
    let sm2 = Sm2::default();
    let mut session = StudySession::new(deck, now);
    let due: Vec<String> = session.queue(cards, now).iter().map(|c| c.id.clone()).collect();
    for id in &due {
        session.review_by_id(&sm2, cards, id, rating.quality(), now);
    }
    session.complete(now);
    due.len()
}

#[test]
fn card_moves_from_new_to_learned_and_back() {
    let mut cards = vec![Card::new("spanish", "perro", "dog", at(1, 1, 10))];

    assert_eq!(card_status(&cards[0], at(1, 1, 10)), CardStatus::New);
    assert_eq!(study(&mut cards, "spanish", Rating::Good, at(1, 1, 10)), 1);
    assert_eq!(cards[0].review.interval, 1);
    assert_eq!(cards[0].review.next_review, at(1, 2, 0));

    // Nothing left for the rest of the day.
    assert_eq!(study(&mut cards, "spanish", Rating::Good, at(1, 1, 21)), 0);
    assert_eq!(card_status(&cards[0], at(1, 1, 21)), CardStatus::Learning);

    assert_eq!(card_status(&cards[0], at(1, 2, 9)), CardStatus::Due);
    assert_eq!(study(&mut cards, "spanish", Rating::Good, at(1, 2, 9)), 1);
    assert_eq!(cards[0].review.interval, 6);
    assert_eq!(format_interval(cards[0].review.interval), "6 days");

    assert_eq!(study(&mut cards, "spanish", Rating::Good, at(1, 5, 9)), 0);
    assert_eq!(study(&mut cards, "spanish", Rating::Good, at(1, 8, 8)), 1);
    assert_eq!(cards[0].review.interval, 15);
    assert_eq!(cards[0].review.repetitions, 3);
    assert_eq!(cards[0].review.next_review, at(1, 23, 0));
    assert_eq!(format_interval(cards[0].review.interval), "2 weeks");
    assert_eq!(card_status(&cards[0], at(1, 9, 12)), CardStatus::Learned);

    assert_eq!(study(&mut cards, "spanish", Rating::Again, at(1, 23, 7)), 1);
    assert_eq!(cards[0].review.interval, 1);
    assert_eq!(cards[0].review.repetitions, 0);
    assert!((cards[0].review.ease_factor - 1.7).abs() < 1e-9);
    assert_eq!(card_status(&cards[0], at(1, 23, 8)), CardStatus::New);
}

#[test]
fn dashboard_progress_over_mixed_collection() {
    let start = at(3, 1, 9);
    let mut cards: Vec<Card> = (0..4)
        .map(|i| Card::new("german", format!("q{i}"), format!("a{i}"), start))
        .collect();
    let sm2 = Sm2::default();

    // Take the first two cards through three passing reviews.
    for card in cards.iter_mut().take(2) {
        let mut now = start;
        for _ in 0..3 {
            card.review = sm2.schedule(&card.review, Rating::Good.quality(), now);
            now = card.review.next_review;
        }
    }
    // One more card gets a single review.
    cards[2].review = sm2.schedule(&cards[2].review, Rating::Hard.quality(), start);

    let progress = StudyProgress::from_cards(&cards, at(3, 2, 12));
    assert_eq!(progress.total, 4);
    assert_eq!(progress.new, 1);
    assert_eq!(progress.due, 1);
    assert_eq!(progress.learning, 0);
    assert_eq!(progress.learned, 2);
    assert_eq!(progress.mastered_percent, 50.0);

    assert_eq!(get_due_cards(&cards, at(3, 2, 12)).len(), 2);
}

#[test]
fn stored_record_loads_validates_and_schedules() {
    let json = r#"{
        "id": "1700000000000",
        "deckId": "deck-7",
        "question": "capital of France",
        "answer": "Paris",
        "createdAt": "2024-01-01T08:00:00Z",
        "interval": 6,
        "repetitions": 2,
        "easeFactor": 2.5,
        "nextReview": "2024-01-08T00:00:00Z",
        "lastReviewed": "2024-01-02T09:12:00Z"
    }"#;
    let mut card: Card = serde_json::from_str(json).unwrap();
    card.review.validate().unwrap();

    let now = at(1, 8, 10);
    assert_eq!(get_due_cards(std::slice::from_ref(&card), now).len(), 1);

    card.review = srs_core::compute_next_review(&card.review, Rating::Good.quality(), now);
    assert_eq!(
        card.review,
        ReviewState {
            interval: 15,
            repetitions: 3,
            ease_factor: 2.5,
            next_review: at(1, 23, 0),
            last_reviewed: Some(now),
        }
    );

    let saved = serde_json::to_value(&card).unwrap();
    assert_eq!(saved["interval"], 15);
    assert_eq!(saved["nextReview"], "2024-01-23T00:00:00Z");
}
