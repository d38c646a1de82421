//! Hit testing - which card is under a pointer.
//!
//! Draw order and hit priority are two sides of one invariant: seats are drawn
//! in table order and each hand left-to-right / top-to-bottom, so a later card
//! covers an earlier one. Hit testing walks seats in table order and each hand
//! back to front, which makes the visually topmost card win inside a fan.
//! Reordering draw calls without updating this scan changes hit results.

use std::collections::HashMap;

use crate::seat::Seat;
use crate::types::{Card, Rect};

/// Destination rectangles from the last rendered frame, keyed by card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placements {
    rects: HashMap<Card, Rect>,
}

impl Placements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, card: Card, rect: Rect) {
        self.rects.insert(card, rect);
    }

    pub fn get(&self, card: Card) -> Option<Rect> {
        self.rects.get(&card).copied()
    }

    pub fn forget(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.rects.remove(&card);
        }
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Topmost card of a visible hand whose last placement contains `(x, y)`.
///
/// `visible` decides which seats are touchable; hidden hands show backs and
/// their cards cannot be picked individually.
pub fn hit_test<'a>(
    seats: impl IntoIterator<Item = &'a Seat>,
    visible: impl Fn(&Seat) -> bool,
    placements: &Placements,
    x: i32,
    y: i32,
) -> Option<Card> {
    seats
        .into_iter()
        .filter(|seat| visible(*seat))
        .find_map(|seat| {
            seat.hand().iter().rev().copied().find(|&card| {
                placements
                    .get(card)
                    .is_some_and(|rect| rect.contains(x, y))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SeatPosition;

    fn c(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    fn seat_with(hand: &[Card]) -> Seat {
        let mut seat = Seat::local("me");
        seat.replace_hand(hand.to_vec());
        seat
    }

    #[test]
    fn overlap_resolves_to_later_card() {
        let (a, b) = (c("3h"), c("4h"));
        let seat = seat_with(&[a, b]);
        let mut placements = Placements::new();
        placements.record(a, Rect::from_size(0, 0, 80, 110));
        placements.record(b, Rect::from_size(40, 0, 80, 110));

        assert_eq!(hit_test([&seat], |_| true, &placements, 60, 50), Some(b));
        assert_eq!(hit_test([&seat], |_| true, &placements, 20, 50), Some(a));
        assert_eq!(hit_test([&seat], |_| true, &placements, 130, 50), None);
    }

    #[test]
    fn hidden_seats_are_skipped() {
        let card = c("3h");
        let mut rival = Seat::robot("bot", SeatPosition::Left);
        rival.replace_hand(vec![card]);
        let mut placements = Placements::new();
        placements.record(card, Rect::from_size(0, 0, 80, 110));

        assert_eq!(
            hit_test([&rival], |s| s.is_local(), &placements, 10, 10),
            None
        );
        assert_eq!(hit_test([&rival], |_| true, &placements, 10, 10), Some(card));
    }

    #[test]
    fn earlier_seat_wins_across_seats() {
        let first = seat_with(&[c("3h")]);
        let second = seat_with(&[c("3s")]);
        let mut placements = Placements::new();
        placements.record(c("3h"), Rect::from_size(0, 0, 80, 110));
        placements.record(c("3s"), Rect::from_size(0, 0, 80, 110));

        assert_eq!(
            hit_test([&first, &second], |_| true, &placements, 5, 5),
            Some(c("3h"))
        );
    }

    #[test]
    fn unplaced_cards_are_never_hit() {
        let seat = seat_with(&[c("3h")]);
        assert_eq!(hit_test([&seat], |_| true, &Placements::new(), 0, 0), None);
    }
}
