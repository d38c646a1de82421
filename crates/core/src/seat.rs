//! Seats around the table and the hands they hold.
//!
//! Hands are only changed through [`crate::table::CardTable`], which keeps the
//! one-place-per-card and selection invariants.

use crate::error::{Result, TableError};
use crate::types::{Card, SeatPosition, SeatRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    name: String,
    seat_index: usize,
    position: SeatPosition,
    is_local: bool,
    is_automated: bool,
    is_lord: bool,
    hand: Vec<Card>,
}

impl Seat {
    /// A remote human seat at `position`.
    pub fn new(name: impl Into<String>, position: SeatPosition) -> Self {
        Self {
            name: name.into(),
            seat_index: 0,
            position,
            is_local: false,
            is_automated: false,
            is_lord: false,
            hand: Vec::new(),
        }
    }

    /// The seat of the person in front of the screen.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            is_local: true,
            ..Self::new(name, SeatPosition::Bottom)
        }
    }

    /// An automated rival at `position`.
    pub fn robot(name: impl Into<String>, position: SeatPosition) -> Self {
        Self {
            is_automated: true,
            ..Self::new(name, position)
        }
    }

    pub fn with_automated(mut self, automated: bool) -> Self {
        self.is_automated = automated;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seat_index(&self) -> usize {
        self.seat_index
    }

    pub fn position(&self) -> SeatPosition {
        self.position
    }

    pub fn is_local(&self) -> bool {
        self.is_local
    }

    pub fn is_automated(&self) -> bool {
        self.is_automated
    }

    pub fn is_lord(&self) -> bool {
        self.is_lord
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn holds(&self, card: Card) -> bool {
        self.hand.binary_search(&card).is_ok()
    }

    pub fn role(&self) -> SeatRole {
        if self.is_automated {
            SeatRole::Automated(self.position)
        } else {
            SeatRole::Human
        }
    }

    pub(crate) fn set_seat_index(&mut self, index: usize) {
        self.seat_index = index;
    }

    pub(crate) fn set_lord(&mut self, lord: bool) {
        self.is_lord = lord;
    }

    /// Replace the hand, returning the previous cards. The new hand is sorted.
    pub(crate) fn replace_hand(&mut self, cards: Vec<Card>) -> Vec<Card> {
        let old = std::mem::replace(&mut self.hand, cards);
        self.hand.sort();
        old
    }

    pub(crate) fn add_cards(&mut self, cards: &[Card]) {
        self.hand.extend_from_slice(cards);
        self.hand.sort();
    }

    /// Remove all of `cards` or none of them.
    pub(crate) fn remove_cards(&mut self, cards: &[Card]) -> Result<()> {
        if let Some(&missing) = cards.iter().find(|&&c| !self.holds(c)) {
            return Err(TableError::CardNotInHand {
                card: missing,
                seat: self.seat_index,
            });
        }
        self.hand.retain(|c| !cards.contains(c));
        Ok(())
    }
}
