//! Deck model - the set of card identities a table is built from
//!
//! The deck is immutable once built. Its canonical order is sprite-sheet order
//! (clubs, diamonds, hearts, spades; ace to king; then the two jokers), which
//! is also the order the atlas index is built in.

use crate::error::{Result, TableError};
use crate::rng::SimpleRng;
use crate::types::{Card, Rank, Suit, DECK_SIZE};

/// An ordered collection of distinct card identities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Result of dealing a shuffled deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// One hand per seat, in seat order (unsorted; seats sort on receipt)
    pub hands: Vec<Vec<Card>>,
    /// Cards left over after dealing (the lord's bonus cards)
    pub kitty: Vec<Card>,
}

impl Deck {
    /// Full 54-card deck: 52 regular cards plus both jokers
    pub fn standard() -> Self {
        let mut cards: Vec<Card> = Suit::REGULAR
            .iter()
            .flat_map(|&suit| Rank::REGULAR.iter().filter_map(move |&rank| Card::new(rank, suit)))
            .collect();
        cards.push(Card::BLACK_JOKER);
        cards.push(Card::RED_JOKER);
        cards.sort_by_key(Card::atlas_index);
        Self { cards }
    }

    /// 52-card deck without jokers
    pub fn without_jokers() -> Self {
        let mut deck = Self::standard();
        deck.cards.retain(|c| !c.rank().is_joker());
        deck
    }

    /// Build a deck from explicit cards; identities must be unique.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            let Some(slot) = seen.get_mut(card.atlas_index() as usize) else {
                return Err(TableError::UnknownCard(*card));
            };
            if *slot {
                return Err(TableError::DuplicateCard(*card));
            }
            *slot = true;
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Deterministically shuffled copy of the deck
    pub fn shuffled(&self, seed: u32) -> Vec<Card> {
        let mut cards = self.cards.clone();
        SimpleRng::new(seed).shuffle(&mut cards);
        cards
    }

    /// Shuffle and deal `per_seat` cards to each of `seats` seats.
    ///
    /// Leftover cards form the kitty.
    pub fn deal(&self, seed: u32, seats: usize, per_seat: usize) -> Result<Deal> {
        let needed = seats * per_seat;
        if needed > self.cards.len() {
            return Err(TableError::InvalidConfig(format!(
                "cannot deal {per_seat} cards to {seats} seats from a deck of {}",
                self.cards.len()
            )));
        }

        let shuffled = self.shuffled(seed);
        let (dealt, kitty) = shuffled.split_at(needed);
        let hands = (0..seats)
            .map(|seat| dealt[seat * per_seat..(seat + 1) * per_seat].to_vec())
            .collect();
        Ok(Deal {
            hands,
            kitty: kitty.to_vec(),
        })
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
