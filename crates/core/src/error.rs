//! Error type for table setup and table mutations.
//!
//! Steady-state `render` / `handle_pointer` calls never fail; everything here is
//! raised while configuring the table or while the session layer changes it.

use thiserror::Error;

use crate::types::Card;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The card was not part of the deck the atlas was built from.
    #[error("card {0} is not in the deck this table was built with")]
    UnknownCard(Card),
    #[error("deck contains {0} more than once")]
    DuplicateCard(Card),
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),
    #[error("card {0} is already in a hand or in the trick")]
    CardAlreadyPlaced(Card),
    #[error("card {card} is not in seat {seat}'s hand")]
    CardNotInHand { card: Card, seat: usize },
    #[error("no seat with index {0}")]
    NoSuchSeat(usize),
    #[error("a table holds at most {max} seats, got {got}")]
    TooManySeats { max: usize, got: usize },
    #[error("exactly one local seat is required, found {0}")]
    LocalSeatCount(usize),
}

pub type Result<T> = std::result::Result<T, TableError>;
