//! Serializable view of a table, for logs and external observers.

use serde::{Deserialize, Serialize};

use crate::types::{Card, SeatPosition};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub name: String,
    pub seat_index: usize,
    pub position: SeatPosition,
    pub is_local: bool,
    pub is_automated: bool,
    pub is_lord: bool,
    pub hand: Vec<Card>,
    pub selected: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickSnapshot {
    pub seat: Option<usize>,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub width: i32,
    pub height: i32,
    pub show_rival_hands: bool,
    pub seats: Vec<SeatSnapshot>,
    pub trick: Option<TrickSnapshot>,
}

impl TableSnapshot {
    pub fn seat(&self, index: usize) -> Option<&SeatSnapshot> {
        self.seats.iter().find(|s| s.seat_index == index)
    }
}
