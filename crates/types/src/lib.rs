//! Core types module - shared card, geometry and seat types plus layout constants
//!
//! This module defines the fundamental value types used throughout the workspace.
//! Everything here is plain data with no I/O, so the same types flow through the
//! layout engine, the terminal front-end and the tests.
//!
//! # Sprite Sheet
//!
//! Card faces live in a single image laid out as a grid of fixed-size cells:
//!
//! - **Columns**: 13 (cell `i` sits at column `i % 13`, row `i / 13`)
//! - **Rows 0-3**: clubs, diamonds, hearts, spades; columns ace, two, ..., king
//! - **Cell 52 / 53**: black joker / red joker
//! - **Cell 54**: the card back
//!
//! # Layout Constants
//!
//! Values are in table units (one unit = one source pixel at scale 1):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CARD_WIDTH` | 80 | Card width, both in the sheet and on the table |
//! | `CARD_HEIGHT` | 110 | Card height, both in the sheet and on the table |
//! | `POPUP_HEIGHT` | 20 | Distance a selected card is lifted |
//! | `SIDE_MARGIN` | 20 | Gap between a side seat and the table edge |
//! | `BOTTOM_MARGIN` | 30 | Gap between the local hand and the bottom edge |
//! | `TRICK_GAP` | 20 | Gap between cards in the trick area |
//!
//! # Examples
//!
//! ```
//! use card_table_types::{Card, Rank, Suit, Rect, ATLAS_COLUMNS};
//!
//! let card = Card::from_str("10h").unwrap();
//! assert_eq!(card.rank(), Rank::Ten);
//! assert_eq!(card.suit(), Suit::Hearts);
//! assert_eq!(card.atlas_index(), 2 * ATLAS_COLUMNS + 9);
//!
//! let r = Rect::from_size(10, 20, 80, 110);
//! assert!(r.contains(10, 20));
//! assert!(!r.contains(90, 20));
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Card width in table units (80)
pub const CARD_WIDTH: i32 = 80;

/// Card height in table units (110)
pub const CARD_HEIGHT: i32 = 110;

/// Number of columns in the sprite sheet grid
pub const ATLAS_COLUMNS: u32 = 13;

/// Sprite sheet cell holding the card back image
pub const CARD_BACK_CELL: u32 = 54;

/// Number of distinct card identities in a full deck (52 + two jokers)
pub const DECK_SIZE: usize = 54;

/// Distance a selected card is lifted out of its fan
pub const POPUP_HEIGHT: i32 = 20;

/// Horizontal margin of the left/right seats
pub const SIDE_MARGIN: i32 = 20;

/// Vertical margin of the bottom (and top) seat
pub const BOTTOM_MARGIN: i32 = 30;

/// Gap between neighbouring cards in the trick area
pub const TRICK_GAP: i32 = 20;

/// Maximum number of seats around one table
pub const MAX_SEATS: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_sheet_defaults() {
        assert_eq!(CARD_WIDTH, 80);
        assert_eq!(CARD_HEIGHT, 110);
        assert_eq!(ATLAS_COLUMNS, 13);
        assert_eq!(CARD_BACK_CELL, 54);
        assert_eq!(DECK_SIZE, 54);
    }

    #[test]
    fn joker_cells_follow_the_regular_cards() {
        assert_eq!(Card::BLACK_JOKER.atlas_index(), 52);
        assert_eq!(Card::RED_JOKER.atlas_index(), 53);
        assert_eq!(Card::from_str("AC").unwrap().atlas_index(), 0);
        assert_eq!(Card::from_str("KS").unwrap().atlas_index(), 51);
    }

    #[test]
    fn hand_order_puts_twos_and_jokers_on_top() {
        let mut cards = [
            Card::RED_JOKER,
            Card::from_str("2c").unwrap(),
            Card::from_str("3s").unwrap(),
            Card::from_str("3d").unwrap(),
            Card::from_str("ah").unwrap(),
            Card::BLACK_JOKER,
        ];
        cards.sort();
        let labels: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, ["3♦", "3♠", "A♥", "2♣", "BJ", "RJ"]);
    }

    #[test]
    fn card_rejects_mismatched_suit_class() {
        assert_eq!(Card::new(Rank::Ace, Suit::Joker), None);
        assert_eq!(Card::new(Rank::RedJoker, Suit::Hearts), None);
        assert_eq!(Card::new(Rank::RedJoker, Suit::Joker), Some(Card::RED_JOKER));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(0, 0));
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 5));
        assert!(!r.contains(5, 10));
        assert!(!r.contains(-1, 5));
    }

    #[test]
    fn pop_offset_by_role() {
        assert_eq!(SeatRole::Human.pop_offset(20), Offset::new(0, -20));
        assert_eq!(
            SeatRole::Automated(SeatPosition::Left).pop_offset(20),
            Offset::new(20, 0)
        );
        assert_eq!(
            SeatRole::Automated(SeatPosition::Right).pop_offset(20),
            Offset::new(-20, 0)
        );
        assert_eq!(
            SeatRole::Automated(SeatPosition::Top).pop_offset(20),
            Offset::new(-20, 0)
        );
        assert_eq!(
            SeatRole::Automated(SeatPosition::Bottom).pop_offset(20),
            Offset::new(-20, 0)
        );
    }

    #[test]
    fn card_deserialization_rejects_mismatched_suit_class() {
        let king_joker = serde_json::from_str::<Card>(r#"{"rank":"king","suit":"joker"}"#);
        assert!(king_joker.is_err());
        let joker_hearts = serde_json::from_str::<Card>(r#"{"rank":"black_joker","suit":"hearts"}"#);
        assert!(joker_hearts.is_err());

        let ten: Card = serde_json::from_str(r#"{"rank":"ten","suit":"hearts"}"#).unwrap();
        assert_eq!(Some(ten), Card::from_str("10h"));
        let json = serde_json::to_string(&Card::RED_JOKER).unwrap();
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), Card::RED_JOKER);
    }
}

/// Suit classes
///
/// The four regular suits plus the joker class shared by both jokers.
/// Declaration order is the tie-break order inside a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    Joker,
}

impl Suit {
    /// The four regular suits in sprite-sheet row order.
    pub const REGULAR: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Parse a suit letter (case-insensitive): "c", "d", "h", "s", "j"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "c" | "clubs" => Some(Suit::Clubs),
            "d" | "diamonds" => Some(Suit::Diamonds),
            "h" | "hearts" => Some(Suit::Hearts),
            "s" | "spades" => Some(Suit::Spades),
            "j" | "joker" => Some(Suit::Joker),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
            Suit::Joker => "joker",
        }
    }

    /// Single glyph used by text front-ends
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
            Suit::Joker => '★',
        }
    }

    /// Red suits (and the red joker's class is decided by rank, not here)
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

/// Card ranks in hand-sorting strength order
///
/// Three is the lowest card, then up through king and ace, then two, then the
/// black and red jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    BlackJoker,
    RedJoker,
}

impl Rank {
    /// The thirteen regular ranks in strength order.
    pub const REGULAR: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Parse a rank label (case-insensitive): "3".."10", "j", "q", "k", "a", "2", "bj", "rj"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" | "t" => Some(Rank::Ten),
            "j" => Some(Rank::Jack),
            "q" => Some(Rank::Queen),
            "k" => Some(Rank::King),
            "a" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "bj" => Some(Rank::BlackJoker),
            "rj" => Some(Rank::RedJoker),
            _ => None,
        }
    }

    /// Short label printed on a card face
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::BlackJoker => "BJ",
            Rank::RedJoker => "RJ",
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }

    /// Sprite-sheet column of a regular rank (ace first, king last)
    fn atlas_column(&self) -> u32 {
        match self {
            Rank::Ace => 0,
            Rank::Two => 1,
            Rank::Three => 2,
            Rank::Four => 3,
            Rank::Five => 4,
            Rank::Six => 5,
            Rank::Seven => 6,
            Rank::Eight => 7,
            Rank::Nine => 8,
            Rank::Ten => 9,
            Rank::Jack => 10,
            Rank::Queen => 11,
            Rank::King => 12,
            Rank::BlackJoker => 0,
            Rank::RedJoker => 1,
        }
    }
}

/// A card identity
///
/// Cards are value objects: two cards with the same rank and suit class are the
/// same card. All per-card runtime state (selection, placement) is keyed by this
/// value. A standard deck holds exactly one instance of each identity.
///
/// Ordering is the hand-sorting total order: rank first, suit as tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

/// Wire shape of a card before the rank/suit-class check
#[derive(Deserialize)]
struct RawCard {
    rank: Rank,
    suit: Suit,
}

impl TryFrom<RawCard> for Card {
    type Error = String;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.rank, raw.suit).ok_or_else(|| {
            format!(
                "rank {} cannot carry suit {}",
                raw.rank.label(),
                raw.suit.as_str()
            )
        })
    }
}

impl Card {
    pub const BLACK_JOKER: Card = Card {
        rank: Rank::BlackJoker,
        suit: Suit::Joker,
    };

    pub const RED_JOKER: Card = Card {
        rank: Rank::RedJoker,
        suit: Suit::Joker,
    };

    /// Build a card; jokers must use the joker suit class and only jokers may.
    pub fn new(rank: Rank, suit: Suit) -> Option<Self> {
        if rank.is_joker() == (suit == Suit::Joker) {
            Some(Self { rank, suit })
        } else {
            None
        }
    }

    /// Parse "<rank><suit>" (e.g. "10h", "AS", "2c") or a joker ("bj", "rj")
    ///
    /// # Examples
    ///
    /// ```
    /// use card_table_types::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::from_str("qd"), Card::new(Rank::Queen, Suit::Diamonds));
    /// assert_eq!(Card::from_str("RJ"), Some(Card::RED_JOKER));
    /// assert_eq!(Card::from_str("1x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(rank) = Rank::from_str(s).filter(Rank::is_joker) {
            return Card::new(rank, Suit::Joker);
        }
        let split = s.char_indices().last()?.0;
        let rank = Rank::from_str(&s[..split])?;
        let suit = Suit::from_str(&s[split..])?;
        Card::new(rank, suit)
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Red cards: hearts, diamonds and the red joker
    pub fn is_red(&self) -> bool {
        self.suit.is_red() || self.rank == Rank::RedJoker
    }

    /// Fixed sprite-sheet cell of this card, in `[0, 53]`
    pub fn atlas_index(&self) -> u32 {
        match self.suit {
            Suit::Joker => 52 + self.rank.atlas_column(),
            suit => suit as u32 * ATLAS_COLUMNS + self.rank.atlas_column(),
        }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.rank.cmp(&other.rank) {
            Ordering::Equal => self.suit.cmp(&other.suit),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank.is_joker() {
            f.write_str(self.rank.label())
        } else {
            write!(f, "{}{}", self.rank.label(), self.suit.symbol())
        }
    }
}

/// Translation applied to a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Axis-aligned rectangle in table units
///
/// Edges follow the half-open convention: a rectangle covers
/// `left <= x < right` and `top <= y < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn from_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    #[must_use]
    pub fn offset(self, by: Offset) -> Self {
        Self::new(
            self.left + by.dx,
            self.top + by.dy,
            self.right + by.dx,
            self.bottom + by.dy,
        )
    }
}

/// Current table (viewport) dimensions in table units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSize {
    pub width: i32,
    pub height: i32,
}

impl TableSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Fixed positions around the table
///
/// - **Bottom**: the local seat, under direct view
/// - **Left** / **Right**: side rivals, fanned vertically
/// - **Top**: the fourth seat, fanned horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatPosition {
    Bottom,
    Left,
    Right,
    Top,
}

impl SeatPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatPosition::Bottom => "bottom",
            SeatPosition::Left => "left",
            SeatPosition::Right => "right",
            SeatPosition::Top => "top",
        }
    }

    /// Bottom and top seats fan left-to-right; side seats fan top-to-bottom.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, SeatPosition::Bottom | SeatPosition::Top)
    }
}

/// Who drives a seat, which decides how a selected card pops out
///
/// Human seats lift the card straight up. Automated seats always slide it
/// sideways: the left seat toward the middle, every other seat to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatRole {
    Human,
    Automated(SeatPosition),
}

impl SeatRole {
    /// Translation applied to a selected card's base rectangle
    pub fn pop_offset(&self, popup: i32) -> Offset {
        match self {
            SeatRole::Human => Offset::new(0, -popup),
            SeatRole::Automated(SeatPosition::Left) => Offset::new(popup, 0),
            SeatRole::Automated(SeatPosition::Right | SeatPosition::Top | SeatPosition::Bottom) => {
                Offset::new(-popup, 0)
            }
        }
    }
}

/// Actions the surrounding application can apply to a table
///
/// Pointer positions are in terminal cells; the front-end converts them to
/// table units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// Pointer pressed at a terminal cell
    Select { column: u16, row: u16 },
    /// Move the local seat's selected cards into the trick area
    PlaySelected,
    /// Flip the "show rival hands" rule
    ToggleRivalHands,
    /// Shuffle and deal a fresh round
    Redeal,
    /// Empty the trick area
    ClearTrick,
}

impl TableAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableAction::Select { .. } => "select",
            TableAction::PlaySelected => "playSelected",
            TableAction::ToggleRivalHands => "toggleRivalHands",
            TableAction::Redeal => "redeal",
            TableAction::ClearTrick => "clearTrick",
        }
    }
}
