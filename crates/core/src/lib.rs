//! Card-table engine - pure, deterministic, and testable
//!
//! This crate holds everything with real geometry or state rules behind a
//! rendered card table. It has **no dependencies** on a terminal, a window
//! system or an image loader:
//!
//! - **Deterministic**: same deck, seed and table size give identical frames
//! - **Testable**: drawing goes through the tiny [`Canvas`] trait, so a
//!   [`RecordingCanvas`] captures whole frames in tests
//! - **Portable**: the terminal front-end is just one `Canvas` implementation
//!
//! # Module Structure
//!
//! - [`deck`]: card identities a table is built from, plus seeded deals
//! - [`atlas`]: card identity to sprite-sheet source rectangle
//! - [`layout`]: destination rectangles for each seat's fan and the trick area
//! - [`selection`]: per-card selection flags for visible hands
//! - [`hit_test`]: pointer to topmost visible card
//! - [`table`]: the owning [`CardTable`], which renders frames and handles pointers
//! - [`config`]: layout ratios, margins, sprite geometry and table rules
//!
//! # Frame and Input Flow
//!
//! Each frame, [`CardTable::render`] walks the seats in table order, asks the
//! layout engine for base rectangles, lifts selected cards by their seat's pop
//! offset, resolves source rectangles (the card back for hidden hands) and
//! draws the trick last. Each pointer press goes to
//! [`CardTable::handle_pointer`], which scans the same visible seats back to
//! front against the last frame's rectangles and toggles the hit card.
//!
//! # Example
//!
//! ```
//! use card_table_core::{CardTable, Deck, RecordingCanvas, Seat, TableConfig};
//! use card_table_core::types::{Card, SeatPosition, TableSize};
//!
//! let mut table = CardTable::new(
//!     Deck::standard(),
//!     vec![
//!         Seat::local("me"),
//!         Seat::robot("west", SeatPosition::Left),
//!         Seat::robot("east", SeatPosition::Right),
//!     ],
//!     TableConfig::default(),
//!     TableSize::new(900, 700),
//! )
//! .unwrap();
//!
//! let hand: Vec<Card> = ["3h", "4h", "5h"].iter().filter_map(|s| Card::from_str(s)).collect();
//! table.deal_hand(0, hand).unwrap();
//!
//! let mut canvas = RecordingCanvas::new();
//! table.render(&mut canvas);
//! assert_eq!(canvas.calls[0].dst.left, 350);
//!
//! // Clicking the first card lifts it on the next frame.
//! assert!(table.handle_pointer(360, 600));
//! canvas.clear();
//! table.render(&mut canvas);
//! assert_eq!(canvas.calls[0].dst.top, 560 - 20);
//! ```

pub mod atlas;
pub mod canvas;
pub mod config;
pub mod deck;
pub mod error;
pub mod hit_test;
pub mod layout;
pub mod rng;
pub mod seat;
pub mod selection;
pub mod snapshot;
pub mod table;

pub use card_table_types as types;

// Re-export commonly used types for convenience
pub use atlas::{AtlasSlot, SpriteAtlasIndex};
pub use canvas::{Canvas, DrawCall, RecordingCanvas};
pub use config::{AtlasGeometry, LayoutConfig, Ratio, TableConfig, TableRule};
pub use deck::{Deal, Deck};
pub use error::TableError;
pub use hit_test::Placements;
pub use layout::HandLayoutEngine;
pub use rng::SimpleRng;
pub use seat::Seat;
pub use selection::SelectionState;
pub use snapshot::{SeatSnapshot, TableSnapshot, TrickSnapshot};
pub use table::{CardTable, Trick};
