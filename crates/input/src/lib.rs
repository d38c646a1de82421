//! Terminal input module (table-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::TableAction`].
//! Pointer positions stay in terminal cells; converting them into table units
//! is the front-end's job because only it knows the cell scale.

pub mod map;

pub use card_table_types as types;

pub use map::{handle_event, handle_key_event, handle_mouse_event, should_quit};
