//! Terminal front-end for the card table.
//!
//! A small game-style rendering layer: the table draws through the core
//! `Canvas` trait into a framebuffer of styled cells, which is then flushed to
//! the terminal with crossterm. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Map table units onto cells with a fixed scale so pointer presses land on
//!   the same cards that were drawn
//! - Only repaint the cells that changed between frames

pub mod fb;
pub mod renderer;
pub mod table_view;

pub use card_table_core as core;
pub use card_table_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use table_view::{CellScale, TableView, TermCanvas, Viewport};
