//! Card table (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `card_table::{core, input, term, types}` and hosts the
//! terminal runner binary.

pub use card_table_core as core;
pub use card_table_input as input;
pub use card_table_term as term;
pub use card_table_types as types;

pub mod telemetry;
