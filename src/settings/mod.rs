//! Deck configuration: built-in defaults, caller options, and the
//! reserved-sheet resolver.
//!
//! ## Key Types
//!
//! - `DeckOptions`: Caller-supplied knobs (CLI flags, embedding programs)
//! - `DeckSettings`: Fully resolved per-deck configuration
//! - `resolve`: options + settings sheet + defaults → `DeckSettings`

pub mod defaults;
pub mod resolver;

pub use defaults::{
    default_rich_fields, default_size_thresholds, is_reserved_field, RESERVED_FIELDS,
    SETTINGS_SHEET_NAME,
};
pub use resolver::{resolve, DeckOptions, DeckSettings};
