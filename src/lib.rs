//! # proxydeck
//!
//! Turn a spreadsheet of card data into a printable sheet of HTML proxy
//! cards: stand-in mockups for board and card game prototyping.
//!
//! ## Design Principles
//!
//! 1. **Sheets are the schema**: Each sheet is a card type, its header row
//!    names the fields. No card layout is hardcoded beyond the reserved
//!    field names (`Name`, `Traits`, `Text`, `Flavor Text`, `Version`,
//!    `Copies`).
//!
//! 2. **Configuration lives with the data**: A reserved
//!    `"ProxyPrinter Settings"` sheet can override styling, sizing
//!    thresholds, and substitution rules, so a deck file carries its own
//!    presentation.
//!
//! 3. **Degrade gracefully**: This is an authoring tool; a short row or an
//!    unparseable copies count gets a log line and a sensible fallback,
//!    never an aborted render.
//!
//! 4. **Deterministic output**: Trait colors derive from content hashes,
//!    not randomness, so regenerating an unchanged deck is visually
//!    stable.
//!
//! ## Modules
//!
//! - `sheet`: cell values, rows, and the workbook/CSV input boundary
//! - `text`: escaping, slugs, and the field-text processor
//! - `settings`: defaults, caller options, and the reserved-sheet resolver
//! - `card`: the card model and its HTML fragment
//! - `deck`: orchestration, trait coloring, and document assembly
//! - `error`: the crate error type

pub mod card;
pub mod deck;
pub mod error;
pub mod settings;
pub mod sheet;
pub mod text;

// Re-export commonly used types
pub use crate::card::Card;
pub use crate::deck::{trait_color, Deck};
pub use crate::error::Error;
pub use crate::settings::{resolve, DeckOptions, DeckSettings, SETTINGS_SHEET_NAME};
pub use crate::sheet::{CellValue, Row, SheetSet};
pub use crate::text::{escape_html, slug, Processed, SizeClass, Substitution, TextProcessor};
