//! Reserved names and built-in defaults.
//!
//! The default tables are built fresh for every deck and merged with
//! whatever the settings sheet provides; nothing here is ever mutated in
//! place, so rendering several decks in one process can't leak settings
//! between them.

use rustc_hash::FxHashSet;

use crate::text::{SizeThresholds, WILDCARD_CONTEXT};

/// Reserved sheet name carrying deck-wide configuration instead of cards.
pub const SETTINGS_SHEET_NAME: &str = "ProxyPrinter Settings";

/// Field names with dedicated rendering; excluded from generic body fields.
pub const RESERVED_FIELDS: [&str; 6] = [
    "Name",        // title of the card
    "Traits",      // comma-separated list of tags/classes
    "Text",        // shares a box with flavor text
    "Flavor Text", // italicized, follows text
    "Version",     // appears in footer; used by version filtering
    "Copies",      // print the same card this many times
];

// Reserved column headers in the settings sheet.
pub const COL_CSS_FILE: &str = "CSSFile";
pub const COL_COPYRIGHT: &str = "Copyright";
pub const COL_SIZE_FIELD: &str = "TextSizeField";
pub const COL_SIZE_MEDIUM: &str = "TextSizeMediumIfOver";
pub const COL_SIZE_SMALL: &str = "TextSizeSmallIfOver";
pub const COL_RICH_FIELDS: &str = "RichFields";
pub const COL_PATTERNS: &str = "ProcessPatterns";
pub const COL_REPLACEMENTS: &str = "ProcessReplacements";

/// Check whether a field name has dedicated rendering behavior.
#[must_use]
pub fn is_reserved_field(name: &str) -> bool {
    RESERVED_FIELDS.contains(&name)
}

/// Built-in size thresholds: (medium cutoff, small cutoff) per context.
#[must_use]
pub fn default_size_thresholds() -> SizeThresholds {
    let mut table = SizeThresholds::default();
    table.insert(WILDCARD_CONTEXT.to_string(), (30, 50));
    table.insert("Text".to_string(), (140, 220));
    table.insert("Name".to_string(), (18, 24));
    table
}

/// Built-in rich-field set: only the main rules text gets substitutions.
#[must_use]
pub fn default_rich_fields() -> FxHashSet<String> {
    let mut set = FxHashSet::default();
    set.insert("Text".to_string());
    set
}
