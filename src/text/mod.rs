//! Text handling: escaping, slugs, and the field-text processor.
//!
//! ## Key Types
//!
//! - `escape_html`: HTML escaping that preserves literal `&nbsp;` entities
//! - `slug`: CSS-class-safe identifiers from free text
//! - `TextProcessor`: the escape/substitute/line-break/size pipeline
//! - `SizeClass`: the big/medium/small presentational buckets

pub mod escape;
pub mod processor;
pub mod slug;

pub use escape::escape_html;
pub use processor::{
    Processed, SizeClass, SizeThresholds, Substitution, TextProcessor, WILDCARD_CONTEXT,
};
pub use slug::slug;
