//! Deck rendering: orchestration and trait coloring.
//!
//! ## Key Types
//!
//! - `Deck`: the full card set plus resolved settings for one run
//! - `trait_color`: stable per-trait HSL derivation

pub mod colors;
pub mod renderer;

pub use colors::{trait_color, trait_color_rule};
pub use renderer::Deck;
