//! Deterministic trait coloring.
//!
//! Each distinct trait string gets a stable HSL background derived from a
//! SHA-256 digest of its raw text (not its slug): regenerating a deck with
//! unchanged trait names produces byte-identical colors, and two decks
//! sharing a trait name agree on its color.

use sha2::{Digest, Sha256};

use crate::text::slug;

/// Fixed lightness keeps every trait tag readable under black text.
const LIGHTNESS: u32 = 85;

/// Reduce the digest of `text` into `[min, max)`.
fn channel_from_hash(text: &str, min: u32, max: u32) -> u32 {
    let digest = Sha256::digest(text.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    let wide = u128::from_be_bytes(bytes);
    (wide % u128::from(max - min)) as u32 + min
}

/// Stable (hue, saturation, lightness) for a trait string.
#[must_use]
pub fn trait_color(text: &str) -> (u32, u32, u32) {
    let hue = channel_from_hash(text, 0, 360);
    let saturation = channel_from_hash(text, 40, 100);
    (hue, saturation, LIGHTNESS)
}

/// One CSS background rule for a trait tag.
#[must_use]
pub fn trait_color_rule(text: &str) -> String {
    let (hue, saturation, lightness) = trait_color(text);
    format!(
        ".trait.{} {{background-color: hsl({}, {}%, {}%);}}\n",
        slug(text),
        hue,
        saturation,
        lightness
    )
}
