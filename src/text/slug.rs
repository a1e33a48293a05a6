//! CSS-class-safe slugs.

/// Normalize free text into a stable CSS class identifier.
///
/// Lowercases, turns each whitespace character into an underscore, then
/// strips everything that is not a word character. The result stays
/// human-traceable: `"Flavor Text"` → `"flavor_text"`.
///
/// ## Example
///
/// ```
/// use proxydeck::text::slug;
///
/// assert_eq!(slug("Attack Power!"), "attack_power");
/// assert_eq!(slug("Traits"), "traits");
/// ```
#[must_use]
pub fn slug(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
