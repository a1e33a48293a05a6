//! HTML escaping with one deliberate exception.
//!
//! Card text is author data, never markup, so `&`, `<`, `>`, and quotes
//! are always escaped. The one carve-out: authors may type a literal
//! `&nbsp;` into a cell to force a non-breaking space, so that exact
//! entity is restored after escaping.

/// Escape a string for HTML element content, preserving literal `&nbsp;`.
///
/// ## Example
///
/// ```
/// use proxydeck::text::escape_html;
///
/// assert_eq!(escape_html("1 < 2 & 3"), "1 &lt; 2 &amp; 3");
/// assert_eq!(escape_html("a&nbsp;b"), "a&nbsp;b");
/// ```
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    // Undo the escaping of literal non-breaking-space entities.
    if out.contains("&amp;nbsp;") {
        out = out.replace("&amp;nbsp;", "&nbsp;");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(
            escape_html("<b>\"bold\" & 'brave'</b>"),
            "&lt;b&gt;&quot;bold&quot; &amp; &#x27;brave&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("Attacks twice."), "Attacks twice.");
    }

    #[test]
    fn test_nbsp_entity_survives() {
        assert_eq!(escape_html("&nbsp;"), "&nbsp;");
        assert_eq!(escape_html("gap&nbsp;here"), "gap&nbsp;here");
        // A bare ampersand next to the entity still escapes.
        assert_eq!(escape_html("&&nbsp;"), "&amp;&nbsp;");
    }

    proptest! {
        #[test]
        fn prop_no_raw_markup_in_output(s in "\\PC*") {
            let escaped = escape_html(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
        }
    }
}
