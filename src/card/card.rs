//! One printable card, derived from one data row.
//!
//! A card renders as a fixed sequence of regions, each independently
//! omitted when its source data is absent: title, cardtype banner, generic
//! body fields, the text/flavor box, trait tags, and the copyright line.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::settings::{is_reserved_field, DeckSettings};
use crate::sheet::{Row, SINGLE_SHEET_NAME};
use crate::text::slug;

/// One card: its sheet-derived type, its row of fields, and the traits
/// split out of the `Traits` field.
///
/// Constructed once per qualifying row, immutable afterwards, and
/// consumed only to produce its HTML fragment.
///
/// ## Example
///
/// ```
/// use proxydeck::card::Card;
/// use proxydeck::sheet::Row;
///
/// let mut row = Row::new();
/// row.insert("Name", "Goblin");
/// row.insert("Traits", "Weak, Green");
///
/// let card = Card::new("Units", row);
/// assert_eq!(card.traits.as_slice(), ["Weak", "Green"]);
/// assert_eq!(card.copies(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Owning sheet's name; `"-"` means "no cardtype banner".
    pub cardtype: String,

    /// The row this card was built from, in sheet column order.
    pub fields: Row,

    /// Comma-split, whitespace-trimmed entries of the `Traits` field.
    pub traits: SmallVec<[String; 4]>,
}

impl Card {
    /// Build a card from a sheet name and a row.
    #[must_use]
    pub fn new(cardtype: impl Into<String>, fields: Row) -> Self {
        let traits = fields
            .get("Traits")
            .map(|value| {
                value
                    .to_string()
                    .split(',')
                    .map(|t| t.trim().to_string())
                    .collect()
            })
            .unwrap_or_default();
        Self {
            cardtype: cardtype.into(),
            fields,
            traits,
        }
    }

    /// How many times this card prints.
    ///
    /// The `Copies` field is stringified and parsed as an integer. Parse
    /// failures and negative values fall back to 1; zero is honored as
    /// "print nothing for this card".
    #[must_use]
    pub fn copies(&self) -> usize {
        match self.fields.get("Copies") {
            None => 1,
            Some(value) => match value.to_string().trim().parse::<i64>() {
                Ok(n) if n >= 0 => n as usize,
                _ => 1,
            },
        }
    }

    /// Render the card's HTML fragment.
    #[must_use]
    pub fn html(&self, settings: &DeckSettings) -> String {
        let mut s = format!("<div class='{} card'>\n", slug(&self.cardtype));

        s.push_str(&self.title_area_html(settings));
        s.push_str(&self.cardtype_area_html());

        s.push_str("<div class='card_body_area'>\n");
        s.push_str(&self.fields_html(settings));
        s.push_str(&self.textbox_html(settings));
        s.push_str(&self.traits_html(settings));
        s.push_str("</div>");

        s.push_str(&self.copyline_html(settings));
        s.push_str("</div>\n");
        s
    }

    fn title_area_html(&self, settings: &DeckSettings) -> String {
        let Some(name) = self.fields.get("Name") else {
            return String::new();
        };
        let out = settings.processor.process(name, "Name");
        format!(
            "<div class='title_area'>\n<div class='name field {}'>{}</div>\n</div>\n",
            out.size, out.html
        )
    }

    fn cardtype_area_html(&self) -> String {
        if self.cardtype == SINGLE_SHEET_NAME {
            return String::new();
        }
        // Sheet names are structural data the deck author controls, not
        // cell text; they render unescaped.
        format!(
            "<div class='cardtype_area'>\n<div class='cardtype_label'>{}</div>\n</div>",
            self.cardtype
        )
    }

    fn fields_html(&self, settings: &DeckSettings) -> String {
        let mut s = String::from("<div class='fields_area'>\n");
        for (name, value) in self.fields.iter() {
            if is_reserved_field(name) {
                // Rendered by a dedicated region instead.
                continue;
            }
            let out = settings.processor.process(value, name);
            s.push_str(&format!(
                "<div class='field {} {}'>\n",
                slug(name),
                out.size
            ));
            s.push_str(&format!("<span class='fieldname'>{}:</span>\n", name));
            s.push_str(&out.html);
            s.push('\n');
            s.push_str("</div>\n");
        }
        s.push_str("</div>");
        s
    }

    fn textbox_html(&self, settings: &DeckSettings) -> String {
        let text = self
            .fields
            .get("Text")
            .map(|v| v.to_string().trim().to_string())
            .unwrap_or_else(|| "-".to_string());
        let flavor = self
            .fields
            .get("Flavor Text")
            .map(|v| v.to_string().trim().to_string())
            .unwrap_or_else(|| "-".to_string());

        // Both boxes share one size class, computed from the combined
        // length so the pair scales together.
        let size = settings
            .processor
            .process_str(&format!("{text}{flavor}"), "Text")
            .size;
        let text = settings.processor.process_str(&text, "Text").html;
        let flavor = settings.processor.process_str(&flavor, "Flavor Text").html;

        let text_empty = text == "-" || text.is_empty();
        let flavor_empty = flavor == "-" || flavor.is_empty();

        let mut s = if text_empty && flavor_empty {
            String::from("<div class='empty text_area'>\n")
        } else {
            format!("<div class='text_area {size}'>\n")
        };

        s.push_str(&format!("<div class='text field {size}'>\n"));
        if text_empty {
            // Keeps the box from collapsing to zero height.
            s.push_str("&nbsp;\n");
        } else {
            s.push_str(&text);
            s.push('\n');
        }
        s.push_str("</div>\n");

        if !flavor_empty {
            s.push_str(&format!("<div class='flavor_text field {size}'>\n"));
            s.push_str(&flavor);
            s.push('\n');
            s.push_str("</div>\n");
        }

        s.push_str("</div>\n");
        s
    }

    fn traits_html(&self, settings: &DeckSettings) -> String {
        if !self.fields.contains("Traits") {
            return String::new();
        }
        let mut s = String::from("<div class='traits_area field'>\n");
        for t in &self.traits {
            let out = settings.processor.process_str(t, "Traits");
            s.push_str(&format!(
                "<span class='trait {} {}'>{}</span>\n",
                slug(t),
                out.size,
                out.html
            ));
        }
        s.push_str("</div>");
        s
    }

    fn copyline_html(&self, settings: &DeckSettings) -> String {
        let version = self
            .fields
            .get("Version")
            .map(|v| format!("(v{}) ", v))
            .unwrap_or_default();
        let year = chrono::Local::now().year();
        format!(
            "<div class='copyline'>{}©{} {}</div>\n",
            version, settings.copyowner, year
        )
    }
}
