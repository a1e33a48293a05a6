//! Deck orchestration: from loaded sheets to one finished HTML document.

use std::collections::BTreeSet;
use std::path::Path;

use log::{debug, info};

use super::colors::trait_color_rule;
use crate::card::Card;
use crate::error::Error;
use crate::settings::{resolve, DeckOptions, DeckSettings, SETTINGS_SHEET_NAME};
use crate::sheet::{rows_from_grid, SheetSet};

/// Bundled print stylesheet, embedded into the document head unless the
/// caller turns it off.
const DEFAULT_STYLE: &str = include_str!("../../assets/proxydeck.css");

/// One rendering run: the full card set plus its resolved settings.
///
/// ## Example
///
/// ```
/// use proxydeck::deck::Deck;
/// use proxydeck::settings::DeckOptions;
/// use proxydeck::sheet::SheetSet;
///
/// let grid = vec![
///     vec![Some("Name".into()), Some("Text".into())],
///     vec![Some("Goblin".into()), Some("Attacks.".into())],
/// ];
/// let deck = Deck::from_sheets(&SheetSet::single(grid), DeckOptions::new()).unwrap();
/// assert_eq!(deck.len(), 1);
/// assert!(deck.render_html().contains("Goblin"));
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    settings: DeckSettings,
    cards: Vec<Card>,
}

impl Deck {
    /// Load a spreadsheet and build the deck it describes.
    pub fn from_path(path: impl AsRef<Path>, options: DeckOptions) -> Result<Self, Error> {
        let sheets = SheetSet::from_path(path)?;
        Self::from_sheets(&sheets, options)
    }

    /// Build a deck from already-loaded sheets.
    ///
    /// Settings resolve once, up front; every remaining sheet then
    /// contributes one card per qualifying data row.
    pub fn from_sheets(sheets: &SheetSet, options: DeckOptions) -> Result<Self, Error> {
        let settings = resolve(options, sheets)?;

        let mut cards = Vec::new();
        for (name, grid) in sheets.iter() {
            if name == SETTINGS_SHEET_NAME {
                continue;
            }
            for row in rows_from_grid(grid) {
                if let Some(filter) = &settings.version_filter {
                    let matches = row
                        .get("Version")
                        .is_some_and(|v| v.to_string() == *filter);
                    if !matches {
                        debug!("version filter {:?} skips a row in {:?}", filter, name);
                        continue;
                    }
                }
                cards.push(Card::new(name, row));
            }
        }
        info!("deck holds {} cards", cards.len());

        Ok(Self { settings, cards })
    }

    /// The resolved per-deck settings.
    #[must_use]
    pub fn settings(&self) -> &DeckSettings {
        &self.settings
    }

    /// The cards, in workbook order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards (before `Copies` duplication).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Background rules for every distinct trait across the deck, in
    /// sorted order so the stylesheet is byte-stable across runs.
    #[must_use]
    pub fn trait_colors_css(&self) -> String {
        let traits: BTreeSet<&str> = self
            .cards
            .iter()
            .flat_map(|card| card.traits.iter())
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .collect();

        traits.iter().map(|t| trait_color_rule(t)).collect()
    }

    /// Emit the complete HTML document.
    #[must_use]
    pub fn render_html(&self) -> String {
        let mut s = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        if self.settings.include_default_css {
            s.push_str(&format!(
                "<style type='text/css'>{}</style>",
                DEFAULT_STYLE
            ));
        }
        if self.settings.colorize {
            s.push_str(&format!(
                "<style type='text/css'>{}</style>",
                self.trait_colors_css()
            ));
        }
        if let Some(css_file) = &self.settings.css_file {
            s.push_str(&format!("<link rel='stylesheet' href='{}' />", css_file));
        }
        s.push_str("</head><body>");

        for card in &self.cards {
            let fragment = card.html(&self.settings);
            for _ in 0..card.copies() {
                s.push_str(&fragment);
            }
        }

        s.push_str("</body></html>");
        s
    }
}
