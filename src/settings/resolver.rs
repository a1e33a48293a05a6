//! Per-deck settings resolution.
//!
//! Precedence, high to low: caller-supplied options (CSS file and
//! copyright owner only), the reserved settings sheet, built-in defaults.
//! Each settings feature resolves independently: a missing column
//! no-ops to its default and never blocks the others.

use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use super::defaults::{
    default_rich_fields, default_size_thresholds, COL_COPYRIGHT, COL_CSS_FILE, COL_PATTERNS,
    COL_REPLACEMENTS, COL_RICH_FIELDS, COL_SIZE_FIELD, COL_SIZE_MEDIUM, COL_SIZE_SMALL,
    SETTINGS_SHEET_NAME,
};
use crate::error::Error;
use crate::sheet::{Cell, CellValue, SheetSet};
use crate::text::{Substitution, TextProcessor, WILDCARD_CONTEXT};

/// Caller-supplied configuration, from the CLI or an embedding program.
///
/// ## Example
///
/// ```
/// use proxydeck::settings::DeckOptions;
///
/// let options = DeckOptions::new()
///     .with_copyright("Sariel Games")
///     .with_version_filter("2");
/// assert_eq!(options.copyright.as_deref(), Some("Sariel Games"));
/// ```
#[derive(Clone, Debug)]
pub struct DeckOptions {
    /// Copyright owner shown in every card footer.
    pub copyright: Option<String>,
    /// Additional stylesheet to link from the document head.
    pub css_file: Option<String>,
    /// Embed the bundled default stylesheet.
    pub include_default_css: bool,
    /// Emit procedurally colored trait backgrounds.
    pub colorize: bool,
    /// Render only rows whose `Version` field matches exactly.
    pub version_filter: Option<String>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            copyright: None,
            css_file: None,
            include_default_css: true,
            colorize: true,
            version_filter: None,
        }
    }
}

impl DeckOptions {
    /// Create options with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the copyright owner.
    #[must_use]
    pub fn with_copyright(mut self, owner: impl Into<String>) -> Self {
        self.copyright = Some(owner.into());
        self
    }

    /// Set an additional stylesheet reference.
    #[must_use]
    pub fn with_css_file(mut self, file: impl Into<String>) -> Self {
        self.css_file = Some(file.into());
        self
    }

    /// Toggle the bundled default stylesheet.
    #[must_use]
    pub fn with_default_css(mut self, include: bool) -> Self {
        self.include_default_css = include;
        self
    }

    /// Toggle procedural trait coloring.
    #[must_use]
    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Render only rows whose `Version` matches this tag.
    #[must_use]
    pub fn with_version_filter(mut self, version: impl Into<String>) -> Self {
        self.version_filter = Some(version.into());
        self
    }
}

/// Fully resolved per-deck configuration, shared read-only by every card.
#[derive(Clone, Debug)]
pub struct DeckSettings {
    /// Copyright owner for card footers (empty string when unset).
    pub copyowner: String,
    /// Additional stylesheet to link, if any.
    pub css_file: Option<String>,
    /// Embed the bundled default stylesheet.
    pub include_default_css: bool,
    /// Emit procedurally colored trait backgrounds.
    pub colorize: bool,
    /// Active version filter, if any.
    pub version_filter: Option<String>,
    /// The field-text pipeline (thresholds, rich fields, substitutions).
    pub processor: TextProcessor,
}

/// Resolve deck settings from caller options and the reserved settings
/// sheet, if present.
///
/// Single-sheet input has no settings sheet by construction, so
/// everything stays at caller-supplied-or-default values. The only fatal
/// outcome is a substitution pattern that fails to compile.
pub fn resolve(options: DeckOptions, sheets: &SheetSet) -> Result<DeckSettings, Error> {
    let mut thresholds = default_size_thresholds();
    let mut rich_fields = default_rich_fields();
    let mut substitutions = Vec::new();
    let mut copyowner = options.copyright;
    let mut css_file = options.css_file;

    match sheets.get(SETTINGS_SHEET_NAME) {
        None => {
            info!("no settings sheet; using caller-supplied and default settings");
        }
        Some(grid) if grid.len() < 2 => {
            info!("settings sheet has no data rows; using defaults");
        }
        Some(grid) => {
            let header: Vec<Option<String>> = grid[0]
                .iter()
                .map(|cell| cell.as_ref().map(|v| v.to_string()))
                .collect();
            let column = |label: &str| {
                header
                    .iter()
                    .position(|name| name.as_deref() == Some(label))
            };
            let data_rows = &grid[1..];

            // Simple values come from the first data row, and only fill
            // slots the caller left open.
            if css_file.is_none() {
                css_file = column(COL_CSS_FILE)
                    .and_then(|i| non_blank(&data_rows[0], i))
                    .map(CellValue::to_string);
            }
            if copyowner.is_none() {
                copyowner = column(COL_COPYRIGHT)
                    .and_then(|i| non_blank(&data_rows[0], i))
                    .map(CellValue::to_string);
            }

            resolve_thresholds(&mut thresholds, data_rows, &column);
            resolve_rich_fields(&mut rich_fields, data_rows, &column);
            substitutions = resolve_substitutions(data_rows, &column)?;
        }
    }

    Ok(DeckSettings {
        copyowner: copyowner.unwrap_or_default(),
        css_file,
        include_default_css: options.include_default_css,
        colorize: options.colorize,
        version_filter: options.version_filter,
        processor: TextProcessor::new(thresholds, rich_fields, substitutions),
    })
}

/// Every data row may adjust one field's thresholds. A blank cutoff cell
/// inherits the value the field already resolves to (its own entry, else
/// the wildcard) instead of overwriting it.
fn resolve_thresholds(
    thresholds: &mut crate::text::SizeThresholds,
    data_rows: &[Vec<Cell>],
    column: &impl Fn(&str) -> Option<usize>,
) {
    let (Some(field_col), Some(medium_col), Some(small_col)) = (
        column(COL_SIZE_FIELD),
        column(COL_SIZE_MEDIUM),
        column(COL_SIZE_SMALL),
    ) else {
        info!("no text size threshold columns in settings sheet");
        return;
    };

    for row in data_rows {
        let Some(field) = non_blank(row, field_col) else {
            debug!("threshold row without a field name; skipping");
            continue;
        };
        let field = field.to_string();

        let fallback = thresholds
            .get(WILDCARD_CONTEXT)
            .copied()
            .unwrap_or((30, 50));
        let (mut medium, mut small) = thresholds.get(&field).copied().unwrap_or(fallback);

        if let Some(cell) = non_blank(row, medium_col) {
            match cell.as_length() {
                Some(v) => medium = v,
                None => warn!("unusable medium cutoff {:?} for field {:?}", cell, field),
            }
        }
        if let Some(cell) = non_blank(row, small_col) {
            match cell.as_length() {
                Some(v) => small = v,
                None => warn!("unusable small cutoff {:?} for field {:?}", cell, field),
            }
        }

        thresholds.insert(field, (medium, small));
    }
}

/// A present rich-fields column replaces the set wholesale, even with an
/// empty result, which is how a sheet turns rich processing off. An
/// absent column leaves the existing set untouched.
fn resolve_rich_fields(
    rich_fields: &mut FxHashSet<String>,
    data_rows: &[Vec<Cell>],
    column: &impl Fn(&str) -> Option<usize>,
) {
    let Some(rich_col) = column(COL_RICH_FIELDS) else {
        info!("no rich-fields column in settings sheet");
        return;
    };

    let mut collected = FxHashSet::default();
    for row in data_rows {
        if let Some(value) = non_blank(row, rich_col) {
            collected.insert(value.to_string());
        }
    }
    *rich_fields = collected;
}

/// Collect (pattern, replacement) pairs in sheet order from rows where
/// both cells are non-blank. A pattern that fails to compile aborts the
/// whole render.
fn resolve_substitutions(
    data_rows: &[Vec<Cell>],
    column: &impl Fn(&str) -> Option<usize>,
) -> Result<Vec<Substitution>, Error> {
    let (Some(pattern_col), Some(replacement_col)) =
        (column(COL_PATTERNS), column(COL_REPLACEMENTS))
    else {
        info!("no substitution columns in settings sheet");
        return Ok(Vec::new());
    };

    let mut substitutions = Vec::new();
    for row in data_rows {
        let (Some(pattern), Some(replacement)) = (
            non_blank(row, pattern_col),
            non_blank(row, replacement_col),
        ) else {
            continue;
        };
        let pattern = pattern.to_string();
        let sub = Substitution::new(&pattern, replacement.to_string())
            .map_err(|source| Error::InvalidPattern { pattern, source })?;
        substitutions.push(sub);
    }
    Ok(substitutions)
}

fn non_blank(row: &[Cell], index: usize) -> Option<&CellValue> {
    row.get(index)
        .and_then(|cell| cell.as_ref())
        .filter(|value| !value.is_blank())
}
