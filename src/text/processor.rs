//! The field-text pipeline: escape, substitute, size.
//!
//! Every card field passes through [`TextProcessor::process`], which turns
//! a raw cell value into safe HTML plus a size bucket for presentational
//! scaling. Sizing is driven by the *pre-escape* character count so that
//! escaping and substitution never perturb the visual scaling decision.

use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::escape::escape_html;
use crate::sheet::CellValue;

/// Threshold-table key that applies to any context without its own entry.
pub const WILDCARD_CONTEXT: &str = "*";

/// Character-length thresholds per context: (medium cutoff, small cutoff).
pub type SizeThresholds = FxHashMap<String, (usize, usize)>;

/// Size bucket for a rendered text, driving CSS scale classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    /// Fits comfortably; full-size type.
    Big,
    /// Longer than the medium cutoff.
    Medium,
    /// Longer than the small cutoff.
    Small,
}

impl SizeClass {
    /// The CSS class emitted for this bucket.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            SizeClass::Big => "bigtext",
            SizeClass::Medium => "mediumtext",
            SizeClass::Small => "smalltext",
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}

/// One ordered substitution rule: a regex applied over the escaped text
/// of rich fields, in list order, each seeing the previous rule's output.
#[derive(Clone, Debug)]
pub struct Substitution {
    pattern: Regex,
    replacement: String,
}

impl Substitution {
    /// Compile a rule. The replacement may reference capture groups
    /// (`$1`, `${name}`).
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// Apply this rule to every match in `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }

    /// The source pattern, as configured.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Result of processing one field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Processed {
    /// Escaped (and possibly substituted) HTML for the value.
    pub html: String,
    /// Size bucket computed from the pre-escape character count.
    pub size: SizeClass,
}

/// Processes raw field text into renderable HTML plus a size class.
///
/// ## Example
///
/// ```
/// use proxydeck::text::{SizeClass, TextProcessor};
///
/// let processor = TextProcessor::default();
/// let out = processor.process_str("Strike & run", "*");
/// assert_eq!(out.html, "Strike &amp; run");
/// assert_eq!(out.size, SizeClass::Big);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextProcessor {
    thresholds: SizeThresholds,
    rich_fields: FxHashSet<String>,
    substitutions: Vec<Substitution>,
}

impl TextProcessor {
    /// Build a processor from resolved deck settings.
    #[must_use]
    pub fn new(
        thresholds: SizeThresholds,
        rich_fields: FxHashSet<String>,
        substitutions: Vec<Substitution>,
    ) -> Self {
        Self {
            thresholds,
            rich_fields,
            substitutions,
        }
    }

    /// Process a cell value under a field-name context.
    #[must_use]
    pub fn process(&self, value: &CellValue, context: &str) -> Processed {
        self.process_str(&value.to_string(), context)
    }

    /// Process already-stringified text under a field-name context.
    #[must_use]
    pub fn process_str(&self, raw: &str, context: &str) -> Processed {
        // The pre-escape character count drives sizing.
        let length = raw.chars().count();

        let mut html = escape_html(raw);
        if self.rich_fields.contains(context) {
            for sub in &self.substitutions {
                html = sub.apply(&html);
            }
        }
        // Authors type a literal backslash-n in cells to force a break.
        if html.contains("\\n") {
            html = html.replace("\\n", "<br />\n");
        }

        Processed {
            html,
            size: self.classify(length, context),
        }
    }

    /// Size bucket for a given pre-escape length and context.
    ///
    /// Cutoffs are exclusive lower bounds: a length exactly equal to a
    /// cutoff stays in the bigger bucket. A context with no entry falls
    /// back to the wildcard; with no wildcard either, everything is `Big`.
    #[must_use]
    pub fn classify(&self, length: usize, context: &str) -> SizeClass {
        let Some((medium_cutoff, small_cutoff)) = self.thresholds_for(context) else {
            return SizeClass::Big;
        };
        if length > small_cutoff {
            SizeClass::Small
        } else if length > medium_cutoff {
            SizeClass::Medium
        } else {
            SizeClass::Big
        }
    }

    fn thresholds_for(&self, context: &str) -> Option<(usize, usize)> {
        self.thresholds
            .get(context)
            .or_else(|| self.thresholds.get(WILDCARD_CONTEXT))
            .copied()
    }

    /// Whether a field name is eligible for substitution rules.
    #[must_use]
    pub fn is_rich(&self, context: &str) -> bool {
        self.rich_fields.contains(context)
    }

    /// The configured substitution rules, in application order.
    #[must_use]
    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }
}
