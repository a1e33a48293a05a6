//! Scalar cell values.
//!
//! Spreadsheet readers hand every numeric cell back as a float, but card
//! data is overwhelmingly whole numbers (costs, counts, versions), so any
//! real with no fractional part is normalized to an integer the moment it
//! enters the crate.
//!
//! ## CellValue Types
//!
//! - `Text`: Strings (names, rules text, traits)
//! - `Int`: Whole numbers (costs, copies, versions)
//! - `Real`: Numbers that genuinely carry a fraction

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell value.
///
/// ## Example
///
/// ```
/// use proxydeck::sheet::CellValue;
///
/// // Whole-valued floats normalize to integers.
/// assert_eq!(CellValue::from_f64(3.0), CellValue::Int(3));
/// assert_eq!(CellValue::from_f64(3.5), CellValue::Real(3.5));
/// assert_eq!(CellValue::Int(3).to_string(), "3");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Text value.
    Text(String),
    /// Integer value (also produced by normalizing whole-valued floats).
    Int(i64),
    /// Real value with a genuine fractional part.
    Real(f64),
}

impl CellValue {
    /// Build from a float, normalizing whole values to `Int`.
    #[must_use]
    pub fn from_f64(v: f64) -> Self {
        if v.fract() == 0.0 && v.is_finite() && v.abs() < i64::MAX as f64 {
            CellValue::Int(v as i64)
        } else {
            CellValue::Real(v)
        }
    }

    /// Get as text reference if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as integer if this is an `Int` value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// True when the value renders as nothing: empty or whitespace-only text.
    ///
    /// Numbers are never blank, including zero.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Int(_) | CellValue::Real(_) => false,
        }
    }

    /// Interpret the value as a character-count threshold.
    ///
    /// Accepts non-negative integers and numeric text. Anything else is
    /// `None` and the caller keeps whatever threshold it already had.
    #[must_use]
    pub fn as_length(&self) -> Option<usize> {
        match self {
            CellValue::Int(v) if *v >= 0 => Some(*v as usize),
            CellValue::Int(_) | CellValue::Real(_) => None,
            CellValue::Text(s) => s.trim().parse::<usize>().ok(),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Real(v) => write!(f, "{}", v),
        }
    }
}

// Convenient From implementations
impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::from_f64(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_float_normalizes_to_int() {
        assert_eq!(CellValue::from_f64(2.0), CellValue::Int(2));
        assert_eq!(CellValue::from_f64(-7.0), CellValue::Int(-7));
        assert_eq!(CellValue::from_f64(0.0), CellValue::Int(0));
    }

    #[test]
    fn test_fractional_float_stays_real() {
        assert_eq!(CellValue::from_f64(2.5), CellValue::Real(2.5));
    }

    #[test]
    fn test_display_stringification() {
        assert_eq!(CellValue::Text("Goblin".into()).to_string(), "Goblin");
        assert_eq!(CellValue::Int(2).to_string(), "2");
        assert_eq!(CellValue::Real(2.1).to_string(), "2.1");
        // The round-trip that matters for version filtering: a numeric
        // version cell arrives as 2.0, normalizes to 2, stringifies as "2".
        assert_eq!(CellValue::from_f64(2.0).to_string(), "2");
    }

    #[test]
    fn test_blankness() {
        assert!(CellValue::Text("".into()).is_blank());
        assert!(CellValue::Text("   ".into()).is_blank());
        assert!(!CellValue::Text("x".into()).is_blank());
        assert!(!CellValue::Int(0).is_blank());
        assert!(!CellValue::Real(0.5).is_blank());
    }

    #[test]
    fn test_as_length() {
        assert_eq!(CellValue::Int(30).as_length(), Some(30));
        assert_eq!(CellValue::Int(-1).as_length(), None);
        assert_eq!(CellValue::Text(" 45 ".into()).as_length(), Some(45));
        assert_eq!(CellValue::Text("lots".into()).as_length(), None);
        assert_eq!(CellValue::Real(30.5).as_length(), None);
    }

    #[test]
    fn test_from_impls() {
        let text: CellValue = "keyword".into();
        assert_eq!(text.as_text(), Some("keyword"));

        let int: CellValue = 42i64.into();
        assert_eq!(int.as_int(), Some(42));

        let real: CellValue = 4.0f64.into();
        assert_eq!(real, CellValue::Int(4));
    }

    #[test]
    fn test_serialization_round_trip() {
        let value = CellValue::Text("Attacks twice".into());
        let json = serde_json::to_string(&value).unwrap();
        let back: CellValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }
}
