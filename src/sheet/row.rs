//! Rows: ordered field-name → value mappings.
//!
//! A sheet's first row is its header; every following row zips against it
//! to become a `Row`. Insertion order is preserved because it drives the
//! display order of generic card fields, so the backing store is a plain
//! vector of pairs (rows hold tens of fields at most, linear lookup is
//! fine).

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::value::CellValue;

/// One sheet cell as loaded: `None` is an empty cell.
pub type Cell = Option<CellValue>;

/// A sheet as loaded: rows of cells, header first.
pub type Grid = Vec<Vec<Cell>>;

/// An ordered mapping from field name to cell value.
///
/// ## Example
///
/// ```
/// use proxydeck::sheet::{CellValue, Row};
///
/// let mut row = Row::new();
/// row.insert("Name", "Goblin");
/// row.insert("Cost", CellValue::Int(2));
///
/// assert_eq!(row.get("Cost").and_then(|v| v.as_int()), Some(2));
/// assert!(row.get("Missing").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    fields: Vec<(String, CellValue)>,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any existing value under the same name.
    ///
    /// Replacement keeps the field's original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<CellValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check whether a field is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// Convert a loaded sheet into rows by zipping the header against each
/// data row.
///
/// - Rows shorter than the header leave trailing fields absent.
/// - Rows longer than the header have their excess values ignored.
/// - Wholly empty rows are dropped.
/// - Header cells that are empty produce no field for that column.
#[must_use]
pub fn rows_from_grid(grid: &Grid) -> Vec<Row> {
    if grid.len() < 2 {
        warn!("sheet has no data rows (found {} rows)", grid.len());
        return Vec::new();
    }

    let header: Vec<Option<String>> = grid[0]
        .iter()
        .map(|cell| cell.as_ref().map(|v| v.to_string()))
        .collect();

    let mut rows = Vec::new();
    for cells in &grid[1..] {
        let cells = trim_trailing_empties(cells);
        if cells.is_empty() {
            continue;
        }
        if cells.len() != header.len() {
            info!(
                "row width {} does not match header width {}",
                cells.len(),
                header.len()
            );
        }

        let mut row = Row::new();
        for (name, cell) in header.iter().zip(cells) {
            let Some(name) = name else { continue };
            // Interior empty cells still produce a (blank) field so the
            // column shows up on the card like any other.
            let value = cell
                .clone()
                .unwrap_or_else(|| CellValue::Text(String::new()));
            row.insert(name.clone(), value);
        }
        rows.push(row);
    }
    rows
}

fn trim_trailing_empties(cells: &[Cell]) -> &[Cell] {
    let end = cells
        .iter()
        .rposition(|c| c.is_some())
        .map_or(0, |i| i + 1);
    &cells[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(v: impl Into<CellValue>) -> Cell {
        Some(v.into())
    }

    #[test]
    fn test_insert_and_get() {
        let mut row = Row::new();
        row.insert("Name", "Goblin");
        row.insert("Cost", CellValue::Int(2));

        assert_eq!(row.get("Name").and_then(|v| v.as_text()), Some("Goblin"));
        assert_eq!(row.get("Cost").and_then(|v| v.as_int()), Some(2));
        assert!(row.get("Attack").is_none());
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut row = Row::new();
        row.insert("A", 1i64);
        row.insert("B", 2i64);
        row.insert("A", 3i64);

        let names: Vec<_> = row.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(row.get("A").and_then(|v| v.as_int()), Some(3));
    }

    #[test]
    fn test_iteration_preserves_order() {
        let mut row = Row::new();
        row.insert("Zeta", 1i64);
        row.insert("Alpha", 2i64);
        row.insert("Mid", 3i64);

        let names: Vec<_> = row.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_rows_from_grid_zips_header() {
        let grid: Grid = vec![
            vec![cell("Name"), cell("Cost")],
            vec![cell("Goblin"), cell(2i64)],
            vec![cell("Ogre"), cell(5i64)],
        ];

        let rows = rows_from_grid(&grid);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Name").and_then(|v| v.as_text()), Some("Goblin"));
        assert_eq!(rows[1].get("Cost").and_then(|v| v.as_int()), Some(5));
    }

    #[test]
    fn test_short_row_leaves_trailing_fields_absent() {
        let grid: Grid = vec![
            vec![cell("Name"), cell("Cost"), cell("Attack")],
            vec![cell("Goblin"), cell(2i64), None],
        ];

        let rows = rows_from_grid(&grid);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("Name"));
        assert!(rows[0].contains("Cost"));
        assert!(!rows[0].contains("Attack"));
    }

    #[test]
    fn test_long_row_ignores_excess_values() {
        let grid: Grid = vec![
            vec![cell("Name")],
            vec![cell("Goblin"), cell("stray"), cell("values")],
        ];

        let rows = rows_from_grid(&grid);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 1);
    }

    #[test]
    fn test_empty_rows_dropped() {
        let grid: Grid = vec![
            vec![cell("Name")],
            vec![None],
            vec![cell("Goblin")],
            vec![None, None, None],
        ];

        let rows = rows_from_grid(&grid);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_interior_empty_cell_becomes_blank_field() {
        let grid: Grid = vec![
            vec![cell("Name"), cell("Cost"), cell("Attack")],
            vec![cell("Goblin"), None, cell(1i64)],
        ];

        let rows = rows_from_grid(&grid);
        assert!(rows[0].get("Cost").is_some_and(|v| v.is_blank()));
        assert_eq!(rows[0].get("Attack").and_then(|v| v.as_int()), Some(1));
    }

    #[test]
    fn test_header_only_grid_yields_nothing() {
        let grid: Grid = vec![vec![cell("Name")]];
        assert!(rows_from_grid(&grid).is_empty());
    }
}
