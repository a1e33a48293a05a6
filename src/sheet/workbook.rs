//! Workbook input: an ordered set of named sheets.
//!
//! This is the boundary with the spreadsheet-reading libraries. Everything
//! past this file works on plain grids of [`CellValue`]s and never sees a
//! calamine or csv type.
//!
//! A bare CSV file has no sheet names, so it loads as a single synthetic
//! sheet named `"-"`, the sentinel the card renderer reads as "no
//! cardtype banner".

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use log::debug;

use super::row::{Cell, Grid};
use super::value::CellValue;
use crate::error::Error;

/// Sheet name used for input with no sheet structure of its own.
pub const SINGLE_SHEET_NAME: &str = "-";

/// An ordered collection of named sheets.
///
/// Order matters: cards render in workbook order.
#[derive(Clone, Debug, Default)]
pub struct SheetSet {
    sheets: Vec<(String, Grid)>,
}

impl SheetSet {
    /// Create a sheet set from named grids, preserving order.
    #[must_use]
    pub fn new(sheets: Vec<(String, Grid)>) -> Self {
        Self { sheets }
    }

    /// Wrap a single anonymous grid as the `"-"` sentinel sheet.
    #[must_use]
    pub fn single(grid: Grid) -> Self {
        Self {
            sheets: vec![(SINGLE_SHEET_NAME.to_string(), grid)],
        }
    }

    /// Load from a file path, dispatching on extension: `.csv` loads as a
    /// single-sheet set, everything else goes through calamine.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            Self::from_csv(path)
        } else {
            Self::from_workbook(path)
        }
    }

    /// Load every sheet of an ODS/XLS(X) workbook.
    pub fn from_workbook(path: &Path) -> Result<Self, Error> {
        let mut workbook = open_workbook_auto(path)?;
        let mut sheets = Vec::new();
        for (name, range) in workbook.worksheets() {
            let grid: Grid = range
                .rows()
                .map(|row| row.iter().map(convert_cell).collect())
                .collect();
            debug!("loaded sheet {:?} with {} rows", name, grid.len());
            sheets.push((name, grid));
        }
        Ok(Self::new(sheets))
    }

    /// Load a bare CSV file as the single-sheet case.
    pub fn from_csv(path: &Path) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut grid = Grid::new();
        for record in reader.records() {
            let record = record?;
            let cells: Vec<Cell> = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        None
                    } else {
                        Some(CellValue::Text(field.to_string()))
                    }
                })
                .collect();
            grid.push(cells);
        }
        debug!("loaded csv input with {} rows", grid.len());
        Ok(Self::single(grid))
    }

    /// Look up a sheet by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Grid> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, grid)| grid)
    }

    /// Iterate sheets in workbook order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Grid)> {
        self.sheets.iter().map(|(n, g)| (n.as_str(), g))
    }

    /// Number of sheets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Check whether the set has no sheets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(f) => Some(CellValue::from_f64(*f)),
        Data::Int(i) => Some(CellValue::Int(*i)),
        Data::Bool(b) => Some(CellValue::Text(b.to_string())),
        Data::DateTime(dt) => Some(CellValue::from_f64(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => {
            debug!("ignoring error cell: {:?}", e);
            None
        }
    }
}
