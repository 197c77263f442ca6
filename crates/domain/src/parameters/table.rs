use cut_check_shared_kernel::{DomainError, DomainResult, RunNumber};
use serde::Serialize;

use super::RunRange;

pub const RUN_START: &str = "Run_Start";
pub const RUN_END: &str = "Run_End";

/// One row: the interval it applies to and its raw cells, aligned with the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRow {
    pub range: RunRange,
    cells: Vec<String>,
}

impl ParameterRow {
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Outcome of looking up one field for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLookup<'a> {
    Found(&'a str),
    /// The field exists but no row covers the run.
    NoMatchingRow,
    /// The header has no such column.
    UnknownField,
}

/// A record left out of the table because its interval is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based record number, header excluded.
    pub row: usize,
    pub reason: String,
}

/// In-memory parameter table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParameterTable {
    columns: Vec<String>,
    rows: Vec<ParameterRow>,
    skipped: Vec<SkippedRow>,
}

impl ParameterTable {
    /// Build a table from a header and string records.
    ///
    /// The header must contain `Run_Start` and `Run_End`. Short records are
    /// padded with empty cells. A record whose bound is not a run number, or
    /// whose interval is reversed, can never match a run; it is kept out of
    /// the lookup and listed in [`ParameterTable::skipped`].
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidConfiguration`] when a run column is
    /// missing.
    pub fn from_records<I>(header: Vec<String>, records: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let start_idx = column_index(&header, RUN_START)?;
        let end_idx = column_index(&header, RUN_END)?;

        let mut rows = Vec::new();
        let mut skipped = Vec::new();
        for (line, mut cells) in records.into_iter().enumerate() {
            if cells.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            cells.resize(header.len(), String::new());
            match row_range(&cells[start_idx], &cells[end_idx]) {
                Ok(range) => rows.push(ParameterRow { range, cells }),
                Err(err) => skipped.push(SkippedRow { row: line + 1, reason: err.to_string() }),
            }
        }

        Ok(Self { columns: header, rows, skipped })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ParameterRow] {
        &self.rows
    }

    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// First row, in file order, whose interval contains `run`.
    pub fn row_for(&self, run: RunNumber) -> Option<&ParameterRow> {
        self.rows.iter().find(|row| row.range.contains(run))
    }

    pub fn lookup(&self, run: RunNumber, field: &str) -> ParameterLookup<'_> {
        let Some(idx) = self.columns.iter().position(|c| c == field) else {
            return ParameterLookup::UnknownField;
        };
        match self.row_for(run) {
            Some(row) => ParameterLookup::Found(row.cells[idx].as_str()),
            None => ParameterLookup::NoMatchingRow,
        }
    }
}

fn column_index(header: &[String], name: &str) -> DomainResult<usize> {
    header.iter().position(|c| c == name).ok_or_else(|| DomainError::InvalidConfiguration {
        reason: format!("parameter table has no '{name}' column"),
    })
}

fn row_range(start: &str, end: &str) -> DomainResult<RunRange> {
    let bound = |cell: &str| {
        cell.parse::<RunNumber>()
            .map_err(|e| DomainError::InvalidConfiguration { reason: e.to_string() })
    };
    RunRange::new(bound(start)?, bound(end)?)
}
