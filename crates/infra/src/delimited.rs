// crates/infra/src/delimited.rs
//! Comma- or tab-separated tables read with the `csv` crate.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use cut_check_ports::tabular::{TabularDto, TabularSource};
use cut_check_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Reads a delimited table; `.tsv` files use tabs, everything else commas.
///
/// Cells are trimmed and rows may be ragged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedTableReader;

impl DelimitedTableReader {
    fn delimiter_for(path: &Path) -> u8 {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
            _ => b',',
        }
    }
}

impl TabularSource for DelimitedTableReader {
    fn read_table(&self, path: &Path) -> Result<TabularDto> {
        let file = FileReader::open_buffered(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(Self::delimiter_for(path))
            .from_reader(file);

        let parse_error = |e: csv::Error| InfrastructureError::TableParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        };

        let header = reader.headers().map_err(parse_error)?.iter().map(str::to_owned).collect();
        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(parse_error)?;
            records.push(record.iter().map(str::to_owned).collect());
        }

        log::debug!("{}: {} rows", path.display(), records.len());
        Ok(TabularDto { header, records })
    }
}
