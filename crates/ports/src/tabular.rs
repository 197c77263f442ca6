// crates/ports/src/tabular.rs
use std::path::Path;

use cut_check_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO for a delimited table: header plus string records, cells trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularDto {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl TabularDto {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
}

/// Port for reading delimited tables.
pub trait TabularSource: Send + Sync {
    fn read_table(&self, path: &Path) -> Result<TabularDto>;
}
