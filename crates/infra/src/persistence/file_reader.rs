// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use cut_check_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|source| read_error(path, source))
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the whole file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut file = Self::open(path)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf).map_err(|source| read_error(path, source))?;
        Ok(buf)
    }
}

fn read_error(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::FileRead { path: path.to_path_buf(), source }
}
