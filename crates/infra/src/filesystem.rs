// crates/infra/src/filesystem.rs
use std::path::Path;

use cut_check_ports::text::TextSource;
use cut_check_shared_kernel::Result;

use crate::persistence::FileReader;

/// Reads cut files straight from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTextSource;

impl TextSource for FsTextSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        log::trace!("reading {}", path.display());
        Ok(FileReader::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn reads_cut_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pid.cuts");
        fs::write(&path, "p1 = H.cal.etot>0.7\n").unwrap();
        assert_eq!(FsTextSource.read_text(&path).unwrap(), "p1 = H.cal.etot>0.7\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = FsTextSource.read_text(&dir.path().join("gone.cuts")).unwrap_err();
        assert!(err.is_not_found());
    }
}
