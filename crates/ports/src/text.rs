// crates/ports/src/text.rs
use std::path::Path;

use cut_check_shared_kernel::Result;

/// Port for reading a text resource in one piece.
pub trait TextSource: Send + Sync {
    fn read_text(&self, path: &Path) -> Result<String>;
}
