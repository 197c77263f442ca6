pub mod cut_line;
pub mod reference;
pub mod resolved;

pub use cut_line::{CutLine, definition_lines, is_comment};
pub use reference::CutReference;
pub use resolved::ResolvedCut;
