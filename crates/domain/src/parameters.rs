//! Run-number-indexed parameter tables and the references that point into them.

pub mod range;
pub mod scanner;
pub mod table;

pub use range::RunRange;
pub use scanner::{ParameterRef, ReferenceScanner};
pub use table::{ParameterLookup, ParameterRow, ParameterTable, SkippedRow};
