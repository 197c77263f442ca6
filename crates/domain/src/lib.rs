//! # Domain
//!
//! Pure cut-definition model: the line grammar, dotted references,
//! run-ranged parameter tables and the table registry. Nothing here touches
//! the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod diagnostics;
pub mod model;
pub mod options;
pub mod parameters;
pub mod regression;

pub use config::TableRegistry;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use model::{CutLine, CutReference, ResolvedCut};
pub use options::{
    MalformedLinePolicy, ResolverOptions, ResolverOptionsBuilder, UnknownCategoryPolicy,
    UnmatchedRunPolicy,
};
pub use parameters::{
    ParameterLookup, ParameterRef, ParameterRow, ParameterTable, ReferenceScanner, RunRange, SkippedRow,
};
