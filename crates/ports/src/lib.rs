//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`text`]: whole-file text access for cut files
//! - [`tabular`]: delimited tables (parameter tables, yield exports)
//!
//! These ports keep the resolver and regression use cases independent of
//! where the files actually live.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod tabular;
pub mod text;
