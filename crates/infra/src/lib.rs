// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod delimited;
pub mod filesystem;
pub mod persistence;
pub mod registry_file;

pub use delimited::DelimitedTableReader;
pub use filesystem::FsTextSource;
pub use registry_file::load_registry;
