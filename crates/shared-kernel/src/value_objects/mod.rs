// crates/shared-kernel/src/value_objects/mod.rs
pub mod run_number;
pub mod table_kind;

pub use run_number::RunNumber;
pub use table_kind::TableKind;
