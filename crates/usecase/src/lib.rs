//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the reading ports:
//!
//! - [`resolver`]: run-type loading, cut expansion and parameter substitution
//! - [`luminosity`]: yield-versus-current fits per spectrometer setting
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod luminosity;
pub mod resolver;

pub use dto::{CutReport, Resolution};
pub use luminosity::{LuminosityAnalysis, LuminosityReport, SettingFit, SettingInput, YieldColumns};
pub use resolver::CutResolver;
