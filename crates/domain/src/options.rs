// crates/domain/src/options.rs
use std::str::FromStr;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// What to do when a run number falls outside every interval of a parameter table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnmatchedRunPolicy {
    /// Leave the reference as written; only logged at debug level.
    Pass,
    /// Leave the reference as written and record a diagnostic.
    #[default]
    Warn,
    /// Abort the substitution with an error.
    Fail,
}

/// What to do with a definition line that does not follow `name = expression`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedLinePolicy {
    /// Skip the line and record a diagnostic.
    #[default]
    Skip,
    Fail,
}

/// What to do with a reference whose category is not in the general-cut table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownCategoryPolicy {
    /// Contribute nothing and record a diagnostic.
    #[default]
    Ignore,
    Fail,
}

impl FromStr for UnmatchedRunPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pass" => Ok(Self::Pass),
            "warn" => Ok(Self::Warn),
            "fail" => Ok(Self::Fail),
            other => Err(format!("Unknown unmatched-run policy: {other}")),
        }
    }
}

impl FromStr for MalformedLinePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            other => Err(format!("Unknown malformed-line policy: {other}")),
        }
    }
}

impl FromStr for UnknownCategoryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "fail" => Ok(Self::Fail),
            other => Err(format!("Unknown unknown-category policy: {other}")),
        }
    }
}

/// Error-recovery choices for one resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), default)]
pub struct ResolverOptions {
    pub unmatched_run: UnmatchedRunPolicy,
    pub malformed_line: MalformedLinePolicy,
    pub unknown_category: UnknownCategoryPolicy,
}

impl ResolverOptions {
    /// Every recoverable problem becomes an error.
    pub fn strict() -> Self {
        Self {
            unmatched_run: UnmatchedRunPolicy::Fail,
            malformed_line: MalformedLinePolicy::Fail,
            unknown_category: UnknownCategoryPolicy::Fail,
        }
    }
}
