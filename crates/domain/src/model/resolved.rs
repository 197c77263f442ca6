use std::{fmt, str::FromStr};

use cut_check_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

/// Separator between values of a resolved cut.
pub const VALUE_SEPARATOR: char = ',';

/// A cut name with its expanded value list, rendered `name = v1,v2,...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCut {
    pub name: String,
    pub values: Vec<String>,
}

impl ResolvedCut {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self { name: name.into(), values }
    }

    /// The comma-joined value list.
    pub fn expression(&self) -> String {
        self.values.join(&VALUE_SEPARATOR.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for ResolvedCut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.expression())
    }
}

impl FromStr for ResolvedCut {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, rhs) = s.split_once('=').ok_or_else(|| DomainError::MalformedLine {
            line: s.trim().to_owned(),
            reason: "missing '=' separator".to_owned(),
        })?;
        let values = rhs
            .split(VALUE_SEPARATOR)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(Self::new(name.trim(), values))
    }
}
