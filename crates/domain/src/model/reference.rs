use std::fmt;

use cut_check_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// `category.field` reference into the general-cut table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CutReference {
    pub category: String,
    pub field: String,
}

impl CutReference {
    pub fn new(category: impl Into<String>, field: impl Into<String>) -> Self {
        Self { category: category.into(), field: field.into() }
    }

    /// Parse one term; the first `.` separates category from field.
    ///
    /// # Errors
    /// Returns [`DomainError::MalformedLine`] when there is no `.` or either side is empty.
    pub fn parse(term: &str) -> DomainResult<Self> {
        let term = term.trim();
        let malformed = || DomainError::MalformedLine {
            line: term.to_owned(),
            reason: "expected 'category.field' reference".to_owned(),
        };
        let (category, field) = term.split_once('.').ok_or_else(malformed)?;
        let (category, field) = (category.trim(), field.trim());
        if category.is_empty() || field.is_empty() {
            return Err(malformed());
        }
        Ok(Self::new(category, field))
    }
}

impl fmt::Display for CutReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.field)
    }
}
