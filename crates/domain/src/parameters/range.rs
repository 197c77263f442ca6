// crates/domain/src/parameters/range.rs
use cut_check_shared_kernel::{DomainError, DomainResult, RunNumber};
use serde::{Deserialize, Serialize};

/// Inclusive run interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRange {
    start: RunNumber,
    end: RunNumber,
}

impl RunRange {
    /// # Errors
    /// Returns [`DomainError::InvalidRunRange`] when `start > end`.
    pub fn new(start: RunNumber, end: RunNumber) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::InvalidRunRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub const fn start(&self) -> RunNumber {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> RunNumber {
        self.end
    }

    #[inline]
    pub fn contains(&self, run: RunNumber) -> bool {
        self.start <= run && run <= self.end
    }
}
