// crates/shared-kernel/src/value_objects/run_number.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Identifier of one data-taking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunNumber(u32);

impl RunNumber {
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for RunNumber {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for RunNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RunNumber {
    type Err = String;

    /// Accepts plain integers and integral floats (`"4567.0"`), which is how
    /// run bounds come out of spreadsheet exports.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(v) = s.parse::<u32>() {
            return Ok(Self(v));
        }
        match s.parse::<f64>() {
            Ok(f) if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                Ok(Self(f as u32))
            }
            _ => Err(format!("invalid run number '{s}'")),
        }
    }
}
