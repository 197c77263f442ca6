use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the three lookup tables a name or path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    RunType,
    GeneralCut,
    Parameter,
}

impl TableKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RunType => "run-type",
            Self::GeneralCut => "general-cut",
            Self::Parameter => "parameter",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
