use cut_check_domain::{Diagnostic, ResolvedCut};
use cut_check_shared_kernel::RunNumber;
use serde::Serialize;

/// A resolved cut together with the non-fatal problems met on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub cut: ResolvedCut,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub fn new(cut: ResolvedCut) -> Self {
        Self { cut, diagnostics: Vec::new() }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Every requested cut of one run type, optionally substituted for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CutReport {
    pub run_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<RunNumber>,
    pub cuts: Vec<Resolution>,
}

impl CutReport {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.cuts.iter().flat_map(|r| r.diagnostics.iter())
    }
}
