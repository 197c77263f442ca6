// crates/domain/src/config/registry.rs
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use cut_check_shared_kernel::{DomainError, DomainResult, TableKind, path::resolve_against};
use serde::{Deserialize, Serialize};

/// Run types shipped with the standard analysis tree (`DB/CUTS/run_type/<name>.cuts`).
pub const STANDARD_RUN_TYPES: &[&str] = &[
    "fADCdeadtime",
    "coin_heep",
    "hSing_optics",
    "hSing_prod",
    "pSing_optics",
    "pSing_prod",
    "coinpeak",
    "coin_prod",
    "lumi",
    "pid_eff",
    "simc_coin_heep",
    "simc_sing_heep",
];

/// General-cut categories (`DB/CUTS/general/<name>.cuts`).
pub const STANDARD_GENERAL: &[&str] = &["pid", "track", "accept", "coin_time", "current", "misc"];

/// Parameter categories and their files under `DB/PARAM/`.
pub const STANDARD_PARAMETERS: &[(&str, &str)] = &[
    ("accept", "Acceptance_Parameters.csv"),
    ("track", "Tracking_Parameters.csv"),
    ("CT", "Timing_Parameters.csv"),
    ("pid", "PID_Parameters.csv"),
    ("misc", "Misc_Parameters.csv"),
    ("current", "Current_Parameters.csv"),
];

/// The three name → path tables the resolver reads from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRegistry {
    #[serde(default)]
    pub run_types: BTreeMap<String, PathBuf>,
    #[serde(default)]
    pub general: BTreeMap<String, PathBuf>,
    #[serde(default)]
    pub parameters: BTreeMap<String, PathBuf>,
}

impl TableRegistry {
    /// Registry for the standard `DB/` layout below `util_dir`.
    pub fn standard_layout(util_dir: &Path) -> Self {
        let run_type_dir = util_dir.join("DB/CUTS/run_type");
        let general_dir = util_dir.join("DB/CUTS/general");
        let param_dir = util_dir.join("DB/PARAM");

        let run_types = STANDARD_RUN_TYPES
            .iter()
            .map(|name| ((*name).to_owned(), run_type_dir.join(format!("{name}.cuts"))))
            .collect();
        let general = STANDARD_GENERAL
            .iter()
            .map(|name| ((*name).to_owned(), general_dir.join(format!("{name}.cuts"))))
            .collect();
        let parameters = STANDARD_PARAMETERS
            .iter()
            .map(|(name, file)| ((*name).to_owned(), param_dir.join(file)))
            .collect();

        Self { run_types, general, parameters }
    }

    pub fn table(&self, kind: TableKind) -> &BTreeMap<String, PathBuf> {
        match kind {
            TableKind::RunType => &self.run_types,
            TableKind::GeneralCut => &self.general,
            TableKind::Parameter => &self.parameters,
        }
    }

    /// Path registered for `key`.
    ///
    /// # Errors
    /// Returns [`DomainError::NotFound`] when the table has no such key.
    pub fn lookup(&self, kind: TableKind, key: &str) -> DomainResult<&Path> {
        self.table(kind)
            .get(key)
            .map(PathBuf::as_path)
            .ok_or_else(|| DomainError::NotFound { table: kind, key: key.to_owned() })
    }

    /// Resolve every relative path against `base`.
    #[must_use]
    pub fn rebased(self, base: &Path) -> Self {
        let rebase = |table: BTreeMap<String, PathBuf>| {
            table.into_iter().map(|(k, v)| (k, resolve_against(base, &v))).collect()
        };
        Self {
            run_types: rebase(self.run_types),
            general: rebase(self.general),
            parameters: rebase(self.parameters),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.run_types.is_empty() && self.general.is_empty() && self.parameters.is_empty()
    }
}
