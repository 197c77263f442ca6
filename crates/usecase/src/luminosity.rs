// crates/usecase/src/luminosity.rs
//! Luminosity scans: relative yield against beam current, per setting and combined.

use std::path::{Path, PathBuf};

use cut_check_domain::regression::{LinearFit, YieldSeries};
use cut_check_ports::tabular::{TabularDto, TabularSource};
use cut_check_shared_kernel::{ApplicationError, CutCheckError, DomainError, DomainResult, Result};
use serde::{Deserialize, Serialize};

/// Column names of a luminosity-analysis table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldColumns {
    pub current: String,
    pub rel_yield: String,
    pub yield_abs: String,
    pub rel_yield_error: String,
}

impl Default for YieldColumns {
    fn default() -> Self {
        Self {
            current: "current".into(),
            rel_yield: "yieldRel_HMS_track".into(),
            yield_abs: "yield_HMS_track".into(),
            rel_yield_error: "uncern_yieldRel_HMS_track".into(),
        }
    }
}

/// One spectrometer setting to fit.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingInput {
    pub name: String,
    pub path: PathBuf,
    /// Spectrometer momentum in GeV, when known.
    pub momentum: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingFit {
    pub setting: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momentum: Option<f64>,
    pub fit: LinearFit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuminosityReport {
    pub settings: Vec<SettingFit>,
    /// Fit over the points of every setting together.
    pub combined: LinearFit,
}

pub struct LuminosityAnalysis<'a> {
    tables: &'a dyn TabularSource,
    columns: YieldColumns,
}

impl<'a> LuminosityAnalysis<'a> {
    pub fn new(tables: &'a dyn TabularSource, columns: YieldColumns) -> Self {
        Self { tables, columns }
    }

    /// Read one setting's table, filling missing cells with the column mean.
    pub fn load_series(&self, path: &Path) -> Result<YieldSeries> {
        let dto = self.tables.read_table(path)?;
        let mut series = series_from_dto(&dto, &self.columns)?;
        series.fill_missing();
        log::debug!("{}: {} runs", path.display(), series.len());
        Ok(series)
    }

    /// Fit every setting, then all points together.
    ///
    /// # Errors
    /// Fails on the first setting that cannot be read or fitted, and when
    /// `settings` is empty.
    pub fn run(&self, settings: &[SettingInput]) -> Result<LuminosityReport> {
        if settings.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "no luminosity settings given".to_owned(),
            }
            .into());
        }

        let mut fits = Vec::with_capacity(settings.len());
        let mut all = YieldSeries::default();
        for setting in settings {
            let series = self
                .load_series(&setting.path)
                .map_err(|e| regression_failed(&setting.name, "cannot load table", e))?;
            let fit = series
                .fit_relative_yield()
                .map_err(|e| regression_failed(&setting.name, "fit failed", e.into()))?;
            log::info!(
                "{}: slope {:.6}, intercept {:.6} over {} runs",
                setting.name,
                fit.slope,
                fit.intercept,
                fit.points
            );
            all.extend(&series);
            fits.push(SettingFit { setting: setting.name.clone(), momentum: setting.momentum, fit });
        }

        let combined = all
            .fit_relative_yield()
            .map_err(|e| regression_failed("combined", "fit failed", e.into()))?;
        Ok(LuminosityReport { settings: fits, combined })
    }
}

fn regression_failed(setting: &str, reason: &str, source: CutCheckError) -> CutCheckError {
    ApplicationError::RegressionFailed {
        setting: setting.to_owned(),
        reason: reason.to_owned(),
        source: Some(Box::new(source)),
    }
    .into()
}

/// `current` and the relative yield are required; the other columns are
/// NaN-filled when absent. Cells that do not parse as numbers become NaN.
fn series_from_dto(dto: &TabularDto, columns: &YieldColumns) -> DomainResult<YieldSeries> {
    let required = |name: &str| {
        dto.column_index(name).ok_or_else(|| DomainError::InvalidConfiguration {
            reason: format!("luminosity table has no '{name}' column"),
        })
    };
    let current = required(&columns.current)?;
    let rel_yield = required(&columns.rel_yield)?;
    let yield_abs = dto.column_index(&columns.yield_abs);
    let rel_yield_error = dto.column_index(&columns.rel_yield_error);

    let column = |idx: Option<usize>| -> Vec<f64> {
        dto.records
            .iter()
            .filter(|row| row.iter().any(|c| !c.is_empty()))
            .map(|row| idx.and_then(|i| row.get(i)).map_or(f64::NAN, |cell| parse_cell(cell)))
            .collect()
    };

    Ok(YieldSeries {
        current: column(Some(current)),
        rel_yield: column(Some(rel_yield)),
        yield_abs: column(yield_abs),
        rel_yield_error: column(rel_yield_error),
    })
}

fn parse_cell(cell: &str) -> f64 {
    cell.trim().parse().unwrap_or(f64::NAN)
}
