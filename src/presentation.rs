// src/presentation.rs
use std::{collections::BTreeMap, io::Write, path::PathBuf};

use cut_check_domain::TableRegistry;
use cut_check_shared_kernel::Result;
use cut_check_usecase::{CutReport, LuminosityReport};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(feature = "yaml")]
fn write_yaml<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_yaml::to_writer(&mut *out, value)?;
    Ok(())
}

#[cfg(not(feature = "yaml"))]
fn write_yaml<W: Write, T: Serialize>(_out: &mut W, _value: &T) -> Result<()> {
    Err(cut_check_shared_kernel::InfrastructureError::OutputError {
        message: "YAML output requires the `yaml` feature".to_string(),
        source: None,
    }
    .into())
}

fn write_table<W: Write>(out: &mut W, title: &str, table: &BTreeMap<String, PathBuf>) -> Result<()> {
    writeln!(out, "{title}:")?;
    for (key, path) in table {
        writeln!(out, "  {key} -> {}", path.display())?;
    }
    Ok(())
}

/// The three registered tables, one `key -> path` per line.
pub fn write_registry<W: Write>(out: &mut W, registry: &TableRegistry) -> Result<()> {
    write_table(out, "run types", &registry.run_types)?;
    write_table(out, "general cuts", &registry.general)?;
    write_table(out, "parameter tables", &registry.parameters)
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Resolved cuts as `name = v1,v2,...`; structured formats also carry diagnostics.
pub fn write_report<W: Write>(out: &mut W, report: &CutReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => return write_json(out, report),
        OutputFormat::Yaml => return write_yaml(out, report),
        OutputFormat::Text => {}
    }
    for resolution in &report.cuts {
        writeln!(out, "{}", resolution.cut)?;
    }
    Ok(())
}

pub fn write_luminosity<W: Write>(
    out: &mut W,
    report: &LuminosityReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => return write_json(out, report),
        OutputFormat::Yaml => return write_yaml(out, report),
        OutputFormat::Text => {}
    }

    writeln!(
        out,
        "{:<12}{:>10}{:>7}{:>14}{:>14}{:>12}",
        "SETTING", "P (GeV)", "RUNS", "SLOPE", "INTERCEPT", "CHI2"
    )?;
    writeln!(out, "{}", "-".repeat(69))?;
    let rows = report
        .settings
        .iter()
        .map(|s| (s.setting.as_str(), s.momentum, &s.fit))
        .chain(std::iter::once(("combined", None, &report.combined)));
    for (name, momentum, fit) in rows {
        let momentum = momentum.map_or_else(|| "-".to_string(), |p| format!("{p:.3}"));
        let chi = fit.chi_squared.map_or_else(|| "-".to_string(), |c| format!("{c:.3}"));
        writeln!(
            out,
            "{name:<12}{momentum:>10}{:>7}{:>14.6e}{:>14.6}{chi:>12}",
            fit.points, fit.slope, fit.intercept
        )?;
    }
    Ok(())
}
