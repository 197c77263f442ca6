// src/config.rs
use std::path::Path;

use cut_check_domain::{ResolverOptions, ResolverOptionsBuilder, TableRegistry};
use cut_check_infra::load_registry;
use cut_check_shared_kernel::{PresentationError, Result, path::logical_absolute};

use crate::cli::Args;

/// Everything a resolver needs, materialised from the command line.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub registry: TableRegistry,
    pub options: ResolverOptions,
}

impl ResolverConfig {
    /// # Errors
    ///
    /// Returns `Err` when no table source is given, when the registry file
    /// cannot be read or parsed, or when it registers no tables at all.
    pub fn from_args(args: &Args) -> Result<Self> {
        let registry = build_registry(args.tables.as_deref(), args.util_path.as_deref())?;
        let options = build_options(args)?;
        Ok(Self { registry, options })
    }
}

/// `--tables` wins over `--util-path` / `UTILPATH`.
pub fn build_registry(tables: Option<&Path>, util_path: Option<&Path>) -> Result<TableRegistry> {
    let registry = match (tables, util_path) {
        (Some(file), _) => load_registry(file)?,
        (None, Some(dir)) => {
            let dir = logical_absolute(dir);
            log::debug!("standard table layout under {}", dir.display());
            TableRegistry::standard_layout(&dir)
        }
        (None, None) => {
            return Err(PresentationError::ConfigBuildFailed(
                "no tables given: pass --tables FILE or --util-path DIR (or set UTILPATH)".into(),
            )
            .into());
        }
    };
    if registry.is_empty() {
        return Err(PresentationError::ConfigBuildFailed("table registry is empty".into()).into());
    }
    Ok(registry)
}

fn build_options(args: &Args) -> Result<ResolverOptions> {
    ResolverOptionsBuilder::default()
        .unmatched_run(args.on_unmatched_run)
        .malformed_line(args.on_malformed)
        .unknown_category(args.on_unknown_category)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
}
