// crates/infra/src/registry_file.rs
use std::path::Path;

use cut_check_domain::TableRegistry;
use cut_check_shared_kernel::{ErrorContext, InfrastructureError, Result};

use crate::persistence::FileReader;

/// Load a [`TableRegistry`] from a JSON or YAML file.
///
/// The format follows the extension (`.yaml`/`.yml` need the `yaml` feature;
/// anything else is read as JSON). Relative paths inside the file are
/// resolved against the file's own directory.
pub fn load_registry(path: &Path) -> Result<TableRegistry> {
    let text = FileReader::read_to_string(path)?;
    let registry = parse(path, &text).with_context(|| format!("registry {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    log::debug!(
        "registry {}: {} run types, {} categories, {} parameter tables",
        path.display(),
        registry.run_types.len(),
        registry.general.len(),
        registry.parameters.len()
    );
    Ok(registry.rebased(base))
}

fn parse(path: &Path, text: &str) -> std::result::Result<TableRegistry, InfrastructureError> {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("yaml" | "yml") => parse_yaml(text),
        _ => Ok(serde_json::from_str(text)?),
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(text: &str) -> std::result::Result<TableRegistry, InfrastructureError> {
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_text: &str) -> std::result::Result<TableRegistry, InfrastructureError> {
    Err(InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: "built without the `yaml` feature".to_string(),
    })
}
