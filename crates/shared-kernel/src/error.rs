// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::{RunNumber, TableKind};

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CutCheckError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CutCheckError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl CutCheckError {
    /// Strips `Context` layers and returns the innermost error.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// `true` when the error means "the requested thing does not exist":
    /// an unknown table key or a backing file that is missing on disk.
    pub fn is_not_found(&self) -> bool {
        match self.root() {
            Self::Domain(DomainError::NotFound { .. }) => true,
            Self::Infrastructure(InfrastructureError::FileRead { source, .. }) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CutCheckError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{table} table has no entry '{key}'")]
    NotFound { table: TableKind, key: String },

    #[error("Malformed line '{line}': {reason}")]
    MalformedLine { line: String, reason: String },

    #[error("Unknown general-cut category '{category}'")]
    UnknownCategory { category: String },

    #[error("Reference '{reference}' has no parameter interval containing run {run}")]
    UnresolvedReference { reference: String, run: RunNumber },

    #[error("Field '{field}' not found in {table} table '{category}'")]
    FieldNotFound {
        table: TableKind,
        category: String,
        field: String,
    },

    #[error("Invalid run interval: start {start} is after end {end}")]
    InvalidRunRange { start: RunNumber, end: RunNumber },

    #[error("Degenerate fit: {reason}")]
    DegenerateFit { reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to resolve cut '{cut}': {reason}")]
    ResolutionFailed {
        cut: String,
        reason: String,
        #[source]
        source: Option<Box<CutCheckError>>,
    },

    #[error("Failed to fit setting '{setting}': {reason}")]
    RegressionFailed {
        setting: String,
        reason: String,
        #[source]
        source: Option<Box<CutCheckError>>,
    },

    #[error("Session I/O failed: {reason}")]
    SessionFailed { reason: String },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse table '{path}': {details}")]
    TableParse { path: PathBuf, details: String },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for CutCheckError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CutCheckError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for CutCheckError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CutCheckError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CutCheckError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CutCheckError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
