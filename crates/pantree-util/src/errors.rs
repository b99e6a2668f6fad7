use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all pantree operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PantreeError {
    /// No `META.json` exists for a distribution named in the metadata.
    #[error("distribution {name} not found")]
    #[diagnostic(help("check that <path>/{name}/META.json exists in the metadata directory"))]
    DistributionNotFound { name: String },

    /// A required module has no entry in the module-to-distribution map.
    #[error("module {name} not found")]
    #[diagnostic(help("the module is neither a core module nor listed in module-distro-map.json"))]
    ModuleNotFound { name: String },

    /// Distribution metadata loops back on itself.
    #[error("circular dependency: {chain}")]
    CircularDependency { chain: String },

    /// Reading a metadata file failed for a reason other than absence.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A metadata file exists but is not the expected JSON.
    #[error("failed to parse {}: {source}", path.display())]
    #[diagnostic(help("the file is not valid JSON"))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A resolution worker task panicked or was cancelled.
    #[error("resolution worker failed: {message}")]
    Worker { message: String },
}

/// Convenience alias for `Result<T, PantreeError>`.
pub type PantreeResult<T> = std::result::Result<T, PantreeError>;
