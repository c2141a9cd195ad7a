//! Error types for plugin-setup-core

use thiserror::Error;

/// Result type alias using plugin-setup-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Naming guide linked from module name diagnostics
pub const MODULE_NAMING_GUIDE: &str =
    "https://www.python.org/dev/peps/pep-0008/#package-and-module-names";

/// Setup error types
///
/// Every variant is fatal: the caller is expected to print it and terminate
/// with a non-zero exit code. Bootstrap failures are not errors; they degrade
/// to a manual setup guide instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Module name is not a valid Python module name
    #[error("Module name should be PEP-8 compliant: '{name}'")]
    InvalidModuleName { name: String },

    /// Distribution name contains an underscore
    #[error("PyPI.org and pip discourage package names with underscores: '{name}'")]
    InvalidPackageName { name: String },

    /// Manifest failed parsing, schema, or semantic validation
    #[error("Invalid manifest: {message}")]
    InvalidManifest { message: String },

    /// Manifest could not be read from disk
    #[error("Failed to read '{path}'. {kind:?}: {source}")]
    ManifestRead {
        path: String,
        kind: std::io::ErrorKind,
        #[source]
        source: std::io::Error,
    },

    /// Working directory could not be determined
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },
}

impl Error {
    /// Create an invalid module name error
    pub fn invalid_module_name(name: impl Into<String>) -> Self {
        Self::InvalidModuleName { name: name.into() }
    }

    /// Create an invalid package name error
    pub fn invalid_package_name(name: impl Into<String>) -> Self {
        Self::InvalidPackageName { name: name.into() }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            message: message.into(),
        }
    }

    /// Create a manifest read error, keeping the I/O error kind
    pub fn manifest_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ManifestRead {
            path: path.into(),
            kind: source.kind(),
            source,
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Extra guidance printed under the diagnostic, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::InvalidModuleName { .. } => Some(format!("More info: {}", MODULE_NAMING_GUIDE)),
            _ => None,
        }
    }
}
