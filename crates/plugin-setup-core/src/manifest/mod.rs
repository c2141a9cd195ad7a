//! Plugin manifest validation
//!
//! Validation is a best-effort enhancement: when schema support is missing
//! the check is skipped with a warning. When it runs, any problem is fatal.

mod schema;
mod types;

pub use schema::{ManifestSchema, SchemaSupport, SCHEMA_FILE};
pub use types::{
    CommandContribution, Contributions, PluginManifest, ReaderContribution,
    SampleDataContribution, WidgetContribution, WriterContribution,
};

use crate::components::module_directory;
use crate::error::{Error, Result};
use crate::report::Reporter;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

/// File name of the manifest inside the plugin module
pub const MANIFEST_FILE: &str = "napari.yaml";

/// Result of a manifest check that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestCheck {
    /// Schema support unavailable; nothing was checked
    Skipped,
    /// Manifest passed every check
    Valid {
        path: Utf8PathBuf,
        display_name: String,
    },
}

/// Resolve the project directory against the working directory.
///
/// The setup usually runs from inside the freshly generated project, in
/// which case the relative project directory names the tail of the working
/// directory and the working directory itself is the project. Other
/// relative paths are taken relative to `cwd`.
pub fn resolve_project_directory(cwd: &Utf8Path, project_directory: &Utf8Path) -> Utf8PathBuf {
    if project_directory.is_absolute() {
        return project_directory.to_path_buf();
    }

    let wanted: Vec<Utf8Component<'_>> = project_directory
        .components()
        .filter(|c| !matches!(c, Utf8Component::CurDir))
        .collect();
    let have: Vec<Utf8Component<'_>> = cwd.components().collect();

    if !wanted.is_empty() && wanted.len() <= have.len() && have[have.len() - wanted.len()..] == wanted[..]
    {
        debug!("Working directory {} is the project directory", cwd);
        return cwd.to_path_buf();
    }

    cwd.join(project_directory)
}

/// `<project>/src/<module>/napari.yaml`
pub fn manifest_path(project_directory: &Utf8Path, module_name: &str) -> Utf8PathBuf {
    module_directory(project_directory, module_name).join(MANIFEST_FILE)
}

/// Read and fully validate the manifest at `path`
pub fn load_manifest(schema: &ManifestSchema, path: &Utf8Path) -> Result<PluginManifest> {
    let content =
        std::fs::read_to_string(path).map_err(|e| Error::manifest_read(path.as_str(), e))?;
    schema.validate_yaml(&content)
}

/// Validate the generated project's manifest
pub fn validate_manifest(
    support: &SchemaSupport,
    module_name: &str,
    project_directory: &Utf8Path,
    cwd: &Utf8Path,
    reporter: &dyn Reporter,
) -> Result<ManifestCheck> {
    let schema = match support {
        SchemaSupport::Available(schema) => schema,
        SchemaSupport::Unavailable { reason } => {
            reporter.warning(&format!(
                "Manifest schema support is unavailable ({}). Skipping manifest validation.",
                reason
            ));
            return Ok(ManifestCheck::Skipped);
        }
    };

    let project = resolve_project_directory(cwd, project_directory);
    let path = manifest_path(&project, module_name);
    info!("Validating manifest: {}", path);

    let manifest = load_manifest(schema, &path)?;
    let display_name = manifest.label().to_string();
    reporter.success(&format!("Manifest for '{}' is valid!", display_name));

    Ok(ManifestCheck::Valid { path, display_name })
}
