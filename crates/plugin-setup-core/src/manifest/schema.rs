//! Bundled JSON Schema for the plugin manifest
//!
//! Schema support is optional: builds without the `manifest-schema` feature
//! resolve to [`SchemaSupport::Unavailable`] and validation is skipped.

use super::types::PluginManifest;
use crate::error::{Error, Result};
use serde_json::Value;
use tracing::debug;

#[cfg(feature = "manifest-schema")]
use rust_embed::RustEmbed;

/// Name of the bundled schema file
pub const SCHEMA_FILE: &str = "napari.schema.json";

/// Embedded schema files
#[cfg(feature = "manifest-schema")]
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/schemas/"]
#[prefix = ""]
struct EmbeddedSchemas;

/// Compiled manifest schema
#[derive(Debug)]
pub struct ManifestSchema {
    #[cfg(feature = "manifest-schema")]
    validator: jsonschema::Validator,
}

/// Whether manifest validation can run in this build
#[derive(Debug)]
pub enum SchemaSupport {
    Available(ManifestSchema),
    Unavailable { reason: String },
}

impl SchemaSupport {
    /// Compile the bundled schema, or record why it cannot be used
    pub fn resolve() -> Self {
        match ManifestSchema::bundled() {
            Ok(schema) => Self::Available(schema),
            Err(reason) => {
                debug!("Manifest schema unavailable: {}", reason);
                Self::Unavailable { reason }
            }
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

#[cfg(feature = "manifest-schema")]
impl ManifestSchema {
    /// Load the schema embedded at build time
    pub fn bundled() -> std::result::Result<Self, String> {
        let file = EmbeddedSchemas::get(SCHEMA_FILE)
            .ok_or_else(|| format!("embedded schema {} not found", SCHEMA_FILE))?;
        let json_str = std::str::from_utf8(&file.data)
            .map_err(|_| format!("invalid UTF-8 in schema {}", SCHEMA_FILE))?;
        let schema_value: Value = serde_json::from_str(json_str)
            .map_err(|e| format!("invalid JSON in schema {}: {}", SCHEMA_FILE, e))?;
        Self::from_value(&schema_value)
    }

    /// Compile a schema document
    pub fn from_value(schema: &Value) -> std::result::Result<Self, String> {
        let validator = jsonschema::validator_for(schema)
            .map_err(|e| format!("failed to compile manifest schema: {}", e))?;
        Ok(Self { validator })
    }

    /// Validate a manifest document against the schema
    pub fn validate(&self, value: &Value) -> Result<()> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(value)
            .map(|e| {
                let path = e.instance_path().to_string();
                if path.is_empty() {
                    format!("  - {}", e)
                } else {
                    format!("  - {}: {}", path, e)
                }
            })
            .collect();

        if !errors.is_empty() {
            return Err(Error::invalid_manifest(format!(
                "schema validation failed:\n{}",
                errors.join("\n")
            )));
        }

        Ok(())
    }
}

#[cfg(not(feature = "manifest-schema"))]
impl ManifestSchema {
    pub fn bundled() -> std::result::Result<Self, String> {
        Err("built without the manifest-schema feature".to_string())
    }

    pub fn from_value(_schema: &Value) -> std::result::Result<Self, String> {
        Self::bundled()
    }

    pub fn validate(&self, _value: &Value) -> Result<()> {
        Ok(())
    }
}

impl ManifestSchema {
    /// Parse YAML, validate it, and run the consistency checks
    pub fn validate_yaml(&self, yaml: &str) -> Result<PluginManifest> {
        let value: Value = serde_yaml_ng::from_str(yaml)
            .map_err(|e| Error::invalid_manifest(format!("not valid YAML: {}", e)))?;

        self.validate(&value)?;

        let manifest: PluginManifest = serde_json::from_value(value)
            .map_err(|e| Error::invalid_manifest(e.to_string()))?;

        manifest.check_consistency()?;

        debug!("Manifest '{}' passed validation", manifest.name);
        Ok(manifest)
    }
}
