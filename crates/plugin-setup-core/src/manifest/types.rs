//! Plugin manifest (`napari.yaml`) types

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// The subset of the plugin manifest the setup step cares about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Distribution name; command ids are namespaced by it
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub contributions: Contributions,
}

/// Contribution points declared by the plugin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub commands: Vec<CommandContribution>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub readers: Vec<ReaderContribution>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub writers: Vec<WriterContribution>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub widgets: Vec<WidgetContribution>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sample_data: Vec<SampleDataContribution>,
}

/// An empty YAML key (`commands:`) parses as null; treat it as absent
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandContribution {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderContribution {
    pub command: String,
    #[serde(default)]
    pub filename_patterns: Vec<String>,
    #[serde(default)]
    pub accepts_directories: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterContribution {
    pub command: String,
    pub layer_types: Vec<String>,
    #[serde(default)]
    pub filename_extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetContribution {
    pub command: String,
    pub display_name: String,
}

/// Sample data is either produced by a command or loaded from a URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleDataContribution {
    pub key: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl PluginManifest {
    /// Name shown to users: the display name, or the package name when the
    /// display name is missing or empty
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(display) if !display.is_empty() => display,
            _ => &self.name,
        }
    }

    /// Checks the schema cannot express
    ///
    /// - command ids are namespaced as `<name>.<command>`
    /// - command ids are unique
    /// - every contribution refers to a declared command
    pub fn check_consistency(&self) -> Result<()> {
        let prefix = format!("{}.", self.name);
        let mut declared = HashSet::new();

        for command in &self.contributions.commands {
            if !command.id.starts_with(&prefix) || command.id.len() == prefix.len() {
                return Err(Error::invalid_manifest(format!(
                    "command id '{}' must start with '{}'",
                    command.id, prefix
                )));
            }
            if !declared.insert(command.id.as_str()) {
                return Err(Error::invalid_manifest(format!(
                    "duplicate command id '{}'",
                    command.id
                )));
            }
        }

        let references = self
            .contributions
            .readers
            .iter()
            .map(|r| ("reader", r.command.as_str()))
            .chain(
                self.contributions
                    .writers
                    .iter()
                    .map(|w| ("writer", w.command.as_str())),
            )
            .chain(
                self.contributions
                    .widgets
                    .iter()
                    .map(|w| ("widget", w.command.as_str())),
            )
            .chain(
                self.contributions
                    .sample_data
                    .iter()
                    .filter_map(|s| s.command.as_deref().map(|c| ("sample data", c))),
            );

        for (kind, command) in references {
            if !declared.contains(command) {
                return Err(Error::invalid_manifest(format!(
                    "{} refers to undeclared command '{}'",
                    kind, command
                )));
            }
        }

        Ok(())
    }
}
