//! Detection of the optional pieces the template generated

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// A contribution module the template may emit under `src/<module>/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contribution {
    Reader,
    Writer,
    SampleData,
    Widget,
}

impl Contribution {
    pub const ALL: [Contribution; 4] = [
        Contribution::Reader,
        Contribution::Writer,
        Contribution::SampleData,
        Contribution::Widget,
    ];

    /// Source file name inside the plugin module
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Reader => "_reader.py",
            Self::Writer => "_writer.py",
            Self::SampleData => "_sample_data.py",
            Self::Widget => "_widget.py",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reader => "Reader",
            Self::Writer => "Writer",
            Self::SampleData => "Sample data",
            Self::Widget => "Widget",
        }
    }
}

/// Optional components present in the generated project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginComponents {
    pub precommit: bool,
    pub contributions: Vec<Contribution>,
}

impl PluginComponents {
    /// Probe `<project>/src/<module>/` for contribution modules
    pub fn detect(project_directory: &Utf8Path, module_name: &str, precommit: bool) -> Self {
        let module_dir = module_directory(project_directory, module_name);
        let contributions: Vec<Contribution> = Contribution::ALL
            .into_iter()
            .filter(|c| module_dir.join(c.file_name()).is_file())
            .collect();

        debug!(
            "Detected {} contribution module(s) in {}",
            contributions.len(),
            module_dir
        );

        Self {
            precommit,
            contributions,
        }
    }
}

/// `<project>/src/<module>`
pub fn module_directory(project_directory: &Utf8Path, module_name: &str) -> Utf8PathBuf {
    project_directory.join("src").join(module_name)
}
