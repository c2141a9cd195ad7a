//! Test helpers shared by the integration tests
//!
//! Provides a scripted command runner so bootstrap paths can be exercised
//! without git, pip or pre-commit on the machine.

#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use plugin_setup_core::components::{module_directory, PluginComponents};
use plugin_setup_core::guide::GuideContext;
use plugin_setup_core::manifest::MANIFEST_FILE;
use plugin_setup_core::process::{CommandOutput, CommandRunner, CommandSpec, ProcessError};
use plugin_setup_core::types::RemoteRepository;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Command runner returning canned results and recording every call
pub struct ScriptedRunner {
    /// Exact command lines that exit non-zero
    failures: RefCell<HashMap<String, (i32, String)>>,
    /// Programs that cannot be spawned at all
    missing: RefCell<HashSet<String>>,
    /// Programs reported by `is_available`
    on_path: RefCell<HashSet<String>>,
    invocations: RefCell<Vec<CommandSpec>>,
}

impl Default for ScriptedRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedRunner {
    /// Every command succeeds; git, python and pre-commit are on PATH
    pub fn new() -> Self {
        Self {
            failures: RefCell::new(HashMap::new()),
            missing: RefCell::new(HashSet::new()),
            on_path: RefCell::new(
                ["git", "python", "pre-commit"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ),
            invocations: RefCell::new(Vec::new()),
        }
    }

    /// Make `command_line` exit with `code`
    pub fn fail(&self, command_line: &str, code: i32, stderr: &str) -> &Self {
        self.failures
            .borrow_mut()
            .insert(command_line.to_string(), (code, stderr.to_string()));
        self
    }

    /// Make every invocation of `program` fail to spawn
    pub fn missing(&self, program: &str) -> &Self {
        self.missing.borrow_mut().insert(program.to_string());
        self.on_path.borrow_mut().remove(program);
        self
    }

    /// Put `program` on PATH
    pub fn on_path(&self, program: &str) -> &Self {
        self.on_path.borrow_mut().insert(program.to_string());
        self
    }

    pub fn invocations(&self) -> Vec<CommandSpec> {
        self.invocations.borrow().clone()
    }

    /// Recorded command lines in order
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(CommandSpec::command_line)
            .collect()
    }

    pub fn ran(&self, command_line: &str) -> bool {
        self.command_lines().iter().any(|c| c == command_line)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
        self.invocations.borrow_mut().push(spec.clone());

        if self.missing.borrow().contains(&spec.program) {
            return Err(ProcessError::not_found(&spec.program));
        }

        let command_line = spec.command_line();
        if let Some((code, stderr)) = self.failures.borrow().get(&command_line) {
            return Err(ProcessError::failed(command_line, Some(*code), stderr.clone()));
        }

        Ok(CommandOutput::default())
    }

    fn is_available(&self, program: &str) -> bool {
        self.on_path.borrow().contains(program)
    }
}

/// Guide context for `napari-foo` with the given remote answer
pub fn context(repository_url: &str, precommit: bool) -> GuideContext {
    GuideContext {
        plugin_name: "napari-foo".to_string(),
        module_name: "napari_foo".to_string(),
        project_directory: Utf8PathBuf::from("napari-foo"),
        remote: RemoteRepository::from_answers(repository_url, "octo", "napari-foo"),
        components: PluginComponents {
            precommit,
            contributions: Vec::new(),
        },
    }
}

/// Manifest the template writes for a plugin with a reader and a widget
pub const TEMPLATE_MANIFEST: &str = r#"name: napari-foo
display_name: Foo Viewer
contributions:
  commands:
    - id: napari-foo.get_reader
      python_name: napari_foo._reader:napari_get_reader
      title: Open data with Foo Viewer
    - id: napari-foo.make_container_widget
      python_name: napari_foo:ImageThreshold
      title: Make threshold Container widget
  readers:
    - command: napari-foo.get_reader
      accepts_directories: false
      filename_patterns: ['*.npy']
  widgets:
    - command: napari-foo.make_container_widget
      display_name: Container Threshold
"#;

/// Write a generated-project layout under `root/<project>` and return its path
pub fn write_project(root: &Utf8Path, project: &str, module: &str, manifest: Option<&str>) -> Utf8PathBuf {
    let project_dir = root.join(project);
    let module_dir = module_directory(&project_dir, module);
    std::fs::create_dir_all(&module_dir).unwrap();
    std::fs::write(module_dir.join("__init__.py"), "").unwrap();
    std::fs::write(module_dir.join("_reader.py"), "").unwrap();
    std::fs::write(module_dir.join("_widget.py"), "").unwrap();
    if let Some(manifest) = manifest {
        std::fs::write(module_dir.join(MANIFEST_FILE), manifest).unwrap();
    }
    project_dir
}
