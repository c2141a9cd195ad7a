//! Integration tests for the complete setup flow
//!
//! Validation must stop the run before any subprocess is spawned; a valid
//! project goes through manifest validation, component detection and the
//! bootstrap.

mod common;

use camino::Utf8Path;
use common::{write_project, ScriptedRunner, TEMPLATE_MANIFEST};
use plugin_setup_core::manifest::{ManifestCheck, SchemaSupport};
use plugin_setup_core::platform::HostEnvironment;
use plugin_setup_core::report::{Level, MemoryReporter};
use plugin_setup_core::setup::{run, SetupOptions};
use plugin_setup_core::Error;
use tempfile::TempDir;

fn options(plugin: &str, module: &str, work_dir: &Utf8Path) -> SetupOptions {
    SetupOptions::new(plugin, module, plugin, work_dir)
}

#[test]
fn test_uppercase_module_name_stops_before_subprocesses() {
    let runner = ScriptedRunner::new();
    let reporter = MemoryReporter::new();
    let opts = options("foo-bar", "Foo_Bar", Utf8Path::new("/nowhere/foo-bar"));

    let result = run(
        &opts,
        &runner,
        &reporter,
        &SchemaSupport::resolve(),
        HostEnvironment::default(),
    );

    assert!(matches!(result, Err(Error::InvalidModuleName { .. })));
    assert!(runner.invocations().is_empty());
}

#[test]
fn test_underscore_plugin_name_stops_before_subprocesses() {
    let runner = ScriptedRunner::new();
    let reporter = MemoryReporter::new();
    let opts = options("napari_foo", "napari_foo", Utf8Path::new("/nowhere/napari_foo"));

    let result = run(
        &opts,
        &runner,
        &reporter,
        &SchemaSupport::resolve(),
        HostEnvironment::default(),
    );

    assert!(matches!(result, Err(Error::InvalidPackageName { .. })));
    assert!(runner.invocations().is_empty());
}

#[test]
fn test_unavailable_schema_skips_validation() {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8Path::from_path(temp_dir.path()).unwrap();
    let project = write_project(root, "napari-foo", "napari_foo", None);
    let runner = ScriptedRunner::new();
    let reporter = MemoryReporter::new();

    let report = run(
        &options("napari-foo", "napari_foo", &project),
        &runner,
        &reporter,
        &SchemaSupport::unavailable("not compiled in"),
        HostEnvironment::default(),
    )
    .unwrap();

    assert_eq!(report.manifest, ManifestCheck::Skipped);
    assert!(reporter.contains(Level::Warning, "Skipping manifest validation"));
    assert!(report.outcome.is_completed());
    assert!(runner.ran("git init -q"));
}

#[cfg(feature = "manifest-schema")]
mod with_schema {
    use super::*;

    #[test]
    fn test_valid_project_from_inside_project_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();
        let project = write_project(root, "napari-foo", "napari_foo", Some(TEMPLATE_MANIFEST));
        let runner = ScriptedRunner::new();
        let reporter = MemoryReporter::new();

        let mut opts = options("napari-foo", "napari_foo", &project);
        opts.github_repository_url = "https://github.com/octo/napari-foo".to_string();
        opts.github_username_or_organization = "octo".to_string();

        let report = run(
            &opts,
            &runner,
            &reporter,
            &SchemaSupport::resolve(),
            HostEnvironment::default(),
        )
        .unwrap();

        match &report.manifest {
            ManifestCheck::Valid { path, display_name } => {
                assert_eq!(display_name, "Foo Viewer");
                assert!(path.ends_with("src/napari_foo/napari.yaml"));
            }
            other => panic!("expected valid manifest, got {:?}", other),
        }
        assert!(reporter.contains(Level::Success, "Manifest for 'Foo Viewer' is valid!"));

        let text = report.outcome.guide().to_plain_string();
        assert!(text.contains("https://github.com/octo/napari-foo/issues"));
        assert!(text.contains("https://github.com/octo/napari-foo#README.md"));
        assert!(text.contains("• Reader code: src/napari_foo/_reader.py"));
        assert!(text.contains("• Widget code: src/napari_foo/_widget.py"));
        assert!(!text.contains("https://github.com/new"));
    }

    #[test]
    fn test_project_directory_relative_to_parent() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();
        write_project(root, "napari-foo", "napari_foo", Some(TEMPLATE_MANIFEST));
        let runner = ScriptedRunner::new();
        let reporter = MemoryReporter::new();

        let report = run(
            &options("napari-foo", "napari_foo", root),
            &runner,
            &reporter,
            &SchemaSupport::resolve(),
            HostEnvironment::default(),
        )
        .unwrap();

        assert!(matches!(report.manifest, ManifestCheck::Valid { .. }));
    }

    #[test]
    fn test_missing_manifest_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();
        let project = write_project(root, "napari-foo", "napari_foo", None);
        let runner = ScriptedRunner::new();
        let reporter = MemoryReporter::new();

        let err = run(
            &options("napari-foo", "napari_foo", &project),
            &runner,
            &reporter,
            &SchemaSupport::resolve(),
            HostEnvironment::default(),
        )
        .unwrap_err();

        match &err {
            Error::ManifestRead { path, kind, .. } => {
                assert!(path.ends_with("napari.yaml"));
                assert_eq!(*kind, std::io::ErrorKind::NotFound);
            }
            other => panic!("expected read error, got {:?}", other),
        }
        assert!(err.to_string().contains("NotFound"));
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn test_invalid_manifest_stops_before_subprocesses() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();
        let manifest = TEMPLATE_MANIFEST.replace("id: napari-foo.get_reader", "id: other.get_reader");
        let project = write_project(root, "napari-foo", "napari_foo", Some(&manifest));
        let runner = ScriptedRunner::new();
        let reporter = MemoryReporter::new();

        let result = run(
            &options("napari-foo", "napari_foo", &project),
            &runner,
            &reporter,
            &SchemaSupport::resolve(),
            HostEnvironment::default(),
        );

        assert!(matches!(result, Err(Error::InvalidManifest { .. })));
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn test_bootstrap_failure_still_returns_a_guide() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();
        let project = write_project(root, "napari-foo", "napari_foo", Some(TEMPLATE_MANIFEST));
        let runner = ScriptedRunner::new();
        runner.missing("git");
        let reporter = MemoryReporter::new();

        let report = run(
            &options("napari-foo", "napari_foo", &project),
            &runner,
            &reporter,
            &SchemaSupport::resolve(),
            HostEnvironment::default(),
        )
        .unwrap();

        assert!(!report.outcome.is_completed());
        assert!(report
            .outcome
            .guide()
            .to_plain_string()
            .contains("git commit -m 'initial commit'"));
    }
}
