//! The full post-generation flow
//!
//! Validation runs first and is fatal: nothing touches git until the names
//! and the manifest are known to be good.

use crate::bootstrap::{BootstrapOutcome, BootstrapRequest, RepositoryBootstrapper};
use crate::components::PluginComponents;
use crate::error::Result;
use crate::guide::GuideContext;
use crate::manifest::{self, ManifestCheck, SchemaSupport};
use crate::naming;
use crate::platform::HostEnvironment;
use crate::process::CommandRunner;
use crate::report::Reporter;
use crate::types::{RemoteRepository, DEFAULT_GITHUB_OWNER, PROVIDE_LATER};
use camino::Utf8PathBuf;
use tracing::info;

/// Answers handed over by the template generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOptions {
    pub plugin_name: String,
    pub module_name: String,
    /// Project directory as given, absolute or relative to `work_dir`
    pub project_directory: Utf8PathBuf,
    pub install_precommit: bool,
    pub github_repository_url: String,
    pub github_username_or_organization: String,
    /// Directory the command runs in; the repository is created here
    pub work_dir: Utf8PathBuf,
}

impl SetupOptions {
    /// Options with the template's defaults for the optional answers
    pub fn new(
        plugin_name: impl Into<String>,
        module_name: impl Into<String>,
        project_directory: impl Into<Utf8PathBuf>,
        work_dir: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            module_name: module_name.into(),
            project_directory: project_directory.into(),
            install_precommit: false,
            github_repository_url: PROVIDE_LATER.to_string(),
            github_username_or_organization: DEFAULT_GITHUB_OWNER.to_string(),
            work_dir: work_dir.into(),
        }
    }

    pub fn remote(&self) -> RemoteRepository {
        RemoteRepository::from_answers(
            &self.github_repository_url,
            &self.github_username_or_organization,
            &self.plugin_name,
        )
    }
}

/// Everything a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub manifest: ManifestCheck,
    pub outcome: BootstrapOutcome,
}

/// Validate names and manifest, then bootstrap the repository.
///
/// Returns `Err` only for validation failures. A failed bootstrap is still
/// `Ok`, with [`BootstrapOutcome::ManualSetup`] carrying the fallback guide.
pub fn run(
    options: &SetupOptions,
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
    schema: &SchemaSupport,
    host: HostEnvironment,
) -> Result<SetupReport> {
    naming::check_module_name(&options.module_name)?;
    naming::check_package_name(&options.plugin_name)?;

    let manifest = manifest::validate_manifest(
        schema,
        &options.module_name,
        &options.project_directory,
        &options.work_dir,
        reporter,
    )?;

    let project_root =
        manifest::resolve_project_directory(&options.work_dir, &options.project_directory);
    let components = PluginComponents::detect(
        &project_root,
        &options.module_name,
        options.install_precommit,
    );

    info!(
        "Setting up '{}' (module '{}', remote {})",
        options.plugin_name,
        options.module_name,
        options.remote()
    );

    let request = BootstrapRequest {
        work_dir: options.work_dir.clone(),
        context: GuideContext {
            plugin_name: options.plugin_name.clone(),
            module_name: options.module_name.clone(),
            project_directory: options.project_directory.clone(),
            remote: options.remote(),
            components,
        },
    };

    let outcome = RepositoryBootstrapper::new(runner, reporter, host).bootstrap(&request);

    Ok(SetupReport { manifest, outcome })
}
