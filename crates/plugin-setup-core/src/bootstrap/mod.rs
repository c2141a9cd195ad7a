//! Repository bootstrap
//!
//! Turns the generated directory into a git repository with an initial
//! commit on `main`, optionally wiring up pre-commit. Only `git init` and the
//! initial commit are essential; if either fails the user gets a manual
//! setup guide instead of the usual next steps. Every other sub-step is best
//! effort.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use plugin_setup_core::bootstrap::{BootstrapRequest, RepositoryBootstrapper};
//! use plugin_setup_core::components::PluginComponents;
//! use plugin_setup_core::guide::GuideContext;
//! use plugin_setup_core::platform::HostEnvironment;
//! use plugin_setup_core::process::SystemRunner;
//! use plugin_setup_core::report::MemoryReporter;
//! use plugin_setup_core::types::RemoteRepository;
//!
//! let runner = SystemRunner::new();
//! let reporter = MemoryReporter::new();
//! let bootstrapper = RepositoryBootstrapper::new(&runner, &reporter, HostEnvironment::detect());
//!
//! let request = BootstrapRequest {
//!     work_dir: Utf8PathBuf::from("/tmp/napari-foo"),
//!     context: GuideContext {
//!         plugin_name: "napari-foo".to_string(),
//!         module_name: "napari_foo".to_string(),
//!         project_directory: Utf8PathBuf::from("napari-foo"),
//!         remote: RemoteRepository::Pending,
//!         components: PluginComponents::default(),
//!     },
//! };
//! let outcome = bootstrapper.bootstrap(&request);
//! println!("{}", outcome.guide().to_plain_string());
//! ```

mod precommit;

use crate::guide::{self, Guide, GuideContext};
use crate::platform::{HostEnvironment, Platform};
use crate::process::{CommandOutput, CommandRunner, CommandSpec, ProcessError};
use crate::report::Reporter;
use crate::types::{DEFAULT_BRANCH, INITIAL_COMMIT_MESSAGE};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, warn};

/// What to bootstrap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapRequest {
    /// Directory the repository is created in
    pub work_dir: Utf8PathBuf,
    /// Facts the final guide is composed from
    pub context: GuideContext,
}

impl BootstrapRequest {
    pub fn install_precommit(&self) -> bool {
        self.context.components.precommit
    }
}

/// How the bootstrap ended. Both variants carry the guide to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Repository initialized and committed
    Completed { guide: Guide },
    /// Git setup failed; the guide explains how to finish by hand
    ManualSetup { guide: Guide, reason: String },
}

impl BootstrapOutcome {
    pub fn guide(&self) -> &Guide {
        match self {
            Self::Completed { guide } | Self::ManualSetup { guide, .. } => guide,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Drives git, pip and pre-commit through a [`CommandRunner`]
pub struct RepositoryBootstrapper<'a> {
    runner: EchoingRunner<'a>,
    reporter: &'a dyn Reporter,
    host: HostEnvironment,
}

impl<'a> RepositoryBootstrapper<'a> {
    pub fn new(runner: &'a dyn CommandRunner, reporter: &'a dyn Reporter, host: HostEnvironment) -> Self {
        Self {
            runner: EchoingRunner { inner: runner, reporter },
            reporter,
            host,
        }
    }

    /// Run every bootstrap step and return the guide to show
    pub fn bootstrap(&self, request: &BootstrapRequest) -> BootstrapOutcome {
        let dir = request.work_dir.as_path();
        info!("Bootstrapping repository in {}", dir);
        self.reporter.banner("Setting up your plugin repository...");

        self.configure_line_endings(dir);

        if let Err(e) = self.init_repository(dir) {
            self.reporter
                .error(&format!("Error in git initialization: {}", e));
            return self.manual_setup(&request.context, e);
        }

        if request.install_precommit() {
            precommit::prepare(&self.runner, self.reporter, &self.host, dir);
        }

        if let Err(e) = self.commit(dir) {
            self.reporter
                .error(&format!("Error creating initial git commit: {}", e));
            return self.manual_setup(&request.context, e);
        }

        if self.host.platform == Platform::Windows {
            self.clear_git_attributes(dir);
        }

        if request.install_precommit() {
            precommit::install_hook(&self.runner, self.reporter, dir);
        }

        BootstrapOutcome::Completed {
            guide: guide::next_steps(&request.context),
        }
    }

    /// Set `core.autocrlf` without touching the user's global config
    fn configure_line_endings(&self, dir: &Utf8Path) {
        let spec = CommandSpec::new("git")
            .args(["config", "--global", "core.autocrlf", self.host.platform.autocrlf()])
            .env("GIT_CONFIG_GLOBAL", self.host.platform.null_device())
            .current_dir(dir);

        if let Err(e) = self.runner.run(&spec) {
            debug!("Could not configure line endings: {}", e);
        }
    }

    fn init_repository(&self, dir: &Utf8Path) -> Result<(), ProcessError> {
        self.reporter.info("Initializing git repository...");
        self.git(dir, &["init", "-q"])?;
        self.git(dir, &["checkout", "-b", DEFAULT_BRANCH])?;
        self.reporter.success("Git repository initialized");
        Ok(())
    }

    fn commit(&self, dir: &Utf8Path) -> Result<(), ProcessError> {
        self.reporter.info("Creating initial commit...");
        self.git(dir, &["add", "."])?;
        self.git(dir, &["commit", "-q", "-m", INITIAL_COMMIT_MESSAGE])?;
        self.reporter.success("Initial commit created");
        Ok(())
    }

    /// Clear hidden/read-only flags that block later cleanup of `.git` on Windows
    fn clear_git_attributes(&self, dir: &Utf8Path) {
        let spec = CommandSpec::new("attrib")
            .args(["-h", "-r", ".git", "/s", "/d"])
            .current_dir(dir);

        if let Err(e) = self.runner.run(&spec) {
            debug!("Ignoring attrib failure: {}", e);
        }
    }

    fn git(&self, dir: &Utf8Path, args: &[&str]) -> Result<CommandOutput, ProcessError> {
        self.runner
            .run(&CommandSpec::new("git").args(args.iter().copied()).current_dir(dir))
    }

    fn manual_setup(&self, context: &GuideContext, error: ProcessError) -> BootstrapOutcome {
        warn!("Falling back to manual setup instructions: {}", error);
        BootstrapOutcome::ManualSetup {
            guide: guide::manual_setup(context),
            reason: error.to_string(),
        }
    }
}

/// Reports each command line as detail before running it
struct EchoingRunner<'a> {
    inner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
}

impl CommandRunner for EchoingRunner<'_> {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
        self.reporter.detail(&format!("$ {}", spec.command_line()));
        self.inner.run(spec)
    }

    fn is_available(&self, program: &str) -> bool {
        self.inner.is_available(program)
    }
}
