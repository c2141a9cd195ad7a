//! Optional pre-commit tooling

use crate::platform::HostEnvironment;
use crate::process::{CommandRunner, CommandSpec};
use crate::report::Reporter;
use camino::Utf8Path;
use tracing::{debug, warn};

/// Hooks run once before the initial commit so it starts formatted
const FORMAT_HOOKS: [&str; 2] = ["ruff-check", "ruff-format"];

/// Prefer uv when it manages the active environment or is installed
pub(super) fn use_uv(runner: &dyn CommandRunner, host: &HostEnvironment) -> bool {
    if host.uv_project_environment {
        return true;
    }
    runner.is_available("uv") && runner.run(&CommandSpec::new("uv").args(["--version"])).is_ok()
}

/// Command that installs the pre-commit package
pub(super) fn installer(uv: bool) -> CommandSpec {
    if uv {
        CommandSpec::new("uv").args(["pip", "install", "pre-commit"])
    } else {
        CommandSpec::new("python").args(["-m", "pip", "install", "pre-commit"])
    }
}

/// Install pre-commit, refresh hook versions and format the tree.
///
/// Nothing here is fatal. If the package cannot be installed the remaining
/// sub-steps are skipped.
pub(super) fn prepare(
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
    host: &HostEnvironment,
    dir: &Utf8Path,
) {
    reporter.info("Setting up pre-commit hooks...");

    let install = installer(use_uv(runner, host)).current_dir(dir);
    if let Err(e) = runner.run(&install) {
        warn!("pre-commit installation failed: {}", e);
        reporter.warning(&format!(
            "Could not install pre-commit (this is optional): {}",
            e
        ));
        return;
    }

    let mut follow_up = vec![
        CommandSpec::new("pre-commit").args(["autoupdate"]),
        CommandSpec::new("git").args(["add", "."]),
    ];
    follow_up.extend(
        FORMAT_HOOKS
            .into_iter()
            .map(|hook| CommandSpec::new("pre-commit").args(["run", hook, "-a"])),
    );

    for spec in follow_up {
        // Hooks exit non-zero when they rewrite files.
        if let Err(e) = runner.run(&spec.current_dir(dir)) {
            debug!("Ignoring: {}", e);
        }
    }

    reporter.success("Pre-commit hooks configured");
}

/// Install the git hook that triggers pre-commit
pub(super) fn install_hook(runner: &dyn CommandRunner, reporter: &dyn Reporter, dir: &Utf8Path) {
    let spec = CommandSpec::new("pre-commit")
        .args(["install"])
        .current_dir(dir);

    match runner.run(&spec) {
        Ok(_) => reporter.success("Pre-commit hooks installed"),
        Err(e) => {
            warn!("pre-commit install failed: {}", e);
            reporter.warning("Could not install pre-commit hooks (this is optional)");
        }
    }
}
