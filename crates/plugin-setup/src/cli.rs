//! CLI argument parsing with clap
//!
//! Flag names keep the underscores used by the template generator's hook
//! invocation (`--plugin_name`, `--module_name`, ...).

use camino::Utf8PathBuf;
use clap::Parser;
use plugin_setup_core::setup::SetupOptions;
use plugin_setup_core::types::{parse_flag, DEFAULT_GITHUB_OWNER, PROVIDE_LATER};

/// Finish setting up a freshly generated napari plugin project
#[derive(Parser, Debug)]
#[command(name = "plugin-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings, errors and the final guide
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The name of your plugin (distribution name, no underscores)
    #[arg(long = "plugin_name", env = "PLUGIN_SETUP_PLUGIN_NAME")]
    pub plugin_name: String,

    /// Plugin module name
    #[arg(long = "module_name", env = "PLUGIN_SETUP_MODULE_NAME")]
    pub module_name: String,

    /// Project directory
    #[arg(long = "project_directory", env = "PLUGIN_SETUP_PROJECT_DIRECTORY")]
    pub project_directory: Utf8PathBuf,

    /// Install pre-commit ("true" in any case enables it)
    #[arg(
        long = "install_precommit",
        default_value = "False",
        env = "PLUGIN_SETUP_INSTALL_PRECOMMIT"
    )]
    pub install_precommit: String,

    /// GitHub repository URL
    #[arg(
        long = "github_repository_url",
        default_value = PROVIDE_LATER,
        env = "PLUGIN_SETUP_GITHUB_REPOSITORY_URL"
    )]
    pub github_repository_url: String,

    /// GitHub user or organisation name
    #[arg(
        long = "github_username_or_organization",
        default_value = DEFAULT_GITHUB_OWNER,
        env = "PLUGIN_SETUP_GITHUB_USERNAME_OR_ORGANIZATION"
    )]
    pub github_username_or_organization: String,
}

impl Cli {
    /// Convert parsed arguments into setup options rooted at `work_dir`
    pub fn to_options(&self, work_dir: Utf8PathBuf) -> SetupOptions {
        SetupOptions {
            plugin_name: self.plugin_name.clone(),
            module_name: self.module_name.clone(),
            project_directory: self.project_directory.clone(),
            install_precommit: parse_flag(&self.install_precommit),
            github_repository_url: self.github_repository_url.clone(),
            github_username_or_organization: self.github_username_or_organization.clone(),
            work_dir,
        }
    }
}
