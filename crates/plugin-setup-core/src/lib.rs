//! # plugin-setup-core
//!
//! Post-generation setup for plugin projects created from the napari plugin
//! template:
//! - Module and package naming checks
//! - Manifest (`napari.yaml`) validation against a bundled schema
//! - Repository bootstrap (git init, optional pre-commit, initial commit)
//! - The "next steps" guide printed at the end
//!
//! # Examples
//!
//! ```no_run
//! use plugin_setup_core::manifest::SchemaSupport;
//! use plugin_setup_core::platform::HostEnvironment;
//! use plugin_setup_core::process::SystemRunner;
//! use plugin_setup_core::report::MemoryReporter;
//! use plugin_setup_core::setup::{run, SetupOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = SetupOptions::new("napari-foo", "napari_foo", "napari-foo", "/tmp/napari-foo");
//! let reporter = MemoryReporter::new();
//! let report = run(
//!     &options,
//!     &SystemRunner::new(),
//!     &reporter,
//!     &SchemaSupport::resolve(),
//!     HostEnvironment::detect(),
//! )?;
//! print!("{}", report.outcome.guide().to_plain_string());
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod components;
pub mod error;
pub mod guide;
pub mod manifest;
pub mod naming;
pub mod platform;
pub mod process;
pub mod report;
pub mod setup;
pub mod types;

pub use error::{Error, Result};
