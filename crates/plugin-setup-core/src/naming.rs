//! Module and package naming rules

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static MODULE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][_a-z0-9]+$").expect("module name regex is valid"));

/// Check that the module name is a lowercase Python identifier of at least
/// two characters
pub fn check_module_name(name: &str) -> Result<()> {
    if !MODULE_NAME_RE.is_match(name) {
        return Err(Error::invalid_module_name(name));
    }
    debug!("Module name '{}' is valid", name);
    Ok(())
}

/// Check that the distribution name has no underscores
pub fn check_package_name(name: &str) -> Result<()> {
    if name.contains('_') {
        return Err(Error::invalid_package_name(name));
    }
    debug!("Package name '{}' is valid", name);
    Ok(())
}
