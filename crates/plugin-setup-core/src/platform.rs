//! Host platform facts captured once at startup

use std::fmt;

/// Environment variable set by uv inside a project environment
pub const UV_PROJECT_ENVIRONMENT: &str = "UV_PROJECT_ENVIRONMENT";

/// Operating system family, as far as git line endings are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Windows (CRLF line endings, `attrib` available)
    Windows,
    /// Linux, macOS and other Unix-likes
    Unix,
}

impl Platform {
    /// Detect the platform this binary was built for
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Value for git's `core.autocrlf`
    pub fn autocrlf(&self) -> &'static str {
        match self {
            Self::Windows => "true",
            Self::Unix => "input",
        }
    }

    /// Path of the null device, used to keep git away from the user's config
    pub fn null_device(&self) -> &'static str {
        match self {
            Self::Windows => "NUL",
            Self::Unix => "/dev/null",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::Unix => write!(f, "Unix"),
        }
    }
}

/// Host facts that steer the bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostEnvironment {
    pub platform: Platform,
    /// `UV_PROJECT_ENVIRONMENT` is set
    pub uv_project_environment: bool,
}

impl HostEnvironment {
    /// Read the current process environment
    pub fn detect() -> Self {
        Self {
            platform: Platform::current(),
            uv_project_environment: std::env::var_os(UV_PROJECT_ENVIRONMENT).is_some(),
        }
    }
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self {
            platform: Platform::Unix,
            uv_project_environment: false,
        }
    }
}
