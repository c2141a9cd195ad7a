//! Shared types for plugin setup

use std::fmt;

/// Placeholder value meaning "no repository URL yet"
pub const PROVIDE_LATER: &str = "provide later";

/// Default GitHub owner used by the template
pub const DEFAULT_GITHUB_OWNER: &str = "githubuser";

/// Default branch created by the bootstrap
pub const DEFAULT_BRANCH: &str = "main";

/// Message of the initial commit
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Parse a template answer into a boolean.
///
/// Only `"true"` (any case) is true; everything else, including `"yes"`,
/// `"1"` and the empty string, is false.
pub fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// The GitHub repository the plugin will be pushed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteRepository {
    /// Repository URL was left as "provide later"
    Pending,
    /// Repository lives at `https://github.com/<owner>/<name>`
    Known { owner: String, name: String },
}

impl RemoteRepository {
    /// Build from the template answers.
    ///
    /// The URL answer only decides whether a repository is known; the URLs
    /// themselves are derived from the owner and the plugin name.
    pub fn from_answers(repository_url: &str, owner: &str, plugin_name: &str) -> Self {
        if repository_url == PROVIDE_LATER {
            Self::Pending
        } else {
            Self::Known {
                owner: owner.to_string(),
                name: plugin_name.to_string(),
            }
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }

    /// `https://github.com/<owner>/<name>`
    pub fn home_url(&self) -> Option<String> {
        match self {
            Self::Known { owner, name } => Some(format!("https://github.com/{}/{}", owner, name)),
            Self::Pending => None,
        }
    }

    /// `https://github.com/<owner>/<name>.git`
    pub fn clone_url(&self) -> Option<String> {
        self.home_url().map(|url| format!("{}.git", url))
    }

    pub fn issues_url(&self) -> Option<String> {
        self.home_url().map(|url| format!("{}/issues", url))
    }

    pub fn docs_url(&self) -> Option<String> {
        self.home_url().map(|url| format!("{}#README.md", url))
    }
}

impl fmt::Display for RemoteRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known { owner, name } => write!(f, "{}/{}", owner, name),
            Self::Pending => write!(f, "{}", PROVIDE_LATER),
        }
    }
}
