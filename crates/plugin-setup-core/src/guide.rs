//! "Next steps" guide shown after setup
//!
//! The guide is a pure function of its inputs: whether the repository was
//! bootstrapped, whether a GitHub repository is known, and which optional
//! components the template produced. Rendering is separate from content so
//! the binary can add colour without changing the text.

use crate::components::PluginComponents;
use crate::types::{RemoteRepository, DEFAULT_BRANCH, INITIAL_COMMIT_MESSAGE};
use camino::Utf8PathBuf;

const RULE_WIDTH: usize = 50;
const EDITABLE_INSTALL: &str = "pip install -e .[all]";
const EDITABLE_INSTALL_NOTE: &str =
    "This installs your plugin with napari and default Qt bindings in editable mode.";
const HUB_METADATA_GUIDE: &str =
    "https://github.com/chanzuckerberg/napari-hub/blob/main/docs/customizing-plugin-listing.md";
const PLUGIN_GUIDE: &str = "https://napari.org/stable/plugins/building_a_plugin/index.html";
const NEW_REPOSITORY_URL: &str = "https://github.com/new";

/// Inputs shared by both guides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideContext {
    pub plugin_name: String,
    pub module_name: String,
    pub project_directory: Utf8PathBuf,
    pub remote: RemoteRepository,
    pub components: PluginComponents,
}

/// Which guide was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideKind {
    /// Repository was bootstrapped; only follow-up work remains
    NextSteps,
    /// Git setup failed; the user has to do it by hand
    ManualSetup,
}

/// One numbered step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: String,
    /// Indented body lines, in order
    pub lines: Vec<String>,
    /// Informational note printed after the body
    pub note: Option<String>,
}

impl Step {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            note: None,
        }
    }

    fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Decorations applied while rendering a guide
pub trait Styler {
    fn rule(&self) -> String {
        "=".repeat(RULE_WIDTH)
    }

    fn step(&self, number: usize, total: usize, title: &str) -> String {
        format!("[{}/{}] {}", number, total, title)
    }

    fn success(&self, msg: &str) -> String {
        format!("✔ {}", msg)
    }

    fn info(&self, msg: &str) -> String {
        format!("ℹ {}", msg)
    }

    fn warning(&self, msg: &str) -> String {
        format!("⚠ {}", msg)
    }
}

/// Styler producing plain text
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyle;

impl Styler for PlainStyle {}

/// A composed guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guide {
    pub kind: GuideKind,
    pub steps: Vec<Step>,
}

impl Guide {
    /// Render with the given decorations
    pub fn render(&self, style: &dyn Styler) -> String {
        let total = self.steps.len();
        let mut out: Vec<String> = Vec::new();

        match self.kind {
            GuideKind::NextSteps => {
                out.push(style.rule());
                out.push(style.success("Your plugin template is ready!"));
                out.push(style.rule());
            }
            GuideKind::ManualSetup => {
                out.push(style.warning("Git initialization had issues. Please set up manually:"));
                out.push(String::new());
            }
        }

        for (index, step) in self.steps.iter().enumerate() {
            if index > 0 {
                out.push(String::new());
            }
            out.push(style.step(index + 1, total, &step.title));
            out.extend(step.lines.iter().map(|line| format!("    {}", line)));
            if let Some(note) = &step.note {
                out.push(String::new());
                out.push(style.info(note));
            }
        }

        if self.kind == GuideKind::NextSteps {
            out.push(String::new());
            out.push(style.rule());
            out.push(style.success("Happy plugin development! 🚀"));
            out.push(style.rule());
        }

        let mut text = out.join("\n");
        text.push('\n');
        text
    }

    /// Render without colour or terminal decorations
    pub fn to_plain_string(&self) -> String {
        self.render(&PlainStyle)
    }
}

/// Guide after a successful bootstrap
pub fn next_steps(ctx: &GuideContext) -> Guide {
    let mut steps = vec![Step::new("Install your plugin in development mode:")
        .line(format!("cd {}", ctx.project_directory))
        .line(EDITABLE_INSTALL)
        .note(EDITABLE_INSTALL_NOTE)];

    match (&ctx.remote, ctx.remote.home_url(), ctx.remote.clone_url()) {
        (RemoteRepository::Known { name, .. }, Some(home), Some(clone)) => {
            let issues = ctx.remote.issues_url().unwrap_or_default();
            let docs = ctx.remote.docs_url().unwrap_or_default();
            steps.push(
                Step::new(format!("Create a GitHub repository named '{}':", name)).line(&home),
            );
            steps.push(link_and_push(&clone));
            steps.push(
                Step::new("Review your project URLs in pyproject.toml:")
                    .line("The following URLs will appear on the napari hub:")
                    .line(format!("• Bug Tracker: {}", issues))
                    .line(format!("• Documentation: {}", docs))
                    .line(format!("• Source Code: {}", home))
                    .line(format!("• User Support: {}", issues)),
            );
        }
        _ => {
            steps.push(Step::new("Create a GitHub repository:").line(NEW_REPOSITORY_URL));
            steps.push(link_and_push(&format!(
                "https://github.com/YOUR-USERNAME/{}.git",
                ctx.plugin_name
            )));
            steps.push(
                Step::new("Add project URLs to pyproject.toml:")
                    .line("Consider adding these URLs under the project_urls key:")
                    .line("    [project.urls]")
                    .line("    Bug Tracker = https://github.com/your-repo-username/your-repo-name/issues")
                    .line("    Documentation = https://github.com/your-repo-username/your-repo-name#README.md")
                    .line("    Source Code = https://github.com/your-repo-username/your-repo-name")
                    .line("    User Support = https://github.com/your-repo-username/your-repo-name/issues"),
            );
        }
    }

    if ctx.components.precommit {
        steps.push(
            Step::new("Check your code with pre-commit:")
                .line("Hooks run automatically on every commit. To run them on all files:")
                .line("    pre-commit run --all-files"),
        );
    }

    steps.push(customize_step(ctx));

    Guide {
        kind: GuideKind::NextSteps,
        steps,
    }
}

/// Guide after git initialization or the initial commit failed
pub fn manual_setup(ctx: &GuideContext) -> Guide {
    let mut install = Step::new("Install your plugin in development mode:").line(EDITABLE_INSTALL);
    if ctx.components.precommit {
        install = install.line("pip install pre-commit").line("pre-commit install");
    }
    let install = install.note(EDITABLE_INSTALL_NOTE);

    let remote = match (ctx.remote.home_url(), ctx.remote.clone_url()) {
        (Some(home), Some(clone)) => Step::new("Create and link GitHub repository:")
            .line(format!("Create at: {}", home))
            .line("Then run:")
            .line(format!("    git remote add origin {}", clone))
            .line(format!("    git push -u origin {}", DEFAULT_BRANCH)),
        _ => Step::new("Create and link GitHub repository:")
            .line(format!("Create at: {}", NEW_REPOSITORY_URL))
            .line("Then link it to your local repository."),
    };

    Guide {
        kind: GuideKind::ManualSetup,
        steps: vec![
            Step::new("Navigate to your plugin directory:")
                .line(format!("cd {}", ctx.project_directory)),
            Step::new("Initialize git repository:")
                .line(format!("git init -b {}", DEFAULT_BRANCH))
                .line("git add .")
                .line(format!("git commit -m '{}'", INITIAL_COMMIT_MESSAGE)),
            install,
            remote,
        ],
    }
}

fn link_and_push(clone_url: &str) -> Step {
    Step::new("Link and push to GitHub:")
        .line(format!("git remote add origin {}", clone_url))
        .line(format!("git push -u origin {}", DEFAULT_BRANCH))
}

fn customize_step(ctx: &GuideContext) -> Step {
    let mut step = Step::new("Customize your plugin:")
        .line("• Optionally edit .napari-hub/DESCRIPTION.md for your napari hub listing")
        .line(format!("• Customize metadata: {}", HUB_METADATA_GUIDE))
        .line(format!("• Read the plugin guide: {}", PLUGIN_GUIDE));

    for contribution in &ctx.components.contributions {
        step = step.line(format!(
            "• {} code: src/{}/{}",
            contribution.label(),
            ctx.module_name,
            contribution.file_name()
        ));
    }
    step
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Contribution;
    use crate::types::PROVIDE_LATER;

    fn context(url: &str) -> GuideContext {
        GuideContext {
            plugin_name: "napari-foo".to_string(),
            module_name: "napari_foo".to_string(),
            project_directory: Utf8PathBuf::from("napari-foo"),
            remote: RemoteRepository::from_answers(url, "octo", "napari-foo"),
            components: PluginComponents::default(),
        }
    }

    #[test]
    fn test_next_steps_known_repository() {
        let guide = next_steps(&context("https://github.com/octo/napari-foo"));
        let text = guide.to_plain_string();

        assert_eq!(guide.steps.len(), 5);
        assert!(text.contains("[2/5] Create a GitHub repository named 'napari-foo':"));
        assert!(text.contains("    https://github.com/octo/napari-foo\n"));
        assert!(text.contains("git remote add origin https://github.com/octo/napari-foo.git"));
        assert!(text.contains("• Bug Tracker: https://github.com/octo/napari-foo/issues"));
        assert!(text.contains("• Documentation: https://github.com/octo/napari-foo#README.md"));
        assert!(text.contains("• Source Code: https://github.com/octo/napari-foo\n"));
        assert!(text.contains("• User Support: https://github.com/octo/napari-foo/issues"));
        assert!(!text.contains(NEW_REPOSITORY_URL));
    }

    #[test]
    fn test_next_steps_pending_repository() {
        let guide = next_steps(&context(PROVIDE_LATER));
        let text = guide.to_plain_string();

        assert!(text.contains("https://github.com/new"));
        assert!(text.contains("YOUR-USERNAME/napari-foo.git"));
        assert!(text.contains("[project.urls]"));
        assert!(!text.contains("github.com/octo"));
    }

    #[test]
    fn test_next_steps_is_deterministic() {
        let ctx = context("https://github.com/octo/napari-foo");
        assert_eq!(
            next_steps(&ctx).to_plain_string(),
            next_steps(&ctx).to_plain_string()
        );
    }

    #[test]
    fn test_precommit_step_only_when_requested() {
        let mut ctx = context(PROVIDE_LATER);
        let without = next_steps(&ctx).to_plain_string();
        assert!(!without.contains("pre-commit"));
        assert!(without.contains("[5/5] Customize your plugin:"));

        ctx.components.precommit = true;
        let with = next_steps(&ctx).to_plain_string();
        assert!(with.contains("[5/6] Check your code with pre-commit:"));
        assert!(with.contains("pre-commit run --all-files"));
        assert!(with.contains("[6/6] Customize your plugin:"));
    }

    #[test]
    fn test_contributions_listed_in_customize_step() {
        let mut ctx = context(PROVIDE_LATER);
        ctx.components.contributions = vec![Contribution::Reader, Contribution::Widget];

        let text = next_steps(&ctx).to_plain_string();
        assert!(text.contains("• Reader code: src/napari_foo/_reader.py"));
        assert!(text.contains("• Widget code: src/napari_foo/_widget.py"));
        assert!(!text.contains("_writer.py"));
    }

    #[test]
    fn test_manual_setup_contains_git_commands() {
        let guide = manual_setup(&context(PROVIDE_LATER));
        let text = guide.to_plain_string();

        assert_eq!(guide.kind, GuideKind::ManualSetup);
        assert!(text.starts_with("⚠ Git initialization had issues."));
        assert!(text.contains("    cd napari-foo\n"));
        assert!(text.contains("git init -b main"));
        assert!(text.contains("git add ."));
        assert!(text.contains("git commit -m 'initial commit'"));
        assert!(text.contains("Create at: https://github.com/new"));
        assert!(!text.contains("pre-commit"));
    }

    #[test]
    fn test_manual_setup_known_repository() {
        let mut ctx = context("https://github.com/octo/napari-foo");
        ctx.components.precommit = true;
        let text = manual_setup(&ctx).to_plain_string();

        assert!(text.contains("Create at: https://github.com/octo/napari-foo\n"));
        assert!(text.contains("        git remote add origin https://github.com/octo/napari-foo.git"));
        assert!(text.contains("pre-commit install"));
    }

    #[test]
    fn test_render_layout() {
        let text = next_steps(&context(PROVIDE_LATER)).to_plain_string();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("=".repeat(RULE_WIDTH).as_str()));
        assert_eq!(lines.next(), Some("✔ Your plugin template is ready!"));
        assert_eq!(lines.next(), Some("=".repeat(RULE_WIDTH).as_str()));
        assert_eq!(
            lines.next(),
            Some("[1/5] Install your plugin in development mode:")
        );
        assert_eq!(lines.next(), Some("    cd napari-foo"));
        assert!(text.ends_with("Happy plugin development! 🚀\n==================================================\n"));
    }
}
