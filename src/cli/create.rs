use clap::Args;
use crate::services::prompt::TerminalPrompter;
use crate::services::scaffold::{ScaffoldOrchestrator, ScaffoldOutcome};
use crate::services::template_fetcher::GitCloneFetcher;
use crate::utils::config::{ScaffoldConfig, DEFAULT_TEMPLATE_SOURCE};
use crate::utils::error::Result;

/// Scaffold a project from the template
#[derive(Debug, Args)]
pub struct CreateCommand {
    /// Directory to create the project in (prompted for when omitted)
    pub target: Option<String>,

    /// Remove existing files in the target without asking
    #[arg(short, long)]
    pub force: bool,

    /// Git URL or path of the template to clone
    #[arg(long, env = "FAST_VUE3_TEMPLATE", default_value = DEFAULT_TEMPLATE_SOURCE)]
    pub template: String,

    /// Set by npm, yarn and pnpm when they launch a package binary
    #[arg(long = "npm-execpath", env = "npm_execpath", hide = true)]
    pub npm_execpath: Option<String>,
}

impl CreateCommand {
    /// Configuration for this invocation; no environment is read past CLI parsing
    pub fn config(&self) -> ScaffoldConfig {
        ScaffoldConfig::default()
            .with_template_source(self.template.clone())
            .with_npm_execpath(self.npm_execpath.clone())
    }

    /// Execute the create command against the real terminal and git
    pub async fn run(self) -> Result<ScaffoldOutcome> {
        let cwd = std::env::current_dir()?;
        let orchestrator = ScaffoldOrchestrator::new(self.config(), GitCloneFetcher::new(), cwd);

        let mut prompter = TerminalPrompter::stdio();
        let mut stdout = std::io::stdout();
        orchestrator
            .run(&mut prompter, self.target, self.force, &mut stdout)
            .await
    }
}
