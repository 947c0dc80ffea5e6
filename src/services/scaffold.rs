use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use crate::models::{Manifest, PackageManager, TargetDirectory};
use crate::services::directory_preparer::{empty_directory, remove_directory, wait_until_populated};
use crate::services::input_collector::{Answers, CollectOptions, InputCollector};
use crate::services::prompt::Prompter;
use crate::services::template_fetcher::TemplateFetcher;
use crate::utils::config::ScaffoldConfig;
use crate::utils::error::Result;
use crate::utils::validation::ensure_valid_package_name;

/// Result of a completed scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub target: TargetDirectory,
    pub package_name: String,
    pub package_manager: PackageManager,
}

/// Runs the whole flow: collect input, prepare the target, fetch the
/// template, clean it up and print what to do next.
///
/// Nothing is written to the target before input collection has finished,
/// so a cancelled run leaves the filesystem untouched.
pub struct ScaffoldOrchestrator<F: TemplateFetcher> {
    config: ScaffoldConfig,
    fetcher: F,
    cwd: PathBuf,
}

impl<F: TemplateFetcher> ScaffoldOrchestrator<F> {
    pub fn new(config: ScaffoldConfig, fetcher: F, cwd: impl Into<PathBuf>) -> Self {
        Self {
            config,
            fetcher,
            cwd: cwd.into(),
        }
    }

    pub async fn run<P, W>(
        &self,
        prompter: &mut P,
        target: Option<String>,
        force: bool,
        out: &mut W,
    ) -> Result<ScaffoldOutcome>
    where
        P: Prompter,
        W: Write,
    {
        let options = CollectOptions {
            target,
            force,
            default_project_name: self.config.default_project_name.clone(),
        };
        let answers = InputCollector::new(prompter, self.cwd.clone(), options).run()?;

        self.scaffold(answers, out).await
    }

    /// Everything after input collection
    pub async fn scaffold<W: Write>(&self, answers: Answers, out: &mut W) -> Result<ScaffoldOutcome> {
        let Answers {
            target,
            package_name,
            should_overwrite,
        } = answers;
        ensure_valid_package_name(&package_name)?;
        let root = target.root();

        if should_overwrite {
            let removed = empty_directory(root)?;
            tracing::info!("Removed {} existing entries from {}", removed, target);
        }

        writeln!(out, "\nScaffolding project in {}...", target)?;

        self.fetcher
            .fetch(&self.config.template_source, root)
            .await?;

        let attempts = wait_until_populated(
            root,
            &self.config.vcs_metadata_dir,
            self.config.poll_interval,
            self.config.max_poll_attempts,
        )
        .await?;
        tracing::debug!("{} populated after {} checks", target, attempts);

        if remove_directory(&root.join(&self.config.vcs_metadata_dir))? {
            tracing::debug!("Stripped {} from {}", self.config.vcs_metadata_dir, target);
        }

        let manifest_path = root.join(&self.config.manifest_file_name);
        let mut manifest = Manifest::load(&manifest_path).await?;
        manifest.rebrand(&package_name, &self.config.reset_version);
        manifest.save(&manifest_path).await?;
        tracing::info!("Rewrote {} as {}", manifest_path.display(), package_name);

        let package_manager = PackageManager::detect(self.config.npm_execpath.as_deref());
        print_next_steps(out, &target, package_manager)?;

        Ok(ScaffoldOutcome {
            target,
            package_name,
            package_manager,
        })
    }
}

/// Commands the user runs after scaffolding, in order
pub fn next_steps(target: &TargetDirectory, package_manager: PackageManager) -> Vec<String> {
    let mut steps = Vec::with_capacity(3);
    if let Some(relative) = target.relative_path() {
        steps.push(format!("cd {}", relative.display()));
    }
    steps.push(package_manager.command("install"));
    steps.push(package_manager.command("dev"));
    steps
}

fn print_next_steps<W: Write>(
    out: &mut W,
    target: &TargetDirectory,
    package_manager: PackageManager,
) -> Result<()> {
    writeln!(out, "\nDone. Now run:\n")?;
    for step in next_steps(target, package_manager) {
        writeln!(out, "  {}", step.bold().green())?;
    }
    writeln!(out)?;
    Ok(())
}
