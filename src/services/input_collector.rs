use std::path::PathBuf;
use crate::models::TargetDirectory;
use crate::services::directory_preparer::can_safely_overwrite;
use crate::services::prompt::{Prompter, TextQuestion};
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::{is_valid_package_name, to_valid_package_name, validate_package_name};

/// Where the input collection currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    CollectName,
    ConfirmOverwrite,
    CollectPackageName,
    Done,
    Cancelled,
}

impl PromptState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

/// What the user gave on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectOptions {
    /// Positional target name, skips the project-name question when set
    pub target: Option<String>,
    /// Skip overwrite confirmation
    pub force: bool,
    pub default_project_name: String,
}

/// Everything needed to prepare and populate the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub target: TargetDirectory,
    pub package_name: String,
    /// The target holds files that must be removed before population
    pub should_overwrite: bool,
}

/// Drives the questions as a linear state machine:
/// `CollectName -> ConfirmOverwrite -> CollectPackageName -> Done`, where a
/// declined confirmation moves to `Cancelled` and nothing after it runs.
pub struct InputCollector<'a, P: Prompter> {
    prompter: &'a mut P,
    cwd: PathBuf,
    options: CollectOptions,
    state: PromptState,
    target: Option<TargetDirectory>,
    should_overwrite: bool,
    package_name: Option<String>,
}

impl<'a, P: Prompter> InputCollector<'a, P> {
    pub fn new(prompter: &'a mut P, cwd: impl Into<PathBuf>, options: CollectOptions) -> Self {
        Self {
            prompter,
            cwd: cwd.into(),
            options,
            state: PromptState::CollectName,
            target: None,
            should_overwrite: false,
            package_name: None,
        }
    }

    /// Perform one transition and return the new state
    pub fn step(&mut self) -> Result<PromptState> {
        self.state = match self.state {
            PromptState::CollectName => self.collect_name()?,
            PromptState::ConfirmOverwrite => self.confirm_overwrite()?,
            PromptState::CollectPackageName => self.collect_package_name()?,
            terminal => terminal,
        };
        tracing::debug!("Input collection moved to {:?}", self.state);
        Ok(self.state)
    }

    /// Run to a terminal state
    pub fn run(mut self) -> Result<Answers> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        self.into_answers()
    }

    fn into_answers(self) -> Result<Answers> {
        match (self.state, self.target, self.package_name) {
            (PromptState::Done, Some(target), Some(package_name)) => Ok(Answers {
                target,
                package_name,
                should_overwrite: self.should_overwrite,
            }),
            _ => Err(ScaffoldError::Cancelled),
        }
    }

    fn collect_name(&mut self) -> Result<PromptState> {
        // An empty positional argument counts as no argument
        let given = self.options.target.as_deref().filter(|t| !t.is_empty());
        let name = match given {
            Some(target) => target.to_string(),
            None => {
                let question = TextQuestion::new("projectName", "Project name:")
                    .with_initial(self.options.default_project_name.clone());
                let answer = self.prompter.text(&question)?;
                if answer.is_empty() {
                    self.options.default_project_name.clone()
                } else {
                    answer
                }
            }
        };

        self.target = Some(TargetDirectory::new(self.cwd.clone(), name));
        Ok(PromptState::ConfirmOverwrite)
    }

    fn confirm_overwrite(&mut self) -> Result<PromptState> {
        let Some(target) = &self.target else {
            return Ok(PromptState::CollectName);
        };

        if can_safely_overwrite(target.root())? {
            self.should_overwrite = false;
            return Ok(PromptState::CollectPackageName);
        }

        if self.options.force {
            tracing::info!("{} is not empty, overwriting because of --force", target);
            self.should_overwrite = true;
            return Ok(PromptState::CollectPackageName);
        }

        let message = format!(
            "{} is not empty. Remove existing files and continue?",
            target.prompt_label()
        );
        if self.prompter.confirm(&message)? {
            self.should_overwrite = true;
            Ok(PromptState::CollectPackageName)
        } else {
            Ok(PromptState::Cancelled)
        }
    }

    fn collect_package_name(&mut self) -> Result<PromptState> {
        let Some(target) = &self.target else {
            return Ok(PromptState::CollectName);
        };

        let package_name = if is_valid_package_name(target.name()) {
            target.name().to_string()
        } else {
            let question = TextQuestion::new("packageName", "Package name:")
                .with_initial(to_valid_package_name(target.name()))
                .with_validator(validate_package_name);
            self.prompter.text(&question)?
        };

        self.package_name = Some(package_name);
        Ok(PromptState::Done)
    }
}
