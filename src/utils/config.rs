// Scaffolding configuration

use std::time::Duration;

pub const DEFAULT_TEMPLATE_SOURCE: &str = "https://github.com/MaleWeb/fast-vue3.git";
pub const DEFAULT_PROJECT_NAME: &str = "fast-vue3-demo";
pub const MANIFEST_FILE_NAME: &str = "package.json";
pub const VCS_METADATA_DIR: &str = ".git";
pub const RESET_VERSION: &str = "0.0.0";

/// Settings resolved once at startup and handed to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Where the template repository is fetched from
    pub template_source: String,
    /// Project name offered when no target is given
    pub default_project_name: String,
    pub manifest_file_name: String,
    pub vcs_metadata_dir: String,
    /// Version written into the manifest after cloning
    pub reset_version: String,
    /// Delay between population checks
    pub poll_interval: Duration,
    /// Upper bound on population checks before giving up
    pub max_poll_attempts: u32,
    /// Value of `npm_execpath`, used to pick the package manager for instructions
    pub npm_execpath: Option<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template_source: DEFAULT_TEMPLATE_SOURCE.to_string(),
            default_project_name: DEFAULT_PROJECT_NAME.to_string(),
            manifest_file_name: MANIFEST_FILE_NAME.to_string(),
            vcs_metadata_dir: VCS_METADATA_DIR.to_string(),
            reset_version: RESET_VERSION.to_string(),
            poll_interval: Duration::from_millis(500),
            max_poll_attempts: 120,
            npm_execpath: None,
        }
    }
}

impl ScaffoldConfig {
    pub fn with_template_source(mut self, source: impl Into<String>) -> Self {
        self.template_source = source.into();
        self
    }

    pub fn with_npm_execpath(mut self, execpath: Option<String>) -> Self {
        self.npm_execpath = execpath;
        self
    }

    pub const fn with_polling(mut self, interval: Duration, max_attempts: u32) -> Self {
        self.poll_interval = interval;
        self.max_poll_attempts = max_attempts;
        self
    }

    /// Worst-case time spent waiting for the template to appear
    pub fn max_wait(&self) -> Duration {
        self.poll_interval * self.max_poll_attempts
    }
}
