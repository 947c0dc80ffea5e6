use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use crate::utils::error::{Result, ScaffoldError};

/// Populates a directory from a template source.
///
/// Resolving the future is the completion signal: `Ok(())` means the
/// destination has been written, an error means it may be incomplete.
#[async_trait]
pub trait TemplateFetcher: Send + Sync {
    async fn fetch(&self, source: &str, destination: &Path) -> Result<()>;
}

/// Fetches templates with `git clone`
#[derive(Debug, Clone)]
pub struct GitCloneFetcher {
    program: String,
    /// Shallow clone depth, full history when `None`
    depth: Option<u32>,
}

impl Default for GitCloneFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCloneFetcher {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
            depth: Some(1),
        }
    }

    /// Use a different git executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub const fn with_depth(mut self, depth: Option<u32>) -> Self {
        self.depth = depth;
        self
    }

    pub fn clone_args(&self, source: &str, destination: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["clone".into(), "--quiet".into()];
        if let Some(depth) = self.depth {
            args.push("--depth".into());
            args.push(depth.to_string().into());
        }
        args.push(source.into());
        args.push(destination.as_os_str().to_os_string());
        args
    }
}

#[async_trait]
impl TemplateFetcher for GitCloneFetcher {
    async fn fetch(&self, source: &str, destination: &Path) -> Result<()> {
        tracing::info!("Cloning {} into {}", source, destination.display());

        let output = Command::new(&self.program)
            .args(self.clone_args(source, destination))
            // Never block on a credential prompt
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ScaffoldError::FetchFailed(format!("failed to run {}: {}", self.program, e)))?;

        if output.status.success() {
            tracing::debug!("Clone of {} finished", source);
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = stderr.trim();
        Err(ScaffoldError::FetchFailed(if reason.is_empty() {
            format!("{} clone exited with {}", self.program, output.status)
        } else {
            reason.to_string()
        }))
    }
}
