use std::fmt::Display;
use std::path::{Path, PathBuf};

/// The directory a project is scaffolded into: the working directory joined
/// with the project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory {
    cwd: PathBuf,
    name: String,
    root: PathBuf,
}

impl TargetDirectory {
    pub fn new(cwd: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let cwd = cwd.into();
        let name = name.into();
        let root = if name == "." {
            cwd.clone()
        } else {
            cwd.join(&name)
        };

        Self { cwd, name, root }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_cwd(&self) -> bool {
        self.root == self.cwd
    }

    /// Path to `cd` into from the working directory, `None` when already there
    pub fn relative_path(&self) -> Option<PathBuf> {
        if self.is_cwd() {
            return None;
        }
        let relative = self
            .root
            .strip_prefix(&self.cwd)
            .map_or_else(|_| self.root.clone(), Path::to_path_buf);
        Some(relative)
    }

    /// How the directory is described in the overwrite prompt
    pub fn prompt_label(&self) -> String {
        if self.name == "." {
            "Current directory".to_string()
        } else {
            format!("Target directory \"{}\"", self.name)
        }
    }
}

impl Display for TargetDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.root.display().fmt(f)
    }
}
