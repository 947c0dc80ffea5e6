use std::fmt;

/// Package manager the user is expected to run the generated project with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Npm,
}

impl PackageManager {
    /// Pick a package manager from the `npm_execpath` of the invoking tool.
    ///
    /// pnpm wins over yarn when both appear; anything else is npm.
    pub fn detect(npm_execpath: Option<&str>) -> Self {
        match npm_execpath {
            Some(path) if path.contains("pnpm") => Self::Pnpm,
            Some(path) if path.contains("yarn") => Self::Yarn,
            _ => Self::Npm,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Npm => "npm",
        }
    }

    /// Shell command that runs `script` with this package manager
    pub fn command(self, script: &str) -> String {
        if script == "install" {
            return match self {
                Self::Yarn => "yarn".to_string(),
                _ => format!("{} install", self.as_str()),
            };
        }

        match self {
            Self::Npm => format!("npm run {script}"),
            _ => format!("{} {script}", self.as_str()),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
