// CLI module for command-line interface

pub mod create;

use clap::Parser;

pub use self::create::CreateCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "create-fast-vue3")]
#[command(about = "Scaffold a new fast-vue3 project")]
#[command(long_about = r#"Create a new project from the fast-vue3 template.

The template is cloned into <TARGET> (or a name you are prompted for),
its git history is dropped and package.json is renamed for your project.

If the target directory already has files in it you are asked before
anything is removed, unless --force is given.

Examples:
  create-fast-vue3                     Prompt for the project name
  create-fast-vue3 my-app              Scaffold into ./my-app
  create-fast-vue3 . --force           Replace the contents of the current directory
  create-fast-vue3 my-app --template https://example.com/fork.git"#)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub create: CreateCommand,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
