// create-fast-vue3 - project scaffolding for fast-vue3
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use services::directory_preparer::{can_safely_overwrite, empty_directory};
pub use services::scaffold::{ScaffoldOrchestrator, ScaffoldOutcome};
pub use utils::error::{Result, ScaffoldError};
pub use utils::validation::{is_valid_package_name, to_valid_package_name};
