// Data models for create-fast-vue3

pub mod manifest;
pub mod package_manager;
pub mod target_directory;

pub use manifest::Manifest;
pub use package_manager::PackageManager;
pub use target_directory::TargetDirectory;
