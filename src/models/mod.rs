pub mod config;
pub mod project;

// config is accessed as crate::models::config::{load_config, save_config, ...}
pub use project::{create_project_file, is_valid_file_name, Project, ProjectStore, StoreError};
