use std::path::PathBuf;

use crate::cli::AppError;
use crate::display::display_project;
use crate::models::config::UserConfig;
use crate::models::ProjectStore;

pub fn pick_project(user_config: &UserConfig, file: Option<PathBuf>) -> Result<(), AppError> {
    let path = file.unwrap_or_else(|| user_config.default_file());
    let store = ProjectStore::open(path)?;

    match store.random() {
        Some(project) => display_project(project),
        None => println!("No projects available."),
    }
    Ok(())
}
