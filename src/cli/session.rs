use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use super::add::add_once;
use super::new_file::ask_file_name;
use crate::cli::AppError;
use crate::display::format_project;
use crate::input::{input_item, input_text, input_yes_no, Console, InputOptions};
use crate::models::config::UserConfig;
use crate::models::{create_project_file, ProjectStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StartAction {
    Load,
    Create,
}

impl fmt::Display for StartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartAction::Load => f.write_str("Load a file"),
            StartAction::Create => f.write_str("Create a file"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Pick,
    Add,
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Pick => f.write_str("Pick a random project"),
            MenuAction::Add => f.write_str("Add a project"),
            MenuAction::Quit => f.write_str("Quit"),
        }
    }
}

/// Interactive session: choose or create a project file, then pick and add
/// projects until the user quits.
pub fn run_session(
    console: &mut dyn Console,
    user_config: &mut UserConfig,
    file: Option<PathBuf>,
) -> Result<(), AppError> {
    let mut store = match file {
        Some(path) => ProjectStore::open(path)?,
        None => startup(console, user_config)?,
    };
    user_config.remember_file(store.path().to_path_buf());

    console.say(&format!(
        "Opened {} ({} projects)",
        store.path().display(),
        store.len()
    ))?;
    main_menu(console, &mut store)
}

fn startup(console: &mut dyn Console, user_config: &UserConfig) -> Result<ProjectStore, AppError> {
    if let (Some(last), Some(when)) = (&user_config.last_file, &user_config.last_opened) {
        console.say(&format!("Last opened {} on {}", last.display(), when))?;
    }

    let choices = [StartAction::Load, StartAction::Create];
    let aliases = HashMap::from([
        ("l".to_string(), StartAction::Load),
        ("load".to_string(), StartAction::Load),
        ("c".to_string(), StartAction::Create),
        ("create".to_string(), StartAction::Create),
    ]);
    let options = InputOptions::new()
        .prompt("What would you like to do? ")
        .choices(&choices[..])
        .aliases(&aliases);

    loop {
        let opened = match input_item(console, &options)? {
            StartAction::Load => load_file(console, user_config)?,
            StartAction::Create => create_file(console, user_config)?,
        };
        if let Some(store) = opened {
            return Ok(store);
        }
    }
}

/// `Ok(None)` means the file could not be opened and the user is sent back
/// to the start menu.
fn load_file(
    console: &mut dyn Console,
    user_config: &UserConfig,
) -> Result<Option<ProjectStore>, AppError> {
    let default = user_config.default_file();
    let prompt = format!("File to load [{}]: ", default.display());
    let accept_any = |_: &str| true;
    let options = InputOptions::<String>::new().prompt(&prompt).valid(&accept_any);

    let answer = input_text(console, &options)?;
    let path = match answer.trim() {
        "" => default,
        other => PathBuf::from(other),
    };

    match ProjectStore::open(path) {
        Ok(store) => Ok(Some(store)),
        Err(e) => {
            console.say(&format!("Error: {}", e))?;
            Ok(None)
        }
    }
}

fn create_file(
    console: &mut dyn Console,
    user_config: &UserConfig,
) -> Result<Option<ProjectStore>, AppError> {
    let name = ask_file_name(console)?;

    let path = match create_project_file(&user_config.data_dir, &name) {
        Ok(path) => path,
        Err(e) => {
            console.say(&format!("Error: {}", e))?;
            return Ok(None);
        }
    };
    console.say(&format!("File '{}.json' created successfully!", name))?;

    Ok(Some(ProjectStore::open(path)?))
}

fn main_menu(console: &mut dyn Console, store: &mut ProjectStore) -> Result<(), AppError> {
    let choices = [MenuAction::Pick, MenuAction::Add, MenuAction::Quit];
    let aliases = HashMap::from([
        ("p".to_string(), MenuAction::Pick),
        ("a".to_string(), MenuAction::Add),
        ("q".to_string(), MenuAction::Quit),
        ("exit".to_string(), MenuAction::Quit),
    ]);
    let menu = InputOptions::new().choices(&choices[..]).aliases(&aliases);
    let confirm = InputOptions::<String>::new().prompt("Do you want to quit? (y/n): ");

    loop {
        console.say("")?;
        let action = input_item(console, &menu)?;
        debug!(?action, "menu selection");

        match action {
            MenuAction::Pick => match store.random() {
                Some(project) => console.say(&format_project(project))?,
                None => console.say("No projects available.")?,
            },
            MenuAction::Add => add_once(console, store)?,
            MenuAction::Quit => {
                if input_yes_no(console, &confirm)? {
                    return Ok(());
                }
            }
        }
    }
}
