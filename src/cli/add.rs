use std::path::PathBuf;

use crate::cli::AppError;
use crate::input::{
    input_float, input_int, input_text, input_yes_no, Bounds, Console, InputError, InputOptions,
};
use crate::models::config::UserConfig;
use crate::models::{Project, ProjectStore};

fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Runs the form once, asking for each field until it is valid.
pub fn prompt_project(console: &mut dyn Console) -> Result<Project, InputError> {
    let text = InputOptions::<String>::new().valid(&has_text);
    let name = input_text(console, &text.prompt("Project: "))?;

    let text = InputOptions::<String>::new().valid(&has_text);
    let description = input_text(console, &text.prompt("Description: "))?;

    let difficulty = InputOptions::<String>::new()
        .prompt("Difficulty (integer): ")
        .bounds(Bounds::new().gt(0.0).le(f64::from(u32::MAX)));
    let difficulty = input_int(console, &difficulty)?;
    let difficulty = u32::try_from(difficulty).map_err(|_| {
        InputError::InvalidConfig(format!("difficulty {} does not fit in u32", difficulty))
    })?;

    // Non-finite values cannot be written as JSON numbers
    let time_allotted = InputOptions::<String>::new()
        .prompt("Allotted Time (decimal hours): ")
        .bounds(Bounds::new().gt(0.0).lt(f64::INFINITY));
    let time_allotted = input_float(console, &time_allotted)?;

    Ok(Project::new(
        name.trim().to_string(),
        description.trim().to_string(),
        difficulty,
        time_allotted,
    ))
}

pub fn add_once(console: &mut dyn Console, store: &mut ProjectStore) -> Result<(), AppError> {
    let project = prompt_project(console)?;
    store.add(project)?;
    console.say("Project added successfully!")?;
    Ok(())
}

pub fn add_projects(
    console: &mut dyn Console,
    user_config: &mut UserConfig,
    file: Option<PathBuf>,
) -> Result<(), AppError> {
    let path = file.unwrap_or_else(|| user_config.default_file());
    let mut store = ProjectStore::open(path)?;
    user_config.remember_file(store.path().to_path_buf());

    let again = InputOptions::<String>::new().prompt("Add another project? (y/n): ");
    loop {
        add_once(console, &mut store)?;
        if !input_yes_no(console, &again)? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::console::scripted::ScriptedConsole;
    use crate::models::create_project_file;
    use tempfile::tempdir;

    #[test]
    fn test_prompt_project_retries_each_field() {
        let mut console = ScriptedConsole::new([
            "   ",
            "  Tiny shell ",
            "",
            "Pipes and redirects",
            "zero",
            "0",
            "3",
            "-2",
            "inf",
            "6.5",
        ]);

        let project = prompt_project(&mut console).unwrap();
        assert_eq!(
            project,
            Project::new("Tiny shell".to_string(), "Pipes and redirects".to_string(), 3, 6.5)
        );
        assert_eq!(console.remaining(), 0);
        assert_eq!(console.output.len(), 6);
    }

    #[test]
    fn test_add_projects_loops_until_no() {
        let dir = tempdir().unwrap();
        let path = create_project_file(dir.path(), "ideas").unwrap();
        let mut user_config = UserConfig::default();

        let mut console = ScriptedConsole::new([
            "Chip-8", "Emulator", "4", "10", "maybe", "y", "Lexer", "Tokens", "2", "1.5", "no",
        ]);
        add_projects(&mut console, &mut user_config, Some(path.clone())).unwrap();

        let store = ProjectStore::open(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.projects()[1].name, "Lexer");
        assert_eq!(user_config.last_file, Some(path));
        assert_eq!(
            console
                .output
                .iter()
                .filter(|line| *line == "Project added successfully!")
                .count(),
            2
        );
    }

    #[test]
    fn test_add_projects_missing_file() {
        let dir = tempdir().unwrap();
        let mut user_config = UserConfig::default();
        let mut console = ScriptedConsole::new(Vec::<String>::new());

        let err = add_projects(&mut console, &mut user_config, Some(dir.path().join("x.json")))
            .unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
        assert!(console.prompts.is_empty());
    }

    #[test]
    fn test_form_over_non_utf8_input() {
        use crate::input::{StdConsole, NOT_TEXT_ERROR};
        use std::io::Cursor;

        let dir = tempdir().unwrap();
        let path = create_project_file(dir.path(), "ideas").unwrap();
        let mut user_config = UserConfig::default();

        let bytes = b"Name\xff\nName\nDesc\n2\n1.5\nn\n".to_vec();
        let mut console = StdConsole::with_io(Cursor::new(bytes), Vec::new());
        add_projects(&mut console, &mut user_config, Some(path.clone())).unwrap();

        let store = ProjectStore::open(&path).unwrap();
        assert_eq!(
            store.projects(),
            &[Project::new("Name".to_string(), "Desc".to_string(), 2, 1.5)]
        );
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output.matches(NOT_TEXT_ERROR).count(), 1);
    }
}
