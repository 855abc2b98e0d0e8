use crate::cli::AppError;
use crate::input::{input_text, Console, InputOptions};
use crate::models::config::UserConfig;
use crate::models::{create_project_file, is_valid_file_name};

pub fn new_file(
    console: &mut dyn Console,
    user_config: &mut UserConfig,
    name: Option<String>,
) -> Result<(), AppError> {
    let name = match name {
        Some(name) => name,
        None => ask_file_name(console)?,
    };

    let path = create_project_file(&user_config.data_dir, &name)?;
    console.say(&format!("File '{}.json' created successfully!", name))?;
    user_config.remember_file(path);
    Ok(())
}

pub(super) fn ask_file_name(console: &mut dyn Console) -> Result<String, AppError> {
    let options = InputOptions::<String>::new()
        .prompt("Enter file name (letters, digits, '_' or '-'): ")
        .valid(&is_valid_file_name);
    Ok(input_text(console, &options)?)
}
