mod add;
mod new_file;
mod pick;
mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::input::{InputError, StdConsole};
use crate::models::{config, StoreError};

#[derive(Parser)]
#[command(name = "ideas")]
#[command(about = "Pick a random project idea or add new ones", long_about = None)]
pub struct Cli {
    /// Project file to use instead of the last opened one
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Directory new project files are created in
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one project picked at random
    Pick,
    /// Add projects through a prompt-driven form
    Add,
    /// Create an empty project file
    New { name: Option<String> },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub fn run(cli: Cli) {
    let mut user_config = config::load_config();
    if let Some(dir) = cli.data_dir {
        user_config.data_dir = dir;
    }

    let loaded = user_config.clone();
    let mut console = StdConsole::new();

    let result = match cli.command {
        None => session::run_session(&mut console, &mut user_config, cli.file),
        Some(Commands::Pick) => pick::pick_project(&user_config, cli.file),
        Some(Commands::Add) => add::add_projects(&mut console, &mut user_config, cli.file),
        Some(Commands::New { name }) => new_file::new_file(&mut console, &mut user_config, name),
    };

    if user_config != loaded {
        if let Err(e) = config::save_config(&user_config) {
            tracing::warn!(error = %e, "failed to save config");
        }
    }

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
