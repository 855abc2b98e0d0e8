use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use rand::seq::IndexedRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Allowed characters for a new project file's name (without extension).
pub const FILE_NAME_PATTERN: &str = r"^[\w-]+$";

static FILE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FILE_NAME_PATTERN).expect("valid regex"));

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("The file {} does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("The file {} is not a valid JSON project list: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid file name '{0}': use only letters, digits, '_' and '-'")]
    InvalidFileName(String),

    #[error("The file {} already exists.", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Failed to serialize projects: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One project idea as stored on disk. Missing fields load as empty/zero so
/// hand-edited files still open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: u32,
    #[serde(default)]
    pub time_allotted: f64,
}

impl Project {
    pub fn new(name: String, description: String, difficulty: u32, time_allotted: f64) -> Self {
        Self {
            name,
            description,
            difficulty,
            time_allotted,
        }
    }
}

/// The opened project file, held fully in memory and rewritten whole on
/// every change.
#[derive(Debug)]
pub struct ProjectStore {
    path: PathBuf,
    projects: Vec<Project>,
}

impl ProjectStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Err(StoreError::NotFound(path));
        }

        let content = fs::read_to_string(&path)?;
        let projects: Vec<Project> = match serde_json::from_str(&content) {
            Ok(projects) => projects,
            Err(source) => return Err(StoreError::InvalidJson { path, source }),
        };

        debug!(path = %path.display(), count = projects.len(), "loaded project file");
        Ok(Self { path, projects })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn random(&self) -> Option<&Project> {
        self.random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Project> {
        self.projects.choose(rng)
    }

    /// Appends `project` and rewrites the file. On a failed write the
    /// in-memory list is left as it was.
    pub fn add(&mut self, project: Project) -> Result<(), StoreError> {
        self.projects.push(project);
        if let Err(e) = self.save() {
            self.projects.pop();
            return Err(e);
        }

        info!(path = %self.path.display(), count = self.projects.len(), "project added");
        Ok(())
    }

    pub fn save(&self) -> Result<(), StoreError> {
        fs::write(&self.path, to_pretty_json(&self.projects)?)?;
        debug!(path = %self.path.display(), "saved project file");
        Ok(())
    }
}

pub fn is_valid_file_name(name: &str) -> bool {
    FILE_NAME_RE.is_match(name)
}

/// Creates `<dir>/<name>.json` holding an empty project list.
pub fn create_project_file(dir: &Path, name: &str) -> Result<PathBuf, StoreError> {
    if !is_valid_file_name(name) {
        return Err(StoreError::InvalidFileName(name.to_string()));
    }

    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{}.json", name));
    if path.exists() {
        return Err(StoreError::AlreadyExists(path));
    }

    fs::write(&path, to_pretty_json::<Vec<Project>>(&Vec::new())?)?;
    info!(path = %path.display(), "created project file");
    Ok(path)
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
