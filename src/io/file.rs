use std::path::Path;

use crate::error::{GridError, GridResult};
use crate::model::Project;

/// Save a project to a JSON file.
pub fn save_project(project: &Project, path: &Path) -> GridResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|source| GridError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a project from a JSON file.
pub fn load_project(path: &Path) -> GridResult<Project> {
    let json = std::fs::read_to_string(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| GridError::Json {
        path: path.to_path_buf(),
        source,
    })
}
