use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{CASCADE_DIR_ENV, CASCADE_SEARCH_DIRS};

#[derive(Error, Debug)]
pub enum CascadeResolveError {
    #[error("cascade file {name} not found; searched {searched:?}")]
    NotFound {
        name: String,
        searched: Vec<PathBuf>,
    },
}

/// Resolve a Haar cascade XML file by name.
///
/// Resolution order:
/// 1. Explicit directory (from `--cascade-dir`)
/// 2. `FACEGREET_CASCADE_DIR`
/// 3. Well-known OpenCV install locations
///
/// The cascades ship with every OpenCV install, so unlike model files
/// there is nothing to download here.
pub fn resolve(name: &str, explicit_dir: Option<&Path>) -> Result<PathBuf, CascadeResolveError> {
    let mut searched = Vec::new();
    for dir in candidate_dirs(explicit_dir) {
        let path = dir.join(name);
        if path.is_file() {
            return Ok(path);
        }
        searched.push(dir);
    }
    Err(CascadeResolveError::NotFound {
        name: name.to_string(),
        searched,
    })
}

fn candidate_dirs(explicit_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(dir) = explicit_dir {
        dirs.push(dir.to_path_buf());
    }
    if let Ok(dir) = env::var(CASCADE_DIR_ENV) {
        dirs.push(PathBuf::from(dir));
    }
    dirs.extend(CASCADE_SEARCH_DIRS.iter().map(PathBuf::from));
    dirs
}
