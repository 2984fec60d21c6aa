use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{Error, Result};

/// Name of the descriptor directory inside the application and profile dirs.
pub const ENGINES_DIR_NAME: &str = "search-engines";

/// Host settings: where descriptors live and query defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Loaded in order; later directories win on equal file names.
    pub directories: Vec<PathBuf>,
    pub locale: Option<String>,
    pub result_type: Option<String>,
}

impl Config {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text).map_err(|source| Error::Config { path: path.to_path_buf(), source })
    }

    /// Bundled engines first, then the user's profile, so profile
    /// descriptors replace bundled ones of the same name.
    pub fn standard_directories(app_dir: &Path, profile_dir: &Path) -> Vec<PathBuf> {
        vec![app_dir.join(ENGINES_DIR_NAME), profile_dir.join(ENGINES_DIR_NAME)]
    }
}
