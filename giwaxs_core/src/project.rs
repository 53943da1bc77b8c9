//! # Project Data Structures
//!
//! A project is a directory. Its state lives in `project.json` at the
//! directory root:
//!
//! ```text
//! ProjectFile
//! ├── version, id, name, created, modified
//! ├── ex_situ: Vec<PathBuf> (image files, in the order they were added)
//! └── interpolation: InterpolationSettings (polar viewer grid)
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current schema version for project.json files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Name of the project file inside a project directory
pub const PROJECT_FILE_NAME: &str = "project.json";

/// Contents of `project.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub id: Uuid,

    /// Display name, defaults to the directory name
    pub name: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,

    /// Ex-situ image files added to the project
    #[serde(default)]
    pub ex_situ: Vec<PathBuf>,

    #[serde(default)]
    pub interpolation: InterpolationSettings,
}

impl ProjectFile {
    /// Create an empty project
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        ProjectFile {
            version: SCHEMA_VERSION.to_string(),
            id: Uuid::new_v4(),
            name: name.into(),
            created: now,
            modified: now,
            ex_situ: Vec::new(),
            interpolation: InterpolationSettings::default(),
        }
    }

    /// Path of the project file inside `dir`
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(PROJECT_FILE_NAME)
    }

    /// Add an ex-situ image. Returns `false` if it was already part of the project.
    pub fn add_ex_situ(&mut self, path: PathBuf) -> bool {
        if self.ex_situ.contains(&path) {
            return false;
        }
        self.ex_situ.push(path);
        self.touch();
        true
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

/// Grid used by the polar viewer when remapping an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpolationSettings {
    pub radial_points: u32,
    pub angular_points: u32,
}

impl Default for InterpolationSettings {
    fn default() -> Self {
        InterpolationSettings {
            radial_points: 512,
            angular_points: 512,
        }
    }
}
