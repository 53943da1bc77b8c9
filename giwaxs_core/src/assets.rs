//! # Static Assets
//!
//! Icons and stylesheets live in two fixed directories under a static root:
//!
//! ```text
//! <static>/
//! ├── icons/   folder.svg, tofullscreen.svg, ...
//! └── css/     Dark Grey.css, Light.css, ...
//! ```
//!
//! Lookups never fail loudly. A missing icon resolves to a path that simply
//! renders nothing; a missing stylesheet is `None`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extension appended to icon names given without one
pub const DEFAULT_ICON_EXTENSION: &str = "svg";

/// Extension of stylesheet files
pub const STYLESHEET_EXTENSION: &str = "css";

/// Theme used when neither the caller nor the config names one
pub const DEFAULT_THEME: &str = "Dark Grey";

/// Icon and stylesheet directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDirs {
    pub icons: PathBuf,
    pub css: PathBuf,
}

impl AssetDirs {
    /// Build the asset directories below a static root
    pub fn new(static_root: impl AsRef<Path>) -> Self {
        let root = static_root.as_ref();
        AssetDirs {
            icons: root.join("icons"),
            css: root.join("css"),
        }
    }

    /// Resolve an icon name to a loadable path.
    ///
    /// Names without an extension get [`DEFAULT_ICON_EXTENSION`]. The file is
    /// not checked for existence.
    pub fn resolve_icon(&self, name: &str) -> PathBuf {
        if name.contains('.') {
            self.icons.join(name)
        } else {
            self.icons.join(format!("{}.{}", name, DEFAULT_ICON_EXTENSION))
        }
    }

    /// Read a stylesheet by theme name.
    ///
    /// Returns `None` when the file does not exist. Any other read failure is
    /// logged and also yields `None`.
    pub fn get_stylesheet(&self, name: &str) -> Option<String> {
        let suffix = format!(".{}", STYLESHEET_EXTENSION);
        let file_name = if name.contains(&suffix) {
            name.to_string()
        } else {
            format!("{}{}", name, suffix)
        };
        let path = self.css.join(file_name);

        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read stylesheet");
                None
            }
        }
    }

    /// List the theme names available in the stylesheet directory.
    ///
    /// Order follows the directory listing.
    pub fn list_stylesheets(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.css) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %self.css.display(), error = %e, "no stylesheet directory");
                return Vec::new();
            }
        };

        let mut names = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(STYLESHEET_EXTENSION)
            })
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect::<Vec<_>>();
        names.sort();
        names
    }
}
