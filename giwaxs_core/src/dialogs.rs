//! Modal dialogs used by the shell.
//!
//! Every method blocks until the user answers. The GUI implements this with
//! native dialogs; tests use scripted answers.

use std::path::{Path, PathBuf};

/// File-open filter: a description plus accepted file name suffixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub description: &'static str,
    /// Suffixes without the leading dot, e.g. `"edf.gz"`
    pub suffixes: &'static [&'static str],
}

impl FileFilter {
    /// Whether the file name ends in one of the accepted suffixes (case-insensitive)
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_ascii_lowercase()) else {
            return false;
        };
        self.suffixes
            .iter()
            .any(|suffix| name.len() > suffix.len() + 1 && name.ends_with(&format!(".{}", suffix)))
    }

    /// Accepted suffixes as `.tiff, .edf, ...`
    pub fn describe_suffixes(&self) -> String {
        self.suffixes
            .iter()
            .map(|s| format!(".{}", s))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Last extension components for dialogs that only filter on `Path::extension`
    pub fn extensions(&self) -> Vec<&'static str> {
        let mut exts: Vec<&'static str> = self
            .suffixes
            .iter()
            .map(|s| s.rsplit('.').next().unwrap_or(s))
            .collect();
        exts.dedup();
        exts
    }
}

/// Images accepted as ex-situ data
pub const EX_SITU_IMAGE_FILTER: FileFilter = FileFilter {
    description: "edf, tiff files",
    suffixes: &["tiff", "edf", "edf.gz"],
};

/// Contents of a critical error dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
    /// Supplementary text, empty when there is none
    pub detail: String,
}

/// Blocking modal dialogs
pub trait Dialogs {
    /// Ask for a directory. `None` on cancel.
    fn pick_folder(&mut self, title: &str) -> Option<PathBuf>;

    /// Ask for a single file matching `filter`. `None` on cancel.
    fn pick_file(&mut self, title: &str, filter: &FileFilter) -> Option<PathBuf>;

    /// Yes/no question. `true` only for an explicit yes.
    fn confirm(&mut self, title: &str, message: &str) -> bool;

    /// Critical error message box
    fn show_error_dialog(&mut self, dialog: &ErrorDialog);
}

/// Log an error and show it in a blocking critical dialog.
pub fn show_error(dialogs: &mut dyn Dialogs, message: &str, title: &str, detail: &str) {
    tracing::info!("Error message shown: {} - {} {}.", title, message, detail);

    dialogs.show_error_dialog(&ErrorDialog {
        title: title.to_string(),
        message: message.to_string(),
        detail: detail.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ex_situ_filter_matches() {
        let filter = EX_SITU_IMAGE_FILTER;
        assert!(filter.matches(Path::new("/data/sample_001.tiff")));
        assert!(filter.matches(Path::new("/data/sample_001.EDF")));
        assert!(filter.matches(Path::new("/data/sample_001.edf.gz")));
        assert!(!filter.matches(Path::new("/data/sample_001.tif")));
        assert!(!filter.matches(Path::new("/data/archive.gz")));
        assert!(!filter.matches(Path::new("/data/.edf")));
        assert!(!filter.matches(Path::new("/")));
    }

    #[test]
    fn test_filter_descriptions() {
        assert_eq!(EX_SITU_IMAGE_FILTER.describe_suffixes(), ".tiff, .edf, .edf.gz");
        assert_eq!(EX_SITU_IMAGE_FILTER.extensions(), vec!["tiff", "edf", "gz"]);
    }
}
