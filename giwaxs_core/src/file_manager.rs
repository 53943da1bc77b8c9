//! # Project / File Manager
//!
//! The shell talks to project storage only through the [`FileManager`]
//! trait. [`ProjectManager`] is the implementation used by the application:
//! it owns the [`AppConfig`], the open project and its lock.
//!
//! ## Lifecycle
//!
//! ```text
//! open_project(dir) ──► lock dir/project.json ──► load or create ──► save
//!        │                                                            │
//!        └──────── previous project saved and unlocked ◄──────────────┘
//! close() ──► save project + config ──► release lock
//! ```

use std::path::{Path, PathBuf};

use crate::commands::project_label;
use crate::config::AppConfig;
use crate::dialogs::EX_SITU_IMAGE_FILTER;
use crate::errors::{ShellError, ShellResult};
use crate::file_io::{load_project, save_project, FileLock};
use crate::project::{InterpolationSettings, ProjectFile};

/// Project and configuration storage used by the shell
pub trait FileManager {
    fn project_opened(&self) -> bool;

    /// Name of the open project
    fn project_name(&self) -> Option<String>;

    /// Project directories, most recent first
    fn recent_projects(&self) -> &[PathBuf];

    fn config_value(&self, key: &str) -> Option<String>;

    fn set_config_value(&mut self, key: &str, value: &str);

    /// Open (or create) the project stored in `dir`
    fn open_project(&mut self, dir: &Path) -> ShellResult<()>;

    /// Add an ex-situ image file to the open project
    fn add_ex_situ_data(&mut self, path: &Path) -> ShellResult<()>;

    /// Save everything and release the open project
    fn close(&mut self) -> ShellResult<()>;
}

struct OpenProject {
    dir: PathBuf,
    file: ProjectFile,
    _lock: FileLock,
}

/// File manager backed by project directories and a JSON config file
pub struct ProjectManager {
    config_path: Option<PathBuf>,
    config: AppConfig,
    user_id: String,
    open: Option<OpenProject>,
}

impl ProjectManager {
    /// Create a manager that persists its config at `config_path`.
    ///
    /// `None` keeps the config in memory only.
    pub fn new(config_path: Option<PathBuf>, user_id: impl Into<String>) -> Self {
        let config = config_path
            .as_deref()
            .map(AppConfig::load_or_default)
            .unwrap_or_default();

        ProjectManager {
            config_path,
            config,
            user_id: user_id.into(),
            open: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Contents of the open project
    pub fn project(&self) -> Option<&ProjectFile> {
        self.open.as_ref().map(|p| &p.file)
    }

    pub fn project_dir(&self) -> Option<&Path> {
        self.open.as_ref().map(|p| p.dir.as_path())
    }

    /// Store new polar interpolation settings in the open project
    pub fn set_interpolation(&mut self, settings: InterpolationSettings) -> ShellResult<()> {
        let open = self.open.as_mut().ok_or(ShellError::NoProjectOpen)?;
        open.file.interpolation = settings;
        open.file.touch();
        save_project(&open.file, &ProjectFile::path_in(&open.dir))
    }

    fn save_config(&self) -> ShellResult<()> {
        match &self.config_path {
            Some(path) => self.config.save(path),
            None => Ok(()),
        }
    }

    fn save_open_project(&self) -> ShellResult<()> {
        match &self.open {
            Some(open) => save_project(&open.file, &ProjectFile::path_in(&open.dir)),
            None => Ok(()),
        }
    }
}

impl FileManager for ProjectManager {
    fn project_opened(&self) -> bool {
        self.open.is_some()
    }

    fn project_name(&self) -> Option<String> {
        self.open.as_ref().map(|p| project_label(&p.dir))
    }

    fn recent_projects(&self) -> &[PathBuf] {
        &self.config.recent_projects
    }

    fn config_value(&self, key: &str) -> Option<String> {
        self.config.get(key).map(str::to_string)
    }

    fn set_config_value(&mut self, key: &str, value: &str) {
        self.config.set(key, value);
        if let Err(e) = self.save_config() {
            tracing::warn!(key, error = %e, "config not saved");
        }
    }

    fn open_project(&mut self, dir: &Path) -> ShellResult<()> {
        // One spelling per project directory, so a reopen never locks it twice
        let dir = match dir.canonicalize() {
            Ok(dir) if dir.is_dir() => dir,
            _ => return Err(ShellError::not_a_directory(dir.display().to_string())),
        };
        let dir = dir.as_path();

        if self.project_dir() == Some(dir) {
            tracing::debug!(dir = %dir.display(), "project already open");
            return Ok(());
        }

        let file_path = ProjectFile::path_in(dir);
        let lock = FileLock::acquire(&file_path, self.user_id.clone())?;

        let file = if file_path.exists() {
            load_project(&file_path)?
        } else {
            tracing::info!(dir = %dir.display(), "creating new project");
            ProjectFile::new(project_label(dir))
        };
        save_project(&file, &file_path)?;

        // The new project is usable; the previous one can go
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "previous project not saved cleanly");
        }

        self.open = Some(OpenProject {
            dir: dir.to_path_buf(),
            file,
            _lock: lock,
        });
        self.config.push_recent_project(dir.to_path_buf());
        self.save_config()?;

        tracing::info!(dir = %dir.display(), "project opened");
        Ok(())
    }

    fn add_ex_situ_data(&mut self, path: &Path) -> ShellResult<()> {
        if !EX_SITU_IMAGE_FILTER.matches(path) {
            return Err(ShellError::unsupported_file(
                path.display().to_string(),
                EX_SITU_IMAGE_FILTER.describe_suffixes(),
            ));
        }

        let open = self.open.as_mut().ok_or(ShellError::NoProjectOpen)?;
        if open.file.add_ex_situ(path.to_path_buf()) {
            tracing::info!(path = %path.display(), "ex-situ file added");
            save_project(&open.file, &ProjectFile::path_in(&open.dir))?;
        } else {
            tracing::debug!(path = %path.display(), "ex-situ file already in project");
        }
        Ok(())
    }

    fn close(&mut self) -> ShellResult<()> {
        let project_result = self.save_open_project();
        if let Some(open) = self.open.take() {
            tracing::info!(dir = %open.dir.display(), "project closed");
        }
        project_result?;
        self.save_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STYLE_KEY;
    use std::env::temp_dir;
    use std::fs;

    struct TempArea {
        root: PathBuf,
    }

    impl TempArea {
        fn new(name: &str) -> Self {
            let root = temp_dir().join(format!("giwaxs_test_fm_{}_{}", name, uuid::Uuid::new_v4()));
            fs::create_dir_all(&root).unwrap();
            TempArea { root }
        }

        fn project_dir(&self, name: &str) -> PathBuf {
            let dir = self.root.join(name);
            fs::create_dir_all(&dir).unwrap();
            dir.canonicalize().unwrap()
        }

        fn config_path(&self) -> PathBuf {
            self.root.join("config").join("config.json")
        }
    }

    impl Drop for TempArea {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn test_open_creates_project_file_and_recent_entry() {
        let area = TempArea::new("open");
        let dir = area.project_dir("run_01");
        let mut fm = ProjectManager::new(Some(area.config_path()), "tester");

        assert!(!fm.project_opened());
        fm.open_project(&dir).unwrap();

        assert!(fm.project_opened());
        assert_eq!(fm.project_name().as_deref(), Some("run_01"));
        assert!(ProjectFile::path_in(&dir).exists());
        assert_eq!(fm.recent_projects(), &[dir.clone()]);
        assert_eq!(AppConfig::load_or_default(&area.config_path()).recent_projects, vec![dir]);
    }

    #[test]
    fn test_open_rejects_files() {
        let area = TempArea::new("not_dir");
        let file = area.root.join("image.edf");
        fs::write(&file, b"").unwrap();
        let mut fm = ProjectManager::new(None, "tester");

        assert_eq!(fm.open_project(&file).unwrap_err().error_code(), "NOT_A_DIRECTORY");
        assert!(!fm.project_opened());
    }

    #[test]
    fn test_second_manager_sees_lock() {
        let area = TempArea::new("locked");
        let dir = area.project_dir("shared");
        let mut first = ProjectManager::new(None, "first");
        let mut second = ProjectManager::new(None, "second");

        first.open_project(&dir).unwrap();
        let err = second.open_project(&dir).unwrap_err();
        assert!(err.is_recoverable());

        first.close().unwrap();
        second.open_project(&dir).unwrap();
    }

    #[test]
    fn test_switching_projects_releases_previous_lock() {
        let area = TempArea::new("switch");
        let a = area.project_dir("a");
        let b = area.project_dir("b");
        let mut fm = ProjectManager::new(None, "tester");

        fm.open_project(&a).unwrap();
        fm.open_project(&b).unwrap();
        assert_eq!(fm.project_name().as_deref(), Some("b"));
        assert_eq!(fm.recent_projects(), &[b.clone(), a.clone()]);

        let mut other = ProjectManager::new(None, "other");
        other.open_project(&a).unwrap();
    }

    #[test]
    fn test_reopen_under_other_spelling_is_a_no_op() {
        let area = TempArea::new("respell");
        let dir = area.project_dir("run_01");
        let mut fm = ProjectManager::new(Some(area.config_path()), "tester");

        fm.open_project(&dir).unwrap();
        fm.open_project(&dir.join("..").join("run_01")).unwrap();
        fm.open_project(&dir.join(".")).unwrap();

        assert_eq!(fm.project_dir(), Some(dir.as_path()));
        assert_eq!(fm.recent_projects(), &[dir]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_project_resolves_to_target() {
        let area = TempArea::new("symlink");
        let dir = area.project_dir("run_01");
        let link = area.root.join("latest");
        std::os::unix::fs::symlink(&dir, &link).unwrap();
        let mut fm = ProjectManager::new(None, "tester");

        fm.open_project(&link).unwrap();
        assert_eq!(fm.project_dir(), Some(dir.as_path()));
        fm.open_project(&dir).unwrap();
        assert_eq!(fm.recent_projects(), &[dir]);
    }

    #[test]
    fn test_open_rejects_missing_directory() {
        let area = TempArea::new("missing");
        let mut fm = ProjectManager::new(None, "tester");

        let err = fm.open_project(&area.root.join("nowhere")).unwrap_err();
        assert_eq!(err.error_code(), "NOT_A_DIRECTORY");
    }

    #[test]
    fn test_add_ex_situ_data() {
        let area = TempArea::new("ex_situ");
        let dir = area.project_dir("run_01");
        let mut fm = ProjectManager::new(None, "tester");

        assert_eq!(
            fm.add_ex_situ_data(Path::new("/data/frame.edf")).unwrap_err(),
            ShellError::NoProjectOpen
        );

        fm.open_project(&dir).unwrap();
        fm.add_ex_situ_data(Path::new("/data/frame.edf.gz")).unwrap();
        fm.add_ex_situ_data(Path::new("/data/frame.edf.gz")).unwrap();
        assert_eq!(
            fm.add_ex_situ_data(Path::new("/data/frame.png")).unwrap_err().error_code(),
            "UNSUPPORTED_FILE"
        );

        let saved = load_project(&ProjectFile::path_in(&dir)).unwrap();
        assert_eq!(saved.ex_situ, vec![PathBuf::from("/data/frame.edf.gz")]);
    }

    #[test]
    fn test_reopen_keeps_ex_situ_files_and_settings() {
        let area = TempArea::new("reopen");
        let dir = area.project_dir("run_01");

        let mut fm = ProjectManager::new(None, "tester");
        fm.open_project(&dir).unwrap();
        fm.add_ex_situ_data(Path::new("/data/a.tiff")).unwrap();
        fm.set_interpolation(InterpolationSettings { radial_points: 300, angular_points: 90 })
            .unwrap();
        fm.close().unwrap();
        assert!(!fm.project_opened());

        fm.open_project(&dir).unwrap();
        let project = fm.project().unwrap();
        assert_eq!(project.ex_situ, vec![PathBuf::from("/data/a.tiff")]);
        assert_eq!(project.interpolation.angular_points, 90);
    }

    #[test]
    fn test_style_persisted_immediately() {
        let area = TempArea::new("style");
        let mut fm = ProjectManager::new(Some(area.config_path()), "tester");
        fm.set_config_value(STYLE_KEY, "Light");

        let reloaded = ProjectManager::new(Some(area.config_path()), "tester");
        assert_eq!(reloaded.config_value(STYLE_KEY).as_deref(), Some("Light"));
    }
}
