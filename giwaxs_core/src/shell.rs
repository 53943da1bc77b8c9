//! # Application Shell
//!
//! The main window's behaviour without the toolkit. The shell owns the file
//! manager and the dock area, and reaches the window system through a
//! [`ShellHost`] handed to each operation.
//!
//! ## States
//!
//! ```text
//!                 project chosen
//! StartupPicker ───────────────────► Main ──── quit confirmed ───► Closed
//!       │                                                            ▲
//!       └──────────────────── exit requested ────────────────────────┘
//! ```
//!
//! The window title is derived from the file manager on every call to
//! [`Shell::window_title`] and never cached.

use std::path::Path;

use crate::assets::{AssetDirs, DEFAULT_THEME};
use crate::commands::{self, Command, FullscreenIcon, Menu};
use crate::config::STYLE_KEY;
use crate::dialogs::{show_error, Dialogs, EX_SITU_IMAGE_FILTER};
use crate::docks::{DockArea, DockId, DockLayout};
use crate::errors::{ShellError, ShellResult};
use crate::file_manager::FileManager;

/// Title of the main window when no project is open
pub const APP_TITLE: &str = "GIWAXS analysis";

const QUIT_TITLE: &str = "Message";
const QUIT_MESSAGE: &str = "Are you sure to quit? The project will be saved.";

/// Window system operations the shell needs
pub trait WindowControl {
    /// Live fullscreen state as reported by the window system
    fn is_fullscreen(&self) -> bool;

    fn enter_fullscreen(&mut self);

    fn show_maximized(&mut self);

    /// Reveal the main window after the startup picker
    fn show_main_window(&mut self);

    /// Dismiss the startup picker
    fn close_startup_picker(&mut self);

    fn close_all_windows(&mut self);
}

/// The running application's global style
pub trait StyleTarget {
    /// Replace the application stylesheet; an empty string clears it
    fn set_stylesheet(&mut self, stylesheet: &str);

    /// Switch to a toolkit built-in style. Returns `false` if the toolkit has no such style.
    fn set_builtin_style(&mut self, name: &str) -> bool;
}

/// Everything outside the shell that its operations touch
pub trait ShellHost {
    fn dialogs(&mut self) -> &mut dyn Dialogs;

    fn window(&mut self) -> &mut dyn WindowControl;

    /// The running application, if there is one
    fn application(&mut self) -> Option<&mut dyn StyleTarget>;
}

/// Which top-level view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    StartupPicker,
    Main,
    Closed,
}

/// Outcome of a close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Close,
    /// The close request must be ignored and the window kept open
    Cancel,
}

/// Where an applied theme came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    Stylesheet,
    /// Built-in toolkit style; `found` is whether the toolkit knew the name
    Builtin { found: bool },
}

/// Result of applying a theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTheme {
    pub name: String,
    pub source: ThemeSource,
}

/// The main window shell
pub struct Shell<F: FileManager, D: DockArea = DockLayout> {
    fm: F,
    docks: D,
    assets: AssetDirs,
    default_theme: Option<String>,
    /// Installed stylesheet names, listed once at construction
    themes: Vec<String>,
    screen: Screen,
    fullscreen_icon: FullscreenIcon,
}

impl<F: FileManager, D: DockArea> Shell<F, D> {
    /// Create the shell. Without an open project it starts on the startup picker.
    pub fn new(fm: F, docks: D, assets: AssetDirs) -> Self {
        let screen = if fm.project_opened() {
            Screen::Main
        } else {
            Screen::StartupPicker
        };

        let themes = assets.list_stylesheets();
        tracing::debug!(count = themes.len(), "stylesheets found");

        Shell {
            fm,
            docks,
            assets,
            themes,
            default_theme: Some(DEFAULT_THEME.to_string()),
            screen,
            fullscreen_icon: FullscreenIcon::default(),
        }
    }

    /// Replace the hard-coded fallback theme
    pub fn with_default_theme(mut self, theme: Option<String>) -> Self {
        self.default_theme = theme;
        self
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn fm(&self) -> &F {
        &self.fm
    }

    pub fn fm_mut(&mut self) -> &mut F {
        &mut self.fm
    }

    pub fn docks(&self) -> &D {
        &self.docks
    }

    pub fn assets(&self) -> &AssetDirs {
        &self.assets
    }

    pub fn fullscreen_icon(&self) -> FullscreenIcon {
        self.fullscreen_icon
    }

    /// `"<project> - GIWAXS analysis"`, or the bare title without a project
    pub fn window_title(&self) -> String {
        match self.fm.project_name() {
            Some(name) if self.fm.project_opened() => format!("{} - {}", name, APP_TITLE),
            _ => APP_TITLE.to_string(),
        }
    }

    /// Stylesheet themes offered in the Preferences menu
    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    /// Menu bar for the current recent projects and the installed themes
    pub fn menu_bar(&self) -> Vec<Menu> {
        commands::menu_bar(self.fm.recent_projects(), &self.themes)
    }

    /// Run a menu or toolbar command.
    ///
    /// Only a missing running application is returned as an error; everything
    /// else is reported through the error dialog.
    pub fn dispatch(&mut self, command: Command, host: &mut dyn ShellHost) -> ShellResult<()> {
        tracing::debug!(?command, "dispatch");
        match command {
            Command::NewProject => self.new_project_dialog(host),
            Command::OpenProject(dir) => self.open_project(&dir, host),
            Command::AddExSituFile => self.add_ex_situ_file(host),
            Command::ToggleDock(dock) => self.toggle_dock(dock),
            Command::ToggleFullscreen => self.toggle_fullscreen(host),
            Command::ApplyTheme(name) => {
                self.apply_theme(Some(&name), host)?;
            }
        }
        Ok(())
    }

    /// Project chosen: open the project, then leave the startup picker.
    ///
    /// If opening fails the error is shown and the current screen stays, so
    /// the picker is dismissed only by the first successful open.
    pub fn open_project(&mut self, dir: &Path, host: &mut dyn ShellHost) {
        if let Err(e) = self.fm.open_project(dir) {
            tracing::warn!(dir = %dir.display(), error = %e, "project not opened");
            show_error(host.dialogs(), &e.to_string(), e.dialog_title(), &dir.display().to_string());
            return;
        }

        if self.screen == Screen::StartupPicker {
            host.window().close_startup_picker();
            host.window().show_main_window();
            self.screen = Screen::Main;
        }

        tracing::info!(title = %self.window_title(), "project ready");
    }

    /// Ask for a project folder and open it. Cancel does nothing.
    pub fn new_project_dialog(&mut self, host: &mut dyn ShellHost) {
        let Some(folder) = host.dialogs().pick_folder("New project folder") else {
            return;
        };
        if folder.is_dir() {
            self.open_project(&folder, host);
        }
    }

    /// Ask for one ex-situ image and add it to the project. Cancel does nothing.
    pub fn add_ex_situ_file(&mut self, host: &mut dyn ShellHost) {
        let Some(path) = host.dialogs().pick_file("Open image", &EX_SITU_IMAGE_FILTER) else {
            return;
        };
        if let Err(e) = self.fm.add_ex_situ_data(&path) {
            show_error(host.dialogs(), &e.to_string(), e.dialog_title(), "");
        }
    }

    pub fn toggle_dock(&mut self, dock: DockId) {
        self.docks.toggle_dock(dock);
    }

    /// Flip between fullscreen and maximized, judged by the live window state
    pub fn toggle_fullscreen(&mut self, host: &mut dyn ShellHost) {
        let window = host.window();
        if window.is_fullscreen() {
            window.show_maximized();
            self.fullscreen_icon = FullscreenIcon::ToFullscreen;
        } else {
            window.enter_fullscreen();
            self.fullscreen_icon = FullscreenIcon::FromFullscreen;
        }
    }

    /// Apply a theme by name.
    ///
    /// Without a name the configured style is used, then the default theme;
    /// with none of those this is a no-op returning `Ok(None)`. A stylesheet of
    /// that name replaces the application stylesheet; otherwise the stylesheet
    /// is cleared and the toolkit's built-in style of the same name is
    /// requested. The name is persisted in both cases.
    pub fn apply_theme(&mut self, name: Option<&str>, host: &mut dyn ShellHost) -> ShellResult<Option<AppliedTheme>> {
        let name = name
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .or_else(|| self.fm.config_value(STYLE_KEY).filter(|n| !n.is_empty()))
            .or_else(|| self.default_theme.clone());

        let Some(name) = name else {
            return Ok(None);
        };

        let stylesheet = self.assets.get_stylesheet(&name);
        let app = host.application().ok_or(ShellError::NoRunningApplication)?;

        let source = match stylesheet {
            Some(text) => {
                app.set_stylesheet("");
                app.set_stylesheet(&text);
                ThemeSource::Stylesheet
            }
            None => {
                app.set_stylesheet("");
                let found = app.set_builtin_style(&name);
                if !found {
                    tracing::warn!(theme = %name, "no stylesheet or built-in style with this name");
                }
                ThemeSource::Builtin { found }
            }
        };

        self.fm.set_config_value(STYLE_KEY, &name);
        tracing::info!(theme = %name, ?source, "theme applied");

        Ok(Some(AppliedTheme { name, source }))
    }

    /// Ask before quitting. Only an explicit "yes" saves and closes.
    pub fn request_close(&mut self, host: &mut dyn ShellHost) -> CloseDecision {
        if host.dialogs().confirm(QUIT_TITLE, QUIT_MESSAGE) {
            self.shutdown(host);
            CloseDecision::Close
        } else {
            tracing::debug!("close cancelled");
            CloseDecision::Cancel
        }
    }

    /// Exit chosen on the startup picker; there is no project to confirm saving
    pub fn exit_requested(&mut self, host: &mut dyn ShellHost) {
        self.shutdown(host);
    }

    fn shutdown(&mut self, host: &mut dyn ShellHost) {
        if let Err(e) = self.fm.close() {
            tracing::error!(error = %e, "project not saved on exit");
            show_error(host.dialogs(), &e.to_string(), e.dialog_title(), "");
        }
        host.window().close_all_windows();
        self.screen = Screen::Closed;
    }
}
