//! # Menus and Toolbars
//!
//! The menu bar and toolbars are described as data: ordered lists of labels,
//! icon names and the [`Command`] each entry triggers. The GUI renders these
//! lists and hands the command of a clicked entry back to the shell.
//!
//! ```text
//! File          New project | Recent projects >
//! Data          Real time measurements > | Ex situ measurements >
//! Preferences   Themes >
//! ```

use std::path::{Path, PathBuf};

use crate::docks::DockId;

/// A user action routed through the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewProject,
    OpenProject(PathBuf),
    AddExSituFile,
    ToggleDock(DockId),
    ToggleFullscreen,
    ApplyTheme(String),
}

/// Icon of the fullscreen action. Always shows the action that a click performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenIcon {
    #[default]
    ToFullscreen,
    FromFullscreen,
}

impl FullscreenIcon {
    pub fn icon_name(&self) -> &'static str {
        match self {
            FullscreenIcon::ToFullscreen => "tofullscreen",
            FullscreenIcon::FromFullscreen => "fromfullscreen",
        }
    }
}

/// One entry of a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Clickable entry; `None` renders disabled
    Action { label: String, command: Option<Command> },
    Submenu { label: String, entries: Vec<MenuEntry> },
}

impl MenuEntry {
    fn action(label: impl Into<String>, command: Command) -> Self {
        MenuEntry::Action {
            label: label.into(),
            command: Some(command),
        }
    }

    fn disabled(label: impl Into<String>) -> Self {
        MenuEntry::Action {
            label: label.into(),
            command: None,
        }
    }

    fn submenu(label: impl Into<String>, entries: Vec<MenuEntry>) -> Self {
        MenuEntry::Submenu {
            label: label.into(),
            entries,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Action { label, .. } | MenuEntry::Submenu { label, .. } => label,
        }
    }
}

/// A top-level menu of the menu bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub entries: Vec<MenuEntry>,
}

/// A toolbar button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub command: Command,
}

/// Build the menu bar from the recent projects and the available themes
pub fn menu_bar(recent_projects: &[PathBuf], themes: &[String]) -> Vec<Menu> {
    let recent = recent_projects
        .iter()
        .map(|path| MenuEntry::action(project_label(path), Command::OpenProject(path.clone())))
        .collect();

    let themes = themes
        .iter()
        .map(|theme| MenuEntry::action(theme.clone(), Command::ApplyTheme(theme.clone())))
        .collect();

    vec![
        Menu {
            title: "File",
            entries: vec![
                MenuEntry::action("New project", Command::NewProject),
                MenuEntry::submenu("Recent projects", recent),
            ],
        },
        Menu {
            title: "Data",
            entries: vec![
                // Live acquisition is not wired up in this build
                MenuEntry::submenu(
                    "Real time measurements",
                    vec![MenuEntry::disabled("New measurement")],
                ),
                MenuEntry::submenu(
                    "Ex situ measurements",
                    vec![MenuEntry::action("Add file", Command::AddExSituFile)],
                ),
            ],
        },
        Menu {
            title: "Preferences",
            entries: vec![MenuEntry::submenu("Themes", themes)],
        },
    ]
}

/// The "Docks" toolbar: one show/hide button per dock
pub fn docks_toolbar() -> Vec<ToolAction> {
    DockId::ALL
        .iter()
        .map(|dock| ToolAction {
            label: dock.title(),
            icon: dock_icon(*dock),
            command: Command::ToggleDock(*dock),
        })
        .collect()
}

/// The "General" toolbar, right aligned in the window
pub fn general_toolbar(fullscreen_icon: FullscreenIcon) -> Vec<ToolAction> {
    vec![ToolAction {
        label: "Full screen",
        icon: fullscreen_icon.icon_name(),
        command: Command::ToggleFullscreen,
    }]
}

fn dock_icon(dock: DockId) -> &'static str {
    match dock {
        DockId::FileWidget => "folder",
        DockId::RadialProfile => "radial_profile",
        DockId::AngularProfile => "angular_profile",
        DockId::Polar => "interpolate",
    }
}

/// Menu label for a project directory: its last path component
pub fn project_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(entries: &'a [MenuEntry], label: &str) -> &'a MenuEntry {
        entries.iter().find(|e| e.label() == label).unwrap()
    }

    #[test]
    fn test_menu_titles_in_order() {
        let menus = menu_bar(&[], &[]);
        let titles: Vec<_> = menus.iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["File", "Data", "Preferences"]);
    }

    #[test]
    fn test_recent_projects_menu() {
        let recent = vec![PathBuf::from("/data/run_b"), PathBuf::from("/data/run_a")];
        let menus = menu_bar(&recent, &[]);

        let MenuEntry::Submenu { entries, .. } = find(&menus[0].entries, "Recent projects") else {
            panic!("expected submenu");
        };
        assert_eq!(
            entries[0],
            MenuEntry::Action {
                label: "run_b".to_string(),
                command: Some(Command::OpenProject(PathBuf::from("/data/run_b"))),
            }
        );
        assert_eq!(entries[1].label(), "run_a");
    }

    #[test]
    fn test_theme_entries_apply_theme() {
        let themes = vec!["Dark Grey".to_string(), "Light".to_string()];
        let menus = menu_bar(&[], &themes);

        let MenuEntry::Submenu { entries, .. } = find(&menus[2].entries, "Themes") else {
            panic!("expected submenu");
        };
        assert_eq!(entries.len(), 2);
        assert!(matches!(
            &entries[1],
            MenuEntry::Action { command: Some(Command::ApplyTheme(name)), .. } if name == "Light"
        ));
    }

    #[test]
    fn test_real_time_measurement_is_disabled() {
        let menus = menu_bar(&[], &[]);
        let MenuEntry::Submenu { entries, .. } = find(&menus[1].entries, "Real time measurements") else {
            panic!("expected submenu");
        };
        assert_eq!(entries[0], MenuEntry::disabled("New measurement"));
    }

    #[test]
    fn test_docks_toolbar_targets_every_dock() {
        let toolbar = docks_toolbar();
        let labels: Vec<_> = toolbar.iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["File Manager", "Radial profile", "Angular profile", "Polar Viewer"]);
        assert_eq!(toolbar[3].command, Command::ToggleDock(DockId::Polar));
        assert_eq!(toolbar[3].icon, "interpolate");
    }

    #[test]
    fn test_general_toolbar_follows_icon() {
        assert_eq!(general_toolbar(FullscreenIcon::ToFullscreen)[0].icon, "tofullscreen");
        assert_eq!(general_toolbar(FullscreenIcon::FromFullscreen)[0].icon, "fromfullscreen");
    }

    #[test]
    fn test_project_label_falls_back_to_full_path() {
        assert_eq!(project_label(Path::new("/data/run_a")), "run_a");
        assert_eq!(project_label(Path::new("/")), "/");
    }
}
