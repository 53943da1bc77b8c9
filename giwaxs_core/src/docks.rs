//! # Dock Area
//!
//! Named panels of the main window that can be shown and hidden
//! independently. The shell only ever toggles a dock by name; which docks
//! exist and how they are laid out is decided here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Docks of the main window, in layout order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DockId {
    FileWidget,
    RadialProfile,
    AngularProfile,
    Polar,
}

impl DockId {
    pub const ALL: &'static [DockId] = &[
        DockId::FileWidget,
        DockId::RadialProfile,
        DockId::AngularProfile,
        DockId::Polar,
    ];

    /// Identifier used by the toolbar and in saved layouts
    pub fn name(&self) -> &'static str {
        match self {
            DockId::FileWidget => "file_widget",
            DockId::RadialProfile => "radial_profile",
            DockId::AngularProfile => "angular_profile",
            DockId::Polar => "polar",
        }
    }

    /// Title shown in the dock header
    pub fn title(&self) -> &'static str {
        match self {
            DockId::FileWidget => "File Manager",
            DockId::RadialProfile => "Radial profile",
            DockId::AngularProfile => "Angular profile",
            DockId::Polar => "Polar Viewer",
        }
    }

    fn index(&self) -> usize {
        match self {
            DockId::FileWidget => 0,
            DockId::RadialProfile => 1,
            DockId::AngularProfile => 2,
            DockId::Polar => 3,
        }
    }
}

impl fmt::Display for DockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DockId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DockId::ALL
            .iter()
            .copied()
            .find(|dock| dock.name() == s)
            .ok_or_else(|| format!("unknown dock '{}'", s))
    }
}

/// Show/hide toggling of named docks
pub trait DockArea {
    fn toggle_dock(&mut self, dock: DockId);
}

/// Visibility of every dock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockLayout {
    visible: [bool; 4],
}

impl Default for DockLayout {
    fn default() -> Self {
        DockLayout { visible: [true; 4] }
    }
}

impl DockLayout {
    pub fn is_visible(&self, dock: DockId) -> bool {
        self.visible[dock.index()]
    }

    /// Visible docks in layout order
    pub fn visible_docks(&self) -> impl Iterator<Item = DockId> + '_ {
        DockId::ALL.iter().copied().filter(|dock| self.is_visible(*dock))
    }
}

impl DockArea for DockLayout {
    fn toggle_dock(&mut self, dock: DockId) {
        let slot = &mut self.visible[dock.index()];
        *slot = !*slot;
        tracing::debug!(dock = dock.name(), visible = *slot, "dock toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_docks_visible_initially() {
        let layout = DockLayout::default();
        assert_eq!(layout.visible_docks().count(), DockId::ALL.len());
    }

    #[test]
    fn test_toggle_only_affects_named_dock() {
        let mut layout = DockLayout::default();
        layout.toggle_dock(DockId::Polar);

        assert!(!layout.is_visible(DockId::Polar));
        assert!(layout.is_visible(DockId::FileWidget));
        assert_eq!(
            layout.visible_docks().collect::<Vec<_>>(),
            vec![DockId::FileWidget, DockId::RadialProfile, DockId::AngularProfile]
        );

        layout.toggle_dock(DockId::Polar);
        assert!(layout.is_visible(DockId::Polar));
    }

    #[test]
    fn test_dock_names_roundtrip() {
        for dock in DockId::ALL {
            assert_eq!(dock.name().parse::<DockId>(), Ok(*dock));
        }
        assert!("histogram".parse::<DockId>().is_err());
        assert_eq!(serde_json::to_string(&DockId::RadialProfile).unwrap(), "\"radial_profile\"");
    }
}
