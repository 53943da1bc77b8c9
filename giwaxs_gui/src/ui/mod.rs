//! UI module for the GIWAXS GUI
//!
//! # Panel Structure
//! - `menu_bar` - File / Data / Preferences menus and their dropdowns
//! - `toolbar` - Docks toolbar (show/hide panels) and the fullscreen action
//! - `dock_area` - The dock panels: file manager, profiles, polar viewer
//! - `status_bar` - Bottom status messages
//! - `init_window` - Startup picker shown while no project is open

pub mod dock_area;
pub mod init_window;
pub mod menu_bar;
pub mod status_bar;
pub mod toolbar;
