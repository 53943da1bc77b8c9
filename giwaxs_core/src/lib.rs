//! # giwaxs_core - GIWAXS Analysis Application Shell
//!
//! `giwaxs_core` holds everything the GIWAXS desktop shell does that does not
//! depend on a particular GUI toolkit: asset lookup, stylesheet parsing,
//! numeric field validation, the project/file manager, and the shell state
//! machine that routes menu and toolbar commands.
//!
//! ## Design Philosophy
//!
//! - **Toolkit-free**: The GUI crate implements small traits (dialogs, window
//!   control, style target) and the shell drives them
//! - **Declarative menus**: Menus and toolbars are plain data built from [`commands`]
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use giwaxs_core::validation::{validate_scientific_value, TextField};
//!
//! let mut field = TextField::new("0,5");
//! let positive = |v: &f64| *v > 0.0;
//! let value = validate_scientific_value::<f64>(&mut field, false, &[&positive]);
//! assert_eq!(value, Some(0.5));
//! ```
//!
//! ## Modules
//!
//! - [`shell`] - Main window state machine and user operations
//! - [`file_manager`] - Project/file manager trait and its implementation
//! - [`commands`] - Menu bar and toolbar descriptions
//! - [`docks`] - Dock area model
//! - [`assets`] - Icon and stylesheet lookup
//! - [`stylesheet`] - Stylesheet text parsing
//! - [`validation`] - Numeric input validation
//! - [`flash`] - Color-flash feedback animation
//! - [`dialogs`] - Modal dialog seam
//! - [`config`] - Persisted application configuration
//! - [`project`] - Project file contents
//! - [`file_io`] - File operations with atomic saves and locking
//! - [`errors`] - Structured error types

pub mod assets;
pub mod commands;
pub mod config;
pub mod dialogs;
pub mod docks;
pub mod errors;
pub mod file_io;
pub mod file_manager;
pub mod flash;
pub mod project;
pub mod shell;
pub mod stylesheet;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use errors::{ShellError, ShellResult};
pub use file_manager::{FileManager, ProjectManager};
pub use shell::Shell;
