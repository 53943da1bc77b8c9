//! # Error Types
//!
//! Structured error types for giwaxs_core. Every failure that can reach the
//! user ends up in the shell's error dialog, so each variant carries enough
//! context to print a meaningful message on its own.
//!
//! ## Example
//!
//! ```rust
//! use giwaxs_core::errors::{ShellError, ShellResult};
//! use std::path::Path;
//!
//! fn require_dir(path: &Path) -> ShellResult<()> {
//!     if !path.is_dir() {
//!         return Err(ShellError::not_a_directory(path.display().to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for giwaxs_core operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Structured error type for shell and file manager operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ShellError {
    /// An operation needs an open project but none is open
    #[error("No project is open")]
    NoProjectOpen,

    /// A project path does not point at a directory
    #[error("Not a directory: '{path}'")]
    NotADirectory { path: String },

    /// An image file has an extension the application cannot read
    #[error("Unsupported file '{path}': expected one of {expected}")]
    UnsupportedFile { path: String, expected: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Project is locked by another user/process
    #[error("Project locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// A theme was applied with no running application to apply it to
    #[error("No running application found")]
    NoRunningApplication,
}

impl ShellError {
    /// Create a NotADirectory error
    pub fn not_a_directory(path: impl Into<String>) -> Self {
        ShellError::NotADirectory { path: path.into() }
    }

    /// Create an UnsupportedFile error
    pub fn unsupported_file(path: impl Into<String>, expected: impl Into<String>) -> Self {
        ShellError::UnsupportedFile {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        ShellError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        ShellError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        ShellError::SerializationError { reason: reason.into() }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ShellError::FileLocked { .. })
    }

    /// Title used when this error is shown in the error dialog
    pub fn dialog_title(&self) -> &'static str {
        match self {
            ShellError::NoProjectOpen | ShellError::NotADirectory { .. } => "Project error",
            ShellError::UnsupportedFile { .. } => "Unsupported file",
            ShellError::FileError { .. } | ShellError::SerializationError { .. } => "File error",
            ShellError::FileLocked { .. } => "Project locked",
            ShellError::VersionMismatch { .. } => "Incompatible project",
            ShellError::NoRunningApplication => "Application error",
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShellError::NoProjectOpen => "NO_PROJECT_OPEN",
            ShellError::NotADirectory { .. } => "NOT_A_DIRECTORY",
            ShellError::UnsupportedFile { .. } => "UNSUPPORTED_FILE",
            ShellError::FileError { .. } => "FILE_ERROR",
            ShellError::FileLocked { .. } => "FILE_LOCKED",
            ShellError::SerializationError { .. } => "SERIALIZATION_ERROR",
            ShellError::VersionMismatch { .. } => "VERSION_MISMATCH",
            ShellError::NoRunningApplication => "NO_RUNNING_APPLICATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ShellError::unsupported_file("/data/frame.png", ".tiff, .edf, .edf.gz");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("UnsupportedFile"));
        let roundtrip: ShellError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ShellError::NoProjectOpen.error_code(), "NO_PROJECT_OPEN");
        assert_eq!(ShellError::not_a_directory("x").error_code(), "NOT_A_DIRECTORY");
        assert_eq!(ShellError::NoRunningApplication.error_code(), "NO_RUNNING_APPLICATION");
    }

    #[test]
    fn test_only_lock_errors_are_recoverable() {
        assert!(ShellError::file_locked("p", "someone", "now").is_recoverable());
        assert!(!ShellError::file_error("read", "p", "denied").is_recoverable());
    }

    #[test]
    fn test_display_includes_context() {
        let error = ShellError::file_error("write", "/tmp/project.json", "disk full");
        assert_eq!(error.to_string(), "File error: write on '/tmp/project.json' - disk full");
    }
}
