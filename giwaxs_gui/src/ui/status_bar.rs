//! Status Bar (Bottom)
//!
//! Displays:
//! - Open project directory
//! - Number of ex-situ files in the project
//! - Status messages

use std::path::Path;

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    project_dir: Option<&Path>,
    ex_situ_count: usize,
    status: &'a str,
) -> Element<'a, Message> {
    let project_info = match project_dir {
        Some(dir) => dir.display().to_string(),
        None => "No project".to_string(),
    };

    let files_info = match ex_situ_count {
        0 => String::new(),
        1 => "  [1 ex situ file]".to_string(),
        n => format!("  [{} ex situ files]", n),
    };

    row![
        text(project_info).size(10),
        text(files_info).size(10).color([0.4, 0.4, 0.6]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
