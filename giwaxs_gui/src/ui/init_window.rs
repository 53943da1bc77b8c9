//! Startup picker
//!
//! Shown instead of the main window while no project is open. Offers the
//! recent projects, a new project folder, or leaving the application.

use std::path::PathBuf;

use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use giwaxs_core::commands::{project_label, Command};
use giwaxs_core::shell::APP_TITLE;

use crate::Message;

/// Render the startup picker centered in the window
pub fn view_init_window(recent_projects: &[PathBuf]) -> Element<'static, Message> {
    let title = text(APP_TITLE).size(20);
    let description = text("Open a recent project or start a new one:").size(12);

    let mut recent: Column<'static, Message> = column![].spacing(4);
    for path in recent_projects {
        let label = column![
            text(project_label(path)).size(12),
            text(path.display().to_string()).size(9).color([0.5, 0.5, 0.5]),
        ]
        .spacing(2);

        recent = recent.push(
            button(label)
                .on_press(Message::Command(Command::OpenProject(path.clone())))
                .padding(Padding::from([6, 12]))
                .style(button::secondary)
                .width(Length::Fill),
        );
    }
    if recent_projects.is_empty() {
        recent = recent.push(text("(no recent projects)").size(11).color([0.6, 0.6, 0.6]));
    }

    let buttons = row![
        button(text("Exit").size(11))
            .on_press(Message::PickerExit)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        Space::new().width(Length::Fill),
        button(text("New project").size(11))
            .on_press(Message::Command(Command::NewProject))
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    let content = column![
        title,
        Space::new().height(12),
        description,
        Space::new().height(12),
        scrollable(recent).height(Length::Fixed(260.0)),
        Space::new().height(16),
        buttons,
    ]
    .width(Length::Fixed(400.0));

    let picker_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the picker in the window
    container(picker_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
