//! Menu bar component
//!
//! Renders the declarative menus built by `giwaxs_core::commands`. Only one
//! dropdown is open at a time; submenus are shown inline as labelled groups.

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use giwaxs_core::commands::{Menu, MenuEntry};

use crate::Message;

const DISABLED_TEXT: [f32; 3] = [0.5, 0.5, 0.5];

/// Render the row of menu titles
pub fn view_menu_bar(menus: &[Menu], open_menu: Option<usize>) -> Element<'static, Message> {
    let titles = menus.iter().enumerate().fold(row![].spacing(2), |bar, (index, menu)| {
        let is_open = open_menu == Some(index);
        bar.push(
            button(text(menu.title).size(12))
                .on_press(Message::ToggleMenu(index))
                .padding(Padding::from([3, 10]))
                .style(if is_open { button::primary } else { button::text }),
        )
    });

    row![titles, Space::new().width(Length::Fill)]
        .align_y(Alignment::Center)
        .into()
}

/// Render the dropdown of an open menu
pub fn view_menu_dropdown(menu: &Menu) -> Element<'static, Message> {
    let entries = menu
        .entries
        .iter()
        .fold(column![].spacing(2), |col, entry| col.push(view_entry(entry, 0)));

    container(entries.width(Length::Fixed(220.0)))
        .padding(4)
        .style(container::bordered_box)
        .into()
}

fn view_entry(entry: &MenuEntry, depth: u16) -> Element<'static, Message> {
    let indent = f32::from(depth) * 12.0;

    match entry {
        MenuEntry::Action { label, command } => {
            let label = text(label.clone()).size(11);
            let entry_button = match command {
                Some(command) => button(label)
                    .on_press(Message::Command(command.clone()))
                    .style(button::secondary),
                // No on_press for unavailable actions
                None => button(label.color(DISABLED_TEXT)).style(button::secondary),
            };

            row![
                Space::new().width(indent),
                entry_button.padding(Padding::from([4, 12])).width(Length::Fill),
            ]
            .into()
        }
        MenuEntry::Submenu { label, entries } => {
            let header = row![
                Space::new().width(indent),
                text(format!("{} ▸", label)).size(10).color(DISABLED_TEXT),
            ]
            .padding(Padding::from([4, 4]));

            let mut group: Column<'static, Message> = column![header].spacing(2);
            if entries.is_empty() {
                group = group.push(row![
                    Space::new().width(indent + 12.0),
                    text("(none)").size(10).color(DISABLED_TEXT),
                ]);
            }
            for child in entries {
                group = group.push(view_entry(child, depth + 1));
            }
            group.into()
        }
    }
}
