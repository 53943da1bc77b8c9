//! Toolbar component
//!
//! Left: the "Docks" toolbar with one show/hide button per dock.
//! Right: the "General" toolbar with the fullscreen action, whose icon
//! always shows what a click will do.

use iced::widget::{button, row, svg, text, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use giwaxs_core::assets::AssetDirs;
use giwaxs_core::commands::{docks_toolbar, general_toolbar, FullscreenIcon, ToolAction};

use crate::Message;

const ICON_SIZE: f32 = 16.0;

/// Render both toolbars
pub fn view_toolbar(assets: &AssetDirs, fullscreen_icon: FullscreenIcon) -> Element<'static, Message> {
    let docks = view_actions(assets, docks_toolbar());
    let general = view_actions(assets, general_toolbar(fullscreen_icon));

    row![docks, Space::new().width(Length::Fill), general]
        .padding(Padding::from([4, 0]))
        .align_y(Alignment::Center)
        .into()
}

fn view_actions(assets: &AssetDirs, actions: Vec<ToolAction>) -> Row<'static, Message> {
    actions.into_iter().fold(row![].spacing(4), |toolbar, action| {
        // Missing icon files render as an empty square
        let icon = svg(svg::Handle::from_path(assets.resolve_icon(action.icon)))
            .width(ICON_SIZE)
            .height(ICON_SIZE);

        toolbar.push(
            button(
                row![icon, text(action.label).size(11)]
                    .spacing(4)
                    .align_y(Alignment::Center),
            )
            .on_press(Message::Command(action.command))
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        )
    })
}
