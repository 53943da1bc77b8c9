//! Dock Area (Center)
//!
//! Lays out the visible docks side by side:
//! - `file_widget` - ex-situ files of the open project
//! - `radial_profile`, `angular_profile` - profile plots (filled in by the analysis modules)
//! - `polar` - polar viewer with its interpolation grid form

use iced::widget::{button, column, container, mouse_area, row, scrollable, text, text_input, Column, Row, Space};
use iced::{Alignment, Element, Length, Padding, Theme};

use giwaxs_core::commands::Command;
use giwaxs_core::docks::DockId;
use giwaxs_core::validation::{TextField, ValidatedField};
use giwaxs_core::FileManager;

use crate::theme::to_color;
use crate::{App, InterpolationField, Message};

const PLACEHOLDER_TEXT: [f32; 3] = [0.5, 0.5, 0.5];

/// Render every visible dock
pub fn view_dock_area(app: &App) -> Element<'_, Message> {
    let docks = app.shell().docks();

    let panels: Row<'_, Message> = docks
        .visible_docks()
        .fold(row![].spacing(6), |area, dock| area.push(view_dock(app, dock)));

    let area: Element<'_, Message> = if docks.visible_docks().next().is_none() {
        container(text("All docks are hidden. Use the toolbar to show them.").size(12).color(PLACEHOLDER_TEXT))
            .center(Length::Fill)
            .into()
    } else {
        panels.height(Length::Fill).into()
    };

    // Clicking anywhere in the docks closes an open menu
    mouse_area(container(area).width(Length::Fill).height(Length::Fill))
        .on_press(Message::CloseMenus)
        .into()
}

fn view_dock(app: &App, dock: DockId) -> Element<'_, Message> {
    let body: Column<'_, Message> = match dock {
        DockId::FileWidget => view_file_widget(app),
        DockId::RadialProfile | DockId::AngularProfile => column![
            text("No image selected").size(11).color(PLACEHOLDER_TEXT)
        ],
        DockId::Polar => view_polar(app),
    };

    let header = row![
        text(dock.title()).size(12),
        Space::new().width(Length::Fill),
        button(text("×").size(11))
            .on_press(Message::Command(Command::ToggleDock(dock)))
            .padding(Padding::from([0, 6]))
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    container(column![header, scrollable(body.spacing(4).padding(4))].spacing(6))
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .padding(5)
        .style(container::bordered_box)
        .into()
}

fn view_file_widget(app: &App) -> Column<'_, Message> {
    let Some(project) = app.shell().fm().project() else {
        return column![text("No project open").size(11).color(PLACEHOLDER_TEXT)];
    };

    let mut files: Column<'_, Message> = column![text(format!("Ex situ ({})", project.ex_situ.len())).size(11)];
    for path in &project.ex_situ {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        files = files.push(text(name).size(10));
    }
    if project.ex_situ.is_empty() {
        files = files.push(text("(none) - Data > Ex situ measurements > Add file").size(10).color(PLACEHOLDER_TEXT));
    }
    files
}

fn view_polar(app: &App) -> Column<'_, Message> {
    let enabled = app.shell().fm().project_opened();

    let mut apply = button(text("Apply").size(11))
        .padding(Padding::from([4, 12]))
        .style(button::primary);
    if enabled {
        apply = apply.on_press(Message::ApplyInterpolation);
    }

    column![
        text("Interpolation grid").size(11),
        labeled_field(app, "Radial points:", app.radial_points(), InterpolationField::RadialPoints),
        labeled_field(app, "Angular points:", app.angular_points(), InterpolationField::AngularPoints),
        apply,
    ]
}

/// Text input whose border carries the field's flash tint
fn labeled_field<'a>(
    app: &App,
    label: &'a str,
    field: &'a TextField,
    which: InterpolationField,
) -> Element<'a, Message> {
    let tint = field.tint_at(app.now()).map(to_color);

    let input = text_input("", field.text())
        .on_input(move |value| Message::InterpolationChanged(which, value))
        .on_submit(Message::ApplyInterpolation)
        .size(11)
        .width(Length::Fixed(90.0))
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            if let Some(color) = tint {
                style.border.color = color;
                style.border.width = 2.0;
            }
            style
        });

    row![text(label).size(11).width(Length::Fixed(100.0)), input]
        .align_y(Alignment::Center)
        .into()
}
