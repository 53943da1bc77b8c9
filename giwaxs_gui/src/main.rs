//! # GIWAXS Analysis GUI Application
//!
//! Main window of the GIWAXS analysis application: menu bar, toolbars,
//! dock area and the startup picker shown until a project is open.
//! Built with the Iced framework; the window behaviour itself lives in
//! `giwaxs_core::shell` and is driven from [`App::update`].

mod host;
mod theme;
mod ui;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use iced::widget::column;
use iced::{window, Element, Size, Subscription, Task, Theme};
use once_cell::sync::Lazy;

use giwaxs_core::assets::AssetDirs;
use giwaxs_core::commands::Command;
use giwaxs_core::config::AppConfig;
use giwaxs_core::dialogs::show_error;
use giwaxs_core::docks::DockLayout;
use giwaxs_core::project::InterpolationSettings;
use giwaxs_core::shell::{CloseDecision, Screen, Shell};
use giwaxs_core::validation::{validate_scientific_value, TextField};
use giwaxs_core::{FileManager, ProjectManager};

use host::IcedHost;
use theme::Appearance;

/// Root of the icons/ and css/ directories
static STATIC_ROOT: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var_os("GIWAXS_STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")))
});

const MINIMUM_SIZE: Size = Size::new(500.0, 500.0);
const STARTUP_SIZE: Size = Size::new(640.0, 520.0);

/// Frame interval while a field flash is animating
const FLASH_FRAME: Duration = Duration::from_millis(16);

/// Fields of the polar interpolation form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationField {
    RadialPoints,
    AngularPoints,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Menu, toolbar or startup picker action
    Command(Command),
    /// Live window mode, queried for a fullscreen toggle
    FullscreenModeQueried(window::Mode),
    ToggleMenu(usize),
    CloseMenus,
    /// "Exit" on the startup picker
    PickerExit,
    CloseRequested(window::Id),
    InterpolationChanged(InterpolationField, String),
    ApplyInterpolation,
    Tick(Instant),
}

pub struct App {
    shell: Shell<ProjectManager, DockLayout>,
    appearance: Appearance,
    open_menu: Option<usize>,
    radial_points: TextField,
    angular_points: TextField,
    status: String,
    now: Instant,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config_path = AppConfig::default_path();
        if config_path.is_none() {
            tracing::warn!("no config directory, settings will not be saved");
        }

        let fm = ProjectManager::new(config_path, whoami::username());
        let assets = AssetDirs::new(STATIC_ROOT.as_path());
        tracing::info!(static_root = %STATIC_ROOT.display(), "assets");

        let mut app = App {
            shell: Shell::new(fm, DockLayout::default(), assets),
            appearance: Appearance::default(),
            open_menu: None,
            radial_points: TextField::default(),
            angular_points: TextField::default(),
            status: "Ready".to_string(),
            now: Instant::now(),
        };
        app.sync_interpolation_fields();

        let mut host = IcedHost::new(&mut app.appearance);
        if let Err(e) = app.shell.apply_theme(None, &mut host) {
            tracing::error!(error = %e, "startup theme not applied");
        }
        let mut task = host.into_task();

        if app.shell.screen() == Screen::Main {
            task = task.chain(window::latest().and_then(|id| window::maximize(id, true)));
        }

        (app, task)
    }

    fn title(&self) -> String {
        self.shell.window_title()
    }

    fn theme(&self) -> Theme {
        self.appearance.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Command(Command::ToggleFullscreen) => {
                self.open_menu = None;
                // Judge by the live window state, not a remembered flag
                window::latest().and_then(|id| window::mode(id).map(Message::FullscreenModeQueried))
            }
            Message::Command(command) => {
                self.open_menu = None;
                let mut host = IcedHost::new(&mut self.appearance);
                if let Err(e) = self.shell.dispatch(command.clone(), &mut host) {
                    tracing::error!(error = %e, "command failed");
                }
                let task = host.into_task();
                self.status = self.status_after(&command);
                self.sync_interpolation_fields();
                task
            }
            Message::FullscreenModeQueried(mode) => {
                let mut host = IcedHost::with_mode(&mut self.appearance, mode);
                self.shell.toggle_fullscreen(&mut host);
                host.into_task()
            }
            Message::ToggleMenu(index) => {
                self.open_menu = if self.open_menu == Some(index) { None } else { Some(index) };
                Task::none()
            }
            Message::CloseMenus => {
                self.open_menu = None;
                Task::none()
            }
            Message::PickerExit => {
                let mut host = IcedHost::new(&mut self.appearance);
                self.shell.exit_requested(&mut host);
                host.into_task()
            }
            Message::CloseRequested(_id) => {
                let mut host = IcedHost::new(&mut self.appearance);
                if self.shell.screen() == Screen::StartupPicker {
                    self.shell.exit_requested(&mut host);
                } else if self.shell.request_close(&mut host) == CloseDecision::Cancel {
                    self.status = "Quit cancelled".to_string();
                }
                host.into_task()
            }
            Message::InterpolationChanged(field, value) => {
                match field {
                    InterpolationField::RadialPoints => self.radial_points.set_text(value),
                    InterpolationField::AngularPoints => self.angular_points.set_text(value),
                }
                Task::none()
            }
            Message::ApplyInterpolation => {
                self.apply_interpolation();
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        if self.shell.screen() != Screen::Main {
            return ui::init_window::view_init_window(self.shell.fm().recent_projects());
        }

        let menus = self.shell.menu_bar();

        let mut content = column![ui::menu_bar::view_menu_bar(&menus, self.open_menu)];
        if let Some(menu) = self.open_menu.and_then(|i| menus.get(i)) {
            content = content.push(ui::menu_bar::view_menu_dropdown(menu));
        }

        content
            .push(ui::toolbar::view_toolbar(self.shell.assets(), self.shell.fullscreen_icon()))
            .push(ui::dock_area::view_dock_area(self))
            .push(ui::status_bar::view_status_bar(
                self.shell.fm().project_dir(),
                self.shell.fm().project().map_or(0, |p| p.ex_situ.len()),
                &self.status,
            ))
            .padding(6)
            .spacing(4)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let close_requests = window::close_requests().map(Message::CloseRequested);

        // Judged by the last frame, so the final frame lands at or after the end
        if self.radial_points.is_flashing(self.now) || self.angular_points.is_flashing(self.now) {
            Subscription::batch([close_requests, iced::time::every(FLASH_FRAME).map(Message::Tick)])
        } else {
            close_requests
        }
    }

    /// Validate the polar form and store it in the project
    fn apply_interpolation(&mut self) {
        let positive = |v: &u32| *v > 0;
        // Validate both so that every bad field flashes
        let radial = validate_scientific_value::<u32>(&mut self.radial_points, false, &[&positive]);
        let angular = validate_scientific_value::<u32>(&mut self.angular_points, false, &[&positive]);
        self.now = Instant::now();

        let (Some(radial_points), Some(angular_points)) = (radial, angular) else {
            self.status = "Interpolation not applied: positive integers required".to_string();
            return;
        };

        let settings = InterpolationSettings { radial_points, angular_points };
        match self.shell.fm_mut().set_interpolation(settings) {
            Ok(()) => {
                tracing::info!(radial_points, angular_points, "interpolation settings stored");
                self.status = format!("Polar grid {} x {}", radial_points, angular_points);
            }
            Err(e) => {
                let mut host = IcedHost::new(&mut self.appearance);
                show_error(&mut host, &e.to_string(), e.dialog_title(), "");
            }
        }
    }

    /// Refill the polar form from the open project
    fn sync_interpolation_fields(&mut self) {
        let settings = self
            .shell
            .fm()
            .project()
            .map(|p| p.interpolation)
            .unwrap_or_default();
        self.radial_points.set_text(settings.radial_points.to_string());
        self.angular_points.set_text(settings.angular_points.to_string());
    }

    /// Status bar text after a command ran
    fn status_after(&self, command: &Command) -> String {
        let fm = self.shell.fm();
        match command {
            Command::NewProject | Command::OpenProject(_) => match fm.project_dir() {
                Some(dir) => format!("Project: {}", dir.display()),
                None => "No project open".to_string(),
            },
            Command::AddExSituFile => {
                let count = fm.project().map_or(0, |p| p.ex_situ.len());
                format!("{} ex situ file(s)", count)
            }
            Command::ToggleDock(dock) => {
                let state = if self.shell.docks().is_visible(*dock) { "shown" } else { "hidden" };
                format!("{} {}", dock.title(), state)
            }
            Command::ToggleFullscreen => "Full screen".to_string(),
            Command::ApplyTheme(name) => format!("Theme: {}", name),
        }
    }

    /// Current time as seen by the last frame tick
    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn shell(&self) -> &Shell<ProjectManager, DockLayout> {
        &self.shell
    }

    pub fn radial_points(&self) -> &TextField {
        &self.radial_points
    }

    pub fn angular_points(&self) -> &TextField {
        &self.angular_points
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: STARTUP_SIZE,
            position: window::Position::Centered,
            min_size: Some(MINIMUM_SIZE),
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .run()
}
