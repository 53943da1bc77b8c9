//! Iced and rfd implementations of the shell's host traits.
//!
//! Window operations cannot run synchronously inside `update`, so the host
//! collects them as tasks that `update` returns. Dialogs are native rfd
//! dialogs and block the event loop until answered.

use std::path::PathBuf;

use iced::{window, Task};

use giwaxs_core::dialogs::{Dialogs, ErrorDialog, FileFilter};
use giwaxs_core::shell::{ShellHost, StyleTarget, WindowControl};

use crate::theme::Appearance;
use crate::Message;

/// Host for one shell operation
pub struct IcedHost<'a> {
    appearance: &'a mut Appearance,
    /// Window mode queried right before the operation, if it needed one
    mode: Option<window::Mode>,
    tasks: Vec<Task<Message>>,
}

impl<'a> IcedHost<'a> {
    pub fn new(appearance: &'a mut Appearance) -> Self {
        IcedHost {
            appearance,
            mode: None,
            tasks: Vec::new(),
        }
    }

    /// Host that knows the live window mode
    pub fn with_mode(appearance: &'a mut Appearance, mode: window::Mode) -> Self {
        IcedHost {
            mode: Some(mode),
            ..IcedHost::new(appearance)
        }
    }

    /// Window tasks requested during the operation
    pub fn into_task(self) -> Task<Message> {
        Task::batch(self.tasks)
    }
}

impl Dialogs for IcedHost<'_> {
    fn pick_folder(&mut self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new().set_title(title).pick_folder()
    }

    fn pick_file(&mut self, title: &str, filter: &FileFilter) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter(filter.description, filter.extensions().as_slice())
            .pick_file()
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(answer, rfd::MessageDialogResult::Yes)
    }

    fn show_error_dialog(&mut self, dialog: &ErrorDialog) {
        let description = if dialog.detail.is_empty() {
            dialog.message.clone()
        } else {
            format!("{}\n\n{}", dialog.message, dialog.detail)
        };

        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(&dialog.title)
            .set_description(description)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

impl WindowControl for IcedHost<'_> {
    fn is_fullscreen(&self) -> bool {
        self.mode == Some(window::Mode::Fullscreen)
    }

    fn enter_fullscreen(&mut self) {
        self.tasks.push(
            window::latest().and_then(|id| window::set_mode(id, window::Mode::Fullscreen)),
        );
    }

    fn show_maximized(&mut self) {
        self.tasks.push(window::latest().and_then(|id| {
            window::set_mode::<Message>(id, window::Mode::Windowed).chain(window::maximize(id, true))
        }));
    }

    fn show_main_window(&mut self) {
        self.tasks
            .push(window::latest().and_then(|id| window::maximize(id, true)));
    }

    fn close_startup_picker(&mut self) {
        // The picker is a view of the same window; leaving the Screen is enough
        tracing::debug!("startup picker dismissed");
    }

    fn close_all_windows(&mut self) {
        self.tasks.push(iced::exit());
    }
}

impl StyleTarget for IcedHost<'_> {
    fn set_stylesheet(&mut self, stylesheet: &str) {
        self.appearance.set_stylesheet(stylesheet);
    }

    fn set_builtin_style(&mut self, name: &str) -> bool {
        self.appearance.set_builtin(name)
    }
}

impl ShellHost for IcedHost<'_> {
    fn dialogs(&mut self) -> &mut dyn Dialogs {
        self
    }

    fn window(&mut self) -> &mut dyn WindowControl {
        self
    }

    fn application(&mut self) -> Option<&mut dyn StyleTarget> {
        Some(self)
    }
}
