//! Native message dialogs.
//!
//! Notifications block the UI until dismissed, like a browser `alert`.
//! There is no native text-input dialog, so prompting is done in-page by
//! [`crate::components::SearchPrompt`].

use contactpage_core::{Notice, Notifier};
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::content::SITE_NAME;

/// Notifier backed by blocking native message boxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    fn level(kind: Notice) -> MessageLevel {
        match kind {
            Notice::Info => MessageLevel::Info,
            Notice::Error => MessageLevel::Warning,
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, kind: Notice, message: &str) {
        tracing::debug!(%kind, "Showing notification");
        MessageDialog::new()
            .set_level(Self::level(kind))
            .set_title(SITE_NAME)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
