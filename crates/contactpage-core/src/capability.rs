//! Host capabilities the interaction layer depends on.
//!
//! Dialogs, page geometry and viewport observation are provided by whatever
//! renders the page. The desktop shell backs them with native dialogs and a
//! script bridge; tests substitute in-memory fakes.

use std::fmt;

use crate::reveal::ObserverOptions;

/// Kind of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Confirmation or informational message
    Info,
    /// Something the visitor has to correct
    Error,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Info => write!(f, "info"),
            Notice::Error => write!(f, "error"),
        }
    }
}

/// Shows a notification to the visitor.
///
/// Implementations may block until the visitor dismisses it.
pub trait Notifier {
    fn notify(&self, kind: Notice, message: &str);
}

/// Asks the visitor for a line of free text.
///
/// Returns `None` when the visitor cancels.
pub trait Prompter {
    fn prompt_text(&self, message: &str) -> Option<String>;
}

/// Read-only page geometry needed for header-compensated scrolling.
pub trait Layout {
    /// Document offset top of the element with this id, if it exists
    fn section_offset_top(&self, id: &str) -> Option<f64>;

    /// Rendered height of the fixed header
    fn header_height(&self) -> f64;
}

/// Registers elements for viewport intersection tracking.
///
/// Entries are delivered back to [`crate::reveal::RevealAnimator::apply`] in
/// batches, one batch per observer callback.
pub trait ViewportObserver {
    fn observe(&mut self, target: &str, options: &ObserverOptions);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, kind: Notice, message: &str) {
        (**self).notify(kind, message)
    }
}

impl<T: Prompter + ?Sized> Prompter for &T {
    fn prompt_text(&self, message: &str) -> Option<String> {
        (**self).prompt_text(message)
    }
}

impl<T: Layout + ?Sized> Layout for &T {
    fn section_offset_top(&self, id: &str) -> Option<f64> {
        (**self).section_offset_top(id)
    }

    fn header_height(&self) -> f64 {
        (**self).header_height()
    }
}
