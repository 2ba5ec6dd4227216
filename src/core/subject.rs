//! The subject: severity-routed dispatch through weak observer handles.

use crate::core::{Observer, Severity};
use std::sync::Weak;
use tracing::trace;

/// Dispatcher holding one non-owning observer handle per severity class.
///
/// A `Subject` stores [`Weak`] handles, so registering an observer never
/// extends its lifetime. When a notification arrives, the matching handle is
/// resolved: if the observer is still alive it renders the message; if it
/// has been dropped the notification is silently discarded. That silent
/// drop is the designed detach mechanism, not a failure.
///
/// The three slots are fixed at construction and each is independently
/// optional; an empty handle behaves exactly like an expired one.
///
/// # Examples
///
/// ```rust
/// use alert_relay::prelude::*;
/// use std::sync::Arc;
///
/// let (console, buffer) = Sink::memory();
/// let warning = Arc::new(Observer::warning(console));
///
/// let subject = Subject::builder().with_warning(&warning).build();
///
/// subject.notify_warning("cache nearly full");
/// assert_eq!(buffer.lines(), ["cache nearly full"]);
///
/// drop(warning);
/// subject.notify_warning("dropped silently");
/// assert_eq!(buffer.lines(), ["cache nearly full"]);
/// ```
#[derive(Debug, Clone)]
pub struct Subject {
    warning: Weak<Observer>,
    error: Weak<Observer>,
    fatal: Weak<Observer>,
}

impl Subject {
    /// Construct a subject from three weak observer handles.
    ///
    /// Pass [`Weak::new()`] for a slot that should stay empty. Most callers
    /// will find [`Subject::builder`] more convenient.
    pub fn new(warning: Weak<Observer>, error: Weak<Observer>, fatal: Weak<Observer>) -> Self {
        Self {
            warning,
            error,
            fatal,
        }
    }

    /// Notify the warning observer, if it is still alive.
    pub fn notify_warning(&self, message: &str) {
        self.dispatch(Severity::Warning, message);
    }

    /// Notify the error observer, if it is still alive.
    pub fn notify_error(&self, message: &str) {
        self.dispatch(Severity::Error, message);
    }

    /// Notify the fatal observer, if it is still alive.
    pub fn notify_fatal(&self, message: &str) {
        self.dispatch(Severity::Fatal, message);
    }

    /// Whether the slot for `severity` currently resolves to a live
    /// observer.
    pub fn observer_alive(&self, severity: Severity) -> bool {
        self.slot(severity).strong_count() > 0
    }

    fn slot(&self, severity: Severity) -> &Weak<Observer> {
        match severity {
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
            Severity::Fatal => &self.fatal,
        }
    }

    fn dispatch(&self, severity: Severity, message: &str) {
        match self.slot(severity).upgrade() {
            Some(observer) => {
                trace!(severity = %severity, "dispatching notification");
                observer.notify(severity, message);
            }
            None => {
                trace!(severity = %severity, "observer gone, notification dropped");
            }
        }
    }
}
