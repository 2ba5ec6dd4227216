//! Builder for wiring observers into a Subject.

use crate::core::{Observer, Subject};
use std::sync::{Arc, Weak};
use tracing::debug;

/// Builder for constructing a [`Subject`].
///
/// Each slot setter takes a shared observer handle and stores only a
/// downgraded (non-owning) reference; the caller keeps ownership. Slots
/// left unset stay empty, which dispatch treats the same as an expired
/// handle: a silent no-op.
///
/// # Examples
///
/// ```rust
/// use alert_relay::prelude::*;
/// use std::sync::Arc;
///
/// let (console, _buf) = Sink::memory();
/// let warning = Arc::new(Observer::warning(console));
///
/// let subject = Subject::builder().with_warning(&warning).build();
/// assert!(subject.observer_alive(Severity::Warning));
/// assert!(!subject.observer_alive(Severity::Error));
/// ```
#[derive(Debug)]
pub struct SubjectBuilder {
    warning: Weak<Observer>,
    error: Weak<Observer>,
    fatal: Weak<Observer>,
}

impl SubjectBuilder {
    /// Create a builder with all three slots empty.
    pub fn new() -> Self {
        Self {
            warning: Weak::new(),
            error: Weak::new(),
            fatal: Weak::new(),
        }
    }

    /// Register the observer for the warning slot.
    pub fn with_warning(mut self, observer: &Arc<Observer>) -> Self {
        debug!(role = %observer.role(), slot = "warning", "registering observer");
        self.warning = Arc::downgrade(observer);
        self
    }

    /// Register the observer for the error slot.
    pub fn with_error(mut self, observer: &Arc<Observer>) -> Self {
        debug!(role = %observer.role(), slot = "error", "registering observer");
        self.error = Arc::downgrade(observer);
        self
    }

    /// Register the observer for the fatal slot.
    pub fn with_fatal(mut self, observer: &Arc<Observer>) -> Self {
        debug!(role = %observer.role(), slot = "fatal", "registering observer");
        self.fatal = Arc::downgrade(observer);
        self
    }

    /// Build the subject.
    pub fn build(self) -> Subject {
        Subject::new(self.warning, self.error, self.fatal)
    }
}

impl Default for SubjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Subject {
    /// Create a new builder for constructing a subject.
    pub fn builder() -> SubjectBuilder {
        SubjectBuilder::new()
    }
}
