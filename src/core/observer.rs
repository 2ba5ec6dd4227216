//! Observers: severity-specific rendering onto output sinks.

use crate::sinks::Sink;
use std::fmt;

/// Severity class of a notification.
///
/// Determines which observer slot a [`Subject`](crate::core::Subject)
/// forwards the message to and, through the observer's role, which sink(s)
/// render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Recoverable condition worth surfacing.
    Warning,
    /// Operation failed.
    Error,
    /// Unrecoverable failure; duplicated to both fatal sinks.
    Fatal,
}

impl Severity {
    /// Lowercase name, as used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification observer, tagged by the severity role it handles.
///
/// Each variant carries exactly the sink handle(s) its role writes to. An
/// observer renders a message only for its own severity; the handlers for
/// the other two severities are no-ops, so dispatching a mismatched
/// severity to an observer is harmless.
///
/// Observers never own the underlying streams: sinks are shared handles,
/// and keeping the stream usable for the observer's lifetime is the
/// caller's responsibility.
///
/// # Examples
///
/// ```rust
/// use alert_relay::prelude::*;
///
/// let (console, buffer) = Sink::memory();
/// let observer = Observer::warning(console);
///
/// observer.on_warning("low disk space");
/// observer.on_error("ignored, wrong role");
///
/// assert_eq!(buffer.lines(), ["low disk space"]);
/// ```
#[derive(Debug)]
pub enum Observer {
    /// Renders warning messages to one sink.
    Warning {
        /// Destination for warning messages.
        sink: Sink,
    },
    /// Renders error messages to one sink.
    Error {
        /// Destination for error messages.
        sink: Sink,
    },
    /// Renders fatal messages to two sinks, primary first.
    Fatal {
        /// First destination for fatal messages.
        primary: Sink,
        /// Second destination; receives a duplicate of every fatal message.
        mirror: Sink,
    },
}

impl Observer {
    /// An observer handling [`Severity::Warning`], writing to `sink`.
    pub fn warning(sink: Sink) -> Self {
        Self::Warning { sink }
    }

    /// An observer handling [`Severity::Error`], writing to `sink`.
    pub fn error(sink: Sink) -> Self {
        Self::Error { sink }
    }

    /// An observer handling [`Severity::Fatal`], duplicating every message
    /// to `primary` then `mirror`.
    ///
    /// Only per-sink ordering is guaranteed; callers must not rely on the
    /// relative order of the two writes.
    pub fn fatal(primary: Sink, mirror: Sink) -> Self {
        Self::Fatal { primary, mirror }
    }

    /// The severity class this observer renders.
    pub fn role(&self) -> Severity {
        match self {
            Self::Warning { .. } => Severity::Warning,
            Self::Error { .. } => Severity::Error,
            Self::Fatal { .. } => Severity::Fatal,
        }
    }

    /// Handle a warning message. No-op unless this is a warning observer.
    pub fn on_warning(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }

    /// Handle an error message. No-op unless this is an error observer.
    pub fn on_error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }

    /// Handle a fatal message. No-op unless this is a fatal observer.
    pub fn on_fatal_error(&self, message: &str) {
        self.notify(Severity::Fatal, message);
    }

    /// Render `message` if `severity` matches this observer's role.
    ///
    /// The fatal fan-out is composed from the shared line-writing primitive,
    /// invoked once per sink.
    pub fn notify(&self, severity: Severity, message: &str) {
        match (self, severity) {
            (Self::Warning { sink }, Severity::Warning) => sink.write_line(message),
            (Self::Error { sink }, Severity::Error) => sink.write_line(message),
            (Self::Fatal { primary, mirror }, Severity::Fatal) => {
                primary.write_line(message);
                mirror.write_line(message);
            }
            // Mismatched role: the handler defaults to a no-op.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_match_constructors() {
        let (sink, _buf) = Sink::memory();
        assert_eq!(Observer::warning(sink.clone()).role(), Severity::Warning);
        assert_eq!(Observer::error(sink.clone()).role(), Severity::Error);
        assert_eq!(Observer::fatal(sink.clone(), sink).role(), Severity::Fatal);
    }

    #[test]
    fn warning_observer_renders_warnings_only() {
        let (sink, buffer) = Sink::memory();
        let observer = Observer::warning(sink);

        observer.on_warning("w");
        observer.on_error("e");
        observer.on_fatal_error("f");

        assert_eq!(buffer.lines(), ["w"]);
    }

    #[test]
    fn error_observer_renders_errors_only() {
        let (sink, buffer) = Sink::memory();
        let observer = Observer::error(sink);

        observer.on_warning("w");
        observer.on_error("e");
        observer.on_fatal_error("f");

        assert_eq!(buffer.lines(), ["e"]);
    }

    #[test]
    fn fatal_observer_duplicates_to_both_sinks() {
        let (primary, primary_buf) = Sink::memory();
        let (mirror, mirror_buf) = Sink::memory();
        let observer = Observer::fatal(primary, mirror);

        observer.on_fatal_error("f");

        assert_eq!(primary_buf.lines(), ["f"]);
        assert_eq!(mirror_buf.lines(), ["f"]);
    }

    #[test]
    fn fatal_observer_ignores_lesser_severities() {
        let (primary, primary_buf) = Sink::memory();
        let (mirror, mirror_buf) = Sink::memory();
        let observer = Observer::fatal(primary, mirror);

        observer.on_warning("w");
        observer.on_error("e");

        assert!(primary_buf.is_empty());
        assert!(mirror_buf.is_empty());
    }

    #[test]
    fn severity_display_names() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Fatal.to_string(), "fatal");
    }
}
