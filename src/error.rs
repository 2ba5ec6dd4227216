//! Error types for alert-relay.

/// Result type alias for alert-relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Errors that can occur when constructing notification sinks.
///
/// The taxonomy is deliberately small: only sink construction can fail.
/// Dispatch through a [`Subject`](crate::core::Subject) never returns an
/// error: a stale observer handle is a silent no-op, and sink write
/// failures are swallowed (delivery is best-effort, at-most-once).
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// IO error while opening or creating a sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
