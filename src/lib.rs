//! # alert-relay
//!
//! Severity-routed notification dispatch with non-owning observer handles.
//!
//! ## Overview
//!
//! `alert-relay` provides a small, synchronous dispatch core:
//! - A [`Subject`](core::Subject) holds one *weak* observer handle per
//!   severity class ([`Warning`](core::Severity::Warning),
//!   [`Error`](core::Severity::Error), [`Fatal`](core::Severity::Fatal))
//! - An [`Observer`](core::Observer) renders each message as one line on the
//!   output [`Sink`](sinks::Sink)(s) it was constructed with
//! - Dropping an observer silently detaches it: notifying through a stale
//!   handle is a designed no-op, never an error
//!
//! ## Quick Start
//!
//! ```rust
//! use alert_relay::prelude::*;
//! use std::sync::Arc;
//!
//! let (console, console_buf) = Sink::memory();
//! let (file, file_buf) = Sink::memory();
//!
//! let warning = Arc::new(Observer::warning(console.clone()));
//! let error = Arc::new(Observer::error(file.clone()));
//! let fatal = Arc::new(Observer::fatal(file, console));
//!
//! let subject = Subject::builder()
//!     .with_warning(&warning)
//!     .with_error(&error)
//!     .with_fatal(&fatal)
//!     .build();
//!
//! subject.notify_warning("disk almost full");
//! subject.notify_fatal("disk full");
//!
//! assert_eq!(console_buf.lines(), ["disk almost full", "disk full"]);
//! assert_eq!(file_buf.lines(), ["disk full"]);
//!
//! // Dropping an observer turns its notifications into silent no-ops.
//! drop(error);
//! subject.notify_error("unreachable");
//! assert_eq!(file_buf.lines(), ["disk full"]);
//! ```
//!
//! ## Contract
//!
//! - **Non-owning dispatch**: the subject never extends observer lifetime
//! - **At-most-once, best-effort**: no retry, no backpressure, no error on a
//!   dropped observer or a failed write
//! - **One line per message**: the message bytes followed by exactly one
//!   `\n`; no timestamps or severity prefixes are added
//! - **One observer per severity**: slots are fixed at construction

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod sinks;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{Observer, Severity, Subject, SubjectBuilder};
    pub use crate::error::{RelayError, Result};
    pub use crate::sinks::{MemoryBuffer, Sink};
}
