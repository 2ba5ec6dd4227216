//! The shared sink handle and its line-rendering primitive.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

/// A clonable handle to a writable output stream.
///
/// Cloning a `Sink` yields another handle to the *same* underlying stream,
/// so several observers may share one stream (the fatal role does this with
/// both of its siblings' sinks). Writers are serialized by an internal lock,
/// which guarantees that two rendered lines never interleave on one stream.
///
/// The handle never opens, closes, or otherwise manages the stream's
/// lifecycle beyond what dropping the last clone implies. Which stream to
/// use, and in which mode to open it, is the caller's decision.
///
/// # Examples
///
/// ```rust
/// use alert_relay::sinks::Sink;
///
/// let console = Sink::stdout();
/// let (capture, buffer) = Sink::memory();
/// ```
#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    label: Arc<str>,
}

impl Sink {
    /// Wrap a boxed writer under a label used in diagnostics.
    pub(crate) fn new(label: impl Into<Arc<str>>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
            label: label.into(),
        }
    }

    /// A sink writing to the process standard output.
    pub fn stdout() -> Self {
        Self::new("stdout", Box::new(std::io::stdout()))
    }

    /// A sink writing to the process standard error.
    pub fn stderr() -> Self {
        Self::new("stderr", Box::new(std::io::stderr()))
    }

    /// Wrap an arbitrary writer as a sink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alert_relay::sinks::Sink;
    ///
    /// let sink = Sink::from_writer(std::io::sink());
    /// ```
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::new("writer", Box::new(writer))
    }

    /// Human-readable identifier for this sink (used in diagnostics).
    ///
    /// `"stdout"`/`"stderr"` for the standard streams, the path for file
    /// sinks, `"memory"` for capture sinks.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Render one message to the stream: the message bytes, one `\n`, then
    /// a flush.
    ///
    /// This is the single authoritative rendering primitive; every observer
    /// role funnels through it, once per sink the role holds. Write failures
    /// are not surfaced to the dispatch caller (delivery is best-effort)
    /// but are recorded at warn level.
    pub(crate) fn write_line(&self, message: &str) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = write_terminated(writer.as_mut(), message) {
            warn!(sink = %self.label, error = %err, "sink write failed, notification lost");
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("label", &self.label).finish()
    }
}

fn write_terminated(writer: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writer.write_all(message.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}
