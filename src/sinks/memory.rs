//! In-memory capture sink, for tests and demos.

use super::Sink;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Read side of an in-memory capture sink.
///
/// Created together with its [`Sink`] by [`Sink::memory`]. The buffer
/// accumulates everything written through any clone of the sink and can be
/// inspected at any point.
///
/// # Examples
///
/// ```rust
/// use alert_relay::sinks::Sink;
///
/// let (sink, buffer) = Sink::memory();
/// assert!(buffer.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    /// Everything written so far, as text.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// The captured text split into lines (without terminators).
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

/// Write side: appends into the shared buffer.
struct BufferWriter {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Sink {
    /// An in-memory sink plus the [`MemoryBuffer`] to inspect it with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alert_relay::sinks::Sink;
    ///
    /// let (sink, buffer) = Sink::memory();
    /// # let _ = (sink, buffer);
    /// ```
    pub fn memory() -> (Sink, MemoryBuffer) {
        let bytes = Arc::new(Mutex::new(Vec::new()));
        let sink = Sink::new(
            "memory",
            Box::new(BufferWriter {
                bytes: Arc::clone(&bytes),
            }),
        );
        (sink, MemoryBuffer { bytes })
    }
}
