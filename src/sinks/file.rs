//! File-backed sink construction.

use super::Sink;
use crate::error::Result;
use std::fs::OpenOptions;
use std::path::Path;

impl Sink {
    /// Open a file in append mode (creating it if absent) and wrap it as a
    /// sink.
    ///
    /// This is the only fallible sink constructor. The path and the
    /// append-mode choice are caller configuration; the dispatch core never
    /// decides where output goes.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Io`](crate::error::RelayError::Io) if the file
    /// cannot be opened or created.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use alert_relay::prelude::*;
    ///
    /// # fn example() -> Result<()> {
    /// let file = Sink::append_file("out.txt")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn append_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(path.display().to_string(), Box::new(file)))
    }
}
