//! Output sinks for rendered notifications.
//!
//! A [`Sink`] is a clonable, shared handle to a writable byte stream. The
//! dispatch core renders every notification through a single line-writing
//! primitive; which stream that line lands on is decided entirely by the
//! sink handles the caller constructed the observers with.

mod file;
mod memory;
mod sink;

pub use memory::MemoryBuffer;
pub use sink::Sink;
