//! Walkthrough of the non-owning handle contract, using capture sinks.
//!
//! This demo shows how to:
//! - Register observers without extending their lifetime
//! - Observe the silent no-op once an observer is dropped
//! - Inspect liveness through the subject
//!
//! Run with: cargo run --example stale_handles

use alert_relay::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Stale Handle Example ===\n");

    let (sink, buffer) = Sink::memory();
    let warning = Arc::new(Observer::warning(sink));

    let subject = Subject::builder().with_warning(&warning).build();

    println!("--- While the observer is alive ---");
    subject.notify_warning("first warning");
    subject.notify_warning("second warning");
    println!("captured: {:?}", buffer.lines());
    println!("alive: {}\n", subject.observer_alive(Severity::Warning));

    println!("--- After dropping the observer ---");
    drop(warning);
    subject.notify_warning("nobody is listening");
    println!("captured: {:?}", buffer.lines());
    println!("alive: {}", subject.observer_alive(Severity::Warning));
    println!("\nThe third notification was dropped silently: no panic, no error.");
}
