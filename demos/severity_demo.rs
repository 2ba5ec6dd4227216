//! Demonstrates severity-routed dispatch to console and file sinks.
//!
//! Warnings go to stdout, errors to an append-mode `out.txt`, and fatal
//! messages are duplicated to both. The final section shows the
//! stale-handle contract: a dropped observer silently stops receiving.
//!
//! Run with: cargo run --example severity_demo

use alert_relay::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let console = Sink::stdout();
    let file = Sink::append_file("out.txt")?;

    let warning = Arc::new(Observer::warning(console.clone()));
    let error = Arc::new(Observer::error(file.clone()));
    let fatal = Arc::new(Observer::fatal(file, console));

    let subject = Subject::builder()
        .with_warning(&warning)
        .with_error(&error)
        .with_fatal(&fatal)
        .build();

    subject.notify_warning("warning");
    subject.notify_error("error");
    subject.notify_fatal("fatalError");

    // Dropping an observer detaches it; later notifications for its
    // severity are discarded without error.
    drop(error);
    subject.notify_error("this error is never written");

    println!("---");
    println!("warning observer alive: {}", subject.observer_alive(Severity::Warning));
    println!("error observer alive:   {}", subject.observer_alive(Severity::Error));
    println!("fatal observer alive:   {}", subject.observer_alive(Severity::Fatal));
    println!("errors and fatals were appended to out.txt");

    Ok(())
}
