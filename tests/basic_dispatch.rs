//! Integration tests for the core dispatch contract.

use alert_relay::prelude::*;
use std::sync::Arc;

struct Wiring {
    subject: Subject,
    warning: Arc<Observer>,
    error: Arc<Observer>,
    fatal: Arc<Observer>,
    console: MemoryBuffer,
    file: MemoryBuffer,
}

/// The canonical wiring: warnings to a console stand-in, errors to a file
/// stand-in, fatal messages duplicated to both.
fn wire() -> Wiring {
    let (console_sink, console) = Sink::memory();
    let (file_sink, file) = Sink::memory();

    let warning = Arc::new(Observer::warning(console_sink.clone()));
    let error = Arc::new(Observer::error(file_sink.clone()));
    let fatal = Arc::new(Observer::fatal(file_sink, console_sink));

    let subject = Subject::builder()
        .with_warning(&warning)
        .with_error(&error)
        .with_fatal(&fatal)
        .build();

    Wiring {
        subject,
        warning,
        error,
        fatal,
        console,
        file,
    }
}

#[test]
fn warning_lands_on_its_sink_only() {
    let w = wire();

    w.subject.notify_warning("w1");

    assert_eq!(w.console.contents(), "w1\n");
    assert!(w.file.is_empty());
}

#[test]
fn error_lands_on_its_sink_only() {
    let w = wire();

    w.subject.notify_error("e1");

    assert_eq!(w.file.contents(), "e1\n");
    assert!(w.console.is_empty());
}

#[test]
fn fatal_lands_on_both_sinks_exactly_once() {
    let w = wire();

    w.subject.notify_fatal("f1");

    assert_eq!(w.console.contents(), "f1\n");
    assert_eq!(w.file.contents(), "f1\n");
}

#[test]
fn dropped_warning_observer_silences_warnings() {
    let w = wire();
    drop(w.warning);

    w.subject.notify_warning("w2");

    assert!(w.console.is_empty());
    assert!(w.file.is_empty());
}

#[test]
fn dropped_error_observer_silences_errors() {
    let w = wire();
    w.subject.notify_error("e1");
    drop(w.error);

    // The slot now holds a stale handle; this must be a silent no-op.
    w.subject.notify_error("e2");

    assert_eq!(w.file.contents(), "e1\n");
}

#[test]
fn dropped_fatal_observer_silences_fatals() {
    let w = wire();
    drop(w.fatal);

    w.subject.notify_fatal("f2");

    assert!(w.console.is_empty());
    assert!(w.file.is_empty());
}

#[test]
fn mismatched_handler_is_a_noop() {
    let (sink, buffer) = Sink::memory();
    let warning = Observer::warning(sink);

    // A warning observer inherits the no-op default for the other handlers.
    warning.on_error("ignored");
    warning.on_fatal_error("ignored");

    assert!(buffer.is_empty());
}

#[test]
fn full_scenario_per_sink_order() {
    let w = wire();

    w.subject.notify_warning("w1");
    w.subject.notify_error("e1");
    w.subject.notify_fatal("f1");

    assert_eq!(w.console.contents(), "w1\nf1\n");
    assert_eq!(w.file.contents(), "e1\nf1\n");
}

#[test]
fn notifications_are_order_independent() {
    let w = wire();

    w.subject.notify_fatal("f1");
    w.subject.notify_warning("w1");
    w.subject.notify_error("e1");

    assert_eq!(w.console.contents(), "f1\nw1\n");
    assert_eq!(w.file.contents(), "f1\ne1\n");
}

#[test]
fn message_text_is_not_decorated() {
    let w = wire();

    w.subject.notify_warning("");
    w.subject.notify_warning("  padded  ");

    // No severity prefixes, no timestamps: the bytes plus one terminator.
    assert_eq!(w.console.contents(), "\n  padded  \n");
}

#[test]
fn subject_outliving_all_observers_stays_inert() {
    let w = wire();
    drop(w.warning);
    drop(w.error);
    drop(w.fatal);

    w.subject.notify_warning("w");
    w.subject.notify_error("e");
    w.subject.notify_fatal("f");

    assert!(w.console.is_empty());
    assert!(w.file.is_empty());
    assert!(!w.subject.observer_alive(Severity::Warning));
    assert!(!w.subject.observer_alive(Severity::Error));
    assert!(!w.subject.observer_alive(Severity::Fatal));
}
