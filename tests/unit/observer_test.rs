//! Tests for lot observers

use parking_garage::core::{LotEvent, LotObserver, RecordingObserver, TracingObserver};

#[test]
fn test_event_messages() {
    assert_eq!(LotEvent::Full.to_string(), "FULL");
    assert_eq!(LotEvent::Available.as_str(), "AVAILABLE");
}

#[test]
fn test_recording_observer_shares_log_between_clones() {
    let observer = RecordingObserver::new(4);
    let registered = observer.clone();

    registered.notify("North", LotEvent::Available);
    let events = observer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].lot, "North");
    assert_eq!(events[0].event, LotEvent::Available);
}

#[test]
fn test_recording_observer_zero_capacity() {
    let observer = RecordingObserver::new(0);
    observer.notify("North", LotEvent::Full);
    assert!(observer.events().is_empty());
}

#[test]
fn test_tracing_observer_does_not_panic() {
    parking_garage::util::init_tracing();
    TracingObserver.notify("North", LotEvent::Full);
}

#[test]
fn test_observer_receives_string_form_of_event() {
    let seen = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = std::sync::Arc::clone(&seen);
    let observer = move |lot: &str, event: LotEvent| sink.lock().push(format!("{lot}:{event}"));

    observer.notify("North", LotEvent::Full);
    observer.notify("North", LotEvent::Available);
    assert_eq!(*seen.lock(), vec!["North:FULL", "North:AVAILABLE"]);
}
