//! Tests for utility functions

use std::time::Duration;

use parking_garage::util::{now_ms, Clock, ManualClock, SystemClock};

#[test]
fn test_now_ms_is_monotonic_enough() {
    let a = now_ms();
    let b = SystemClock.now_ms();
    assert!(b >= a);
}

#[test]
fn test_manual_clock_advance() {
    let clock = ManualClock::new(500);
    clock.advance(Duration::from_millis(250));
    assert_eq!(clock.now_ms(), 750);
}

#[test]
fn test_init_tracing_is_idempotent() {
    parking_garage::util::init_tracing();
    parking_garage::util::init_tracing();
}

#[test]
fn test_default_filter_parses() {
    assert!(tracing_subscriber::EnvFilter::try_new(parking_garage::util::DEFAULT_FILTER).is_ok());
    assert!(parking_garage::util::DEFAULT_FILTER.contains("parking_garage=info"));
}
