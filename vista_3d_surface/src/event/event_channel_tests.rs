/// Tests for EventChannel

use super::*;
use std::sync::{Arc, Mutex};

// ============================================================================
// Tests: Registration
// ============================================================================

#[test]
fn test_new_channel_has_no_listeners() {
    let channel = EventChannel::new();
    assert_eq!(channel.listener_count("resize"), 0);
}

#[test]
fn test_on_registers_listener() {
    let channel = EventChannel::new();
    channel.on("resize", Box::new(|_| {}));
    assert_eq!(channel.listener_count("resize"), 1);
}

#[test]
fn test_listeners_are_per_event_name() {
    let channel = EventChannel::new();
    channel.on("resize", Box::new(|_| {}));
    channel.on("pointerdown", Box::new(|_| {}));
    channel.on("pointerdown", Box::new(|_| {}));

    assert_eq!(channel.listener_count("resize"), 1);
    assert_eq!(channel.listener_count("pointerdown"), 2);
    assert_eq!(channel.listener_count("keydown"), 0);
}

// ============================================================================
// Tests: Dispatch
// ============================================================================

#[test]
fn test_emit_invokes_listener_with_payload() {
    let channel = EventChannel::new();
    let received = Arc::new(Mutex::new(None));

    let captured = received.clone();
    channel.on("resize", Box::new(move |event| {
        *captured.lock().unwrap() = Some(event.clone());
    }));

    channel.emit("resize", &SurfaceEvent::Resize { width: 100.0, height: 50.0 });

    let received = received.lock().unwrap();
    assert_eq!(
        *received,
        Some(SurfaceEvent::Resize { width: 100.0, height: 50.0 })
    );
}

#[test]
fn test_emit_invokes_every_listener() {
    let channel = EventChannel::new();
    let count = Arc::new(Mutex::new(0u32));

    for _ in 0..3 {
        let captured = count.clone();
        channel.on("resize", Box::new(move |_| {
            *captured.lock().unwrap() += 1;
        }));
    }

    channel.emit("resize", &SurfaceEvent::Resize { width: 1.0, height: 1.0 });
    assert_eq!(*count.lock().unwrap(), 3);
}

#[test]
fn test_emit_unknown_event_is_noop() {
    let channel = EventChannel::new();
    let fired = Arc::new(Mutex::new(false));

    let captured = fired.clone();
    channel.on("resize", Box::new(move |_| {
        *captured.lock().unwrap() = true;
    }));

    channel.emit("pointerdown", &SurfaceEvent::Resize { width: 1.0, height: 1.0 });
    assert!(!*fired.lock().unwrap());
}

#[test]
fn test_emit_only_reaches_matching_name() {
    let channel = EventChannel::new();
    let resize_count = Arc::new(Mutex::new(0u32));
    let other_count = Arc::new(Mutex::new(0u32));

    let captured = resize_count.clone();
    channel.on("resize", Box::new(move |_| {
        *captured.lock().unwrap() += 1;
    }));
    let captured = other_count.clone();
    channel.on("pointerdown", Box::new(move |_| {
        *captured.lock().unwrap() += 1;
    }));

    channel.emit("resize", &SurfaceEvent::Resize { width: 2.0, height: 2.0 });

    assert_eq!(*resize_count.lock().unwrap(), 1);
    assert_eq!(*other_count.lock().unwrap(), 0);
}
