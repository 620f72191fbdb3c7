//! Event module — named-event subscription channel.
//!
//! Used by the surface for resize notifications, and by host screens for
//! their own events. Listeners are keyed by event name.

mod event_channel;

pub use event_channel::{EventCallback, EventChannel, SurfaceEvent};
