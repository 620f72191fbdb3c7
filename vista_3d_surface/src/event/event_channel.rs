/// EventChannel — named-event listener registry with typed payloads.
///
/// Listeners are stored per event name and invoked in registration order.
/// The channel uses interior mutability so owners can emit through a shared
/// reference.

use std::sync::Mutex;
use rustc_hash::FxHashMap;

/// Event payloads dispatched through an [`EventChannel`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Layout size changed. Carries the new size in layout units.
    Resize { width: f32, height: f32 },
}

/// Listener callback for channel events.
pub type EventCallback = Box<dyn Fn(&SurfaceEvent) + Send + Sync>;

/// Named-event listener registry.
///
/// Callbacks run under the channel lock: they must not subscribe to or emit
/// on the same channel.
pub struct EventChannel {
    listeners: Mutex<FxHashMap<String, Vec<EventCallback>>>,
}

impl EventChannel {
    /// Create a channel with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(FxHashMap::default()),
        }
    }

    /// Register a listener for the given event name.
    pub fn on(&self, event: &str, callback: EventCallback) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.entry(event.to_string()).or_default().push(callback);
        }
    }

    /// Invoke every listener registered for the given event name.
    ///
    /// Unknown event names are a no-op.
    pub fn emit(&self, event: &str, payload: &SurfaceEvent) {
        if let Ok(listeners) = self.listeners.lock() {
            if let Some(callbacks) = listeners.get(event) {
                for callback in callbacks {
                    callback(payload);
                }
            }
        }
    }

    /// Number of listeners registered for the given event name.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .lock()
            .map(|listeners| listeners.get(event).map_or(0, |callbacks| callbacks.len()))
            .unwrap_or(0)
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "event_channel_tests.rs"]
mod tests;
