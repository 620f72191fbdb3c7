/// Deferred-render queue with cancellation.
///
/// The mesh's before-render hook schedules a redraw token here; the host
/// pumps the surface once per frame, which drains the queue and performs at
/// most one render. Resize and drop cancel outstanding tokens, so a stale
/// request never renders into a target it was not scheduled against.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Handle to one scheduled deferred redraw.
///
/// Cloning shares the cancellation state.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Cancel the scheduled redraw.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether the redraw has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Queue of pending deferred redraw tokens.
pub struct RenderQueue {
    pending: Mutex<Vec<CancellationToken>>,
}

impl RenderQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Schedule one deferred redraw. Returns the token for cancellation.
    pub fn schedule(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Ok(mut pending) = self.pending.lock() {
            pending.push(token.clone());
        }
        token
    }

    /// Drain and return all pending tokens.
    pub fn take_pending(&self) -> Vec<CancellationToken> {
        self.pending
            .lock()
            .map(|mut pending| std::mem::take(&mut *pending))
            .unwrap_or_default()
    }

    /// Cancel and drop every pending token.
    pub fn cancel_pending(&self) {
        for token in self.take_pending() {
            token.cancel();
        }
    }

    /// Number of pending tokens.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().map(|pending| pending.len()).unwrap_or(0)
    }
}

impl Default for RenderQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "render_queue_tests.rs"]
mod tests;
