//! Signal/slot system.
//!
//! Signals are the toolkit's notification mechanism: an object exposes a
//! `Signal<Args>` field, interested parties connect closures to it, and the
//! object emits when its state changes.
//!
//! Slots are invoked directly on the emitting thread. The widget layer is
//! confined to the UI thread, so emission order is simply call order; there
//! is no cross-thread queueing tier in this kit.
//!
//! # Example
//!
//! ```
//! use emberglow_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! text_changed.emit("Hello, World!".to_string());
//! text_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Returned by [`Signal::connect`]; pass it to [`Signal::disconnect`]
    /// to remove the slot again, or hold it in a [`ConnectionGuard`] for
    /// RAII disconnection.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no payload.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a [`ConnectionId`] that can be used to disconnect later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block or unblock signal emission.
    ///
    /// While blocked, calls to [`emit`](Self::emit) do nothing. Useful
    /// during initialization or batch updates to suppress cascading
    /// notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    #[tracing::instrument(skip_all, target = "emberglow_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "emberglow_core::signal", "signal blocked, skipping emit");
            return;
        }

        // Clone the slot handles out so a slot can connect/disconnect on
        // this same signal without deadlocking on the connection lock.
        let slots: Vec<_> = self
            .connections
            .lock()
            .iter()
            .map(|(_, conn)| conn.slot.clone())
            .collect();

        tracing::trace!(target: "emberglow_core::signal", connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

/// RAII guard that disconnects a signal connection when dropped.
///
/// Created with [`ConnectionGuard::new`] from a signal reference and the
/// [`ConnectionId`] returned by [`Signal::connect`]. The guard borrows the
/// signal, so it suits scoped observers (tests, short-lived overlays).
pub struct ConnectionGuard<'a, Args> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<'a, Args> ConnectionGuard<'a, Args> {
    /// Wrap an existing connection in a guard.
    pub fn new(signal: &'a Signal<Args>, id: ConnectionId) -> Self {
        Self { signal, id }
    }

    /// The guarded connection's ID.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Disconnect now and consume the guard.
    pub fn disconnect(self) {
        // Drop does the work.
    }
}

impl<Args> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<i32>: Send, Sync);
static_assertions::assert_impl_all!(Signal<()>: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[test]
    fn emit_invokes_connected_slots() {
        let signal = Signal::<i32>::new();
        let total = Arc::new(AtomicU32::new(0));

        let total_a = total.clone();
        signal.connect(move |n| {
            total_a.fetch_add(*n as u32, Ordering::SeqCst);
        });
        let total_b = total.clone();
        signal.connect(move |n| {
            total_b.fetch_add(*n as u32, Ordering::SeqCst);
        });

        signal.emit(21);
        assert_eq!(total.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn disconnect_removes_slot() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        let id = signal.connect(move |()| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(());
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(());

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn blocked_signal_does_not_emit() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        signal.connect(move |()| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn slot_may_disconnect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let count = Arc::new(AtomicU32::new(0));

        let signal_clone = signal.clone();
        let count_clone = count.clone();
        let id = Arc::new(Mutex::new(None::<ConnectionId>));
        let id_clone = id.clone();
        let conn = signal.connect(move |()| {
            count_clone.fetch_add(1, Ordering::SeqCst);
            if let Some(own_id) = *id_clone.lock() {
                signal_clone.disconnect(own_id);
            }
        });
        *id.lock() = Some(conn);

        signal.emit(());
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn guard_disconnects_on_drop() {
        let signal = Signal::<()>::new();
        let id = signal.connect(|()| {});
        {
            let _guard = ConnectionGuard::new(&signal, id);
            assert_eq!(signal.connection_count(), 1);
        }
        assert_eq!(signal.connection_count(), 0);
    }
}
