//! Change notification for grid components.
//!
//! A component exposes one public [`Signal`] per kind of change (page,
//! sorting, selection, ...). Callers attach closures with
//! [`Signal::connect`]; the component calls [`Signal::emit`] after it has
//! applied, or requested, a state transition.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - A list of slots invoked with `&Args` on every emit
//! - [`ConnectionId`] - Handle returned by `connect`, used to disconnect
//! - [`ConnectionGuard`] - Disconnects its slot when dropped
//!
//! # Delivery
//!
//! Slots run synchronously on the emitting thread, in connection order. A
//! slot connected after a disconnect runs after every slot still attached,
//! even when it reuses the freed key. The slot list is copied before the
//! first slot runs, so a slot may connect to or disconnect from the same
//! signal; the change applies to the next emit.
//!
//! # Example
//!
//! ```
//! use horizon_grid_core::Signal;
//!
//! let sort_requested = Signal::<(String, bool)>::new();
//! let id = sort_requested.connect(|(column, desc)| {
//!     println!("sort {column} desc={desc}");
//! });
//!
//! sort_requested.emit(("severity".to_string(), true));
//! assert!(sort_requested.disconnect(id));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle of one connected slot.
    ///
    /// Stays valid until passed to [`Signal::disconnect`] or until the signal
    /// is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Connected slots plus the order they were connected in.
struct Slots<Args> {
    by_id: SlotMap<ConnectionId, Slot<Args>>,
    order: Vec<ConnectionId>,
}

/// A notification channel with any number of connected slots.
///
/// `Args` is the payload handed to each slot by reference. Grid components
/// emit owned state snapshots (`PaginationState`, `SortingState`, ...), or a
/// tuple such as `(String, f32)` when a change has several parts.
///
/// Slots must be `Send + Sync` so that the component owning the signal can be
/// moved to another thread by its host.
pub struct Signal<Args> {
    slots: Mutex<Slots<Args>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// A signal without slots.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(Slots {
                by_id: SlotMap::with_key(),
                order: Vec::new(),
            }),
        }
    }

    /// Attach a slot. Keep the returned id to detach it later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut slots = self.slots.lock();
        let id = slots.by_id.insert(Arc::new(slot));
        slots.order.push(id);
        drop(slots);
        tracing::trace!(target: targets::SIGNAL, ?id, "slot connected");
        id
    }

    /// Attach a slot for as long as the returned guard lives.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            signal: self,
            id: self.connect(slot),
        }
    }

    /// Detach a slot. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let mut slots = self.slots.lock();
        if slots.by_id.remove(id).is_none() {
            return false;
        }
        slots.order.retain(|connected| *connected != id);
        true
    }

    /// Detach every slot.
    pub fn disconnect_all(&self) {
        let mut slots = self.slots.lock();
        slots.by_id.clear();
        slots.order.clear();
    }

    /// Number of attached slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().by_id.len()
    }

    /// Invoke every slot with `args`, in connection order.
    #[tracing::instrument(skip_all, target = "horizon_grid_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let snapshot: Vec<Slot<Args>> = {
            let slots = self.slots.lock();
            slots
                .order
                .iter()
                .filter_map(|id| slots.by_id.get(*id).cloned())
                .collect()
        };
        tracing::trace!(target: targets::SIGNAL, slots = snapshot.len(), "emit");
        for slot in &snapshot {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.lock().by_id.len())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<usize>: Send, Sync);

/// Keeps a slot attached until dropped.
///
/// Returned by [`Signal::connect_scoped`]:
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use horizon_grid_core::Signal;
///
/// let page_changed = Signal::<usize>::new();
/// let last_page = Arc::new(AtomicUsize::new(0));
/// {
///     let last_page = last_page.clone();
///     let _guard = page_changed.connect_scoped(move |&page| last_page.store(page, Ordering::SeqCst));
///     page_changed.emit(4);
/// }
/// page_changed.emit(5);
/// assert_eq!(last_page.load(Ordering::SeqCst), 4);
/// ```
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// Id of the guarded slot.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}
