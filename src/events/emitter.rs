use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use super::Subscription;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    name: &'static str,
    callbacks: RefCell<Vec<(u64, Callback<T>)>>,
    next_id: Cell<u64>,
    blocked: Cell<usize>,
    coalesce: bool,
    pending: RefCell<Option<T>>,
}

impl<T> Inner<T> {
    fn is_connected(&self, id: u64) -> bool {
        self.callbacks
            .borrow()
            .iter()
            .any(|(existing, _)| *existing == id)
    }

    fn deliver(&self, payload: &T) {
        // Snapshot so callbacks may connect or disconnect while we iterate.
        let callbacks = self
            .callbacks
            .borrow()
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect::<Vec<_>>();
        trace!(
            event = self.name,
            listeners = callbacks.len(),
            "delivering event"
        );
        for (id, callback) in callbacks {
            if self.is_connected(id) {
                callback(payload);
            }
        }
    }

    fn unblock(&self) {
        let remaining = self.blocked.get().saturating_sub(1);
        self.blocked.set(remaining);
        if remaining > 0 {
            return;
        }
        let pending = self.pending.borrow_mut().take();
        if let Some(payload) = pending {
            trace!(event = self.name, "replaying coalesced event");
            self.deliver(&payload);
        }
    }
}

/// Single-threaded signal carrying a payload of type `T`.
///
/// Payloads emitted while the emitter is blocked are dropped. An emitter
/// built with [`EventEmitter::coalescing`] instead keeps the last blocked
/// payload and delivers it once, when the outermost blocker is released.
pub struct EventEmitter<T> {
    inner: Rc<Inner<T>>,
}

impl<T: 'static> EventEmitter<T> {
    pub fn new(name: &'static str) -> Self {
        Self::build(name, false)
    }

    pub fn coalescing(name: &'static str) -> Self {
        Self::build(name, true)
    }

    fn build(name: &'static str, coalesce: bool) -> Self {
        Self {
            inner: Rc::new(Inner {
                name,
                callbacks: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                blocked: Cell::new(0),
                coalesce,
                pending: RefCell::new(None),
            }),
        }
    }

    pub fn connect(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.wrapping_add(1));
        self.inner
            .callbacks
            .borrow_mut()
            .push((id, Rc::new(callback)));

        let inner: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .callbacks
                    .borrow_mut()
                    .retain(|(existing, _)| *existing != id);
            }
        })
    }

    pub fn connection_count(&self) -> usize {
        self.inner.callbacks.borrow().len()
    }

    pub fn is_blocked(&self) -> bool {
        self.inner.blocked.get() > 0
    }

    pub fn emit(&self, payload: T) {
        if self.is_blocked() {
            trace!(event = self.inner.name, "event suppressed by blocker");
            if self.inner.coalesce {
                *self.inner.pending.borrow_mut() = Some(payload);
            }
            return;
        }
        self.inner.deliver(&payload);
    }

    pub fn blocker(&self) -> EventBlocker {
        self.inner.blocked.set(self.inner.blocked.get() + 1);
        let inner = Rc::clone(&self.inner);
        EventBlocker {
            releases: vec![Box::new(move || inner.unblock())],
        }
    }
}

impl<T> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("name", &self.inner.name)
            .field("connections", &self.inner.callbacks.borrow().len())
            .field("blocked", &self.inner.blocked.get())
            .field("coalesce", &self.inner.coalesce)
            .finish()
    }
}

/// Scope guard that keeps one or more emitters blocked until dropped.
#[must_use = "the emitters are unblocked as soon as the blocker is dropped"]
pub struct EventBlocker {
    releases: Vec<Box<dyn FnOnce()>>,
}

impl EventBlocker {
    pub fn combine(blockers: impl IntoIterator<Item = EventBlocker>) -> Self {
        let mut releases = Vec::new();
        for mut blocker in blockers {
            releases.append(&mut blocker.releases);
        }
        Self { releases }
    }
}

impl Drop for EventBlocker {
    fn drop(&mut self) {
        // Release in reverse acquisition order.
        while let Some(release) = self.releases.pop() {
            release();
        }
    }
}

impl fmt::Debug for EventBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBlocker")
            .field("emitters", &self.releases.len())
            .finish()
    }
}
