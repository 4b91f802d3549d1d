//! The value holder behind a scope.
//!
//! A [`ThemeStore`] owns the current [`Theme`] and the list of readers that want to be
//! re-evaluated when it changes. Toggling commits the new value and notifies every
//! subscriber synchronously, so by the time [`ThemeStore::toggle`] returns all readers
//! have observed the new value.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::theme::Theme;

type Listener = Rc<dyn Fn(Theme)>;

struct Inner {
    value: Cell<Theme>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

impl Inner {
    fn is_registered(&self, id: u64) -> bool {
        self.listeners.borrow().iter().any(|(entry, _)| *entry == id)
    }

    fn remove(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(entry, _)| *entry != id);
    }
}

/// Single-threaded, shared handle to one theme value. Clones point at the same value.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<Inner>,
}

impl ThemeStore {
    /// Creates a store holding `initial`.
    ///
    /// ```
    /// use themescope::store::ThemeStore;
    /// use themescope::theme::Theme;
    ///
    /// let store = ThemeStore::new(Theme::Dark);
    /// assert_eq!(store.get(), Theme::Dark);
    /// ```
    pub fn new(initial: Theme) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: Cell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// The current value, read at call time.
    pub fn get(&self) -> Theme {
        self.inner.value.get()
    }

    /// Flips the value and notifies subscribers before returning the value they last saw.
    pub fn toggle(&self) -> Theme {
        let previous = self.inner.value.get();
        let next = previous.toggle();
        self.inner.value.set(next);
        debug!(from = %previous, to = %next, "theme toggled");

        // Listeners may subscribe, unsubscribe or toggle again while being notified,
        // so each one is handed the value current at its turn.
        let snapshot: Vec<(u64, Listener)> = self.inner.listeners.borrow().clone();
        for (id, listener) in snapshot {
            if self.inner.is_registered(id) {
                listener(self.get());
            }
        }

        self.get()
    }

    /// Registers `listener` to run after every toggle. It stays registered until the
    /// returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe(&self, listener: impl Fn(Theme) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        trace!(id, "theme subscriber added");

        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Whether both handles point at the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::initialize())
    }
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("value", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Keeps a listener registered with a [`ThemeStore`]. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    store: Weak<Inner>,
}

impl Subscription {
    /// Explicit form of dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.remove(self.id);
            trace!(id = self.id, "theme subscriber removed");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
