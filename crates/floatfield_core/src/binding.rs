//! Two-way value bindings
//!
//! A [`Binding<T>`] is a cheap-to-clone handle to a value owned by the caller.
//! Widgets hold a clone of the handle rather than a copy of the value, so every
//! write a widget makes is immediately visible to the caller and vice versa.
//!
//! ```rust
//! use floatfield_core::Binding;
//!
//! let name = Binding::new(String::new());
//! let seen = name.clone();
//!
//! name.set("Ada".to_string());
//! assert_eq!(seen.get(), "Ada");
//! assert_eq!(seen.version(), 1);
//! ```
//!
//! Subscribers run synchronously after the new value is stored and after the
//! binding's own lock is released, so a subscriber may read the binding.

use std::fmt;
use std::sync::{Arc, Mutex};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::sync::lock;

new_key_type! {
    /// Handle returned by [`Binding::subscribe`]
    pub struct SubscriptionId;
}

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct BindingInner<T> {
    value: T,
    /// Bumped on every write that changes the value
    version: u64,
}

/// Shared, caller-owned value with change notification
pub struct Binding<T> {
    inner: Arc<Mutex<BindingInner<T>>>,
    subscribers: Arc<Mutex<SlotMap<SubscriptionId, Subscriber<T>>>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("Binding")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + Send + 'static> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + Send + 'static> Binding<T> {
    /// Create a binding holding `initial`
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BindingInner {
                value: initial,
                version: 0,
            })),
            subscribers: Arc::new(Mutex::new(SlotMap::with_key())),
        }
    }

    /// Clone out the current value
    pub fn get(&self) -> T {
        lock(&self.inner).value.clone()
    }

    /// Borrow the current value for the duration of `f`
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&lock(&self.inner).value)
    }

    /// Number of changing writes since creation
    pub fn version(&self) -> u64 {
        lock(&self.inner).version
    }

    /// Write a new value and notify subscribers
    ///
    /// Returns `false` without notifying when `value` equals the current value.
    pub fn set(&self, value: T) -> bool {
        {
            let mut inner = lock(&self.inner);
            if inner.value == value {
                return false;
            }
            inner.value = value.clone();
            inner.version += 1;
            tracing::trace!(version = inner.version, "binding updated");
        }
        self.notify(&value);
        true
    }

    /// Mutate the value in place, notifying only if it changed
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }

    /// Register a callback invoked with the new value after each change
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        lock(&self.subscribers).insert(Arc::new(callback))
    }

    /// Remove a subscriber, returning whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        lock(&self.subscribers).remove(id).is_some()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        lock(&self.subscribers).len()
    }

    /// Whether two handles point at the same value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn notify(&self, value: &T) {
        // Snapshot so callbacks may subscribe/unsubscribe re-entrantly
        let callbacks: SmallVec<[Subscriber<T>; 4]> =
            lock(&self.subscribers).values().cloned().collect();
        for callback in callbacks {
            callback(value);
        }
    }
}
