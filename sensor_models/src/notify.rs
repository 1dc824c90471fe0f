//! Change notification: an ordered list of observers per state holder.
//!
//! Every notifying type owns a [`Hub`] and exposes it through the
//! [`Notifiable`] capability, which supplies `subscribe` / `notify_all`.
//! Delivery is synchronous and in registration order. An observer that
//! causes another `notify_all` on the same hub recurses depth-first.

use std::fmt;

/// Observer callback: receives the notifying entity.
pub type Observer<T> = Box<dyn Fn(&T)>;

/// Ordered observer list for subjects of type `T`.
pub struct Hub<T> {
    observers: Vec<Observer<T>>,
}

impl<T> Hub<T> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Append an observer. No deduplication.
    pub fn register(&mut self, observer: impl Fn(&T) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Invoke every observer in registration order with `subject`.
    pub fn notify_all(&self, subject: &T) {
        for observer in &self.observers {
            observer(subject);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<T> Default for Hub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Hub<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hub")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Capability of a state holder that owns a [`Hub`] of itself.
pub trait Notifiable: Sized {
    fn hub(&self) -> &Hub<Self>;
    fn hub_mut(&mut self) -> &mut Hub<Self>;

    /// Register `observer` to be called after every change of `self`.
    fn subscribe(&mut self, observer: impl Fn(&Self) + 'static) {
        self.hub_mut().register(observer);
    }

    /// Notify all observers, passing `self` as the payload.
    fn notify_all(&self) {
        self.hub().notify_all(self);
    }
}
