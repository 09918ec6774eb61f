//! Per-frame callback registry.
//!
//! Scenes register a callback when they mount and hold the returned
//! [`FrameSubscription`]. Dropping the subscription unregisters the callback,
//! so a torn-down scene can never be called again, even by a tick that was
//! already in flight.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use folio_core::Pointer;

/// Input handed to every callback for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInfo {
    /// Frame counter, starting at zero.
    pub frame: u64,
    /// Time since the scheduler's owner started.
    pub elapsed: Duration,
    /// Latest pointer sample, `None` when the pointer is not over the surface.
    pub pointer: Option<Pointer>,
}

type Callback = Box<dyn FnMut(&FrameInfo)>;

struct Slot {
    id: u64,
    /// Taken out while the callback runs.
    callback: Option<Callback>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    slots: Vec<Slot>,
}

impl Registry {
    fn remove(&mut self, id: u64) {
        self.slots.retain(|slot| slot.id != id);
    }

    fn slot_mut(&mut self, id: u64) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|slot| slot.id == id)
    }
}

/// Single-threaded frame scheduler.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("callbacks", &self.len())
            .finish()
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` to run once per tick until the subscription is dropped.
    #[must_use = "dropping the subscription unregisters the callback"]
    pub fn register<F>(&self, callback: F) -> FrameSubscription
    where
        F: FnMut(&FrameInfo) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.slots.push(Slot {
            id,
            callback: Some(Box::new(callback)),
        });
        FrameSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Run every live callback once, in registration order.
    ///
    /// Callbacks registered during the tick first run on the next one;
    /// callbacks unregistered during the tick are not run again.
    pub fn tick(&self, info: &FrameInfo) {
        let ids: Vec<u64> = self.registry.borrow().slots.iter().map(|s| s.id).collect();
        for id in ids {
            let callback = self
                .registry
                .borrow_mut()
                .slot_mut(id)
                .and_then(|slot| slot.callback.take());
            let Some(mut callback) = callback else {
                continue;
            };

            callback(info);

            if let Some(slot) = self.registry.borrow_mut().slot_mut(id) {
                slot.callback = Some(callback);
            }
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.registry.borrow().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a callback registered; unregisters it on drop.
#[derive(Debug)]
pub struct FrameSubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl FrameSubscription {
    /// Unregister now rather than at end of scope.
    pub fn cancel(self) {}

    /// Whether the callback is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().slots.iter().any(|s| s.id == self.id))
    }
}

impl Drop for FrameSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
    }
}
