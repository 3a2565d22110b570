//! The shared default [`ConnectionOptions`] instance.
//!
//! Components that are handed a [`SharedOptions`] read through it; code that
//! has no way to receive one falls back to [`SharedOptions::global`]. Whoever
//! loads configuration must install it before the first consumer reads it.

use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{info, warn};

use crate::models::connections::ConnectionOptions;

// Built on first access; nothing can observe it before then, so this is
// indistinguishable from initializing at startup.
static GLOBAL: LazyLock<SharedOptions> = LazyLock::new(SharedOptions::default);

/// Clonable handle to one swappable `ConnectionOptions` slot.
///
/// Clones point at the same slot. Readers get an `Arc` snapshot, so a
/// replacement never changes options a reader already holds.
#[derive(Debug, Clone, Default)]
pub struct SharedOptions {
    slot: Arc<RwLock<Arc<ConnectionOptions>>>,
}

impl SharedOptions {
    pub fn new(options: ConnectionOptions) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Arc::new(options))),
        }
    }

    /// The process-wide handle, holding the defaults until replaced.
    pub fn global() -> &'static SharedOptions {
        &GLOBAL
    }

    pub fn get(&self) -> Arc<ConnectionOptions> {
        self.read().clone()
    }

    /// Swaps in `options` and returns the previous value.
    pub fn replace(&self, options: ConnectionOptions) -> Arc<ConnectionOptions> {
        let next = Arc::new(options);
        info!("Connection options replaced ({next})");
        std::mem::replace(&mut *self.write(), next)
    }

    /// Applies `f` to a copy of the current options and installs the result.
    ///
    /// The write lock is held throughout, so concurrent updates are not lost.
    pub fn update<F>(&self, f: F) -> Arc<ConnectionOptions>
    where
        F: FnOnce(&mut ConnectionOptions),
    {
        let mut slot = self.write();
        let mut options = ConnectionOptions::clone(&slot);
        f(&mut options);
        let next = Arc::new(options);
        info!("Connection options updated ({next})");
        *slot = next.clone();
        next
    }

    pub fn reset(&self) -> Arc<ConnectionOptions> {
        self.replace(ConnectionOptions::default())
    }

    // The slot always holds a whole value, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Arc<ConnectionOptions>> {
        self.slot.read().unwrap_or_else(|e| {
            warn!("Recovering poisoned connection options lock");
            PoisonError::into_inner(e)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<ConnectionOptions>> {
        self.slot.write().unwrap_or_else(|e| {
            warn!("Recovering poisoned connection options lock");
            PoisonError::into_inner(e)
        })
    }
}

impl From<ConnectionOptions> for SharedOptions {
    fn from(options: ConnectionOptions) -> Self {
        Self::new(options)
    }
}

pub fn shared() -> Arc<ConnectionOptions> {
    SharedOptions::global().get()
}

pub fn replace_shared(options: ConnectionOptions) -> Arc<ConnectionOptions> {
    SharedOptions::global().replace(options)
}

pub fn update_shared<F>(f: F) -> Arc<ConnectionOptions>
where
    F: FnOnce(&mut ConnectionOptions),
{
    SharedOptions::global().update(f)
}
