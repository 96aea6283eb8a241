//! In-memory map registry.
//!
//! Uses `RwLock::unwrap()` intentionally. Lock poisoning only occurs when
//! another thread panicked while holding the lock, which is an
//! unrecoverable state for a session process. All mutation happens within
//! one event turn; the lock exists for the `Send + Sync` contract, not for
//! cross-turn coordination.

use std::sync::{Arc, Mutex, RwLock};

use crate::models::MapInstance;
use crate::ports::MapRegistry;

/// Single-slot registry holding the most recently rendered map.
#[derive(Debug, Default)]
pub struct MemoryMapRegistry {
    slot: RwLock<Option<Arc<Mutex<MapInstance>>>>,
}

impl MemoryMapRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapRegistry for MemoryMapRegistry {
    fn install(&self, instance: MapInstance) {
        *self.slot.write().unwrap() = Some(Arc::new(Mutex::new(instance)));
    }

    fn current(&self) -> Option<Arc<Mutex<MapInstance>>> {
        self.slot.read().unwrap().clone()
    }
}
