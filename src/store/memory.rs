use std::sync::{Arc, Mutex};

use anyhow::Result;

use super::Store;

#[derive(Debug, Default)]
struct Slot<T> {
    value: T,
    saves: usize,
}

/// In-memory store. Clones share the same slot, so a test can keep one
/// handle to inspect what the game saved.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: Clone> MemoryStore<T> {
    pub fn with_value(value: T) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot { value, saves: 0 })),
        }
    }

    fn with_slot<R>(&self, f: impl FnOnce(&mut Slot<T>) -> R) -> R {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut slot)
    }

    pub fn value(&self) -> T {
        self.with_slot(|s| s.value.clone())
    }

    /// Number of successful saves so far
    pub fn saves(&self) -> usize {
        self.with_slot(|s| s.saves)
    }
}

impl<T: Clone + Send> Store<T> for MemoryStore<T> {
    fn load(&self) -> T {
        self.value()
    }

    fn save(&self, value: &T) -> Result<()> {
        self.with_slot(|s| {
            s.value = value.clone();
            s.saves += 1;
        });
        Ok(())
    }
}
