//! Mapping store contract and the in-process implementation

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::entry::Mappings;
use crate::error::MappingError;
use crate::Result;

/// Asynchronous key/value persistence for keyword entries.
///
/// A failed read is an error, never an empty map: callers must not mistake
/// "backend down" for "no mappings yet".
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Snapshot of every keyword.
    async fn read_all(&self) -> Result<Mappings>;

    /// Merge-write: keys in `partial` are created or overwritten, every other
    /// keyword is left untouched.
    async fn write_all(&self, partial: Mappings) -> Result<()>;

    /// Remove every keyword.
    async fn clear(&self) -> Result<()>;
}

/// The process-wide store service.
///
/// Clones share both the backing store and the mutation gate, so the
/// resolver and the interpreter always see the same table.
#[derive(Clone)]
pub struct StoreHandle {
    store: Arc<dyn MappingStore>,
    gate: Arc<Mutex<()>>,
}

impl StoreHandle {
    pub fn new<S: MappingStore + 'static>(store: S) -> Self {
        Self::from_arc(Arc::new(store))
    }

    pub fn from_arc(store: Arc<dyn MappingStore>) -> Self {
        Self {
            store,
            gate: Arc::new(Mutex::new(())),
        }
    }

    pub async fn read_all(&self) -> Result<Mappings> {
        self.store.read_all().await
    }

    pub async fn write_all(&self, partial: Mappings) -> Result<()> {
        self.store.write_all(partial).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.store.clear().await
    }

    /// Hold this across a read-decide-write sequence. One mutation is in
    /// flight at a time per process; other devices syncing the same backend
    /// are still last-writer-wins.
    pub async fn exclusive(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().await
    }
}

/// Keeps the table in memory. Used for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    mappings: RwLock<Mappings>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mappings(mappings: Mappings) -> Self {
        Self {
            mappings: RwLock::new(mappings),
            unavailable: AtomicBool::new(false),
        }
    }

    /// While set, every operation fails as if the backend were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Synchronous view of the current table.
    pub fn snapshot(&self) -> Mappings {
        self.mappings.read().clone()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(MappingError::Unavailable(
                "in-memory store is marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn read_all(&self) -> Result<Mappings> {
        self.check_available()?;
        Ok(self.mappings.read().clone())
    }

    async fn write_all(&self, partial: Mappings) -> Result<()> {
        self.check_available()?;
        self.mappings.write().extend(partial);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.check_available()?;
        self.mappings.write().clear();
        Ok(())
    }
}
