//! Cloneable handle serializing all access to one [`ReadingStore`].

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;
use crate::models::Reading;
use crate::store::ReadingStore;


/// Shared handle to a [`ReadingStore`].
///
/// Cheap to clone and pass to whatever component needs the store.
/// A single mutex gates every operation, so concurrent inserts and
/// purges are serialized and the aggregates a reader sees are always
/// consistent with each other.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<Mutex<ReadingStore>>,
}


impl StoreHandle {
    pub fn new(store: ReadingStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ReadingStore> {
        // A poisoning panic cannot leave the store half-mutated: memory
        // is only touched after the backend write already succeeded.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn insert(&self, reading: Reading) -> Result<(), StoreError> {
        self.lock().insert(reading)
    }

    pub fn purge_all(&self) -> Result<(), StoreError> {
        self.lock().purge_all()
    }

    /// Snapshot of all stored readings, in insertion order.
    pub fn readings(&self) -> Vec<Reading> {
        self.lock().readings().to_vec()
    }

    pub fn count(&self) -> i64 {
        self.lock().count()
    }

    pub fn total_amount(&self) -> i64 {
        self.lock().total_amount()
    }

    pub fn min_amount(&self) -> i64 {
        self.lock().min_amount()
    }

    pub fn max_amount(&self) -> i64 {
        self.lock().max_amount()
    }

    pub fn average_amount(&self) -> i64 {
        self.lock().average_amount()
    }

    /// Whether two handles point at the same underlying store.
    pub fn same_store(&self, other: &StoreHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
