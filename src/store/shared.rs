//! Process-wide store instance, constructed on first access.

use std::path::Path;
use std::sync::{Mutex, OnceLock};

use crate::config::default_db_path;
use crate::error::StoreError;
use crate::storage::SqliteBackend;
use crate::store::{ReadingStore, StoreHandle};

static SHARED: OnceLock<StoreHandle> = OnceLock::new();
static INIT: Mutex<()> = Mutex::new(());


/// The shared store, opening the database at `db_path` on first call.
///
/// Construction happens exactly once for the life of the process: the
/// first caller opens the backend and loads the persisted rows, and
/// every later call (which ignores `db_path`) gets a clone of the same
/// handle. Racing first callers are serialized by an init lock with a
/// double-check, so the rows can never be loaded twice.
pub fn shared(db_path: &Path) -> Result<StoreHandle, StoreError> {
    if let Some(handle) = SHARED.get() {
        return Ok(handle.clone());
    }

    let _guard = INIT.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(handle) = SHARED.get() {
        return Ok(handle.clone());
    }

    let backend = SqliteBackend::open(db_path)?;
    let store = ReadingStore::open(Box::new(backend))?;
    let handle = StoreHandle::new(store);
    let _ = SHARED.set(handle.clone());
    Ok(handle)
}


/// [`shared`] with the default database location.
pub fn shared_default() -> Result<StoreHandle, StoreError> {
    shared(&default_db_path())
}
