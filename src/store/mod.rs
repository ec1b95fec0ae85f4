//! The reading store: canonical collection of readings plus cached
//! aggregates, mirrored in memory over the storage backend.

mod handle;
mod reading_store;
mod shared;

pub use handle::StoreHandle;
pub use reading_store::ReadingStore;
pub use shared::{shared, shared_default};
