//! sugarlog - local persistence for blood sugar readings.
//!
//! Stores discrete readings (date, time, amount) in SQLite and keeps
//! running statistics (min, max, average, total, count) synchronized
//! with the persisted rows across insert and purge.

pub mod aggregation;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

pub use error::StoreError;
pub use models::Reading;
pub use store::{shared, shared_default, ReadingStore, StoreHandle};
