//! Storage layer for persisted readings.

mod database;

pub use database::{Backend, SqliteBackend};
