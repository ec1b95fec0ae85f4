//! Core store: owns the in-memory reading sequence and its aggregates.

use tracing::debug;

use crate::aggregation::RunningStats;
use crate::error::StoreError;
use crate::models::Reading;
use crate::storage::Backend;


/// Owns the canonical collection of readings and keeps running
/// statistics synchronized with the persisted rows.
///
/// The in-memory sequence is loaded from the backend once, at
/// construction, and afterwards mutated only through [`insert`] and
/// [`purge_all`] - never re-read. Memory is only touched after the
/// backend has confirmed a write, so a failed backend call leaves the
/// cached state exactly as it was.
///
/// [`insert`]: ReadingStore::insert
/// [`purge_all`]: ReadingStore::purge_all
pub struct ReadingStore {
    backend: Box<dyn Backend>,
    readings: Vec<Reading>,
    stats: RunningStats,
}


impl ReadingStore {
    /// Open a store over `backend`, creating the schema if needed and
    /// folding every persisted row into the aggregates.
    pub fn open(mut backend: Box<dyn Backend>) -> Result<Self, StoreError> {
        backend.ensure_schema()?;
        let readings = backend.load_all()?;

        let mut stats = RunningStats::new();
        for reading in &readings {
            stats.add(reading.amount);
        }

        debug!(count = readings.len(), "loaded persisted readings");

        Ok(Self {
            backend,
            readings,
            stats,
        })
    }

    /// Persist one reading and fold it into the aggregates.
    ///
    /// The backend write happens first; if it fails, no in-memory
    /// state changes and the error is returned.
    pub fn insert(&mut self, reading: Reading) -> Result<(), StoreError> {
        self.backend.insert_reading(&reading)?;

        self.stats.add(reading.amount);
        self.readings.push(reading);

        debug!(amount = reading.amount, count = self.readings.len(), "inserted reading");
        Ok(())
    }

    /// Wipe the backend table and reset all cached state to empty.
    ///
    /// Safe to call on an already-empty store. If the backend reset
    /// fails, the cached state is left untouched.
    pub fn purge_all(&mut self) -> Result<(), StoreError> {
        self.backend.reset()?;

        self.readings.clear();
        self.stats.reset();

        debug!("purged all readings");
        Ok(())
    }

    /// All stored readings, in insertion order.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn count(&self) -> i64 {
        self.stats.count()
    }

    pub fn total_amount(&self) -> i64 {
        self.stats.total()
    }

    pub fn min_amount(&self) -> i64 {
        self.stats.min()
    }

    pub fn max_amount(&self) -> i64 {
        self.stats.max()
    }

    pub fn average_amount(&self) -> i64 {
        self.stats.average()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteBackend;
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    fn reading(amount: i64) -> Reading {
        Reading::new(
            NaiveDate::from_ymd_opt(2017, 8, 14).unwrap(),
            NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            amount,
        )
    }

    fn empty_store() -> ReadingStore {
        let backend = SqliteBackend::open_in_memory().unwrap();
        ReadingStore::open(Box::new(backend)).unwrap()
    }

    /// Backend that accepts nothing, for exercising failure paths.
    struct FailingBackend;

    impl Backend for FailingBackend {
        fn ensure_schema(&mut self) -> Result<(), StoreError> {
            Ok(())
        }

        fn insert_reading(&mut self, _reading: &Reading) -> Result<(), StoreError> {
            Err(StoreError::Backend(rusqlite::Error::InvalidQuery))
        }

        fn load_all(&mut self) -> Result<Vec<Reading>, StoreError> {
            Ok(Vec::new())
        }

        fn reset(&mut self) -> Result<(), StoreError> {
            Err(StoreError::Backend(rusqlite::Error::InvalidQuery))
        }
    }

    #[test]
    fn test_empty_store_defaults() {
        let store = empty_store();
        assert_eq!(store.count(), 0);
        assert_eq!(store.total_amount(), 0);
        assert_eq!(store.min_amount(), 0);
        assert_eq!(store.max_amount(), 0);
        assert_eq!(store.average_amount(), 0);
        assert!(store.readings().is_empty());
    }

    #[test]
    fn test_insert_updates_aggregates() {
        let mut store = empty_store();
        for amount in [50, 150, 100] {
            store.insert(reading(amount)).unwrap();
        }

        assert_eq!(store.count(), 3);
        assert_eq!(store.total_amount(), 300);
        assert_eq!(store.min_amount(), 50);
        assert_eq!(store.max_amount(), 150);
        assert_eq!(store.average_amount(), 100);
    }

    #[test]
    fn test_readings_keep_insertion_order() {
        let mut store = empty_store();
        for amount in [120, 80, 150] {
            store.insert(reading(amount)).unwrap();
        }

        let amounts: Vec<i64> = store.readings().iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![120, 80, 150]);
    }

    #[test]
    fn test_purge_resets_everything() {
        let mut store = empty_store();
        store.insert(reading(100)).unwrap();
        store.insert(reading(200)).unwrap();

        store.purge_all().unwrap();

        assert_eq!(store.count(), 0);
        assert_eq!(store.total_amount(), 0);
        assert_eq!(store.min_amount(), 0);
        assert_eq!(store.max_amount(), 0);
        assert_eq!(store.average_amount(), 0);
        assert!(store.readings().is_empty());
    }

    #[test]
    fn test_purge_is_idempotent() {
        let mut store = empty_store();
        store.insert(reading(90)).unwrap();

        store.purge_all().unwrap();
        store.purge_all().unwrap();

        assert_eq!(store.count(), 0);
        assert_eq!(store.total_amount(), 0);
    }

    #[test]
    fn test_insert_after_purge() {
        let mut store = empty_store();
        store.insert(reading(55)).unwrap();
        store.purge_all().unwrap();

        store.insert(reading(100)).unwrap();

        assert_eq!(store.count(), 1);
        assert_eq!(store.max_amount(), 100);
        assert_eq!(store.min_amount(), 100);
        assert_eq!(store.total_amount(), 100);
        assert_eq!(store.average_amount(), 100);
    }

    #[test]
    fn test_failed_insert_leaves_memory_untouched() {
        let mut store = ReadingStore::open(Box::new(FailingBackend)).unwrap();

        let result = store.insert(reading(100));

        assert!(result.is_err());
        assert_eq!(store.count(), 0);
        assert_eq!(store.total_amount(), 0);
        assert_eq!(store.min_amount(), 0);
        assert_eq!(store.max_amount(), 0);
        assert!(store.readings().is_empty());
    }

    #[test]
    fn test_failed_purge_leaves_memory_untouched() {
        // Seed a store, then swap in a backend whose reset fails.
        let mut store = ReadingStore::open(Box::new(FailingBackend)).unwrap();
        store.stats.add(100);
        store.readings.push(reading(100));

        let result = store.purge_all();

        assert!(result.is_err());
        assert_eq!(store.count(), 1);
        assert_eq!(store.total_amount(), 100);
    }

    #[test]
    fn test_reload_matches_incremental_inserts() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("readings.db");

        {
            let backend = SqliteBackend::open(&db_path).unwrap();
            let mut store = ReadingStore::open(Box::new(backend)).unwrap();
            for amount in [50, 150, 100] {
                store.insert(reading(amount)).unwrap();
            }
        }

        let backend = SqliteBackend::open(&db_path).unwrap();
        let store = ReadingStore::open(Box::new(backend)).unwrap();

        assert_eq!(store.count(), 3);
        assert_eq!(store.total_amount(), 300);
        assert_eq!(store.min_amount(), 50);
        assert_eq!(store.max_amount(), 150);
        assert_eq!(store.average_amount(), 100);
    }

    #[test]
    fn test_reload_with_zero_amount_reading() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("readings.db");

        {
            let backend = SqliteBackend::open(&db_path).unwrap();
            let mut store = ReadingStore::open(Box::new(backend)).unwrap();
            store.insert(reading(0)).unwrap();
            store.insert(reading(80)).unwrap();
        }

        let backend = SqliteBackend::open(&db_path).unwrap();
        let store = ReadingStore::open(Box::new(backend)).unwrap();

        // A persisted amount of 0 still seeds the minimum.
        assert_eq!(store.min_amount(), 0);
        assert_eq!(store.max_amount(), 80);
    }
}
