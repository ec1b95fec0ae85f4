//! Reading model for blood sugar measurements.

use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};


/// A single blood sugar measurement.
///
/// Immutable once created. Duplicates are permitted; rows get a
/// sequential id from the backend but it is never exposed to callers.
/// The amount is unit-agnostic and not validated here (that happens
/// upstream in the UI layer), so any integer is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub date_tested: NaiveDate,
    pub time_tested: NaiveTime,
    pub amount: i64,
}


impl Reading {
    pub fn new(date_tested: NaiveDate, time_tested: NaiveTime, amount: i64) -> Self {
        Self {
            date_tested,
            time_tested,
            amount,
        }
    }

    /// Build a reading stamped with the current local date and time.
    pub fn taken_now(amount: i64) -> Self {
        let now = Local::now().naive_local();
        Self {
            date_tested: now.date(),
            time_tested: now.time(),
            amount,
        }
    }
}
