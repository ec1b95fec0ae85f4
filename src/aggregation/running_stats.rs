//! Incremental min/max/average/total bookkeeping.

/// Aggregates maintained incrementally as readings are added.
///
/// All values are 0 for an empty set. Average uses truncating integer
/// division. Emptiness is decided by `count`, never by the aggregates
/// themselves: a first reading with amount 0 still seeds min and max.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningStats {
    count: i64,
    total: i64,
    min: i64,
    max: i64,
    average: i64,
}


impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one amount into the aggregates.
    ///
    /// The first amount seeds both min and max; every later amount is
    /// compared against both bounds independently.
    pub fn add(&mut self, amount: i64) {
        self.total += amount;
        if self.count == 0 {
            self.min = amount;
            self.max = amount;
        } else {
            self.max = self.max.max(amount);
            self.min = self.min.min(amount);
        }
        self.count += 1;
        self.average = self.total / self.count;
    }

    /// Reset all aggregates to the empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn average(&self) -> i64 {
        self.average
    }
}
