use chrono::NaiveDate;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Produces candidate ids for new items.
///
/// Uniqueness within a collection is finally enforced by the repository;
/// a generator only has to make collisions rare.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> i64;
}
