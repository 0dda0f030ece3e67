/// Primary keys are assigned from per-table sequences starting at 1.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
