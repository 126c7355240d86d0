/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (goal ranges, roulette service days).
pub type Date = chrono::NaiveDate;

/// Monetary amounts, stored as `NUMERIC(15,2)`.
pub type Amount = rust_decimal::Decimal;
