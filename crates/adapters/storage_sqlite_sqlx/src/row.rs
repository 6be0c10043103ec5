//! Column codecs shared by the repositories.

use std::str::FromStr;

use chrono::SecondsFormat;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use hbnb_domain::time::Timestamp;

use crate::error::StorageError;

fn decode_error<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

/// Read a TEXT column holding a UUID into a typed id.
pub(crate) fn id<T>(row: &SqliteRow, column: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.try_get(column)?;
    T::from_str(&raw).map_err(decode_error)
}

/// Read a TEXT column holding an RFC 3339 timestamp.
pub(crate) fn timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    chrono::DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.to_utc())
        .map_err(decode_error)
}

/// Fixed-width encoding so that stored timestamps sort chronologically.
pub(crate) fn encode_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Run a `SELECT COUNT(*)` query.
pub(crate) async fn count(pool: &SqlitePool, sql: &str) -> Result<usize, StorageError> {
    let (count,): (i64,) = sqlx::query_as(sql).fetch_one(pool).await?;
    Ok(usize::try_from(count)?)
}
