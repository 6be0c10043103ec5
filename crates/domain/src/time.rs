//! Time and timestamp helpers.

use chrono::{DateTime, Utc};
use serde::Serializer;

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Layout used when timestamps are exposed to API clients.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp with [`ISO_FORMAT`] (microseconds, no offset).
#[must_use]
pub fn format_iso(ts: &Timestamp) -> String {
    ts.format(ISO_FORMAT).to_string()
}

/// `serialize_with` helper for timestamp fields.
///
/// # Errors
///
/// Propagates the serializer error.
pub fn serialize_iso<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_iso(ts))
}
