use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod locale;

/// A single dated win/loss record belonging to one user.
///
/// `date` is a plain calendar date (no time component); it serializes to the
/// `YYYY-MM-DD` wire form. Multiple entries may share a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque identifier assigned by the store on creation
    pub id: String,
    /// ID of the user this entry belongs to
    pub user_id: String,
    /// Calendar date the win/loss happened on
    pub date: NaiveDate,
    /// Signed amount: positive for a win, negative for a loss
    pub amount: f64,
    /// Ordering key derived from `date` at creation time (epoch millis at UTC midnight)
    pub timestamp: i64,
    /// RFC 3339 instant the record was written
    pub created_at: String,
}

/// Payload for recording a new entry.
///
/// The date travels as a raw string so the service can reject malformed input
/// with a user-facing message instead of a bare deserialization error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntryRequest {
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    /// Signed amount: positive for a win, negative for a loss
    pub amount: f64,
}

/// Per-date aggregate of one or more entries plus the cumulative total up to
/// and including that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// Sum of all entry amounts sharing this date
    pub daily_amount: f64,
    /// Cumulative sum of daily amounts up to and including this date
    pub running_total: f64,
    /// `running_total` when above zero, else 0 (upper area shading)
    pub positive_part: f64,
    /// `running_total` when below zero, else 0 (lower area shading)
    pub negative_part: f64,
}

/// The derived chart series and the scalar the header displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub series: Vec<DailyPoint>,
    /// Running total of the last point, or 0 for an empty series
    pub current_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryListResponse {
    /// Full snapshot for one user, ordered by timestamp ascending
    pub entries: Vec<Entry>,
}

/// Error body returned by the API.
///
/// `key` is a stable locale-table key (see [`locale`]) so a rendering surface
/// can translate the failure exactly like the message table does; `message`
/// is the English default for clients that don't localize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub key: String,
    pub message: String,
}
