//! Entry intake, removal, and listing.
//!
//! Validation happens here, before anything is written: a malformed amount
//! or date rejects the whole action and no partial write occurs. Every
//! successful mutation publishes a fresh full snapshot to the live feed.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Utc};
use shared::{Entry, NewEntryRequest, SeriesResponse};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::db::DbConnection;
use crate::domain::series;
use crate::sync::EntryFeed;

/// Failures a single user action can end in. Each is terminal for that
/// action; nothing is retried.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("amount must be a finite number")]
    InvalidAmount,
    #[error("date must be a calendar date in YYYY-MM-DD form")]
    InvalidDate,
    #[error("entry not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Service for recording and removing win/loss entries.
#[derive(Clone)]
pub struct EntryService {
    db: DbConnection,
    feed: Arc<EntryFeed>,
}

impl EntryService {
    pub fn new(db: DbConnection, feed: Arc<EntryFeed>) -> Self {
        Self { db, feed }
    }

    /// Record a new entry for `user`.
    ///
    /// The store assigns the opaque id; the ordering timestamp is derived
    /// from the entry date (UTC midnight, epoch millis), matching how the
    /// snapshot listing is ordered for delivery.
    pub async fn add_entry(
        &self,
        user: &CurrentUser,
        request: NewEntryRequest,
    ) -> Result<Entry, EntryError> {
        if !request.amount.is_finite() {
            return Err(EntryError::InvalidAmount);
        }
        let date = parse_entry_date(&request.date)?;

        let entry = Entry {
            id: Uuid::new_v4().to_string(),
            user_id: user.uid.clone(),
            date,
            amount: request.amount,
            timestamp: ordering_timestamp(date),
            created_at: Utc::now().to_rfc3339(),
        };

        info!(
            "Adding entry {} for user {}: {} on {}",
            entry.id, user.uid, entry.amount, entry.date
        );
        self.db.store_entry(&entry).await?;
        self.publish_snapshot(&user.uid).await;

        Ok(entry)
    }

    /// Remove one of the user's entries by id.
    pub async fn delete_entry(&self, user: &CurrentUser, entry_id: &str) -> Result<(), EntryError> {
        info!("Deleting entry {} for user {}", entry_id, user.uid);

        let deleted = self.db.delete_entry(&user.uid, entry_id).await?;
        if !deleted {
            return Err(EntryError::NotFound);
        }
        self.publish_snapshot(&user.uid).await;

        Ok(())
    }

    /// The user's full entry snapshot, ordered by timestamp ascending.
    pub async fn list_entries(&self, user: &CurrentUser) -> Result<Vec<Entry>, EntryError> {
        Ok(self.db.list_entries(&user.uid).await?)
    }

    /// The derived chart series plus the current total for the header.
    pub async fn series_for(&self, user: &CurrentUser) -> Result<SeriesResponse, EntryError> {
        let entries = self.list_entries(user).await?;
        let series = series::derive_series(&entries);
        let current_total = series::current_total(&series);
        Ok(SeriesResponse { series, current_total })
    }

    /// Push the user's current full snapshot to live subscribers. The write
    /// has already succeeded at this point; a failed reload only loses a
    /// push, not data.
    async fn publish_snapshot(&self, user_id: &str) {
        match self.db.list_entries(user_id).await {
            Ok(entries) => self.feed.publish(user_id, entries),
            Err(err) => {
                warn!("Failed to load snapshot for user {}: {:#}", user_id, err);
            }
        }
    }
}

/// Ordering key for delivery: UTC midnight of the entry date in epoch millis.
fn ordering_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

fn parse_entry_date(raw: &str) -> Result<NaiveDate, EntryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EntryError::InvalidDate);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| EntryError::InvalidDate)
}
