use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    response::IntoResponse,
    Json,
};
use shared::locale::{self, Language, TextKey};
use shared::{EntryListResponse, ErrorResponse, NewEntryRequest, SeriesResponse};
use std::sync::Arc;
use tokio_stream::{wrappers::WatchStream, StreamExt};
use tracing::info;

use crate::auth::CurrentUser;
use crate::domain::{series, EntryError, EntryService};
use crate::sync::EntryFeed;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub entry_service: EntryService,
    pub feed: Arc<EntryFeed>,
}

impl AppState {
    pub fn new(entry_service: EntryService, feed: Arc<EntryFeed>) -> Self {
        Self { entry_service, feed }
    }
}

/// Build the error body for a user action: a stable locale key the rendering
/// surface can translate, plus the English default text.
fn error_body(key: TextKey) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        key: key.name().to_string(),
        message: locale::text(Language::En, key).to_string(),
    })
}

/// Map a failed user action to a status and a localized message key.
/// `action_key` is the message used when the store itself failed.
fn error_response(err: &EntryError, action_key: TextKey) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        EntryError::InvalidAmount => {
            (StatusCode::BAD_REQUEST, error_body(TextKey::ErrorInvalidAmount))
        }
        EntryError::InvalidDate => (StatusCode::BAD_REQUEST, error_body(TextKey::ErrorInvalidDate)),
        EntryError::NotFound => (StatusCode::NOT_FOUND, error_body(TextKey::ErrorDeleteEntry)),
        EntryError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, error_body(action_key)),
    }
}

/// Axum handler function for POST /api/entries
pub async fn create_entry(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<NewEntryRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/entries - user: {}, date: {:?}, amount: {}",
        user.uid, request.date, request.amount
    );

    match state.entry_service.add_entry(&user, request).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => {
            tracing::error!("Error adding entry: {:?}", e);
            error_response(&e, TextKey::ErrorAddEntry).into_response()
        }
    }
}

/// Axum handler function for DELETE /api/entries/:id
pub async fn delete_entry(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(entry_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/entries/{} - user: {}", entry_id, user.uid);

    match state.entry_service.delete_entry(&user, &entry_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Error deleting entry {}: {:?}", entry_id, e);
            error_response(&e, TextKey::ErrorDeleteEntry).into_response()
        }
    }
}

/// Axum handler function for GET /api/entries
pub async fn list_entries(State(state): State<AppState>, user: CurrentUser) -> impl IntoResponse {
    info!("GET /api/entries - user: {}", user.uid);

    match state.entry_service.list_entries(&user).await {
        Ok(entries) => (StatusCode::OK, Json(EntryListResponse { entries })).into_response(),
        Err(e) => {
            tracing::error!("Error listing entries: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing entries").into_response()
        }
    }
}

/// Axum handler function for GET /api/series
pub async fn get_series(State(state): State<AppState>, user: CurrentUser) -> impl IntoResponse {
    info!("GET /api/series - user: {}", user.uid);

    match state.entry_service.series_for(&user).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!("Error deriving series: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error deriving series").into_response()
        }
    }
}

/// Axum handler function for GET /api/series/live
///
/// Server-sent events: one `series` event per published snapshot, each
/// carrying the freshly derived series. The first event reflects the state
/// at subscription time.
pub async fn live_series(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, (StatusCode, &'static str)> {
    info!("GET /api/series/live - user: {}", user.uid);

    let entries = state.entry_service.list_entries(&user).await.map_err(|e| {
        tracing::error!("Error loading entries for live stream: {:?}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Error loading entries")
    })?;

    let receiver = state.feed.subscribe(&user.uid, entries);
    let stream = WatchStream::new(receiver).map(|entries| {
        let series = series::derive_series(&entries);
        let current_total = series::current_total(&series);
        Event::default()
            .event("series")
            .json_data(&SeriesResponse { series, current_total })
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

/// Axum handler function for GET /api/locale/:lang
pub async fn get_locale(Path(lang): Path<String>) -> impl IntoResponse {
    match Language::from_code(&lang) {
        Some(language) => (StatusCode::OK, Json(locale::table(language))).into_response(),
        None => (StatusCode::NOT_FOUND, "Unknown language").into_response(),
    }
}
