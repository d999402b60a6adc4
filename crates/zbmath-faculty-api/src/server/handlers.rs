//! Request handlers.
//!
//! Query parameters are parsed leniently: an unparseable `year` or `limit`
//! is ignored rather than rejected, matching the read-mostly, best-effort
//! contract of the dashboard API.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::{Value, json};

use super::AppState;
use crate::cache::epoch_seconds;

/// Default cap on the publications endpoint.
const DEFAULT_PUBLICATION_LIMIT: usize = 50;

#[derive(Debug, Default, Deserialize)]
pub struct FacultyQuery {
    authors: Option<String>,
    cache: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileQuery {
    cache: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PublicationsQuery {
    limit: Option<String>,
    year: Option<String>,
}

/// `cache` query flag: anything but an explicit "false" means "use cache".
fn use_cache(flag: Option<&str>) -> bool {
    flag.is_none_or(|value| !value.eq_ignore_ascii_case("false"))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Faculty Dashboard backend is running"
    }))
}

pub async fn list_faculty(
    State(state): State<AppState>,
    Query(query): Query<FacultyQuery>,
) -> Json<Value> {
    let cached = use_cache(query.cache.as_deref());
    let authors: Vec<String> = match query.authors.as_deref() {
        Some(csv) if !csv.trim().is_empty() => csv
            .split(',')
            .map(|author| author.trim().to_string())
            .filter(|author| !author.is_empty())
            .collect(),
        _ => state.faculty.clone(),
    };

    let mut data = Vec::with_capacity(authors.len());
    for author_id in &authors {
        data.push(state.cache.get_or_fetch(author_id, cached).await);
    }

    Json(json!({
        "success": true,
        "count": data.len(),
        "data": data,
        "timestamp": epoch_seconds()
    }))
}

pub async fn get_faculty(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
    Query(query): Query<ProfileQuery>,
) -> Json<Value> {
    let profile = state.cache.get_or_fetch(&author_id, use_cache(query.cache.as_deref())).await;

    Json(json!({
        "success": true,
        "data": profile,
        "timestamp": epoch_seconds()
    }))
}

pub async fn get_publications(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
    Query(query): Query<PublicationsQuery>,
) -> Json<Value> {
    let limit = query
        .limit
        .as_deref()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_PUBLICATION_LIMIT);
    let year_filter = query.year.as_deref().and_then(|value| value.trim().parse::<i32>().ok());

    let profile = state.cache.get_or_fetch(&author_id, true).await;
    let publications: Vec<_> = profile
        .publications
        .into_iter()
        .filter(|publication| year_filter.is_none_or(|year| publication.year == Some(year)))
        .take(limit)
        .collect();

    Json(json!({
        "success": true,
        "author_id": author_id,
        "count": publications.len(),
        "data": publications,
        "timestamp": epoch_seconds()
    }))
}

pub async fn get_metrics(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
) -> Json<Value> {
    let profile = state.cache.get_or_fetch(&author_id, true).await;

    Json(json!({
        "success": true,
        "author_id": author_id,
        "name": profile.name,
        "metrics": profile.metrics,
        "num_publications": profile.num_publications,
        "num_co_authors": profile.num_co_authors,
        "timestamp": epoch_seconds()
    }))
}

pub async fn clear_cache(State(state): State<AppState>) -> Json<Value> {
    state.cache.invalidate_all().await;

    Json(json!({
        "success": true,
        "message": "Cache cleared"
    }))
}

pub async fn cache_status(State(state): State<AppState>) -> Json<Value> {
    let status = state.cache.status().await;

    Json(json!({
        "success": true,
        "cache_size": status.cache_size,
        "cache_expiry_seconds": status.cache_expiry_seconds,
        "entries": status.entries,
        "timestamp": epoch_seconds()
    }))
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "Endpoint not found",
            "path": uri.path()
        })),
    )
}
