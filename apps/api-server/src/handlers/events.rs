//! Event handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use uyd_core::domain::{EventPatch, NewEvent};
use uyd_core::error::RepoError;
use uyd_core::query::{DEFAULT_PAGE_LIMIT, EventFilter, Page};
use uyd_shared::MessageResponse;
use uyd_shared::viewmodel::{EventCard, EventsBoard};

use crate::middleware::api_key::ApiKey;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Number of events shown by GET /api/events/upcoming.
const UPCOMING_LIMIT: u64 = 10;

/// Number of events shown on the events board.
const BOARD_LIMIT: u64 = 17;

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    #[serde(default)]
    skip: u64,
    #[serde(default = "default_limit")]
    limit: u64,
    event_type: Option<String>,
    featured: Option<bool>,
    #[serde(default)]
    upcoming: bool,
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    search: Option<String>,
    event_type: Option<String>,
}

/// POST /api/events
pub async fn create(
    _key: ApiKey,
    state: web::Data<AppState>,
    body: web::Json<NewEvent>,
) -> AppResult<HttpResponse> {
    let event = state.events.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(event))
}

/// GET /api/events
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<EventListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = EventFilter {
        event_type: query.event_type,
        featured: query.featured,
        upcoming: query.upcoming,
        search: query.search,
    };
    let page = Page {
        skip: query.skip,
        limit: query.limit,
    };

    let events = state.events.list(filter, page).await?;
    Ok(HttpResponse::Ok().json(events))
}

/// GET /api/events/upcoming
pub async fn upcoming(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let events = state.events.upcoming(UPCOMING_LIMIT).await?;
    Ok(HttpResponse::Ok().json(events))
}

/// GET /api/events/board
///
/// Payload for the events page: active, not-yet-ended events (optionally
/// narrowed by search or type) plus the facet counts for the filter sidebar.
pub async fn board(
    state: web::Data<AppState>,
    query: web::Query<BoardQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = EventFilter {
        event_type: query.event_type.clone(),
        search: query.search.clone(),
        ..Default::default()
    };

    let events = state.events.board(filter, BOARD_LIMIT).await?;
    let facets = state.events.facets().await?;

    let board = EventsBoard {
        events: events.into_iter().map(EventCard::from).collect(),
        type_counts: facets.type_counts,
        total: facets.total,
        search: query.search,
        event_type: query.event_type,
    };

    Ok(HttpResponse::Ok().json(board))
}

/// GET /api/events/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let event = state
        .events
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok(HttpResponse::Ok().json(event))
}

/// PUT /api/events/{id}
pub async fn update(
    _key: ApiKey,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<EventPatch>,
) -> AppResult<HttpResponse> {
    let event = state
        .events
        .update(path.into_inner(), body.into_inner())
        .await
        .map_err(|err| match err {
            RepoError::NotFound => AppError::NotFound("Event not found".to_string()),
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(event))
}

/// DELETE /api/events/{id} - soft delete.
pub async fn delete(
    _key: ApiKey,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state
        .events
        .soft_delete(path.into_inner())
        .await
        .map_err(|err| match err {
            RepoError::NotFound => AppError::NotFound("Event not found".to_string()),
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Event deleted successfully")))
}
