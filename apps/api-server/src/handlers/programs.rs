//! Program handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use uyd_core::domain::{NewProgram, ProgramPatch};
use uyd_core::error::RepoError;
use uyd_core::query::{DEFAULT_PAGE_LIMIT, Page, ProgramFilter};
use uyd_shared::MessageResponse;

use crate::middleware::api_key::ApiKey;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct ProgramListQuery {
    #[serde(default)]
    skip: u64,
    #[serde(default = "default_limit")]
    limit: u64,
    category: Option<String>,
    featured: Option<bool>,
}

/// POST /api/programs
pub async fn create(
    _key: ApiKey,
    state: web::Data<AppState>,
    body: web::Json<NewProgram>,
) -> AppResult<HttpResponse> {
    let program = state.programs.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(program))
}

/// GET /api/programs
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ProgramListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = ProgramFilter {
        category: query.category,
        featured: query.featured,
    };
    let page = Page {
        skip: query.skip,
        limit: query.limit,
    };

    let programs = state.programs.list(filter, page).await?;
    Ok(HttpResponse::Ok().json(programs))
}

/// GET /api/programs/featured
pub async fn featured(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let programs = state.programs.featured().await?;
    Ok(HttpResponse::Ok().json(programs))
}

/// GET /api/programs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let program = state
        .programs
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Program not found".to_string()))?;

    Ok(HttpResponse::Ok().json(program))
}

/// PUT /api/programs/{id}
pub async fn update(
    _key: ApiKey,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<ProgramPatch>,
) -> AppResult<HttpResponse> {
    let program = state
        .programs
        .update(path.into_inner(), body.into_inner())
        .await
        .map_err(|err| match err {
            RepoError::NotFound => AppError::NotFound("Program not found".to_string()),
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(program))
}

/// DELETE /api/programs/{id} - soft delete.
pub async fn delete(
    _key: ApiKey,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state
        .programs
        .soft_delete(path.into_inner())
        .await
        .map_err(|err| match err {
            RepoError::NotFound => AppError::NotFound("Program not found".to_string()),
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Program deleted successfully")))
}
