//! News article handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use uyd_core::domain::{NewNewsArticle, NewsArticlePatch};
use uyd_core::error::RepoError;
use uyd_core::query::{DEFAULT_PAGE_LIMIT, NewsFilter, Page};
use uyd_shared::MessageResponse;

use crate::middleware::api_key::ApiKey;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Number of articles shown by GET /api/news/latest.
const LATEST_LIMIT: u64 = 10;

/// Number of articles shown by GET /api/news/featured.
const FEATURED_LIMIT: u64 = 5;

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct NewsListQuery {
    #[serde(default)]
    skip: u64,
    #[serde(default = "default_limit")]
    limit: u64,
    category: Option<String>,
    featured: Option<bool>,
}

/// POST /api/news
pub async fn create(
    _key: ApiKey,
    state: web::Data<AppState>,
    body: web::Json<NewNewsArticle>,
) -> AppResult<HttpResponse> {
    let article = state.news.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(article))
}

/// GET /api/news
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<NewsListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = NewsFilter {
        category: query.category,
        featured: query.featured,
    };
    let page = Page {
        skip: query.skip,
        limit: query.limit,
    };

    let articles = state.news.list(filter, page).await?;
    Ok(HttpResponse::Ok().json(articles))
}

/// GET /api/news/latest
pub async fn latest(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let articles = state.news.latest(LATEST_LIMIT).await?;
    Ok(HttpResponse::Ok().json(articles))
}

/// GET /api/news/featured
pub async fn featured(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let articles = state.news.featured(FEATURED_LIMIT).await?;
    Ok(HttpResponse::Ok().json(articles))
}

/// GET /api/news/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let article = state
        .news
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;

    Ok(HttpResponse::Ok().json(article))
}

/// PUT /api/news/{id}
pub async fn update(
    _key: ApiKey,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<NewsArticlePatch>,
) -> AppResult<HttpResponse> {
    let article = state
        .news
        .update(path.into_inner(), body.into_inner())
        .await
        .map_err(|err| match err {
            RepoError::NotFound => AppError::NotFound("Article not found".to_string()),
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(article))
}

/// DELETE /api/news/{id} - soft delete.
pub async fn delete(
    _key: ApiKey,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state
        .news
        .soft_delete(path.into_inner())
        .await
        .map_err(|err| match err {
            RepoError::NotFound => AppError::NotFound("Article not found".to_string()),
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Article deleted successfully")))
}
