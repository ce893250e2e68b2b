//! Site statistics endpoint.

use actix_web::{HttpResponse, web};

use uyd_core::query::SiteStats;
use uyd_shared::dto::SiteStatsResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Placeholder until a subscribers table exists.
const SUBSCRIBERS_COUNT: i64 = 1250;

/// GET /api/core/stats
pub async fn site_stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let stats = SiteStats {
        programs: state.programs.count_active().await?,
        events: state.events.count_active().await?,
        news: state.news.count_active().await?,
    };

    Ok(HttpResponse::Ok().json(SiteStatsResponse::from_stats(stats, SUBSCRIBERS_COUNT)))
}
