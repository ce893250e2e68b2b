//! Data Transfer Objects - request/response types for the API.
//!
//! Entity bodies serialize the domain types from `uyd-core` directly; the
//! types here cover the remaining surfaces (uploads, stats).

use serde::{Deserialize, Serialize};

use uyd_core::query::SiteStats;

/// Response for a successful image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Relative path of the stored file, `assets/upload/<name>`.
    pub path: String,
}

/// Per-collection total wrapper used by the stats endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionTotal {
    pub total: i64,
}

/// Engagement figures. The subscriber count is a fixed placeholder until a
/// subscribers table exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementStats {
    pub subscribers: i64,
}

/// Response for GET /api/core/stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteStatsResponse {
    pub programs: CollectionTotal,
    pub events: CollectionTotal,
    pub news: CollectionTotal,
    pub engagement: EngagementStats,
}

impl SiteStatsResponse {
    pub fn from_stats(stats: SiteStats, subscribers: i64) -> Self {
        Self {
            programs: CollectionTotal {
                total: stats.programs,
            },
            events: CollectionTotal {
                total: stats.events,
            },
            news: CollectionTotal { total: stats.news },
            engagement: EngagementStats { subscribers },
        }
    }
}
