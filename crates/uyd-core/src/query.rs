//! Query parameters shared by the listing endpoints.
//!
//! Every listing runs against active records only, applies its entity's
//! optional filters, orders deterministically and slices `[skip, skip+limit)`.
//! An unknown filter value matches nothing and yields an empty page rather
//! than an error.

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not provide one.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Offset/limit pagination window.
///
/// `limit = 0` is honored literally and returns an empty page; a `skip`
/// beyond the result size does the same.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Optional filters for program listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// Optional filters for event listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    pub event_type: Option<String>,
    pub featured: Option<bool>,
    /// Restrict to events whose `start_date` is at or after now.
    #[serde(default)]
    pub upcoming: bool,
    /// Case-insensitive substring match on title or description.
    pub search: Option<String>,
}

/// Optional filters for news listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// Count of active, not-yet-ended events for one event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventTypeCount {
    pub event_type: String,
    pub count: i64,
}

/// Facet counts backing the events page filter sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFacets {
    pub type_counts: Vec<EventTypeCount>,
    pub total: i64,
}

/// Active record counts across the three collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteStats {
    pub programs: i64,
    pub events: i64,
    pub news: i64,
}
