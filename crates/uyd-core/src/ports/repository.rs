use async_trait::async_trait;

use crate::domain::{
    Event, EventPatch, NewEvent, NewNewsArticle, NewProgram, NewsArticle, NewsArticlePatch,
    Program, ProgramPatch,
};
use crate::error::RepoError;
use crate::query::{EventFacets, EventFilter, NewsFilter, Page, ProgramFilter};

/// Program repository.
///
/// Reads (`find_by_id`, `list`, `featured`) see active records only.
/// `update` and `soft_delete` locate the record by id regardless of its
/// soft-delete state; that is the administrative path. Nothing physically
/// removes a record.
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    async fn create(&self, draft: NewProgram) -> Result<Program, RepoError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Program>, RepoError>;

    /// Active programs matching `filter`, ordered by id ascending.
    async fn list(&self, filter: ProgramFilter, page: Page) -> Result<Vec<Program>, RepoError>;

    /// Active featured programs, unbounded.
    async fn featured(&self) -> Result<Vec<Program>, RepoError>;

    /// Apply `patch`; only provided fields overwrite. Refreshes `updated_at`.
    async fn update(&self, id: i32, patch: ProgramPatch) -> Result<Program, RepoError>;

    /// Flip `is_active` to false. Idempotent on already-deleted records.
    async fn soft_delete(&self, id: i32) -> Result<(), RepoError>;

    async fn count_active(&self) -> Result<i64, RepoError>;
}

/// Event repository. Listings order ascending by `start_date`.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, draft: NewEvent) -> Result<Event, RepoError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Event>, RepoError>;

    async fn list(&self, filter: EventFilter, page: Page) -> Result<Vec<Event>, RepoError>;

    /// Next `limit` active events with `start_date` at or after now.
    async fn upcoming(&self, limit: u64) -> Result<Vec<Event>, RepoError>;

    /// Per-type counts and total over active events that have not ended yet
    /// (`end_date >= now`). Drives the events page facet sidebar.
    async fn facets(&self) -> Result<EventFacets, RepoError>;

    /// Active, not-yet-ended events for the events board, with the same
    /// optional search/type filters as `list`.
    async fn board(&self, filter: EventFilter, limit: u64) -> Result<Vec<Event>, RepoError>;

    async fn update(&self, id: i32, patch: EventPatch) -> Result<Event, RepoError>;

    async fn soft_delete(&self, id: i32) -> Result<(), RepoError>;

    async fn count_active(&self) -> Result<i64, RepoError>;
}

/// News repository. Listings order descending by `publish_date`.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn create(&self, draft: NewNewsArticle) -> Result<NewsArticle, RepoError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<NewsArticle>, RepoError>;

    async fn list(&self, filter: NewsFilter, page: Page) -> Result<Vec<NewsArticle>, RepoError>;

    /// Most recent `limit` active articles.
    async fn latest(&self, limit: u64) -> Result<Vec<NewsArticle>, RepoError>;

    /// Active featured articles, most recent first, capped at `limit`.
    async fn featured(&self, limit: u64) -> Result<Vec<NewsArticle>, RepoError>;

    async fn update(&self, id: i32, patch: NewsArticlePatch) -> Result<NewsArticle, RepoError>;

    async fn soft_delete(&self, id: i32) -> Result<(), RepoError>;

    async fn count_active(&self) -> Result<i64, RepoError>;
}
