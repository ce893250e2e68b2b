//! SeaORM repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, DbErr, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use uyd_core::domain::{
    Event, EventPatch, NewEvent, NewNewsArticle, NewProgram, NewsArticle, NewsArticlePatch,
    Program, ProgramPatch,
};
use uyd_core::error::RepoError;
use uyd_core::ports::{EventRepository, NewsRepository, ProgramRepository};
use uyd_core::query::{EventFacets, EventFilter, EventTypeCount, NewsFilter, Page, ProgramFilter};

use super::entity::{event, news_article, program};
use super::query::{list_select, not_ended, title_or_description_matches};

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

/// Program repository backed by SeaORM.
pub struct SeaOrmProgramRepository {
    db: DbConn,
}

impl SeaOrmProgramRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Build the UPDATE model for a program patch: only provided fields become
/// `Set`, everything else stays untouched; `updated_at` always refreshes.
pub(crate) fn program_patch_model(
    id: i32,
    patch: ProgramPatch,
    now: chrono::DateTime<Utc>,
) -> program::ActiveModel {
    let mut model = program::ActiveModel {
        id: Unchanged(id),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    if let Some(title) = patch.title {
        model.title = Set(title);
    }
    if let Some(description) = patch.description {
        model.description = Set(description);
    }
    if let Some(category) = patch.category {
        model.category = Set(category);
    }
    if let Some(content) = patch.content {
        model.content = Set(content);
    }
    if let Some(featured_image) = patch.featured_image {
        model.featured_image = Set(Some(featured_image));
    }
    if let Some(is_featured) = patch.is_featured {
        model.is_featured = Set(is_featured);
    }
    model
}

/// Build the UPDATE model for a soft delete: clear `is_active`, refresh
/// `updated_at`, leave every other column alone.
pub(crate) fn program_deactivate_model(id: i32, now: chrono::DateTime<Utc>) -> program::ActiveModel {
    program::ActiveModel {
        id: Unchanged(id),
        is_active: Set(false),
        updated_at: Set(now.into()),
        ..Default::default()
    }
}

#[async_trait]
impl ProgramRepository for SeaOrmProgramRepository {
    async fn create(&self, draft: NewProgram) -> Result<Program, RepoError> {
        let now = Utc::now();
        let model = program::ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            description: Set(draft.description),
            category: Set(draft.category),
            content: Set(draft.content),
            featured_image: Set(draft.featured_image),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            is_featured: Set(draft.is_featured),
            is_active: Set(true),
        };

        let saved = model.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(program_id = saved.id, "Created program");
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Program>, RepoError> {
        let result = program::Entity::find()
            .filter(
                Condition::all()
                    .add(program::Column::Id.eq(id))
                    .add(program::Column::IsActive.eq(true)),
            )
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, filter: ProgramFilter, page: Page) -> Result<Vec<Program>, RepoError> {
        let result = list_select::<program::Entity>(&filter, page)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn featured(&self) -> Result<Vec<Program>, RepoError> {
        let result = program::Entity::find()
            .filter(
                Condition::all()
                    .add(program::Column::IsActive.eq(true))
                    .add(program::Column::IsFeatured.eq(true)),
            )
            .order_by_asc(program::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, patch: ProgramPatch) -> Result<Program, RepoError> {
        let model = program_patch_model(id, patch, Utc::now());
        let updated = model.update(&self.db).await.map_err(map_db_err)?;
        Ok(updated.into())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), RepoError> {
        let model = program_deactivate_model(id, Utc::now());
        model.update(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(program_id = id, "Soft-deleted program");
        Ok(())
    }

    async fn count_active(&self) -> Result<i64, RepoError> {
        let count = program::Entity::find()
            .filter(program::Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count as i64)
    }
}

/// Event repository backed by SeaORM.
pub struct SeaOrmEventRepository {
    db: DbConn,
}

impl SeaOrmEventRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

pub(crate) fn event_patch_model(
    id: i32,
    patch: EventPatch,
    now: chrono::DateTime<Utc>,
) -> event::ActiveModel {
    let mut model = event::ActiveModel {
        id: Unchanged(id),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    if let Some(title) = patch.title {
        model.title = Set(title);
    }
    if let Some(description) = patch.description {
        model.description = Set(description);
    }
    if let Some(event_type) = patch.event_type {
        model.event_type = Set(event_type);
    }
    if let Some(start_date) = patch.start_date {
        model.start_date = Set(start_date.into());
    }
    if let Some(end_date) = patch.end_date {
        model.end_date = Set(Some(end_date.into()));
    }
    if let Some(location) = patch.location {
        model.location = Set(location);
    }
    if let Some(max_participants) = patch.max_participants {
        model.max_participants = Set(Some(max_participants));
    }
    if let Some(featured_image) = patch.featured_image {
        model.featured_image = Set(Some(featured_image));
    }
    if let Some(content) = patch.content {
        model.content = Set(Some(content));
    }
    if let Some(deadline) = patch.registration_deadline {
        model.registration_deadline = Set(Some(deadline.into()));
    }
    if let Some(is_featured) = patch.is_featured {
        model.is_featured = Set(is_featured);
    }
    model
}

pub(crate) fn event_deactivate_model(id: i32, now: chrono::DateTime<Utc>) -> event::ActiveModel {
    event::ActiveModel {
        id: Unchanged(id),
        is_active: Set(false),
        updated_at: Set(now.into()),
        ..Default::default()
    }
}

/// Row shape for the facet aggregation.
#[derive(Debug, FromQueryResult)]
struct TypeCountRow {
    event_type: String,
    count: i64,
}

#[async_trait]
impl EventRepository for SeaOrmEventRepository {
    async fn create(&self, draft: NewEvent) -> Result<Event, RepoError> {
        let now = Utc::now();
        let model = event::ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            description: Set(draft.description),
            event_type: Set(draft.event_type),
            start_date: Set(draft.start_date.into()),
            end_date: Set(draft.end_date.map(Into::into)),
            location: Set(draft.location),
            max_participants: Set(draft.max_participants),
            featured_image: Set(draft.featured_image),
            content: Set(draft.content),
            registration_deadline: Set(draft.registration_deadline.map(Into::into)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            is_featured: Set(draft.is_featured),
            is_active: Set(true),
        };

        let saved = model.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(event_id = saved.id, "Created event");
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Event>, RepoError> {
        let result = event::Entity::find()
            .filter(
                Condition::all()
                    .add(event::Column::Id.eq(id))
                    .add(event::Column::IsActive.eq(true)),
            )
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, filter: EventFilter, page: Page) -> Result<Vec<Event>, RepoError> {
        let result = list_select::<event::Entity>(&filter, page)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn upcoming(&self, limit: u64) -> Result<Vec<Event>, RepoError> {
        let result = event::Entity::find()
            .filter(
                Condition::all()
                    .add(event::Column::IsActive.eq(true))
                    .add(event::Column::StartDate.gte(Utc::now())),
            )
            .order_by_asc(event::Column::StartDate)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn facets(&self) -> Result<EventFacets, RepoError> {
        let rows = event::Entity::find()
            .select_only()
            .column(event::Column::EventType)
            .column_as(event::Column::Id.count(), "count")
            .filter(not_ended())
            .group_by(event::Column::EventType)
            .into_model::<TypeCountRow>()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        let total = event::Entity::find()
            .filter(not_ended())
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(EventFacets {
            type_counts: rows
                .into_iter()
                .map(|row| EventTypeCount {
                    event_type: row.event_type,
                    count: row.count,
                })
                .collect(),
            total: total as i64,
        })
    }

    async fn board(&self, filter: EventFilter, limit: u64) -> Result<Vec<Event>, RepoError> {
        let mut cond = not_ended();
        if let Some(event_type) = &filter.event_type {
            cond = cond.add(event::Column::EventType.eq(event_type.clone()));
        }
        if let Some(search) = &filter.search {
            cond = cond.add(title_or_description_matches(search));
        }

        let result = event::Entity::find()
            .filter(cond)
            .order_by_asc(event::Column::StartDate)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, patch: EventPatch) -> Result<Event, RepoError> {
        let model = event_patch_model(id, patch, Utc::now());
        let updated = model.update(&self.db).await.map_err(map_db_err)?;
        Ok(updated.into())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), RepoError> {
        let model = event_deactivate_model(id, Utc::now());
        model.update(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(event_id = id, "Soft-deleted event");
        Ok(())
    }

    async fn count_active(&self) -> Result<i64, RepoError> {
        let count = event::Entity::find()
            .filter(event::Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count as i64)
    }
}

/// News repository backed by SeaORM.
pub struct SeaOrmNewsRepository {
    db: DbConn,
}

impl SeaOrmNewsRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

pub(crate) fn news_patch_model(
    id: i32,
    patch: NewsArticlePatch,
    now: chrono::DateTime<Utc>,
) -> news_article::ActiveModel {
    let mut model = news_article::ActiveModel {
        id: Unchanged(id),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    if let Some(title) = patch.title {
        model.title = Set(title);
    }
    if let Some(content) = patch.content {
        model.content = Set(content);
    }
    if let Some(excerpt) = patch.excerpt {
        model.excerpt = Set(Some(excerpt));
    }
    if let Some(category) = patch.category {
        model.category = Set(category);
    }
    if let Some(author) = patch.author {
        model.author = Set(author);
    }
    if let Some(publish_date) = patch.publish_date {
        model.publish_date = Set(publish_date.into());
    }
    if let Some(featured_image) = patch.featured_image {
        model.featured_image = Set(Some(featured_image));
    }
    if let Some(is_featured) = patch.is_featured {
        model.is_featured = Set(is_featured);
    }
    model
}

pub(crate) fn news_deactivate_model(
    id: i32,
    now: chrono::DateTime<Utc>,
) -> news_article::ActiveModel {
    news_article::ActiveModel {
        id: Unchanged(id),
        is_active: Set(false),
        updated_at: Set(now.into()),
        ..Default::default()
    }
}

#[async_trait]
impl NewsRepository for SeaOrmNewsRepository {
    async fn create(&self, draft: NewNewsArticle) -> Result<NewsArticle, RepoError> {
        let now = Utc::now();
        let model = news_article::ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            content: Set(draft.content),
            excerpt: Set(draft.excerpt),
            category: Set(draft.category),
            author: Set(draft.author),
            publish_date: Set(draft.publish_date.unwrap_or(now).into()),
            featured_image: Set(draft.featured_image),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            is_featured: Set(draft.is_featured),
            is_active: Set(true),
        };

        let saved = model.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(article_id = saved.id, "Created news article");
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<NewsArticle>, RepoError> {
        let result = news_article::Entity::find()
            .filter(
                Condition::all()
                    .add(news_article::Column::Id.eq(id))
                    .add(news_article::Column::IsActive.eq(true)),
            )
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, filter: NewsFilter, page: Page) -> Result<Vec<NewsArticle>, RepoError> {
        let result = list_select::<news_article::Entity>(&filter, page)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn latest(&self, limit: u64) -> Result<Vec<NewsArticle>, RepoError> {
        let result = news_article::Entity::find()
            .filter(news_article::Column::IsActive.eq(true))
            .order_by_desc(news_article::Column::PublishDate)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn featured(&self, limit: u64) -> Result<Vec<NewsArticle>, RepoError> {
        let result = news_article::Entity::find()
            .filter(
                Condition::all()
                    .add(news_article::Column::IsActive.eq(true))
                    .add(news_article::Column::IsFeatured.eq(true)),
            )
            .order_by_desc(news_article::Column::PublishDate)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, patch: NewsArticlePatch) -> Result<NewsArticle, RepoError> {
        let model = news_patch_model(id, patch, Utc::now());
        let updated = model.update(&self.db).await.map_err(map_db_err)?;
        Ok(updated.into())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), RepoError> {
        let model = news_deactivate_model(id, Utc::now());
        model.update(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(article_id = id, "Soft-deleted news article");
        Ok(())
    }

    async fn count_active(&self) -> Result<i64, RepoError> {
        let count = news_article::Entity::find()
            .filter(news_article::Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count as i64)
    }
}
