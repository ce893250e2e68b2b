//! Generic filtered pagination over the content entities.
//!
//! All three collections answer the same question - "active records matching
//! these filters, ordered, sliced `[skip, skip+limit)`" - so the query shape
//! is built once here and each entity contributes only its predicates and
//! sort key.

use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, IntoCondition};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select};

use uyd_core::query::{EventFilter, NewsFilter, Page, ProgramFilter};

use super::entity::{event, news_article, program};

/// Per-entity configuration for the shared list query shape.
pub(crate) trait FilteredList: EntityTrait {
    type Filter;

    /// The `is_active = true` baseline plus the entity's optional predicates.
    fn conditions(filter: &Self::Filter) -> Condition;

    /// Deterministic ordering; pagination must be stable across calls.
    fn ordered(select: Select<Self>) -> Select<Self>;
}

/// Build the standard list query: filter, order, slice.
pub(crate) fn list_select<E: FilteredList>(filter: &E::Filter, page: Page) -> Select<E> {
    E::ordered(E::find().filter(E::conditions(filter)))
        .offset(page.skip)
        .limit(page.limit)
}

impl FilteredList for program::Entity {
    type Filter = ProgramFilter;

    fn conditions(filter: &ProgramFilter) -> Condition {
        let mut cond = Condition::all().add(program::Column::IsActive.eq(true));
        if let Some(category) = &filter.category {
            cond = cond.add(program::Column::Category.eq(category.clone()));
        }
        if let Some(featured) = filter.featured {
            cond = cond.add(program::Column::IsFeatured.eq(featured));
        }
        cond
    }

    fn ordered(select: Select<Self>) -> Select<Self> {
        select.order_by_asc(program::Column::Id)
    }
}

impl FilteredList for event::Entity {
    type Filter = EventFilter;

    fn conditions(filter: &EventFilter) -> Condition {
        let mut cond = Condition::all().add(event::Column::IsActive.eq(true));
        if let Some(event_type) = &filter.event_type {
            cond = cond.add(event::Column::EventType.eq(event_type.clone()));
        }
        if let Some(featured) = filter.featured {
            cond = cond.add(event::Column::IsFeatured.eq(featured));
        }
        if filter.upcoming {
            cond = cond.add(event::Column::StartDate.gte(Utc::now()));
        }
        if let Some(search) = &filter.search {
            cond = cond.add(title_or_description_matches(search));
        }
        cond
    }

    fn ordered(select: Select<Self>) -> Select<Self> {
        select.order_by_asc(event::Column::StartDate)
    }
}

impl FilteredList for news_article::Entity {
    type Filter = NewsFilter;

    fn conditions(filter: &NewsFilter) -> Condition {
        let mut cond = Condition::all().add(news_article::Column::IsActive.eq(true));
        if let Some(category) = &filter.category {
            cond = cond.add(news_article::Column::Category.eq(category.clone()));
        }
        if let Some(featured) = filter.featured {
            cond = cond.add(news_article::Column::IsFeatured.eq(featured));
        }
        cond
    }

    fn ordered(select: Select<Self>) -> Select<Self> {
        select.order_by_desc(news_article::Column::PublishDate)
    }
}

/// Case-insensitive substring match on event title or description.
pub(crate) fn title_or_description_matches(search: &str) -> Condition {
    let pattern = format!("%{}%", search);
    Condition::any()
        .add(
            Expr::col((event::Entity, event::Column::Title))
                .ilike(pattern.clone())
                .into_condition(),
        )
        .add(
            Expr::col((event::Entity, event::Column::Description))
                .ilike(pattern)
                .into_condition(),
        )
}

/// Active events whose `end_date` has not passed; the events board and its
/// facet counts both use this baseline. Rows without an end date are
/// excluded, matching how the board has always been computed.
pub(crate) fn not_ended() -> Condition {
    Condition::all()
        .add(event::Column::IsActive.eq(true))
        .add(event::Column::EndDate.gte(Utc::now()))
}
