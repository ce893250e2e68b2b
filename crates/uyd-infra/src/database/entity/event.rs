//! Event entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub event_type: String,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: Option<DateTimeWithTimeZone>,
    pub location: String,
    pub max_participants: Option<i32>,
    pub featured_image: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub registration_deadline: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_featured: bool,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Event.
impl From<Model> for uyd_core::domain::Event {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            event_type: model.event_type,
            start_date: model.start_date.into(),
            end_date: model.end_date.map(Into::into),
            location: model.location,
            max_participants: model.max_participants,
            featured_image: model.featured_image,
            content: model.content,
            registration_deadline: model.registration_deadline.map(Into::into),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            is_featured: model.is_featured,
            is_active: model.is_active,
        }
    }
}
