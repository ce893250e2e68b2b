//! Program entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "programs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub featured_image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_featured: bool,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Program.
impl From<Model> for uyd_core::domain::Program {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            category: model.category,
            content: model.content,
            featured_image: model.featured_image,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            is_featured: model.is_featured,
            is_active: model.is_active,
        }
    }
}
