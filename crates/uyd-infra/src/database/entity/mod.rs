//! SeaORM entities for the three content tables.

pub mod event;
pub mod news_article;
pub mod program;
