use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// News article entity. Excerpts are capped at 500 characters by the column
/// definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_featured: bool,
    pub is_active: bool,
}

/// Fields required to create a news article. `publish_date` defaults to the
/// creation instant when not provided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNewsArticle {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub category: String,
    pub author: String,
    #[serde(default)]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Partial update for a news article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
    pub is_featured: Option<bool>,
}
