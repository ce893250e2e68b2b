use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Program entity - a long-running initiative shown on the programs page.
///
/// Documented categories: education, agribusiness, leadership, environment,
/// tourism, lifeskills. The column is free text; unknown values simply never
/// match a filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_featured: bool,
    pub is_active: bool,
}

/// Fields required to create a program. The store assigns the id and the
/// timestamps; `is_active` starts true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProgram {
    pub title: String,
    pub description: String,
    pub category: String,
    pub content: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Partial update for a program. Only `Some` fields overwrite the stored
/// record; `updated_at` is refreshed regardless.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub is_featured: Option<bool>,
}
