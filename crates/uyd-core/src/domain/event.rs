use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event entity - workshops, seminars, competitions and the like.
///
/// `max_participants` and `registration_deadline` are advisory: they are
/// stored and surfaced but never enforced anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: String,
    pub max_participants: Option<i32>,
    pub featured_image: Option<String>,
    pub content: Option<String>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_featured: bool,
    pub is_active: bool,
}

/// Fields required to create an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub location: String,
    #[serde(default)]
    pub max_participants: Option<i32>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub registration_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Partial update for an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub max_participants: Option<i32>,
    pub featured_image: Option<String>,
    pub content: Option<String>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub is_featured: Option<bool>,
}
