//! Page view-models built from query-layer output.
//!
//! The events page shows each event as a card with pre-formatted date parts
//! (calendar badge day/month/year, start time) and a placeholder image when
//! none was uploaded. Formatting happens here so the rendering layer stays
//! logic-free.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use uyd_core::domain::Event;
use uyd_core::query::EventTypeCount;

/// Image shown for events without an uploaded `featured_image`.
pub const DEFAULT_EVENT_IMAGE: &str = "assets/img/education/events-3.webp";

/// One event rendered on the events board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCard {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub start_time: String,
    pub start_day: String,
    pub start_month: String,
    pub start_year: String,
    pub end_date: Option<String>,
    pub location: String,
    pub event_type: String,
    pub is_featured: bool,
    pub max_participants: Option<i32>,
    pub featured_image: String,
    pub registration_deadline: Option<String>,
}

impl From<Event> for EventCard {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            start_date: format_date(&event.start_date),
            start_time: event.start_date.format("%I:%M %p").to_string(),
            start_day: event.start_date.format("%d").to_string(),
            start_month: event.start_date.format("%b").to_string().to_uppercase(),
            start_year: event.start_date.format("%Y").to_string(),
            end_date: event.end_date.as_ref().map(format_date),
            location: event.location,
            event_type: event.event_type,
            is_featured: event.is_featured,
            max_participants: event.max_participants,
            featured_image: event
                .featured_image
                .unwrap_or_else(|| DEFAULT_EVENT_IMAGE.to_string()),
            registration_deadline: event.registration_deadline.as_ref().map(format_date),
        }
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Full payload for the events board: filtered cards plus the facet counts
/// driving the type-filter sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsBoard {
    pub events: Vec<EventCard>,
    pub type_counts: Vec<EventTypeCount>,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_event() -> Event {
        Event {
            id: 7,
            title: "Leadership Bootcamp".to_string(),
            description: "Three days of training".to_string(),
            event_type: "workshop".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 3, 5, 14, 30, 0).unwrap(),
            end_date: Some(Utc.with_ymd_and_hms(2025, 3, 7, 17, 0, 0).unwrap()),
            location: "Kampala".to_string(),
            max_participants: Some(40),
            featured_image: None,
            content: None,
            registration_deadline: Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_featured: true,
            is_active: true,
        }
    }

    #[test]
    fn card_formats_start_date_parts() {
        let card = EventCard::from(sample_event());

        assert_eq!(card.start_date, "2025-03-05");
        assert_eq!(card.start_time, "02:30 PM");
        assert_eq!(card.start_day, "05");
        assert_eq!(card.start_month, "MAR");
        assert_eq!(card.start_year, "2025");
        assert_eq!(card.end_date.as_deref(), Some("2025-03-07"));
        assert_eq!(card.registration_deadline.as_deref(), Some("2025-03-01"));
    }

    #[test]
    fn card_falls_back_to_placeholder_image() {
        let card = EventCard::from(sample_event());
        assert_eq!(card.featured_image, DEFAULT_EVENT_IMAGE);
    }

    #[test]
    fn card_keeps_uploaded_image() {
        let mut event = sample_event();
        event.featured_image = Some("assets/upload/abc.png".to_string());

        let card = EventCard::from(event);
        assert_eq!(card.featured_image, "assets/upload/abc.png");
    }
}
