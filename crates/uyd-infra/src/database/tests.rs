use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use sea_orm::{
    ActiveValue, DbBackend, EntityTrait, MockDatabase, QueryFilter, QueryTrait, Value,
};

use uyd_core::domain::{EventPatch, ProgramPatch};
use uyd_core::error::RepoError;
use uyd_core::ports::{EventRepository, ProgramRepository};
use uyd_core::query::{EventFilter, NewsFilter, Page, ProgramFilter};

use super::entity::{event, news_article, program};
use super::query::{list_select, not_ended};
use super::repository::{
    SeaOrmEventRepository, SeaOrmProgramRepository, event_patch_model, program_deactivate_model,
    program_patch_model,
};

fn sample_program_model(id: i32) -> program::Model {
    let now = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
    program::Model {
        id,
        title: "Agribusiness Incubator".to_owned(),
        description: "Hands-on farming enterprise training".to_owned(),
        category: "agribusiness".to_owned(),
        content: "Full curriculum".to_owned(),
        featured_image: None,
        created_at: now.into(),
        updated_at: now.into(),
        is_featured: false,
        is_active: true,
    }
}

fn sample_event_model(id: i32) -> event::Model {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
    event::Model {
        id,
        title: "Youth Summit".to_owned(),
        description: "Annual gathering".to_owned(),
        event_type: "conference".to_owned(),
        start_date: start.into(),
        end_date: None,
        location: "Kampala".to_owned(),
        max_participants: Some(200),
        featured_image: None,
        content: None,
        registration_deadline: None,
        created_at: start.into(),
        updated_at: start.into(),
        is_featured: true,
        is_active: true,
    }
}

#[tokio::test]
async fn find_program_by_id_maps_to_domain() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results(vec![vec![sample_program_model(3)]])
        .into_connection();

    let repo = SeaOrmProgramRepository::new(db);
    let result = repo.find_by_id(3).await.unwrap();

    let program = result.expect("program should be found");
    assert_eq!(program.id, 3);
    assert_eq!(program.category, "agribusiness");
    assert!(program.is_active);
}

#[tokio::test]
async fn find_program_by_id_returns_none_when_absent() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results(vec![Vec::<program::Model>::new()])
        .into_connection();

    let repo = SeaOrmProgramRepository::new(db);
    let result = repo.find_by_id(99).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn list_events_maps_rows_in_order() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results(vec![vec![sample_event_model(1), sample_event_model(2)]])
        .into_connection();

    let repo = SeaOrmEventRepository::new(db);
    let events = repo
        .list(EventFilter::default(), Page::default())
        .await
        .unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, 1);
    assert_eq!(events[1].id, 2);
}

#[test]
fn program_list_query_constrains_to_active_and_orders_by_id() {
    let filter = ProgramFilter {
        category: Some("education".to_owned()),
        featured: Some(true),
    };
    let sql = list_select::<program::Entity>(&filter, Page { skip: 10, limit: 5 })
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains(r#""programs"."is_active" = TRUE"#), "{sql}");
    assert!(sql.contains(r#""programs"."category" = 'education'"#), "{sql}");
    assert!(sql.contains(r#""programs"."is_featured" = TRUE"#), "{sql}");
    assert!(sql.contains(r#"ORDER BY "programs"."id" ASC"#), "{sql}");
    assert!(sql.contains("LIMIT 5"), "{sql}");
    assert!(sql.contains("OFFSET 10"), "{sql}");
}

#[test]
fn event_list_query_applies_search_and_upcoming() {
    let filter = EventFilter {
        event_type: None,
        featured: None,
        upcoming: true,
        search: Some("climate".to_owned()),
    };
    let sql = list_select::<event::Entity>(&filter, Page::default())
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains(r#""events"."is_active" = TRUE"#), "{sql}");
    assert!(sql.contains(r#""events"."start_date" >="#), "{sql}");
    assert!(sql.contains("ILIKE '%climate%'"), "{sql}");
    assert!(sql.contains(r#"ORDER BY "events"."start_date" ASC"#), "{sql}");
    assert!(sql.contains("LIMIT 100"), "{sql}");
}

#[test]
fn news_list_query_orders_by_publish_date_desc() {
    let sql = list_select::<news_article::Entity>(&NewsFilter::default(), Page::default())
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains(r#""news_articles"."is_active" = TRUE"#), "{sql}");
    assert!(
        sql.contains(r#"ORDER BY "news_articles"."publish_date" DESC"#),
        "{sql}"
    );
}

#[test]
fn zero_limit_is_honored_literally() {
    let sql = list_select::<program::Entity>(&ProgramFilter::default(), Page { skip: 0, limit: 0 })
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains("LIMIT 0"), "{sql}");
}

#[test]
fn program_patch_touches_only_provided_columns() {
    let patch = ProgramPatch {
        title: Some("New title".to_owned()),
        ..Default::default()
    };
    let model = program_patch_model(7, patch, Utc::now());

    assert!(matches!(model.title, ActiveValue::Set(_)));
    assert!(matches!(model.updated_at, ActiveValue::Set(_)));
    assert!(matches!(model.description, ActiveValue::NotSet));
    assert!(matches!(model.category, ActiveValue::NotSet));
    assert!(matches!(model.content, ActiveValue::NotSet));
    assert!(matches!(model.featured_image, ActiveValue::NotSet));
    assert!(matches!(model.is_featured, ActiveValue::NotSet));
    assert!(matches!(model.is_active, ActiveValue::NotSet));
    assert!(matches!(model.created_at, ActiveValue::NotSet));
}

#[test]
fn event_patch_never_clears_optional_columns() {
    let model = event_patch_model(4, EventPatch::default(), Utc::now());

    assert!(matches!(model.end_date, ActiveValue::NotSet));
    assert!(matches!(model.max_participants, ActiveValue::NotSet));
    assert!(matches!(model.registration_deadline, ActiveValue::NotSet));
    assert!(matches!(model.updated_at, ActiveValue::Set(_)));
}

#[test]
fn soft_delete_touches_only_deactivation_columns() {
    let model = program_deactivate_model(9, Utc::now());

    assert!(matches!(model.id, ActiveValue::Unchanged(9)));
    assert!(matches!(model.is_active, ActiveValue::Set(false)));
    assert!(matches!(model.updated_at, ActiveValue::Set(_)));
    assert!(matches!(model.title, ActiveValue::NotSet));
    assert!(matches!(model.description, ActiveValue::NotSet));
    assert!(matches!(model.category, ActiveValue::NotSet));
    assert!(matches!(model.content, ActiveValue::NotSet));
    assert!(matches!(model.featured_image, ActiveValue::NotSet));
    assert!(matches!(model.is_featured, ActiveValue::NotSet));
    assert!(matches!(model.created_at, ActiveValue::NotSet));
}

#[tokio::test]
async fn soft_delete_missing_program_is_not_found() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results(vec![Vec::<program::Model>::new()])
        .into_connection();

    let repo = SeaOrmProgramRepository::new(db);
    let err = repo.soft_delete(99).await.unwrap_err();

    assert!(matches!(err, RepoError::NotFound));
}

#[test]
fn board_baseline_requires_unexpired_end_date() {
    let sql = event::Entity::find()
        .filter(not_ended())
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains(r#""events"."is_active" = TRUE"#), "{sql}");
    assert!(sql.contains(r#""events"."end_date" >="#), "{sql}");
    // No NULL branch: an event without an end date never satisfies ">=" and
    // stays off the board and out of the facet counts.
    assert!(!sql.contains("IS NULL"), "{sql}");
}

#[tokio::test]
async fn facets_map_group_rows_and_total() {
    let type_rows = vec![
        BTreeMap::from([
            ("event_type", Value::from("workshop")),
            ("count", Value::from(2i64)),
        ]),
        BTreeMap::from([
            ("event_type", Value::from("conference")),
            ("count", Value::from(1i64)),
        ]),
    ];
    let total_row = vec![BTreeMap::from([("num_items", Value::from(3i64))])];

    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results(vec![type_rows])
        .append_query_results(vec![total_row])
        .into_connection();

    let repo = SeaOrmEventRepository::new(db);
    let facets = repo.facets().await.unwrap();

    assert_eq!(facets.total, 3);
    assert_eq!(facets.type_counts.len(), 2);
    assert_eq!(facets.type_counts[0].event_type, "workshop");
    assert_eq!(facets.type_counts[0].count, 2);
    assert_eq!(facets.type_counts[1].event_type, "conference");
    assert_eq!(facets.type_counts[1].count, 1);
}

#[tokio::test]
async fn update_program_returns_refreshed_record() {
    let mut updated = sample_program_model(3);
    updated.title = "Renamed".to_owned();

    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results(vec![vec![updated]])
        .into_connection();

    let repo = SeaOrmProgramRepository::new(db);
    let patch = ProgramPatch {
        title: Some("Renamed".to_owned()),
        ..Default::default()
    };
    let program = repo.update(3, patch).await.unwrap();

    assert_eq!(program.title, "Renamed");
}
