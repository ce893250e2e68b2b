//! Create the programs, events and news_articles tables.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Programs::Table)
                    .if_not_exists()
                    .col(pk_auto(Programs::Id))
                    .col(string(Programs::Title))
                    .col(text(Programs::Description))
                    .col(string(Programs::Category))
                    .col(text(Programs::Content))
                    .col(string_null(Programs::FeaturedImage))
                    .col(timestamp_with_time_zone(Programs::CreatedAt))
                    .col(timestamp_with_time_zone(Programs::UpdatedAt))
                    .col(boolean(Programs::IsFeatured).default(false))
                    .col(boolean(Programs::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_programs_category")
                    .table(Programs::Table)
                    .col(Programs::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(string(Events::Title))
                    .col(text(Events::Description))
                    .col(string(Events::EventType))
                    .col(timestamp_with_time_zone(Events::StartDate))
                    .col(timestamp_with_time_zone_null(Events::EndDate))
                    .col(string(Events::Location))
                    .col(integer_null(Events::MaxParticipants))
                    .col(string_null(Events::FeaturedImage))
                    .col(text_null(Events::Content))
                    .col(timestamp_with_time_zone_null(Events::RegistrationDeadline))
                    .col(timestamp_with_time_zone(Events::CreatedAt))
                    .col(timestamp_with_time_zone(Events::UpdatedAt))
                    .col(boolean(Events::IsFeatured).default(false))
                    .col(boolean(Events::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_event_type")
                    .table(Events::Table)
                    .col(Events::EventType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_start_date")
                    .table(Events::Table)
                    .col(Events::StartDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NewsArticles::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsArticles::Id))
                    .col(string(NewsArticles::Title))
                    .col(text(NewsArticles::Content))
                    .col(string_len_null(NewsArticles::Excerpt, 500))
                    .col(string(NewsArticles::Category))
                    .col(string(NewsArticles::Author))
                    .col(timestamp_with_time_zone(NewsArticles::PublishDate))
                    .col(string_null(NewsArticles::FeaturedImage))
                    .col(timestamp_with_time_zone(NewsArticles::CreatedAt))
                    .col(timestamp_with_time_zone(NewsArticles::UpdatedAt))
                    .col(boolean(NewsArticles::IsFeatured).default(false))
                    .col(boolean(NewsArticles::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_news_articles_category")
                    .table(NewsArticles::Table)
                    .col(NewsArticles::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_news_articles_publish_date")
                    .table(NewsArticles::Table)
                    .col(NewsArticles::PublishDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsArticles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Programs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Programs {
    Table,
    Id,
    Title,
    Description,
    Category,
    Content,
    FeaturedImage,
    CreatedAt,
    UpdatedAt,
    IsFeatured,
    IsActive,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Title,
    Description,
    EventType,
    StartDate,
    EndDate,
    Location,
    MaxParticipants,
    FeaturedImage,
    Content,
    RegistrationDeadline,
    CreatedAt,
    UpdatedAt,
    IsFeatured,
    IsActive,
}

#[derive(DeriveIden)]
enum NewsArticles {
    Table,
    Id,
    Title,
    Content,
    Excerpt,
    Category,
    Author,
    PublishDate,
    FeaturedImage,
    CreatedAt,
    UpdatedAt,
    IsFeatured,
    IsActive,
}
