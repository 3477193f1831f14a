use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_tables::{Show, Venue};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Venue listing groups by location
        manager
            .create_index(
                Index::create()
                    .name("idx-venue-city-state")
                    .table(Venue::Table)
                    .col(Venue::City)
                    .col(Venue::State)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-show-venue_id-start_time")
                    .table(Show::Table)
                    .col(Show::VenueId)
                    .col(Show::StartTime)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-show-artist_id-start_time")
                    .table(Show::Table)
                    .col(Show::ArtistId)
                    .col(Show::StartTime)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx-show-artist_id-start_time")
                    .table(Show::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx-show-venue_id-start_time")
                    .table(Show::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx-venue-city-state")
                    .table(Venue::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
