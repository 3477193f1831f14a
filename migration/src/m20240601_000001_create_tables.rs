use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240601_000001_create_tables"
    }
}

#[derive(Iden)]
pub enum Venue {
    Table,
    Id,
    Name,
    Genres,
    City,
    State,
    Address,
    Phone,
    Website,
    FacebookLink,
    ImageLink,
    SeekingTalent,
    SeekingDescription,
    CreatedDate,
}

#[derive(Iden)]
pub enum Artist {
    Table,
    Id,
    Name,
    Genres,
    City,
    State,
    Phone,
    Website,
    FacebookLink,
    ImageLink,
    SeekingVenue,
    SeekingDescription,
    CreatedDate,
}

#[derive(Iden)]
pub enum Show {
    Table,
    Id,
    StartTime,
    ArtistId,
    VenueId,
    CreatedDate,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .col(
                        ColumnDef::new(Venue::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Venue::Name).string().not_null())
                    .col(ColumnDef::new(Venue::Genres).json().not_null())
                    .col(ColumnDef::new(Venue::City).string_len(120).not_null())
                    .col(ColumnDef::new(Venue::State).string_len(120).not_null())
                    .col(ColumnDef::new(Venue::Address).string_len(120).not_null())
                    .col(ColumnDef::new(Venue::Phone).string_len(120))
                    .col(ColumnDef::new(Venue::Website).string())
                    .col(ColumnDef::new(Venue::FacebookLink).string())
                    .col(ColumnDef::new(Venue::ImageLink).string())
                    .col(
                        ColumnDef::new(Venue::SeekingTalent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Venue::SeekingDescription).string())
                    .col(ColumnDef::new(Venue::CreatedDate).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Artist::Table)
                    .col(
                        ColumnDef::new(Artist::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artist::Name).string().not_null())
                    .col(ColumnDef::new(Artist::Genres).json().not_null())
                    .col(ColumnDef::new(Artist::City).string_len(120).not_null())
                    .col(ColumnDef::new(Artist::State).string_len(120).not_null())
                    .col(ColumnDef::new(Artist::Phone).string_len(120))
                    .col(ColumnDef::new(Artist::Website).string())
                    .col(ColumnDef::new(Artist::FacebookLink).string())
                    .col(ColumnDef::new(Artist::ImageLink).string())
                    .col(
                        ColumnDef::new(Artist::SeekingVenue)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Artist::SeekingDescription).string())
                    .col(ColumnDef::new(Artist::CreatedDate).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // A show can't outlive either side of the booking
        manager
            .create_table(
                Table::create()
                    .table(Show::Table)
                    .col(
                        ColumnDef::new(Show::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Show::StartTime).date_time().not_null())
                    .col(ColumnDef::new(Show::ArtistId).integer().not_null())
                    .col(ColumnDef::new(Show::VenueId).integer().not_null())
                    .col(ColumnDef::new(Show::CreatedDate).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-show-artist_id")
                            .from(Show::Table, Show::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-show-venue_id")
                            .from(Show::Table, Show::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Show::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artist::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Venue::Table).to_owned())
            .await?;
        Ok(())
    }
}
