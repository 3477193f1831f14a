use chrono::Duration;
use entities::artist_local_model::ArtistModel;
use entities::genres::Genres;
use entities::show_local_model::ShowModel;
use entities::venue_local_model::VenueModel;
use entities::{artist, show, venue};
use migration::{Migrator, MigratorTrait};
use sea_orm::prelude::DateTime;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::mutations;

/// Fresh, migrated in-memory database. A single connection keeps every
/// statement on the same in-memory file.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn venue_form(name: &str, city: &str, state: &str) -> VenueModel {
    VenueModel {
        name: name.to_string(),
        genres: Genres(vec!["Rock".to_string()]),
        city: city.to_string(),
        state: state.to_string(),
        address: "1 Main St".to_string(),
        phone: None,
        website: None,
        facebook_link: None,
        image_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

pub fn artist_form(name: &str) -> ArtistModel {
    ArtistModel {
        name: name.to_string(),
        genres: Genres(vec!["Electronic".to_string()]),
        city: "Paris".to_string(),
        state: "FR".to_string(),
        phone: None,
        website: None,
        facebook_link: None,
        image_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}

pub async fn add_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> venue::Model {
    mutations::create_venue(db, venue_form(name, city, state))
        .await
        .unwrap()
}

pub async fn add_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    mutations::create_artist(db, artist_form(name)).await.unwrap()
}

pub async fn book(
    db: &DatabaseConnection,
    artist: &artist::Model,
    venue: &venue::Model,
    start_time: DateTime,
) -> show::Model {
    mutations::create_show(
        db,
        ShowModel {
            artist_id: artist.id,
            venue_id: venue.id,
            start_time,
        },
    )
    .await
    .unwrap()
}

/// Whole-second instant so stored and compared timestamps render identically.
pub fn fixed_now() -> DateTime {
    chrono::NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

pub fn seconds(n: i64) -> Duration {
    Duration::seconds(n)
}
