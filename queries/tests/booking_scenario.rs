use chrono::Duration;
use entities::genres::Genres;
use entities::show_local_model::ShowModel;
use entities::{artist_local_model::ArtistModel, venue_local_model::VenueModel};
use migration::{Migrator, MigratorTrait};
use queries::{current_time, lookup, mutations, read_models, BookingError, Notice, NoticeLevel};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

// Integration tests link the crate without cfg(test), so the in-crate
// test_support helpers aren't visible here.
async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

#[tokio::test]
async fn fillmore_daft_punk_scenario() {
    let db = setup_test_db().await;

    let fillmore = mutations::create_venue(
        &db,
        VenueModel {
            name: "The Fillmore".to_string(),
            genres: Genres(vec!["Rock".to_string()]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1805 Geary Blvd".to_string(),
            phone: None,
            website: None,
            facebook_link: None,
            image_link: None,
            seeking_talent: true,
            seeking_description: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(
        Notice::listed(queries::EntityKind::Venue, &fillmore.name).message,
        "Venue The Fillmore was successfully listed!"
    );

    let daft_punk = mutations::create_artist(
        &db,
        ArtistModel {
            name: "Daft Punk".to_string(),
            genres: Genres::default(),
            city: "Paris".to_string(),
            state: "FR".to_string(),
            phone: None,
            website: None,
            facebook_link: None,
            image_link: Some("https://img.example/daft.jpg".to_string()),
            seeking_venue: false,
            seeking_description: None,
        },
    )
    .await
    .unwrap();

    let now = current_time();
    let show = mutations::create_show(
        &db,
        ShowModel {
            artist_id: daft_punk.id,
            venue_id: fillmore.id,
            start_time: now - Duration::days(1),
        },
    )
    .await
    .unwrap();

    let venue_view = read_models::venue_detail(&db, fillmore.id, now).await.unwrap();
    assert_eq!(venue_view.past_shows.len(), 1);
    assert_eq!(venue_view.past_shows[0].artist_name, "Daft Punk");
    assert!(venue_view.upcoming_shows.is_empty());
    assert!(venue_view.seeking_talent);

    let artist_view = read_models::artist_detail(&db, daft_punk.id, now).await.unwrap();
    assert_eq!(artist_view.past_shows.len(), 1);
    assert_eq!(artist_view.past_shows[0].venue_name, "The Fillmore");

    let deleted = mutations::delete_venue(&db, fillmore.id).await.unwrap();
    assert_eq!(
        Notice::deleted(queries::EntityKind::Venue, &deleted.name).level,
        NoticeLevel::Info
    );

    assert_eq!(
        lookup::get_artist_by_id(&db, daft_punk.id).await.unwrap(),
        daft_punk
    );
    let err = lookup::get_show_by_id(&db, show.id).await.unwrap_err();
    assert!(matches!(err, BookingError::NotFound { .. }));

    let artist_view = read_models::artist_detail(&db, daft_punk.id, now).await.unwrap();
    assert_eq!(artist_view.past_shows_count, 0);
}

#[tokio::test]
async fn show_for_unknown_artist_inserts_nothing() {
    let db = setup_test_db().await;
    let venue = mutations::create_venue(
        &db,
        VenueModel {
            name: "Bottom of the Hill".to_string(),
            genres: Genres::default(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1233 17th St".to_string(),
            phone: None,
            website: None,
            facebook_link: None,
            image_link: None,
            seeking_talent: false,
            seeking_description: None,
        },
    )
    .await
    .unwrap();

    let err = mutations::create_show(
        &db,
        ShowModel {
            artist_id: 9999,
            venue_id: venue.id,
            start_time: current_time(),
        },
    )
    .await
    .unwrap_err();

    let notice = Notice::show_listing_failed(&err);
    assert_eq!(notice.level, NoticeLevel::Danger);
    assert!(notice.message.contains(r#"artist_id "9999""#));
    assert!(!notice.message.contains("venue_id"));
    assert!(read_models::all_shows(&db).await.unwrap().is_empty());
}
