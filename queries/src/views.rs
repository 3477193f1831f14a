//! View records handed to the presentation layer.
//!
//! Builders here are pure: they take an entity plus the related rows already
//! loaded and never touch the database.

use entities::{artist, show, venue};
use sea_orm::prelude::DateTime;
use serde::Serialize;

/// Stable, locale independent rendering of a timestamp.
pub fn timestamp_text(value: &DateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShortView {
    pub id: i32,
    pub name: String,
}

impl From<&venue::Model> for ShortView {
    fn from(venue: &venue::Model) -> Self {
        ShortView {
            id: venue.id,
            name: venue.name.to_owned(),
        }
    }
}

impl From<&artist::Model> for ShortView {
    fn from(artist: &artist::Model) -> Self {
        ShortView {
            id: artist.id,
            name: artist.name.to_owned(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VenueListing {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VenueLocation {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueListing>,
    pub venue_count: usize,
}

pub fn venue_listing(venue: &venue::Model, num_upcoming_shows: i64) -> VenueListing {
    VenueListing {
        id: venue.id,
        name: venue.name.to_owned(),
        num_upcoming_shows,
    }
}

pub fn venue_location(city: String, state: String, venues: Vec<VenueListing>) -> VenueLocation {
    VenueLocation {
        city,
        state,
        venue_count: venues.len(),
        venues,
    }
}

/// An artist's appearance on a venue page.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ArtistAppearance {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// A venue's appearance on an artist page.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VenueAppearance {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

pub fn artist_appearance(show: &show::Model, artist: &artist::Model) -> ArtistAppearance {
    ArtistAppearance {
        artist_id: show.artist_id,
        artist_name: artist.name.to_owned(),
        artist_image_link: artist.image_link.to_owned(),
        start_time: timestamp_text(&show.start_time),
    }
}

pub fn venue_appearance(show: &show::Model, venue: &venue::Model) -> VenueAppearance {
    VenueAppearance {
        venue_id: show.venue_id,
        venue_name: venue.name.to_owned(),
        venue_image_link: venue.image_link.to_owned(),
        start_time: timestamp_text(&show.start_time),
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub created_date: String,
    pub past_shows: Vec<ArtistAppearance>,
    pub upcoming_shows: Vec<ArtistAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

pub fn venue_detail(
    venue: venue::Model,
    past_shows: Vec<ArtistAppearance>,
    upcoming_shows: Vec<ArtistAppearance>,
) -> VenueDetail {
    VenueDetail {
        id: venue.id,
        name: venue.name,
        genres: venue.genres.into(),
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        created_date: timestamp_text(&venue.created_date),
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub created_date: String,
    pub past_shows: Vec<VenueAppearance>,
    pub upcoming_shows: Vec<VenueAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

pub fn artist_detail(
    artist: artist::Model,
    past_shows: Vec<VenueAppearance>,
    upcoming_shows: Vec<VenueAppearance>,
) -> ArtistDetail {
    ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres: artist.genres.into(),
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        created_date: timestamp_text(&artist.created_date),
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

/// Flattened show exposing both sides of the booking.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShowDetail {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

pub fn show_detail(show: &show::Model, venue: &venue::Model, artist: &artist::Model) -> ShowDetail {
    ShowDetail {
        id: show.id,
        venue_id: show.venue_id,
        venue_name: venue.name.to_owned(),
        artist_id: show.artist_id,
        artist_name: artist.name.to_owned(),
        artist_image_link: artist.image_link.to_owned(),
        start_time: timestamp_text(&show.start_time),
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HomeView {
    pub venues: Vec<ShortView>,
    pub artists: Vec<ShortView>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use entities::genres::Genres;

    use super::*;

    fn at(hour: u32) -> DateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn fillmore() -> venue::Model {
        venue::Model {
            id: 3,
            name: "The Fillmore".to_string(),
            genres: Genres(vec!["Funk".to_string(), "Rock".to_string()]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1805 Geary Blvd".to_string(),
            phone: None,
            website: None,
            facebook_link: None,
            image_link: Some("https://img.example/fillmore.jpg".to_string()),
            seeking_talent: true,
            seeking_description: None,
            created_date: at(9),
        }
    }

    fn daft_punk() -> artist::Model {
        artist::Model {
            id: 8,
            name: "Daft Punk".to_string(),
            genres: Genres(vec!["Electronic".to_string()]),
            city: "Paris".to_string(),
            state: "FR".to_string(),
            phone: None,
            website: None,
            facebook_link: None,
            image_link: Some("https://img.example/daft.jpg".to_string()),
            seeking_venue: false,
            seeking_description: None,
            created_date: at(9),
        }
    }

    fn booking() -> show::Model {
        show::Model {
            id: 21,
            start_time: at(20),
            artist_id: 8,
            venue_id: 3,
            created_date: at(10),
        }
    }

    #[test]
    fn timestamps_render_without_locale() {
        assert_eq!(timestamp_text(&at(20)), "2026-03-14 20:00:00");
    }

    #[test]
    fn venue_page_lists_the_artist_side() {
        let appearance = artist_appearance(&booking(), &daft_punk());
        let detail = venue_detail(fillmore(), vec![], vec![appearance.to_owned()]);

        assert_eq!(detail.genres, vec!["Funk", "Rock"]);
        assert_eq!(detail.past_shows_count, 0);
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.upcoming_shows[0].artist_name, "Daft Punk");
        assert_eq!(
            detail.upcoming_shows[0].artist_image_link.as_deref(),
            Some("https://img.example/daft.jpg")
        );
        assert_eq!(detail.upcoming_shows[0].start_time, "2026-03-14 20:00:00");
    }

    #[test]
    fn artist_page_lists_the_venue_side() {
        let appearance = venue_appearance(&booking(), &fillmore());
        let detail = artist_detail(daft_punk(), vec![appearance], vec![]);

        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.past_shows[0].venue_id, 3);
        assert_eq!(detail.past_shows[0].venue_name, "The Fillmore");
    }

    #[test]
    fn show_detail_flattens_both_sides() {
        let detail = show_detail(&booking(), &fillmore(), &daft_punk());
        assert_eq!(detail.venue_name, "The Fillmore");
        assert_eq!(detail.artist_name, "Daft Punk");
        assert_eq!(detail.artist_id, 8);
        assert_eq!(detail.venue_id, 3);
    }

    #[test]
    fn location_counts_its_venues() {
        let venue = fillmore();
        let location = venue_location(
            venue.city.to_owned(),
            venue.state.to_owned(),
            vec![venue_listing(&venue, 2)],
        );
        assert_eq!(location.venue_count, 1);
        assert_eq!(location.venues[0].num_upcoming_shows, 2);

        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["city"], "San Francisco");
        assert_eq!(json["venues"][0]["name"], "The Fillmore");
    }

    #[test]
    fn search_results_count_matches_data() {
        let results = SearchResults::new(vec![ShortView::from(&fillmore())]);
        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].name, "The Fillmore");
    }
}
