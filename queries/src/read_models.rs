//! Assembles view records from query results.

use entities::{artist, show, venue};
use log::warn;
use sea_orm::prelude::DateTime;
use sea_orm::ConnectionTrait;

use crate::error::Result;
use crate::lookup::{self, ShowRelation};
use crate::views::{
    self, ArtistAppearance, ArtistDetail, HomeView, SearchResults, ShortView, ShowDetail,
    VenueAppearance, VenueDetail, VenueLocation,
};

/// Size of the recently listed sections on the home page.
pub const RECENT_LIMIT: u64 = 10;

pub async fn home<C: ConnectionTrait>(db: &C) -> Result<HomeView> {
    let venues = lookup::recently_created::<venue::Entity, C>(db, RECENT_LIMIT).await?;
    let artists = lookup::recently_created::<artist::Entity, C>(db, RECENT_LIMIT).await?;
    Ok(HomeView {
        venues: venues.iter().map(ShortView::from).collect(),
        artists: artists.iter().map(ShortView::from).collect(),
    })
}

/// Venues grouped by (city, state).
pub async fn venue_locations<C: ConnectionTrait>(
    db: &C,
    now: DateTime,
) -> Result<Vec<VenueLocation>> {
    let mut ret = Vec::new();
    for (city, state) in lookup::distinct_locations(db).await? {
        let venues = lookup::venues_at(db, &city, &state).await?;
        let ids: Vec<i32> = venues.iter().map(|v| v.id).collect();
        let counts = lookup::upcoming_show_counts(db, &ids, now).await?;
        let listings = venues
            .iter()
            .map(|v| views::venue_listing(v, counts.get(&v.id).copied().unwrap_or(0)))
            .collect();
        ret.push(views::venue_location(city, state, listings));
    }
    Ok(ret)
}

pub async fn search_venues<C: ConnectionTrait>(
    db: &C,
    term: &str,
) -> Result<SearchResults<ShortView>> {
    let venues = lookup::search_by_name_partial::<venue::Entity, C>(db, term).await?;
    Ok(SearchResults::new(venues.iter().map(ShortView::from).collect()))
}

pub async fn search_artists<C: ConnectionTrait>(
    db: &C,
    term: &str,
) -> Result<SearchResults<ShortView>> {
    let artists = lookup::search_by_name_partial::<artist::Entity, C>(db, term).await?;
    Ok(SearchResults::new(artists.iter().map(ShortView::from).collect()))
}

pub async fn artist_list<C: ConnectionTrait>(db: &C) -> Result<Vec<ShortView>> {
    let artists = lookup::list_all::<artist::Entity, C>(db).await?;
    Ok(artists.iter().map(ShortView::from).collect())
}

async fn artist_appearances<C: ConnectionTrait>(
    db: &C,
    shows: &[show::Model],
) -> Result<Vec<ArtistAppearance>> {
    let artists = lookup::artists_by_id(db, shows.iter().map(|s| s.artist_id)).await?;
    Ok(shows
        .iter()
        .filter_map(|show| match artists.get(&show.artist_id) {
            Some(artist) => Some(views::artist_appearance(show, artist)),
            None => {
                warn!("Show {} references missing artist {}", show.id, show.artist_id);
                None
            }
        })
        .collect())
}

async fn venue_appearances<C: ConnectionTrait>(
    db: &C,
    shows: &[show::Model],
) -> Result<Vec<VenueAppearance>> {
    let venues = lookup::venues_by_id(db, shows.iter().map(|s| s.venue_id)).await?;
    Ok(shows
        .iter()
        .filter_map(|show| match venues.get(&show.venue_id) {
            Some(venue) => Some(views::venue_appearance(show, venue)),
            None => {
                warn!("Show {} references missing venue {}", show.id, show.venue_id);
                None
            }
        })
        .collect())
}

pub async fn venue_detail<C: ConnectionTrait>(
    db: &C,
    venue_id: i32,
    now: DateTime,
) -> Result<VenueDetail> {
    let venue = lookup::get_venue_by_id(db, venue_id).await?;
    let past = lookup::shows_for_venue(db, venue.id, ShowRelation::Past, now).await?;
    let upcoming = lookup::shows_for_venue(db, venue.id, ShowRelation::Upcoming, now).await?;
    Ok(views::venue_detail(
        venue,
        artist_appearances(db, &past).await?,
        artist_appearances(db, &upcoming).await?,
    ))
}

pub async fn artist_detail<C: ConnectionTrait>(
    db: &C,
    artist_id: i32,
    now: DateTime,
) -> Result<ArtistDetail> {
    let artist = lookup::get_artist_by_id(db, artist_id).await?;
    let past = lookup::shows_for_artist(db, artist.id, ShowRelation::Past, now).await?;
    let upcoming = lookup::shows_for_artist(db, artist.id, ShowRelation::Upcoming, now).await?;
    Ok(views::artist_detail(
        artist,
        venue_appearances(db, &past).await?,
        venue_appearances(db, &upcoming).await?,
    ))
}

async fn show_details<C: ConnectionTrait>(
    db: &C,
    shows: Vec<show::Model>,
) -> Result<Vec<ShowDetail>> {
    let venues = lookup::venues_by_id(db, shows.iter().map(|s| s.venue_id)).await?;
    let artists = lookup::artists_by_id(db, shows.iter().map(|s| s.artist_id)).await?;
    let mut ret = Vec::with_capacity(shows.len());
    for show in &shows {
        match (venues.get(&show.venue_id), artists.get(&show.artist_id)) {
            (Some(venue), Some(artist)) => ret.push(views::show_detail(show, venue, artist)),
            _ => warn!("Skipping show {} with a dangling reference", show.id),
        }
    }
    Ok(ret)
}

pub async fn all_shows<C: ConnectionTrait>(db: &C) -> Result<Vec<ShowDetail>> {
    let shows = lookup::all_shows(db).await?;
    show_details(db, shows).await
}

pub async fn search_shows<C: ConnectionTrait>(
    db: &C,
    term: &str,
) -> Result<SearchResults<ShowDetail>> {
    let shows = lookup::search_shows(db, term).await?;
    Ok(SearchResults::new(show_details(db, shows).await?))
}

pub async fn show_detail<C: ConnectionTrait>(db: &C, show_id: i32) -> Result<ShowDetail> {
    let show = lookup::get_show_by_id(db, show_id).await?;
    let venue = lookup::get_venue_by_id(db, show.venue_id).await?;
    let artist = lookup::get_artist_by_id(db, show.artist_id).await?;
    Ok(views::show_detail(&show, &venue, &artist))
}
