use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::endpoint_handlers::{
    artists, create_artist_submission, create_show_submission, create_venue_submission,
    delete_artist, delete_venue, edit_artist_submission, edit_venue_submission, get_show, home,
    search_artists, search_shows, search_venues, show_artist, show_venue, shows, venues,
};
use crate::DatabaseState;

pub fn build_router(state: DatabaseState) -> Router {
    Router::new()
        .route("/", get(home))
        // Venues
        .route("/venues", get(venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", post(create_venue_submission))
        .route("/venues/:venue_id", get(show_venue).delete(delete_venue))
        .route("/venues/:venue_id/edit", post(edit_venue_submission))
        // Artists
        .route("/artists", get(artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", post(create_artist_submission))
        .route("/artists/:artist_id", get(show_artist).delete(delete_artist))
        .route("/artists/:artist_id/edit", post(edit_artist_submission))
        // Shows
        .route("/shows", get(shows))
        .route("/shows/search", post(search_shows))
        .route("/shows/create", post(create_show_submission))
        .route("/shows/:show_id", get(get_show))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
