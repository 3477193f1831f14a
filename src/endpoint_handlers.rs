use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::Form;
use entities::artist_local_model::ArtistModel;
use entities::show_local_model::ShowModel;
use entities::venue_local_model::VenueModel;
use queries::{current_time, mutations, read_models, EntityKind, Notice};
use serde::Deserialize;

use crate::responses::responses::{error_response, notice_response, status_for};
use crate::DatabaseState;

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    search_term: String,
}

pub async fn home(State(state): State<DatabaseState>) -> Response {
    match read_models::home(&state.connection).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => error_response(err),
    }
}

//  Venues
//  ----------------------------------------------------------------

pub async fn venues(State(state): State<DatabaseState>) -> Response {
    match read_models::venue_locations(&state.connection, current_time()).await {
        Ok(areas) => Json(areas).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn search_venues(
    State(state): State<DatabaseState>,
    Form(search): Form<SearchForm>,
) -> Response {
    match read_models::search_venues(&state.connection, &search.search_term).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn show_venue(
    State(state): State<DatabaseState>,
    Path(venue_id): Path<i32>,
) -> Response {
    match read_models::venue_detail(&state.connection, venue_id, current_time()).await {
        Ok(venue) => Json(venue).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn create_venue_submission(
    State(state): State<DatabaseState>,
    Form(form): Form<VenueModel>,
) -> Response {
    let name = form.name.to_owned();
    match mutations::create_venue(&state.connection, form).await {
        Ok(venue) => notice_response(
            StatusCode::CREATED,
            Notice::listed(EntityKind::Venue, &venue.name),
            "/".to_string(),
        ),
        Err(err) => notice_response(
            status_for(&err),
            Notice::listing_failed(EntityKind::Venue, &name, &err),
            "/".to_string(),
        ),
    }
}

pub async fn edit_venue_submission(
    State(state): State<DatabaseState>,
    Path(venue_id): Path<i32>,
    Form(form): Form<VenueModel>,
) -> Response {
    let redirect_to = format!("/venues/{}", venue_id);
    match mutations::update_venue(&state.connection, venue_id, form).await {
        Ok(venue) => notice_response(
            StatusCode::OK,
            Notice::updated(EntityKind::Venue, &venue.name),
            redirect_to,
        ),
        Err(err) => notice_response(
            status_for(&err),
            Notice::update_failed(EntityKind::Venue, venue_id, &err),
            redirect_to,
        ),
    }
}

pub async fn delete_venue(
    State(state): State<DatabaseState>,
    Path(venue_id): Path<i32>,
) -> Response {
    match mutations::delete_venue(&state.connection, venue_id).await {
        Ok(venue) => notice_response(
            StatusCode::OK,
            Notice::deleted(EntityKind::Venue, &venue.name),
            "/".to_string(),
        ),
        Err(err) => notice_response(
            status_for(&err),
            Notice::delete_failed(EntityKind::Venue, &err),
            "/".to_string(),
        ),
    }
}

//  Artists
//  ----------------------------------------------------------------

pub async fn artists(State(state): State<DatabaseState>) -> Response {
    match read_models::artist_list(&state.connection).await {
        Ok(artists) => Json(artists).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn search_artists(
    State(state): State<DatabaseState>,
    Form(search): Form<SearchForm>,
) -> Response {
    match read_models::search_artists(&state.connection, &search.search_term).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn show_artist(
    State(state): State<DatabaseState>,
    Path(artist_id): Path<i32>,
) -> Response {
    match read_models::artist_detail(&state.connection, artist_id, current_time()).await {
        Ok(artist) => Json(artist).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn create_artist_submission(
    State(state): State<DatabaseState>,
    Form(form): Form<ArtistModel>,
) -> Response {
    let name = form.name.to_owned();
    match mutations::create_artist(&state.connection, form).await {
        Ok(artist) => notice_response(
            StatusCode::CREATED,
            Notice::listed(EntityKind::Artist, &artist.name),
            "/".to_string(),
        ),
        Err(err) => notice_response(
            status_for(&err),
            Notice::listing_failed(EntityKind::Artist, &name, &err),
            "/".to_string(),
        ),
    }
}

pub async fn edit_artist_submission(
    State(state): State<DatabaseState>,
    Path(artist_id): Path<i32>,
    Form(form): Form<ArtistModel>,
) -> Response {
    let redirect_to = format!("/artists/{}", artist_id);
    match mutations::update_artist(&state.connection, artist_id, form).await {
        Ok(artist) => notice_response(
            StatusCode::OK,
            Notice::updated(EntityKind::Artist, &artist.name),
            redirect_to,
        ),
        Err(err) => notice_response(
            status_for(&err),
            Notice::update_failed(EntityKind::Artist, artist_id, &err),
            redirect_to,
        ),
    }
}

pub async fn delete_artist(
    State(state): State<DatabaseState>,
    Path(artist_id): Path<i32>,
) -> Response {
    match mutations::delete_artist(&state.connection, artist_id).await {
        Ok(artist) => notice_response(
            StatusCode::OK,
            Notice::deleted(EntityKind::Artist, &artist.name),
            "/".to_string(),
        ),
        Err(err) => notice_response(
            status_for(&err),
            Notice::delete_failed(EntityKind::Artist, &err),
            "/".to_string(),
        ),
    }
}

//  Shows
//  ----------------------------------------------------------------

pub async fn shows(State(state): State<DatabaseState>) -> Response {
    match read_models::all_shows(&state.connection).await {
        Ok(shows) => Json(shows).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn search_shows(
    State(state): State<DatabaseState>,
    Form(search): Form<SearchForm>,
) -> Response {
    match read_models::search_shows(&state.connection, &search.search_term).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn get_show(
    State(state): State<DatabaseState>,
    Path(show_id): Path<i32>,
) -> Response {
    match read_models::show_detail(&state.connection, show_id).await {
        Ok(show) => Json(show).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn create_show_submission(
    State(state): State<DatabaseState>,
    Form(form): Form<ShowModel>,
) -> Response {
    match mutations::create_show(&state.connection, form).await {
        Ok(_) => notice_response(StatusCode::CREATED, Notice::show_listed(), "/".to_string()),
        Err(err) => notice_response(
            status_for(&err),
            Notice::show_listing_failed(&err),
            "/".to_string(),
        ),
    }
}
