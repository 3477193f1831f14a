//! Create, update and delete operations.
//!
//! Each operation owns one transaction. Store failures are converted to
//! [`BookingError`] at this boundary, the transaction is rolled back and the
//! connection is returned to the pool before the error reaches the caller.
//! Dropping a `DatabaseTransaction` without committing also rolls it back, so
//! an early return can't leave half a write behind.

use entities::artist_local_model::ArtistModel;
use entities::show_local_model::ShowModel;
use entities::venue_local_model::VenueModel;
use entities::{artist, show, venue};
use log::{error, info};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, QueryFilter, TransactionTrait,
};

use crate::error::{BookingError, Result};
use crate::lookup::{self, created_timestamp};

async fn finish<T>(txn: DatabaseTransaction, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                error!("Rollback failed: {}", rollback_err);
            }
            Err(err)
        }
    }
}

pub async fn create_venue(db: &DatabaseConnection, form: VenueModel) -> Result<venue::Model> {
    let txn = db.begin().await?;
    let result = insert_venue(&txn, form).await;
    let result = finish(txn, result).await;
    match &result {
        Ok(venue) => info!("Listed venue {} ({})", venue.name, venue.id),
        Err(err) => error!("Could not list venue: {}", err),
    }
    result
}

async fn insert_venue(txn: &DatabaseTransaction, form: VenueModel) -> Result<venue::Model> {
    let mut active = form.into_active_model();
    active.created_date = Set(created_timestamp());
    Ok(active.insert(txn).await?)
}

/// Overwrites every editable field of the venue with the submitted form.
pub async fn update_venue(
    db: &DatabaseConnection,
    venue_id: i32,
    form: VenueModel,
) -> Result<venue::Model> {
    let txn = db.begin().await?;
    let result = overwrite_venue(&txn, venue_id, form).await;
    let result = finish(txn, result).await;
    match &result {
        Ok(venue) => info!("Updated venue {} ({})", venue.name, venue.id),
        Err(err) => error!("Could not update venue {}: {}", venue_id, err),
    }
    result
}

async fn overwrite_venue(
    txn: &DatabaseTransaction,
    venue_id: i32,
    form: VenueModel,
) -> Result<venue::Model> {
    let existing = lookup::get_venue_by_id(txn, venue_id).await?;
    let active = venue::ActiveModel {
        id: Unchanged(existing.id),
        name: Set(form.name),
        genres: Set(form.genres),
        city: Set(form.city),
        state: Set(form.state),
        address: Set(form.address),
        phone: Set(form.phone),
        website: Set(form.website),
        facebook_link: Set(form.facebook_link),
        image_link: Set(form.image_link),
        seeking_talent: Set(form.seeking_talent),
        seeking_description: Set(form.seeking_description),
        created_date: NotSet,
    };
    Ok(active.update(txn).await?)
}

/// Deletes the venue and every show booked there. Returns the deleted row.
pub async fn delete_venue(db: &DatabaseConnection, venue_id: i32) -> Result<venue::Model> {
    let txn = db.begin().await?;
    let result = remove_venue(&txn, venue_id).await;
    let result = finish(txn, result).await;
    match &result {
        Ok(venue) => info!("Deleted venue {} ({})", venue.name, venue.id),
        Err(err) => error!("Could not delete venue {}: {}", venue_id, err),
    }
    result
}

async fn remove_venue(txn: &DatabaseTransaction, venue_id: i32) -> Result<venue::Model> {
    let existing = lookup::get_venue_by_id(txn, venue_id).await?;
    // SQLite only cascades with foreign_keys enabled
    show::Entity::delete_many()
        .filter(show::Column::VenueId.eq(existing.id))
        .exec(txn)
        .await?;
    venue::Entity::delete_by_id(existing.id).exec(txn).await?;
    Ok(existing)
}

pub async fn create_artist(db: &DatabaseConnection, form: ArtistModel) -> Result<artist::Model> {
    let txn = db.begin().await?;
    let result = insert_artist(&txn, form).await;
    let result = finish(txn, result).await;
    match &result {
        Ok(artist) => info!("Listed artist {} ({})", artist.name, artist.id),
        Err(err) => error!("Could not list artist: {}", err),
    }
    result
}

async fn insert_artist(txn: &DatabaseTransaction, form: ArtistModel) -> Result<artist::Model> {
    let mut active = form.into_active_model();
    active.created_date = Set(created_timestamp());
    Ok(active.insert(txn).await?)
}

/// Overwrites every editable field of the artist with the submitted form.
pub async fn update_artist(
    db: &DatabaseConnection,
    artist_id: i32,
    form: ArtistModel,
) -> Result<artist::Model> {
    let txn = db.begin().await?;
    let result = overwrite_artist(&txn, artist_id, form).await;
    let result = finish(txn, result).await;
    match &result {
        Ok(artist) => info!("Updated artist {} ({})", artist.name, artist.id),
        Err(err) => error!("Could not update artist {}: {}", artist_id, err),
    }
    result
}

async fn overwrite_artist(
    txn: &DatabaseTransaction,
    artist_id: i32,
    form: ArtistModel,
) -> Result<artist::Model> {
    let existing = lookup::get_artist_by_id(txn, artist_id).await?;
    let active = artist::ActiveModel {
        id: Unchanged(existing.id),
        name: Set(form.name),
        genres: Set(form.genres),
        city: Set(form.city),
        state: Set(form.state),
        phone: Set(form.phone),
        website: Set(form.website),
        facebook_link: Set(form.facebook_link),
        image_link: Set(form.image_link),
        seeking_venue: Set(form.seeking_venue),
        seeking_description: Set(form.seeking_description),
        created_date: NotSet,
    };
    Ok(active.update(txn).await?)
}

/// Deletes the artist and every show they were booked for. Returns the deleted row.
pub async fn delete_artist(db: &DatabaseConnection, artist_id: i32) -> Result<artist::Model> {
    let txn = db.begin().await?;
    let result = remove_artist(&txn, artist_id).await;
    let result = finish(txn, result).await;
    match &result {
        Ok(artist) => info!("Deleted artist {} ({})", artist.name, artist.id),
        Err(err) => error!("Could not delete artist {}: {}", artist_id, err),
    }
    result
}

async fn remove_artist(txn: &DatabaseTransaction, artist_id: i32) -> Result<artist::Model> {
    let existing = lookup::get_artist_by_id(txn, artist_id).await?;
    show::Entity::delete_many()
        .filter(show::Column::ArtistId.eq(existing.id))
        .exec(txn)
        .await?;
    artist::Entity::delete_by_id(existing.id).exec(txn).await?;
    Ok(existing)
}

/// Books an artist at a venue. Both must already exist.
pub async fn create_show(db: &DatabaseConnection, form: ShowModel) -> Result<show::Model> {
    let txn = db.begin().await?;
    let result = insert_show(&txn, form).await;
    let result = finish(txn, result).await;
    match &result {
        Ok(show) => info!(
            "Listed show {} (artist {} at venue {})",
            show.id, show.artist_id, show.venue_id
        ),
        Err(err) => error!("Could not list show: {}", err),
    }
    result
}

async fn insert_show(txn: &DatabaseTransaction, form: ShowModel) -> Result<show::Model> {
    let artist = artist::Entity::find_by_id(form.artist_id).one(txn).await?;
    let venue = venue::Entity::find_by_id(form.venue_id).one(txn).await?;
    if artist.is_none() || venue.is_none() {
        return Err(BookingError::ReferentialInvalid {
            artist_id: artist.is_none().then_some(form.artist_id),
            venue_id: venue.is_none().then_some(form.venue_id),
        });
    }
    let mut active = form.into_active_model();
    active.created_date = Set(created_timestamp());
    Ok(active.insert(txn).await?)
}
