//! Query layer: lookups and filters over venues, artists and shows.
//!
//! Every function takes the connection (or open transaction) explicitly so a
//! request can run its reads inside the same scope as its writes.

use std::collections::{HashMap, HashSet};

use chrono::{Local, Utc};
use entities::{artist, show, venue};
use sea_orm::prelude::DateTime;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::error::{BookingError, EntityKind, Result};

/// Tables addressed by an integer primary key.
pub trait Record: EntityTrait {
    const KIND: EntityKind;

    fn id_column() -> Self::Column;

    fn created_date_column() -> Self::Column;
}

/// Tables with a searchable display name.
pub trait Named: Record {
    fn name_column() -> Self::Column;
}

impl Record for venue::Entity {
    const KIND: EntityKind = EntityKind::Venue;

    fn id_column() -> Self::Column {
        venue::Column::Id
    }

    fn created_date_column() -> Self::Column {
        venue::Column::CreatedDate
    }
}

impl Named for venue::Entity {
    fn name_column() -> Self::Column {
        venue::Column::Name
    }
}

impl Record for artist::Entity {
    const KIND: EntityKind = EntityKind::Artist;

    fn id_column() -> Self::Column {
        artist::Column::Id
    }

    fn created_date_column() -> Self::Column {
        artist::Column::CreatedDate
    }
}

impl Named for artist::Entity {
    fn name_column() -> Self::Column {
        artist::Column::Name
    }
}

impl Record for show::Entity {
    const KIND: EntityKind = EntityKind::Show;

    fn id_column() -> Self::Column {
        show::Column::Id
    }

    fn created_date_column() -> Self::Column {
        show::Column::CreatedDate
    }
}

/// Position of a show relative to the instant a request was served.
///
/// A show starting exactly at `now` is past, so every show lands in exactly one bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowRelation {
    Past,
    Upcoming,
}

impl ShowRelation {
    pub fn classify(start_time: DateTime, now: DateTime) -> Self {
        if start_time <= now {
            ShowRelation::Past
        } else {
            ShowRelation::Upcoming
        }
    }

    fn condition(self, now: DateTime) -> SimpleExpr {
        match self {
            ShowRelation::Past => show::Column::StartTime.lte(now),
            ShowRelation::Upcoming => show::Column::StartTime.gt(now),
        }
    }
}

/// Server-local wall clock reading used as "now" for one request.
///
/// Start times are entered as local wall-clock times, so the boundary is local too.
pub fn current_time() -> DateTime {
    Local::now().naive_local()
}

/// Creation stamps are kept in UTC.
pub fn created_timestamp() -> DateTime {
    Utc::now().naive_utc()
}

const LIKE_ESCAPE: char = '!';

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive substring match. An empty term matches every row.
fn contains_ignoring_case<T: IntoColumnRef>(column: T, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

pub async fn find_by_id<E, C>(db: &C, id: i32) -> Result<E::Model>
where
    E: Record,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::id_column().eq(id))
        .one(db)
        .await?
        .ok_or(BookingError::NotFound { kind: E::KIND, id })
}

pub async fn get_venue_by_id<C: ConnectionTrait>(db: &C, venue_id: i32) -> Result<venue::Model> {
    find_by_id::<venue::Entity, C>(db, venue_id).await
}

pub async fn get_artist_by_id<C: ConnectionTrait>(
    db: &C,
    artist_id: i32,
) -> Result<artist::Model> {
    find_by_id::<artist::Entity, C>(db, artist_id).await
}

pub async fn get_show_by_id<C: ConnectionTrait>(db: &C, show_id: i32) -> Result<show::Model> {
    find_by_id::<show::Entity, C>(db, show_id).await
}

pub async fn search_by_name_partial<E, C>(db: &C, term: &str) -> Result<Vec<E::Model>>
where
    E: Named,
    C: ConnectionTrait,
{
    Ok(E::find()
        .filter(contains_ignoring_case(
            (E::default(), E::name_column()),
            term,
        ))
        .order_by_asc(E::id_column())
        .all(db)
        .await?)
}

pub async fn list_all<E, C>(db: &C) -> Result<Vec<E::Model>>
where
    E: Record,
    C: ConnectionTrait,
{
    Ok(E::find().order_by_asc(E::id_column()).all(db).await?)
}

/// Most recently created rows first.
pub async fn recently_created<E, C>(db: &C, limit: u64) -> Result<Vec<E::Model>>
where
    E: Record,
    C: ConnectionTrait,
{
    Ok(E::find()
        .order_by_desc(E::created_date_column())
        .order_by_desc(E::id_column())
        .limit(limit)
        .all(db)
        .await?)
}

/// Unique (city, state) pairs across all venues.
pub async fn distinct_locations<C: ConnectionTrait>(db: &C) -> Result<Vec<(String, String)>> {
    Ok(venue::Entity::find()
        .select_only()
        .column(venue::Column::City)
        .column(venue::Column::State)
        .distinct()
        .order_by_asc(venue::Column::State)
        .order_by_asc(venue::Column::City)
        .into_tuple::<(String, String)>()
        .all(db)
        .await?)
}

pub async fn venues_at<C: ConnectionTrait>(
    db: &C,
    city: &str,
    state: &str,
) -> Result<Vec<venue::Model>> {
    Ok(venue::Entity::find()
        .filter(venue::Column::City.eq(city))
        .filter(venue::Column::State.eq(state))
        .order_by_asc(venue::Column::Id)
        .all(db)
        .await?)
}

pub async fn shows_for_venue<C: ConnectionTrait>(
    db: &C,
    venue_id: i32,
    relation: ShowRelation,
    now: DateTime,
) -> Result<Vec<show::Model>> {
    Ok(show::Entity::find()
        .filter(show::Column::VenueId.eq(venue_id))
        .filter(relation.condition(now))
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .all(db)
        .await?)
}

pub async fn shows_for_artist<C: ConnectionTrait>(
    db: &C,
    artist_id: i32,
    relation: ShowRelation,
    now: DateTime,
) -> Result<Vec<show::Model>> {
    Ok(show::Entity::find()
        .filter(show::Column::ArtistId.eq(artist_id))
        .filter(relation.condition(now))
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .all(db)
        .await?)
}

/// Shows whose artist name or venue name contains `term`, ignoring case.
pub async fn search_shows<C: ConnectionTrait>(db: &C, term: &str) -> Result<Vec<show::Model>> {
    Ok(show::Entity::find()
        .join(JoinType::InnerJoin, show::Relation::Artist.def())
        .join(JoinType::InnerJoin, show::Relation::Venue.def())
        .filter(
            Condition::any()
                .add(contains_ignoring_case(
                    (artist::Entity, artist::Column::Name),
                    term,
                ))
                .add(contains_ignoring_case(
                    (venue::Entity, venue::Column::Name),
                    term,
                )),
        )
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .all(db)
        .await?)
}

pub async fn all_shows<C: ConnectionTrait>(db: &C) -> Result<Vec<show::Model>> {
    Ok(show::Entity::find()
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .all(db)
        .await?)
}

/// Number of upcoming shows per venue. Venues without any are absent from the map.
pub async fn upcoming_show_counts<C: ConnectionTrait>(
    db: &C,
    venue_ids: &[i32],
    now: DateTime,
) -> Result<HashMap<i32, i64>> {
    if venue_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = show::Entity::find()
        .select_only()
        .column(show::Column::VenueId)
        .column_as(Expr::col(show::Column::Id).count(), "show_count")
        .filter(show::Column::VenueId.is_in(venue_ids.to_vec()))
        .filter(ShowRelation::Upcoming.condition(now))
        .group_by(show::Column::VenueId)
        .into_tuple::<(i32, i64)>()
        .all(db)
        .await?;
    Ok(rows.into_iter().collect())
}

fn unique_ids(ids: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

pub async fn artists_by_id<C: ConnectionTrait>(
    db: &C,
    ids: impl IntoIterator<Item = i32>,
) -> Result<HashMap<i32, artist::Model>> {
    let ids = unique_ids(ids);
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let artists = artist::Entity::find()
        .filter(artist::Column::Id.is_in(ids))
        .all(db)
        .await?;
    Ok(artists.into_iter().map(|a| (a.id, a)).collect())
}

pub async fn venues_by_id<C: ConnectionTrait>(
    db: &C,
    ids: impl IntoIterator<Item = i32>,
) -> Result<HashMap<i32, venue::Model>> {
    let ids = unique_ids(ids);
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let venues = venue::Entity::find()
        .filter(venue::Column::Id.is_in(ids))
        .all(db)
        .await?;
    Ok(venues.into_iter().map(|v| (v.id, v)).collect())
}
