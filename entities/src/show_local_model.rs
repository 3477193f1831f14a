use crate::form_fields::start_time;
use crate::show::ActiveModel;
use sea_orm::prelude::DateTime;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;

#[derive(DeriveIntoActiveModel, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct ShowModel {
    pub artist_id: i32,
    pub venue_id: i32,
    #[serde(deserialize_with = "start_time")]
    pub start_time: DateTime,
}
