use crate::artist::ActiveModel;
use crate::form_fields::{checkbox, genre_list, optional_text};
use crate::genres::Genres;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;

/// Editable artist fields as submitted by the artist form.
#[derive(DeriveIntoActiveModel, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct ArtistModel {
    pub name: String,
    #[serde(default, deserialize_with = "genre_list")]
    pub genres: Genres,
    pub city: String,
    pub state: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub facebook_link: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_venue: bool,
    #[serde(default, deserialize_with = "optional_text")]
    pub seeking_description: Option<String>,
}
