use sea_orm::{ActiveValue, FromJsonQueryResult, IntoActiveValue};
use serde::{Deserialize, Serialize};

/// Ordered list of genre names, persisted as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Genres(pub Vec<String>);

impl Genres {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl IntoActiveValue<Genres> for Genres {
    fn into_active_value(self) -> ActiveValue<Genres> {
        ActiveValue::Set(self)
    }
}

impl From<Vec<String>> for Genres {
    fn from(value: Vec<String>) -> Self {
        Genres(value)
    }
}

impl From<Genres> for Vec<String> {
    fn from(value: Genres) -> Self {
        value.0
    }
}
