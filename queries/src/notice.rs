//! Flash notices describing the outcome of a mutation.

use serde::Serialize;

use crate::error::{BookingError, EntityKind};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Danger,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn info(message: String) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message,
        }
    }

    fn danger(message: String) -> Self {
        Notice {
            level: NoticeLevel::Danger,
            message,
        }
    }

    pub fn listed(kind: EntityKind, name: &str) -> Self {
        Notice::info(format!("{} {} was successfully listed!", kind, name))
    }

    pub fn listing_failed(kind: EntityKind, name: &str, err: &BookingError) -> Self {
        Notice::danger(format!(
            "Error occurred. {} {} could not be listed. {}",
            kind, name, err
        ))
    }

    pub fn updated(kind: EntityKind, name: &str) -> Self {
        Notice::info(format!("{} {} was successfully updated!", kind, name))
    }

    pub fn update_failed(kind: EntityKind, id: i32, err: &BookingError) -> Self {
        Notice::danger(format!(
            "An error occurred. {} with id {} could not be updated. {}",
            kind, id, err
        ))
    }

    pub fn deleted(kind: EntityKind, name: &str) -> Self {
        Notice::info(format!("{} {} was successfully deleted!", kind, name))
    }

    pub fn delete_failed(kind: EntityKind, err: &BookingError) -> Self {
        Notice::danger(format!(
            "Error occurred. {} could not be deleted. {}",
            kind, err
        ))
    }

    pub fn show_listed() -> Self {
        Notice::info("Show was successfully listed!".to_string())
    }

    /// Missing references get their own wording; anything else is a listing failure.
    pub fn show_listing_failed(err: &BookingError) -> Self {
        match err {
            BookingError::ReferentialInvalid { .. } => Notice::danger(err.to_string()),
            _ => Notice::danger(format!("Error occurred. Show could not be listed. {}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_wording() {
        assert_eq!(
            Notice::listed(EntityKind::Venue, "The Fillmore").message,
            "Venue The Fillmore was successfully listed!"
        );
        assert_eq!(
            Notice::updated(EntityKind::Artist, "Daft Punk").message,
            "Artist Daft Punk was successfully updated!"
        );
        let deleted = Notice::deleted(EntityKind::Venue, "The Fillmore");
        assert_eq!(deleted.level, NoticeLevel::Info);
        assert_eq!(deleted.message, "Venue The Fillmore was successfully deleted!");
    }

    #[test]
    fn failure_wording_carries_the_reason() {
        let err = BookingError::NotFound {
            kind: EntityKind::Artist,
            id: 4,
        };
        let notice = Notice::update_failed(EntityKind::Artist, 4, &err);
        assert_eq!(notice.level, NoticeLevel::Danger);
        assert_eq!(
            notice.message,
            "An error occurred. Artist with id 4 could not be updated. Artist with id 4 does not exist"
        );
    }

    #[test]
    fn missing_show_references_are_reported_on_their_own() {
        let err = BookingError::ReferentialInvalid {
            artist_id: None,
            venue_id: Some(12),
        };
        assert_eq!(
            Notice::show_listing_failed(&err).message,
            r#"Unable to create a show as Venue with venue_id "12" doesn't exist"#
        );
    }

    #[test]
    fn serializes_level_in_lowercase() {
        let json = serde_json::to_value(Notice::show_listed()).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["message"], "Show was successfully listed!");
    }
}
