use std::fmt;

use sea_orm::DbErr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookingError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Venue,
    Artist,
    Show,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Venue => "Venue",
            EntityKind::Artist => "Artist",
            EntityKind::Show => "Show",
        })
    }
}

#[derive(Error, Debug)]
pub enum BookingError {
    /// Primary key lookup missed
    #[error("{kind} with id {id} does not exist")]
    NotFound { kind: EntityKind, id: i32 },

    /// A show referenced an artist and/or venue that doesn't exist. `Some` marks the
    /// missing side.
    #[error("{}", missing_references(.artist_id, .venue_id))]
    ReferentialInvalid {
        artist_id: Option<i32>,
        venue_id: Option<i32>,
    },

    /// The store rejected the unit of work; it has been rolled back.
    #[error("{0}")]
    Persistence(#[from] DbErr),
}

impl BookingError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BookingError::NotFound { .. })
    }
}

fn missing_references(artist_id: &Option<i32>, venue_id: &Option<i32>) -> String {
    let mut missing = Vec::new();
    if let Some(id) = artist_id {
        missing.push(format!("Artist with artist_id \"{}\"", id));
    }
    if let Some(id) = venue_id {
        missing.push(format!("Venue with venue_id \"{}\"", id));
    }
    format!(
        "Unable to create a show as {} doesn't exist",
        missing.join(" and ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referential_message_names_each_missing_side() {
        let artist_only = BookingError::ReferentialInvalid {
            artist_id: Some(9999),
            venue_id: None,
        };
        assert_eq!(
            artist_only.to_string(),
            r#"Unable to create a show as Artist with artist_id "9999" doesn't exist"#
        );

        let both = BookingError::ReferentialInvalid {
            artist_id: Some(1),
            venue_id: Some(2),
        };
        assert_eq!(
            both.to_string(),
            r#"Unable to create a show as Artist with artist_id "1" and Venue with venue_id "2" doesn't exist"#
        );
    }

    #[test]
    fn not_found_message() {
        let err = BookingError::NotFound {
            kind: EntityKind::Show,
            id: 7,
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Show with id 7 does not exist");
    }
}
