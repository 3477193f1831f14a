//! Data access for the booking site: lookups, view assembly and mutations
//! over venues, artists and shows.

pub mod error;
pub mod lookup;
pub mod mutations;
pub mod notice;
pub mod read_models;
pub mod views;

pub use error::{BookingError, EntityKind, Result};
pub use lookup::{current_time, ShowRelation};
pub use notice::{Notice, NoticeLevel};

#[cfg(test)]
pub(crate) mod test_support;
