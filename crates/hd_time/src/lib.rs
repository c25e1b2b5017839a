//! Birth-moment input and calendar conversions.
//!
//! This crate provides:
//! - `BirthMoment`, the validated civil input of every chart query
//! - Julian Date ↔ Gregorian calendar conversions
//! - `UtcTime` for reporting derived instants

pub mod birth_moment;
pub mod error;
pub mod julian;
pub mod utc_time;

pub use birth_moment::BirthMoment;
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use utc_time::UtcTime;
