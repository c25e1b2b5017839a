//! Civil birth moment: local calendar fields plus a UTC offset.
//!
//! Accepted textual form (see [`BirthMoment::from_str`]):
//! `YYYY/MM/DD HH:MM[:SS][±HH[:MM[:SS]]|Z]`. Dashes may replace the date
//! slashes and `T` may replace the space.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Local civil birth time with its offset from UTC in hours.
///
/// Calendar fields are signed so that malformed input can be held and
/// rejected by [`BirthMoment::validate`] instead of wrapping silently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    /// Offset of the local clock from UTC, e.g. `-6.0` for UTC−06:00.
    pub utc_offset_hours: f64,
}

impl BirthMoment {
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }

    /// Reject out-of-bounds calendar fields.
    ///
    /// `hour` may be 24 and `minute`/`second` may be 60; the collaborator
    /// normalises those.
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.month < 0
            || self.day < 0
            || self.hour < 0
            || self.minute < 0
            || self.second < 0
        {
            return Err(TimeError::InvalidTimestamp(
                "calendar fields must not be negative",
            ));
        }
        if self.month > 12 {
            return Err(TimeError::InvalidTimestamp("month must be <= 12"));
        }
        if self.day > 31 {
            return Err(TimeError::InvalidTimestamp("day must be <= 31"));
        }
        if self.hour > 24 {
            return Err(TimeError::InvalidTimestamp("hour must be <= 24"));
        }
        if self.minute > 60 {
            return Err(TimeError::InvalidTimestamp("minute must be <= 60"));
        }
        if self.second > 60 {
            return Err(TimeError::InvalidTimestamp("second must be <= 60"));
        }
        if !self.utc_offset_hours.is_finite() {
            return Err(TimeError::InvalidTimestamp("UTC offset must be finite"));
        }
        Ok(())
    }

    /// UT Julian Date of this moment (Gregorian calendar, no ΔT).
    pub fn to_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64
            + (self.hour as f64 - self.utc_offset_hours) / 24.0
            + self.minute as f64 / 1440.0
            + self.second as f64 / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }
}

impl Display for BirthMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        let total_min = (self.utc_offset_hours.abs() * 60.0).round() as i64;
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            sign,
            total_min / 60,
            total_min % 60
        )
    }
}

impl FromStr for BirthMoment {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date, time) = s
            .split_once(|c: char| c == 'T' || c.is_whitespace())
            .ok_or_else(|| TimeError::Parse(format!("missing time in '{s}'")))?;

        let date_parts: Vec<&str> = date.split(['/', '-']).collect();
        let [year, month, day] = date_parts.as_slice() else {
            return Err(TimeError::Parse(format!("expected YYYY/MM/DD, got '{date}'")));
        };

        let (clock, utc_offset_hours) = split_offset(time.trim())?;
        let clock_parts: Vec<&str> = clock.split(':').collect();
        let (hour, minute, second): (i32, i32, i32) = match clock_parts.as_slice() {
            [h, m] => (h.parse()?, m.parse()?, 0),
            [h, m, sec] => (h.parse()?, m.parse()?, sec.parse()?),
            _ => {
                return Err(TimeError::Parse(format!(
                    "expected HH:MM[:SS], got '{clock}'"
                )));
            }
        };

        Ok(Self {
            year: year.parse()?,
            month: month.parse()?,
            day: day.parse()?,
            hour,
            minute,
            second,
            utc_offset_hours,
        })
    }
}

/// Split `HH:MM[:SS]` from a trailing `Z` or `±HH[:MM[:SS]]` offset.
fn split_offset(time: &str) -> Result<(&str, f64), TimeError> {
    if let Some(clock) = time.strip_suffix('Z') {
        return Ok((clock, 0.0));
    }
    let Some(pos) = time.find(['+', '-']) else {
        return Ok((time, 0.0));
    };
    let (clock, offset) = time.split_at(pos);
    let sign = if offset.starts_with('-') { -1.0 } else { 1.0 };

    let mut hours = 0.0;
    for (i, part) in offset[1..].split(':').enumerate() {
        if i > 2 {
            return Err(TimeError::Parse(format!("malformed UTC offset '{offset}'")));
        }
        let value: u32 = part.parse()?;
        hours += value as f64 / 60f64.powi(i as i32);
    }
    Ok((clock, sign * hours))
}
