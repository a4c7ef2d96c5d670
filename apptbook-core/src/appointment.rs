//! Appointment records.
//!
//! The JSON shape matches the data files the list is loaded from:
//! camelCase keys, string-typed ids, and a free-form date string.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ApptError, ApptResult};

/// A single appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Decimal integer stored as text, unique within a list
    pub id: String,
    pub pet_name: String,
    pub owner_name: String,
    #[serde(default)]
    pub apt_notes: String,
    /// Older data files call this `aptDate`
    #[serde(alias = "aptDate", default)]
    pub date: String,
}

impl Appointment {
    /// The id as a canonical decimal string (no sign, no leading zeros),
    /// if it is a non-negative integer. Any number of digits is accepted.
    pub fn decimal_id(&self) -> Option<&str> {
        let digits = self.id.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        Some(if trimmed.is_empty() { "0" } else { trimmed })
    }

    /// Whether pet name, owner name or notes contain `needle`.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.pet_name.to_lowercase().contains(needle)
            || self.owner_name.to_lowercase().contains(needle)
            || self.apt_notes.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.pet_name, self.owner_name)
    }
}

/// Appointment data as entered by the user, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub pet_name: String,
    pub owner_name: String,
    pub apt_notes: String,
    pub date: String,
}

impl NewAppointment {
    /// Build from separate date (`YYYY-MM-DD`) and time (`HH:MM`) inputs,
    /// combined as `"YYYY-MM-DD HH:MM"`.
    pub fn from_form(
        pet_name: impl Into<String>,
        owner_name: impl Into<String>,
        apt_notes: impl Into<String>,
        date: &str,
        time: &str,
    ) -> ApptResult<Self> {
        Ok(NewAppointment {
            pet_name: pet_name.into(),
            owner_name: owner_name.into(),
            apt_notes: apt_notes.into(),
            date: combine_date_time(date, time)?,
        })
    }

    pub fn with_id(self, id: impl Into<String>) -> Appointment {
        Appointment {
            id: id.into(),
            pet_name: self.pet_name,
            owner_name: self.owner_name,
            apt_notes: self.apt_notes,
            date: self.date,
        }
    }
}

pub fn parse_date(s: &str) -> ApptResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| ApptError::InvalidDate(s.to_string()))
}

pub fn parse_time(s: &str) -> ApptResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| ApptError::InvalidTime(s.to_string()))
}

fn combine_date_time(date: &str, time: &str) -> ApptResult<String> {
    let date = parse_date(date)?;
    let time = parse_time(time)?;
    Ok(format!("{} {}", date.format("%Y-%m-%d"), time.format("%H:%M")))
}
