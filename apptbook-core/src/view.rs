//! View derivation: filter by query, then sort.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::appointment::Appointment;
use crate::error::ApptError;

/// Field the view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    #[serde(rename = "petName")]
    PetName,
    #[serde(rename = "ownerName")]
    OwnerName,
    #[serde(rename = "aptNotes")]
    AptNotes,
    #[serde(rename = "date", alias = "aptDate")]
    Date,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::PetName,
        SortField::OwnerName,
        SortField::AptNotes,
        SortField::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::PetName => "petName",
            SortField::OwnerName => "ownerName",
            SortField::AptNotes => "aptNotes",
            SortField::Date => "date",
        }
    }

    pub fn value<'a>(&self, appointment: &'a Appointment) -> &'a str {
        match self {
            SortField::PetName => &appointment.pet_name,
            SortField::OwnerName => &appointment.owner_name,
            SortField::AptNotes => &appointment.apt_notes,
            SortField::Date => &appointment.date,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ApptError;

    /// Accepts the wire names case-insensitively, plus `aptDate` and a few short forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "petname" | "pet" => Ok(SortField::PetName),
            "ownername" | "owner" => Ok(SortField::OwnerName),
            "aptnotes" | "notes" => Ok(SortField::AptNotes),
            "date" | "aptdate" => Ok(SortField::Date),
            _ => Err(ApptError::InvalidSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    /// Apply the direction to an ascending comparison.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ApptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Asc),
            "desc" | "descending" => Ok(Direction::Desc),
            _ => Err(ApptError::InvalidDirection(s.to_string())),
        }
    }
}

/// Query and ordering applied to the list before display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub sort_by: SortField,
    pub order_by: Direction,
}

impl ViewState {
    pub fn new(query: impl Into<String>, sort_by: SortField, order_by: Direction) -> Self {
        ViewState {
            query: query.into(),
            sort_by,
            order_by,
        }
    }
}

/// Filter `appointments` by `state.query`, then sort by `state.sort_by`.
///
/// Comparison is case-insensitive. Equal keys keep their input order in both
/// directions.
pub fn derive_view<'a, I>(appointments: I, state: &ViewState) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let needle = state.query.to_lowercase();

    let mut keyed: Vec<(String, &Appointment)> = appointments
        .into_iter()
        .filter(|a| a.matches_lowercase(&needle))
        .map(|a| (state.sort_by.value(a).to_lowercase(), a))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| state.order_by.apply(a.cmp(b)));

    keyed.into_iter().map(|(_, a)| a).collect()
}
