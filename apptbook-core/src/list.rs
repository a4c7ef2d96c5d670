//! Immutable ordered list of appointments.

use std::sync::Arc;

use crate::appointment::Appointment;

/// Appointments in insertion order.
///
/// Cloning is cheap; every change produces a new list and leaves the old one intact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentList {
    items: Arc<[Appointment]>,
}

impl AppointmentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Appointment> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Appointment] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.items.iter().find(|a| a.id == id)
    }

    /// Largest decimal id in the list, `None` when there is none.
    ///
    /// Ids are compared as unbounded decimals: more digits wins, then digit order.
    pub fn max_id(&self) -> Option<&str> {
        self.items
            .iter()
            .filter_map(Appointment::decimal_id)
            .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }

    /// Id the next appended appointment should get: max + 1, or "1" when empty.
    pub fn next_id(&self) -> String {
        self.max_id().map_or_else(|| "1".to_string(), increment_decimal)
    }

    /// New list with `appointment` at the end.
    pub fn appended(&self, appointment: Appointment) -> Self {
        let items: Vec<Appointment> = self
            .items
            .iter()
            .cloned()
            .chain(std::iter::once(appointment))
            .collect();
        Self { items: items.into() }
    }

    /// New list without any appointment whose id equals `id`.
    ///
    /// Returns an unchanged clone when nothing matches.
    pub fn without(&self, id: &str) -> Self {
        if !self.items.iter().any(|a| a.id == id) {
            return self.clone();
        }
        let items: Vec<Appointment> = self.items.iter().filter(|a| a.id != id).cloned().collect();
        Self { items: items.into() }
    }
}

/// Add one to a string of ASCII digits, carrying as far as needed.
fn increment_decimal(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for digit in out.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    out.insert(0, b'1');
    String::from_utf8_lossy(&out).into_owned()
}

impl From<Vec<Appointment>> for AppointmentList {
    fn from(items: Vec<Appointment>) -> Self {
        Self { items: items.into() }
    }
}

impl<'a> IntoIterator for &'a AppointmentList {
    type Item = &'a Appointment;
    type IntoIter = std::slice::Iter<'a, Appointment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
