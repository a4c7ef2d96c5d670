//! Terminal rendering for apptbook types.
//!
//! Extension traits that add colored output to apptbook-core types using
//! owo_colors.

use apptbook_core::{Appointment, ViewState};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Appointment {
    fn render(&self) -> String {
        let date = if self.date.is_empty() { "(no date)" } else { self.date.as_str() };
        let mut line = format!(
            "{:<16}  {}  {}  {}",
            date.cyan(),
            self.pet_name.bold(),
            self.owner_name,
            format!("#{}", self.id).dimmed()
        );

        if !self.apt_notes.is_empty() {
            line.push_str(&format!("\n{:<16}  {}", "", self.apt_notes.dimmed()));
        }

        line
    }
}

impl Render for ViewState {
    fn render(&self) -> String {
        let order = format!("Sorted by {} ({})", self.sort_by, self.order_by);
        if self.query.is_empty() {
            order.dimmed().to_string()
        } else {
            format!("{}, matching \"{}\"", order, self.query).dimmed().to_string()
        }
    }
}

/// Render the visible appointments, one block per record.
pub fn render_list(appointments: &[&Appointment]) -> String {
    if appointments.is_empty() {
        return "No appointments found".dimmed().to_string();
    }

    appointments
        .iter()
        .map(|a| a.render())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary line, e.g. "2 of 5 appointments".
pub fn render_count(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "appointment" } else { "appointments" };
    if shown == total {
        format!("{total} {noun}")
    } else {
        format!("{shown} of {total} {noun}")
    }
}
