//! Core types for apptbook.
//!
//! This crate holds everything below the terminal front end:
//! - `Appointment` records and their JSON wire format
//! - `AppState`, the immutable state value, and its `Action` reducer
//! - `derive_view`, the filter-then-sort transform used for display
//! - `AppointmentStore`, which runs the one-shot load from a `DataSource`
//! - `AppConfig`, the optional config file

pub mod appointment;
pub mod config;
pub mod error;
pub mod list;
pub mod source;
pub mod state;
pub mod store;
pub mod view;

pub use appointment::{Appointment, NewAppointment};
pub use crate::config::AppConfig;
pub use error::{ApptError, ApptResult};
pub use list::AppointmentList;
pub use source::DataSource;
pub use state::{Action, AppState, LoadStatus};
pub use store::AppointmentStore;
pub use view::{derive_view, Direction, SortField, ViewState};
