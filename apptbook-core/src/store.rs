//! The appointment store: owns the current `AppState` and runs the initial load.

use tracing::{debug, info, warn};

use crate::appointment::{Appointment, NewAppointment};
use crate::error::{ApptError, ApptResult};
use crate::list::AppointmentList;
use crate::source::DataSource;
use crate::state::{Action, AppState, LoadStatus};
use crate::view::{derive_view, Direction, SortField, ViewState};

pub struct AppointmentStore {
    state: AppState,
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}

impl AppointmentStore {
    pub fn new(view: ViewState) -> Self {
        AppointmentStore {
            state: AppState::new(view),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn appointments(&self) -> &AppointmentList {
        &self.state.appointments
    }

    pub fn status(&self) -> &LoadStatus {
        &self.state.status
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state = self.state.apply(action);
    }

    /// Replace the list with the contents of `source`.
    ///
    /// Runs once. On failure the error is kept in the state, the list is left
    /// as it was, and the error is also returned.
    pub async fn load(&mut self, source: &DataSource) -> ApptResult<()> {
        if self.state.status != LoadStatus::Idle {
            return Err(ApptError::AlreadyLoaded);
        }

        info!(%source, "Loading appointments");
        self.dispatch(Action::LoadStarted);

        match source.fetch().await {
            Ok(items) => {
                info!(count = items.len(), "Loaded appointments");
                self.dispatch(Action::LoadSucceeded(items));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load appointments");
                self.dispatch(Action::LoadFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Append a new appointment and return the id it was given.
    pub fn add(&mut self, new: NewAppointment) -> String {
        let id = self.state.next_id();
        self.dispatch(Action::Add(new));
        debug!(id = %id, "Added appointment");
        id
    }

    /// Remove the appointment with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.state.appointments.len();
        self.dispatch(Action::Remove(id.to_string()));
        let removed = self.state.appointments.len() < before;
        debug!(id, removed, "Remove appointment");
        removed
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.dispatch(Action::SetQuery(query.into()));
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        self.dispatch(Action::SetSortField(field));
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.dispatch(Action::SetDirection(direction));
    }

    /// The list as currently displayed.
    pub fn visible(&self) -> Vec<&Appointment> {
        self.state.visible()
    }

    /// Derive a view with explicit parameters, ignoring the stored view state.
    pub fn view(&self, query: &str, sort_by: SortField, order_by: Direction) -> Vec<&Appointment> {
        derive_view(&self.state.appointments, &ViewState::new(query, sort_by, order_by))
    }
}
