//! Application state and its reducer.
//!
//! `AppState` is an immutable value. Every user action or load event is an
//! `Action`, and `AppState::apply` returns the next state.

use crate::appointment::{Appointment, NewAppointment};
use crate::list::AppointmentList;
use crate::view::{derive_view, Direction, SortField, ViewState};

/// Progress of the one-shot initial load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadStarted,
    LoadSucceeded(Vec<Appointment>),
    LoadFailed(String),
    Add(NewAppointment),
    Remove(String),
    SetQuery(String),
    SetSortField(SortField),
    SetDirection(Direction),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub appointments: AppointmentList,
    pub view: ViewState,
    pub status: LoadStatus,
}

impl AppState {
    pub fn new(view: ViewState) -> Self {
        AppState {
            view,
            ..Default::default()
        }
    }

    /// Return the state that follows `action`.
    ///
    /// Load events only move forward: `Idle -> Loading -> Loaded | Failed`.
    /// Out-of-order load events leave the state unchanged.
    pub fn apply(&self, action: Action) -> AppState {
        let mut next = self.clone();

        match action {
            Action::LoadStarted => {
                if self.status == LoadStatus::Idle {
                    next.status = LoadStatus::Loading;
                }
            }
            Action::LoadSucceeded(items) => {
                if self.status.is_loading() {
                    next.appointments = AppointmentList::from(items);
                    next.status = LoadStatus::Loaded;
                }
            }
            Action::LoadFailed(msg) => {
                if self.status.is_loading() {
                    next.status = LoadStatus::Failed(msg);
                }
            }
            Action::Add(new) => {
                let appointment = new.with_id(self.appointments.next_id());
                next.appointments = self.appointments.appended(appointment);
            }
            Action::Remove(id) => {
                next.appointments = self.appointments.without(&id);
            }
            Action::SetQuery(query) => next.view.query = query,
            Action::SetSortField(field) => next.view.sort_by = field,
            Action::SetDirection(direction) => next.view.order_by = direction,
        }

        next
    }

    /// The filtered and sorted appointments to display.
    pub fn visible(&self) -> Vec<&Appointment> {
        derive_view(&self.appointments, &self.view)
    }

    /// Id the next `Action::Add` will assign.
    pub fn next_id(&self) -> String {
        self.appointments.next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apt(id: &str, pet: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            pet_name: pet.to_string(),
            owner_name: "Owner".to_string(),
            apt_notes: String::new(),
            date: "2024-01-01 09:00".to_string(),
        }
    }

    fn new_apt(pet: &str) -> NewAppointment {
        NewAppointment {
            pet_name: pet.to_string(),
            owner_name: "Owner".to_string(),
            apt_notes: String::new(),
            date: "2024-01-02 10:00".to_string(),
        }
    }

    fn loaded(items: Vec<Appointment>) -> AppState {
        AppState::default()
            .apply(Action::LoadStarted)
            .apply(Action::LoadSucceeded(items))
    }

    #[test]
    fn load_lifecycle() {
        let state = AppState::default();
        assert_eq!(state.status, LoadStatus::Idle);

        let state = state.apply(Action::LoadStarted);
        assert!(state.status.is_loading());

        let state = state.apply(Action::LoadSucceeded(vec![apt("1", "Rex")]));
        assert_eq!(state.status, LoadStatus::Loaded);
        assert_eq!(state.appointments.len(), 1);
    }

    #[test]
    fn load_failure_keeps_list_and_records_error() {
        let state = AppState::default()
            .apply(Action::Add(new_apt("Rex")))
            .apply(Action::LoadStarted)
            .apply(Action::LoadFailed("connection refused".into()));

        assert_eq!(state.status.error(), Some("connection refused"));
        assert_eq!(state.appointments.len(), 1);
    }

    #[test]
    fn terminal_states_do_not_go_back_to_loading() {
        let state = loaded(vec![]).apply(Action::LoadStarted);
        assert_eq!(state.status, LoadStatus::Loaded);

        let state = state.apply(Action::LoadFailed("late".into()));
        assert_eq!(state.status, LoadStatus::Loaded);
    }

    #[test]
    fn result_without_load_started_is_ignored() {
        let state = AppState::default().apply(Action::LoadSucceeded(vec![apt("1", "Rex")]));
        assert_eq!(state.status, LoadStatus::Idle);
        assert!(state.appointments.is_empty());
    }

    #[test]
    fn add_assigns_max_plus_one() {
        let state = loaded(vec![apt("1", "Rex"), apt("3", "Max")]).apply(Action::Add(new_apt("Buffy")));
        let last = state.appointments.as_slice().last().unwrap();
        assert_eq!(last.id, "4");
        assert_eq!(last.pet_name, "Buffy");
    }

    #[test]
    fn add_after_largest_u64_id_keeps_ids_unique() {
        let state = loaded(vec![apt("0", "Rex"), apt("18446744073709551615", "Max")])
            .apply(Action::Add(new_apt("Buffy")));
        let ids: Vec<&str> = state.appointments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "18446744073709551615", "18446744073709551616"]);
    }

    #[test]
    fn add_to_empty_list_assigns_one() {
        let state = AppState::default().apply(Action::Add(new_apt("Buffy")));
        assert_eq!(state.appointments.as_slice()[0].id, "1");
    }

    #[test]
    fn add_then_remove_restores_list() {
        let before = loaded(vec![apt("1", "Rex"), apt("2", "Max")]);
        let id = before.next_id();
        let after = before
            .apply(Action::Add(new_apt("Buffy")))
            .apply(Action::Remove(id));
        assert_eq!(after.appointments, before.appointments);
    }

    #[test]
    fn remove_drops_only_matching_record() {
        let state = loaded(vec![apt("1", "Rex"), apt("2", "Max")]).apply(Action::Remove("2".into()));
        let ids: Vec<&str> = state.appointments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let state = loaded(vec![apt("1", "Rex")]);
        assert_eq!(state.apply(Action::Remove("9".into())), state);
    }

    #[test]
    fn previous_state_is_unchanged() {
        let before = loaded(vec![apt("1", "Rex")]);
        let _after = before.apply(Action::Add(new_apt("Max")));
        assert_eq!(before.appointments.len(), 1);
    }

    #[test]
    fn view_actions_change_visible_list_only() {
        let state = loaded(vec![apt("1", "Rex"), apt("2", "Max")]);
        let filtered = state.apply(Action::SetQuery("rex".into()));
        let ids: Vec<&str> = filtered.visible().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
        assert_eq!(filtered.appointments, state.appointments);

        let sorted = state
            .apply(Action::SetSortField(SortField::PetName))
            .apply(Action::SetDirection(Direction::Desc));
        let ids: Vec<&str> = sorted.visible().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
