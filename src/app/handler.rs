//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes every input
//! from the presentation layer, translating it into state changes and
//! action sequences. It is the primary control flow coordinator: each
//! transition is a function of (prior state, event) to (new state, actions),
//! with no ambient mutable globals.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the presentation layer or the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `Catalog`/`PlantForm`/`AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Catalog**: `SelectPlant`, `RemovePlant`
//! - **Filtering**: `QueryChanged`, `FacetChanged`, `ResetFilters`
//! - **Form**: `FormFieldChanged`, `SubmitForm`, `ClearForm`
//! - **Directory**: `DirectoryOpened`, `WorkerResponse`

use crate::app::state::DirectoryState;
use crate::app::{Action, AppState};
use crate::app::filter::DifficultyFacet;
use crate::domain::error::Result;
use crate::domain::plant::PlantId;
use crate::form::FormField;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by presentation-layer input or worker responses.
///
/// Each event represents a discrete occurrence. The handler processes them
/// sequentially and synchronously, so every transition completes before the
/// next event is seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Sets the selection to the given plant.
    SelectPlant(PlantId),

    /// Removes the given plant; a no-op when it is absent.
    RemovePlant(PlantId),

    /// Replaces the free-text query.
    QueryChanged(String),

    /// Replaces the difficulty facet.
    FacetChanged(DifficultyFacet),

    /// Restores the query to empty and the facet to `All`.
    ResetFilters,

    /// Applies one add-plant form field edit.
    FormFieldChanged(FormField),

    /// Validates the form and, on success, adds the draft to the catalog.
    SubmitForm,

    /// Clears the form back to its defaults without submitting.
    ClearForm,

    /// The directory view became active; starts the fetch when the
    /// directory is idle or failed.
    DirectoryOpened,

    /// Wraps a response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns `(should_render, actions)` exactly like the host expects:
/// `should_render` is `true` when the event changed something a render
/// would show, and the actions are side effects for the host to execute
/// (posting worker messages).
///
/// # Errors
///
/// The handler itself is total over its inputs today; the `Result` return
/// keeps the signature stable for hosts as transitions grow effects.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SelectPlant(id) => {
            tracing::debug!(plant_id = *id, "plant selected");
            state.catalog.select(*id);
            Ok((true, vec![]))
        }
        Event::RemovePlant(id) => {
            state.catalog.remove(*id);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::QueryChanged(query) => {
            tracing::trace!(query = %query, "search query updated");
            state.search_query.clone_from(query);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::FacetChanged(facet) => {
            state.facet = *facet;
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ResetFilters => {
            state.reset_filters();
            Ok((true, vec![]))
        }
        Event::FormFieldChanged(field) => {
            state.form.apply(field.clone());
            Ok((true, vec![]))
        }
        Event::SubmitForm => match state.form.validate() {
            Ok(draft) => {
                let plant = state.catalog.add(draft);
                tracing::debug!(plant_id = plant.id, plant_name = %plant.name, "plant added");
                state.form.reset();
                state.form_error = None;
                state.apply_filters();
                Ok((true, vec![]))
            }
            Err(e) => {
                tracing::debug!(error = %e, "form submission rejected");
                state.form_error = Some(e.to_string());
                Ok((true, vec![]))
            }
        },
        Event::ClearForm => {
            state.form.reset();
            state.form_error = None;
            Ok((true, vec![]))
        }
        Event::DirectoryOpened => match state.directory {
            DirectoryState::Idle | DirectoryState::Failed(_) => {
                tracing::debug!(url = %state.directory_url, "directory activated, starting fetch");
                state.directory = DirectoryState::Loading;
                let message = WorkerMessage::fetch_directory(state.directory_url.clone());
                Ok((true, vec![Action::PostToWorker(message)]))
            }
            // A fetch is already in flight or done for this activation.
            DirectoryState::Loading | DirectoryState::Ready(_) => Ok((false, vec![])),
        },
        Event::WorkerResponse(response) => match response {
            WorkerResponse::DirectoryLoaded { users } => {
                tracing::debug!(user_count = users.len(), "directory response received");
                state.directory = DirectoryState::Ready(users.clone());
                Ok((true, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!(error = %message, "directory fetch failed");
                state.directory = DirectoryState::Failed(message.clone());
                Ok((true, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::plant::{Difficulty, Light, PlantDraft, Rarity, Water};
    use crate::domain::user::User;

    fn draft(name: &str, difficulty: Difficulty) -> PlantDraft {
        PlantDraft {
            name: name.to_string(),
            scientific: None,
            difficulty,
            light: Light::Medium,
            water: Water::Moderate,
            rarity: Some(Rarity::Common),
            description: String::new(),
        }
    }

    fn seeded_state() -> AppState {
        let catalog = Catalog::with_drafts(vec![
            draft("Snake Plant", Difficulty::Easy),
            draft("Fiddle Leaf Fig", Difficulty::Hard),
        ]);
        AppState::new(catalog, "https://example.test/users".to_string())
    }

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.test", name.to_lowercase()),
            phone: None,
            website: None,
            address: None,
            company: None,
        }
    }

    #[test]
    fn select_plant_updates_the_selection() {
        let mut state = seeded_state();
        handle_event(&mut state, &Event::SelectPlant(2)).unwrap();
        assert_eq!(state.catalog.selected_id(), Some(2));
    }

    #[test]
    fn remove_selected_plant_moves_selection_to_first_remaining() {
        let mut state = seeded_state();
        assert_eq!(state.catalog.selected_id(), Some(1));

        handle_event(&mut state, &Event::RemovePlant(1)).unwrap();
        assert_eq!(state.catalog.selected_id(), Some(2));
        assert_eq!(state.filtered_plants.len(), 1);
    }

    #[test]
    fn query_change_refilters_the_catalog() {
        let mut state = seeded_state();
        handle_event(&mut state, &Event::QueryChanged("fig".to_string())).unwrap();
        assert_eq!(state.filtered_plants.len(), 1);
        assert_eq!(state.filtered_plants[0].name, "Fiddle Leaf Fig");
    }

    #[test]
    fn facet_change_refilters_the_catalog() {
        let mut state = seeded_state();
        let facet = DifficultyFacet::Only(Difficulty::Easy);
        handle_event(&mut state, &Event::FacetChanged(facet)).unwrap();
        assert_eq!(state.filtered_plants.len(), 1);
        assert_eq!(state.filtered_plants[0].name, "Snake Plant");
    }

    #[test]
    fn reset_filters_event_restores_everything() {
        let mut state = seeded_state();
        handle_event(&mut state, &Event::QueryChanged("fig".to_string())).unwrap();
        handle_event(
            &mut state,
            &Event::FacetChanged(DifficultyFacet::Only(Difficulty::Hard)),
        )
        .unwrap();

        handle_event(&mut state, &Event::ResetFilters).unwrap();
        assert_eq!(state.search_query, "");
        assert_eq!(state.facet, DifficultyFacet::All);
        assert_eq!(state.filtered_plants.len(), 2);
    }

    #[test]
    fn successful_submit_adds_the_plant_and_resets_the_form() {
        let mut state = seeded_state();
        handle_event(
            &mut state,
            &Event::FormFieldChanged(FormField::Name("Ivy".to_string())),
        )
        .unwrap();
        handle_event(&mut state, &Event::SubmitForm).unwrap();

        assert_eq!(state.catalog.len(), 3);
        let added = state.catalog.get(3).unwrap();
        assert_eq!(added.name, "Ivy");
        assert_eq!(state.form.name, "");
        assert!(state.form_error.is_none());
        assert_eq!(state.filtered_plants.len(), 3);
    }

    #[test]
    fn failed_submit_keeps_the_form_and_stores_one_message() {
        let mut state = seeded_state();
        handle_event(
            &mut state,
            &Event::FormFieldChanged(FormField::Name("   ".to_string())),
        )
        .unwrap();
        handle_event(
            &mut state,
            &Event::FormFieldChanged(FormField::Description("notes".to_string())),
        )
        .unwrap();
        handle_event(&mut state, &Event::SubmitForm).unwrap();

        assert_eq!(state.catalog.len(), 2);
        assert_eq!(state.form.name, "   ");
        assert_eq!(state.form.description, "notes");
        assert_eq!(state.form_error.as_deref(), Some("Plant name is required"));
    }

    #[test]
    fn clear_form_discards_fields_and_message() {
        let mut state = seeded_state();
        handle_event(
            &mut state,
            &Event::FormFieldChanged(FormField::Name("   ".to_string())),
        )
        .unwrap();
        handle_event(&mut state, &Event::SubmitForm).unwrap();
        assert!(state.form_error.is_some());

        handle_event(&mut state, &Event::ClearForm).unwrap();
        assert_eq!(state.form.name, "");
        assert!(state.form_error.is_none());
    }

    #[test]
    fn directory_opened_starts_a_fetch_once() {
        let mut state = seeded_state();
        let (_, actions) = handle_event(&mut state, &Event::DirectoryOpened).unwrap();

        assert_eq!(state.directory, DirectoryState::Loading);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::fetch_directory(
                "https://example.test/users"
            ))]
        );

        // A second activation while loading is a no-op.
        let (should_render, actions) = handle_event(&mut state, &Event::DirectoryOpened).unwrap();
        assert!(!should_render);
        assert!(actions.is_empty());
    }

    #[test]
    fn directory_response_reaches_ready_state() {
        let mut state = seeded_state();
        handle_event(&mut state, &Event::DirectoryOpened).unwrap();

        let response = WorkerResponse::DirectoryLoaded {
            users: vec![user(1, "Leanne")],
        };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        match &state.directory {
            DirectoryState::Ready(users) => assert_eq!(users.len(), 1),
            other => panic!("unexpected directory state: {other:?}"),
        }

        // Ready is terminal for this activation; re-opening does nothing.
        let (should_render, actions) = handle_event(&mut state, &Event::DirectoryOpened).unwrap();
        assert!(!should_render);
        assert!(actions.is_empty());
    }

    #[test]
    fn failed_directory_can_be_reactivated() {
        let mut state = seeded_state();
        handle_event(&mut state, &Event::DirectoryOpened).unwrap();

        let response = WorkerResponse::Error {
            message: "connection refused".to_string(),
        };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        assert_eq!(
            state.directory,
            DirectoryState::Failed("connection refused".to_string())
        );

        // Re-activating after a failure issues a fresh fetch.
        let (_, actions) = handle_event(&mut state, &Event::DirectoryOpened).unwrap();
        assert_eq!(state.directory, DirectoryState::Loading);
        assert_eq!(actions.len(), 1);
    }
}
