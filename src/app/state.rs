//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! dashboard core, along with the derived-filtering step and view model
//! generation. It is the single source of truth for all transient UI state;
//! everything here resets when the host reloads.
//!
//! # Architecture
//!
//! `AppState` separates core data (the catalog and its selection) from
//! derived state (the filtered plant list), mirroring the rule that the
//! filtered view is a pure function of (catalog, query, facet) and is
//! recomputed whenever any input changes. View models are computed on
//! demand from state snapshots.
//!
//! # State Components
//!
//! - **Catalog**: Master list of plant records plus the current selection
//! - **Filtered Plants**: Subset after applying the query and facet
//! - **Search Query / Facet**: The two filter inputs
//! - **Form**: The add-plant form fields and the last validation message
//! - **Directory**: State machine of the one asynchronous fetch

use crate::app::filter::{filter_catalog, DifficultyFacet};
use crate::catalog::Catalog;
use crate::domain::plant::Plant;
use crate::domain::user::User;
use crate::form::PlantForm;
use crate::ui::viewmodel::{
    DirectoryView, FormView, PlantCardView, PlantListItem, SearchInfo, UiViewModel,
};

/// Lifecycle of the user directory fetch.
///
/// The fetch is issued once per activation of the directory view. While
/// pending the consumer is in `Loading`; completion moves to `Ready` or
/// `Failed`, both terminal for that activation. A failed directory can be
/// re-activated, which issues a fresh fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DirectoryState {
    /// The directory view has never been activated.
    #[default]
    Idle,

    /// A fetch is in flight. No timeout or retry applies.
    Loading,

    /// The fetch completed with the directory's user records.
    Ready(Vec<User>),

    /// The fetch failed; the message is surfaced verbatim.
    Failed(String),
}

/// Central application state container.
///
/// Holds all transient UI state: the catalog, filter inputs and their
/// derived view, the add-plant form, and the directory fetch state. Mutated
/// only by the event handler in response to presentation-layer events; view
/// models are computed on demand from snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Master list of plant records plus the current selection.
    pub catalog: Catalog,

    /// Plants matching the current query and facet, in catalog order.
    ///
    /// Recomputed by [`apply_filters`](Self::apply_filters) after every
    /// change to the catalog or the filter inputs.
    pub filtered_plants: Vec<Plant>,

    /// Current free-text query. Empty matches every record.
    pub search_query: String,

    /// Current difficulty facet.
    pub facet: DifficultyFacet,

    /// Editable add-plant form state.
    pub form: PlantForm,

    /// Human-readable message from the last failed submission, if any.
    ///
    /// Cleared on a successful submission and on an explicit clear.
    pub form_error: Option<String>,

    /// State machine of the user directory fetch.
    pub directory: DirectoryState,

    /// Endpoint the directory is fetched from, taken from configuration.
    pub directory_url: String,
}

impl AppState {
    /// Creates application state around an initial catalog.
    ///
    /// Filter inputs start at their reset values (empty query, `All` facet)
    /// and the filtered view is computed immediately, so it mirrors the
    /// catalog from the first render.
    #[must_use]
    pub fn new(catalog: Catalog, directory_url: String) -> Self {
        let mut state = Self {
            catalog,
            filtered_plants: vec![],
            search_query: String::new(),
            facet: DifficultyFacet::All,
            form: PlantForm::default(),
            form_error: None,
            directory: DirectoryState::Idle,
            directory_url,
        };
        state.apply_filters();
        state
    }

    /// Recomputes the filtered plant list from the current inputs.
    ///
    /// Pure re-derivation: no memoized state is kept, so calling this with
    /// unchanged inputs yields an identical sequence.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total_plants = self.catalog.len(),
            query_len = self.search_query.len(),
            facet = %self.facet
        )
        .entered();

        self.filtered_plants = filter_catalog(self.catalog.plants(), &self.search_query, self.facet);

        tracing::debug!(
            filtered_count = self.filtered_plants.len(),
            "catalog filter applied"
        );
    }

    /// Restores the query to empty and the facet to `All`, then recomputes.
    pub fn reset_filters(&mut self) {
        self.search_query.clear();
        self.facet = DifficultyFacet::All;
        self.apply_filters();
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Transforms application state into a display-ready representation:
    /// the filtered list with selection marks, the detail card for the
    /// selected record, the form echo with its validation message, and the
    /// directory view.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UiViewModel {
        let plants = self
            .filtered_plants
            .iter()
            .map(|plant| self.compute_list_item(plant))
            .collect();

        UiViewModel {
            plants,
            card: self.catalog.selected_plant().map(Self::compute_card),
            search: SearchInfo {
                query: self.search_query.clone(),
                facet: self.facet.to_string(),
            },
            form: self.compute_form_view(),
            directory: self.compute_directory_view(),
        }
    }

    fn compute_list_item(&self, plant: &Plant) -> PlantListItem {
        PlantListItem {
            id: plant.id,
            name: plant.name.clone(),
            scientific: plant.scientific.clone(),
            difficulty: plant.difficulty.to_string(),
            rarity: plant.rarity.map(|rarity| rarity.to_string()),
            is_selected: self.catalog.selected_id() == Some(plant.id),
        }
    }

    fn compute_card(plant: &Plant) -> PlantCardView {
        PlantCardView {
            id: plant.id,
            name: plant.name.clone(),
            scientific: plant.scientific.clone(),
            description: plant.description.clone(),
            difficulty: plant.difficulty.to_string(),
            rarity: plant.rarity.map(|rarity| rarity.to_string()),
            light: plant.light.to_string(),
            water: plant.water.to_string(),
        }
    }

    fn compute_form_view(&self) -> FormView {
        FormView {
            name: self.form.name.clone(),
            scientific: self.form.scientific.clone(),
            difficulty: self.form.difficulty,
            light: self.form.light,
            water: self.form.water,
            rarity: self.form.rarity,
            description: self.form.description.clone(),
            error: self.form_error.clone(),
        }
    }

    fn compute_directory_view(&self) -> DirectoryView {
        match &self.directory {
            DirectoryState::Idle => DirectoryView::Idle,
            DirectoryState::Loading => DirectoryView::Loading,
            DirectoryState::Ready(users) => DirectoryView::Ready {
                users: users.clone(),
            },
            DirectoryState::Failed(message) => DirectoryView::Failed {
                message: message.clone(),
            },
        }
    }
}
