//! View model types representing renderable UI state.
//!
//! This module defines the immutable view models computed from application
//! state, following the MVVM pattern. View models are the crate's entire
//! rendering boundary: they carry display-ready data (the filtered plant
//! list, the selected detail card, the form echo with its validation
//! message, and the directory-fetch state) and no business logic. The
//! presentation layer that consumes them is an external collaborator.
//!
//! View models are created via `AppState::compute_viewmodel()` on demand;
//! nothing here is cached between renders.

use crate::domain::plant::{Difficulty, Light, PlantId, Rarity, Water};
use crate::domain::user::User;

/// Complete view model for one render of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiViewModel {
    /// The filtered catalog, in catalog order.
    pub plants: Vec<PlantListItem>,

    /// Detail card for the current selection, if any.
    pub card: Option<PlantCardView>,

    /// Echo of the current query and facet.
    pub search: SearchInfo,

    /// Echo of the add-plant form plus its validation message.
    pub form: FormView,

    /// State of the user directory view.
    pub directory: DirectoryView,
}

/// One row of the plant list.
///
/// Carries the fields the list renders: name, scientific subtitle, and the
/// difficulty/rarity badges, pre-formatted as display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantListItem {
    pub id: PlantId,
    pub name: String,
    pub scientific: Option<String>,
    /// Difficulty badge text ("Easy", "Medium", "Hard").
    pub difficulty: String,
    /// Rarity badge text, when the record has a rarity.
    pub rarity: Option<String>,
    /// Whether this row is the current selection.
    pub is_selected: bool,
}

/// The featured detail card for the selected plant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantCardView {
    pub id: PlantId,
    pub name: String,
    pub scientific: Option<String>,
    pub description: String,
    pub difficulty: String,
    pub rarity: Option<String>,
    pub light: String,
    pub water: String,
}

/// Echo of the current filter inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInfo {
    /// Current free-text query, verbatim.
    pub query: String,
    /// Facet display text ("All" or a difficulty).
    pub facet: String,
}

/// Echo of the add-plant form for rendering.
///
/// Text fields are returned verbatim as typed; enum fields carry the raw
/// values so the presentation layer can drive its select inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub name: String,
    pub scientific: String,
    pub difficulty: Difficulty,
    pub light: Light,
    pub water: Water,
    pub rarity: Rarity,
    pub description: String,
    /// The single human-readable validation message, if the last submit
    /// failed and the user has not corrected the form yet.
    pub error: Option<String>,
}

/// State of the user directory view.
///
/// Mirrors the fetch lifecycle: nothing requested yet, request in flight,
/// or one of the two terminal outcomes for this activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryView {
    /// The directory view has not been activated.
    Idle,
    /// The fetch is in flight.
    Loading,
    /// The fetch completed; records are in endpoint order.
    Ready { users: Vec<User> },
    /// The fetch failed; the message is surfaced verbatim.
    Failed { message: String },
}
