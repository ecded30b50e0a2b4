//! Rendering boundary of the crate.
//!
//! The core does not render. It exposes display-ready view models computed
//! from application state; the presentation layer consuming them (layout,
//! styling, routing) is an external collaborator.
//!
//! ```text
//! AppState → compute_viewmodel → UiViewModel → (external presentation)
//! ```

pub mod viewmodel;

pub use viewmodel::{
    DirectoryView, FormView, PlantCardView, PlantListItem, SearchInfo, UiViewModel,
};
