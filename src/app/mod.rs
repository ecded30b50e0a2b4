//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! host (whatever embeds the dashboard core) and the catalog/form/worker
//! layers. It implements the event-driven architecture that powers the
//! interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: The pure filter engine and its difficulty facet
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use filter::{filter_catalog, DifficultyFacet};
pub use handler::{handle_event, Event};
pub use state::{AppState, DirectoryState};
