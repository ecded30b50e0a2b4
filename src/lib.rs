//! Nursery: the state-management core of a small plant catalog dashboard.
//!
//! Nursery implements everything behind the screen of a plant nursery
//! dashboard, without the screen itself:
//! - An in-memory catalog of plant records with store-assigned identifiers,
//!   selection tracking, add and remove operations
//! - A pure filter engine combining a free-text query with a difficulty facet
//! - An add-plant form with validation and normalization
//! - A background worker fetching a read-only people directory from a remote
//!   endpoint, exposed as a three-state result
//!
//! All state is transient: nothing is persisted and everything resets when
//! the host reloads.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host / presentation layer (external)               │  ← renders UiViewModel,
//! └─────────────────────────────────────────────────────┘    sends Events
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Catalog Layer │   │ Form Layer    │   │ Worker Layer  │
//! │ (catalog/)    │   │ (form/)       │   │ (worker/)     │
//! │ - Records     │   │ - Field edits │   │ - Directory   │
//! │ - Selection   │   │ - Validation  │   │   fetch       │
//! │ - Id assign   │   │ - Reset       │   │ - Channels    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Plant record and care attributes                 │
//! │  - User directory record shape                      │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: In-memory plant store with selection tracking
//! - [`domain`]: Core domain types (plants, users, errors)
//! - [`form`]: Add-plant form state and validation
//! - [`worker`]: Background worker for the directory fetch
//! - [`ui`]: View model types, the rendering boundary
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust
//! use nursery::{handle_event, initialize, Config, Event};
//! use nursery::domain::{Difficulty, Light, PlantDraft, Rarity, Water};
//!
//! let config = Config::default();
//! let seed = vec![PlantDraft {
//!     name: "Snake Plant".to_string(),
//!     scientific: Some("Sansevieria trifasciata".to_string()),
//!     difficulty: Difficulty::Easy,
//!     light: Light::Low,
//!     water: Water::Low,
//!     rarity: Some(Rarity::Common),
//!     description: "A hardy plant that thrives on neglect.".to_string(),
//! }];
//!
//! let mut state = initialize(&config, seed);
//! assert_eq!(state.filtered_plants.len(), 1);
//!
//! let (should_render, actions) =
//!     handle_event(&mut state, &Event::QueryChanged("snake".to_string()))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), nursery::NurseryError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Explicit State, Explicit Transitions
//!
//! Every piece of UI-bound state (the selection, the filter inputs, the
//! form fields, the fetch status) lives in [`AppState`] with a defined
//! transition for every [`Event`]. There are no ambient mutable globals.
//!
//! ## Three-State Fetch Result
//!
//! The one asynchronous operation (the directory fetch) is modeled as
//! `Loading | Ready | Failed`, inspected explicitly by the consumer rather
//! than chained through callbacks. The worker communicates over channels;
//! the host drains responses back into events.
//!
//! ## Derived, Never Cached
//!
//! The filtered plant list is re-derived from (catalog, query, facet) on
//! every input change. No memoization: identical inputs always yield an
//! identical sequence.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod form;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, DifficultyFacet, DirectoryState, Event};
pub use catalog::Catalog;
pub use domain::{NurseryError, Plant, PlantDraft, PlantId, Result, User};
pub use form::{FormField, PlantForm};
pub use ui::UiViewModel;
pub use worker::{WorkerHandle, WorkerMessage, WorkerResponse};

use serde::Deserialize;
use std::path::Path;

/// Default endpoint for the user directory fetch.
pub const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Core configuration supplied by the host.
///
/// All keys are optional in the TOML file; missing keys fall back to the
/// defaults below.
///
/// # Example
///
/// ```toml
/// directory_url = "https://jsonplaceholder.typicode.com/users"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint returning the JSON list of user records.
    ///
    /// Default: [`DEFAULT_DIRECTORY_URL`].
    pub directory_url: String,

    /// Tracing level for the subscriber set up by
    /// [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NurseryError::Io`] if the file cannot be read and
    /// [`NurseryError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| NurseryError::Config(format!("invalid config file: {e}")))
    }
}

/// Initializes application state with configuration and seed records.
///
/// Creates a catalog from the seed drafts (identifiers `1..=n`, first record
/// selected, or no selection when the seed is empty) and application state
/// around it, with the filtered view already computed.
///
/// Tracing is *not* initialized here; hosts that want the crate's
/// subscriber call [`observability::init_tracing`] first.
#[must_use]
pub fn initialize(config: &Config, seed: Vec<PlantDraft>) -> AppState {
    tracing::debug!(seed_count = seed.len(), "initializing nursery core");

    let catalog = Catalog::with_drafts(seed);
    AppState::new(catalog, config.directory_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_points_at_the_public_directory() {
        let config = Config::default();
        assert_eq!(config.directory_url, DEFAULT_DIRECTORY_URL);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn config_loads_from_a_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "directory_url = \"https://internal.test/people\"\ntrace_level = \"debug\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.directory_url, "https://internal.test/people");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn config_file_keys_are_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trace_level = \"warn\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.directory_url, DEFAULT_DIRECTORY_URL);
    }

    #[test]
    fn invalid_config_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "directory_url = [not, a, string]").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, NurseryError::Config(_)));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let err = Config::from_file("/nonexistent/nursery.toml").unwrap_err();
        assert!(matches!(err, NurseryError::Io(_)));
    }

    #[test]
    fn initialize_seeds_selects_and_filters() {
        let config = Config::default();
        let state = initialize(&config, vec![]);
        assert!(state.catalog.is_empty());
        assert_eq!(state.catalog.selected_id(), None);
        assert!(state.filtered_plants.is_empty());
        assert_eq!(state.directory_url, DEFAULT_DIRECTORY_URL);
    }
}
