//! In-memory catalog store for plant records.
//!
//! This module implements [`Catalog`], the single source of truth for plant
//! records and the current selection. The catalog is an ordered, in-memory
//! collection: records keep insertion order, identifiers are assigned by the
//! store on insertion, and nothing is persisted; state resets with the host.
//!
//! # Invariants
//!
//! - Identifiers are unique within the catalog at all times.
//! - The selection, if set, always references an existing record; `remove`
//!   is the only operation that can invalidate it and repairs it in place.
//!
//! # Example
//!
//! ```rust
//! use nursery::catalog::Catalog;
//! use nursery::domain::{Difficulty, Light, PlantDraft, Rarity, Water};
//!
//! let mut catalog = Catalog::new();
//! let id = catalog
//!     .add(PlantDraft {
//!         name: "Snake Plant".to_string(),
//!         scientific: Some("Sansevieria trifasciata".to_string()),
//!         difficulty: Difficulty::Easy,
//!         light: Light::Low,
//!         water: Water::Low,
//!         rarity: Some(Rarity::Common),
//!         description: "Thrives on neglect.".to_string(),
//!     })
//!     .id;
//! catalog.select(id);
//! assert_eq!(catalog.selected_id(), Some(id));
//! ```

use crate::domain::plant::{Plant, PlantDraft, PlantId};

/// Ordered collection of plant records plus the current selection.
///
/// Mutated only by the event handler in response to user actions. All
/// operations run synchronously; there is a single logical writer, so no
/// locking discipline is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Records in insertion order.
    plants: Vec<Plant>,

    /// Identifier of the currently selected record, if any.
    selected: Option<PlantId>,
}

impl Catalog {
    /// Creates an empty catalog with no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded from drafts, selecting the first record.
    ///
    /// Drafts are inserted in order, receiving identifiers `1..=n`. The
    /// selection defaults to the first record, matching the dashboard's
    /// startup behavior; an empty seed leaves the selection unset.
    #[must_use]
    pub fn with_drafts(drafts: impl IntoIterator<Item = PlantDraft>) -> Self {
        let mut catalog = Self::new();
        for draft in drafts {
            catalog.add(draft);
        }
        catalog.selected = catalog.plants.first().map(|plant| plant.id);
        catalog
    }

    /// Inserts a new record with a freshly assigned identifier.
    ///
    /// The identifier is `max(existing ids, 0) + 1`, so it is strictly
    /// greater than every identifier currently in the catalog. Field
    /// contents are not validated here; that is the form validator's
    /// responsibility. The selection is left untouched.
    ///
    /// # Returns
    ///
    /// A reference to the created record.
    pub fn add(&mut self, draft: PlantDraft) -> &Plant {
        let id = self.next_id();
        tracing::debug!(plant_id = id, plant_name = %draft.name, "adding plant to catalog");
        self.plants.push(Plant::from_draft(id, draft));
        // Just pushed, so the vec is non-empty.
        &self.plants[self.plants.len() - 1]
    }

    /// Deletes the record with the matching identifier, if present.
    ///
    /// Removing an absent identifier is a no-op, not an error. If the removed
    /// identifier equals the current selection, the selection is reassigned
    /// to the first remaining record, or cleared if the catalog is now empty.
    pub fn remove(&mut self, id: PlantId) {
        let before = self.plants.len();
        self.plants.retain(|plant| plant.id != id);

        if self.plants.len() == before {
            tracing::debug!(plant_id = id, "remove: no matching plant");
            return;
        }

        tracing::debug!(plant_id = id, remaining = self.plants.len(), "plant removed");

        if self.selected == Some(id) {
            self.selected = self.plants.first().map(|plant| plant.id);
            tracing::debug!(selection = ?self.selected, "selection reassigned after removal");
        }
    }

    /// Sets the current selection unconditionally.
    ///
    /// No existence check is enforced here; callers are expected to pass an
    /// identifier taken from a rendered list.
    pub fn select(&mut self, id: PlantId) {
        self.selected = Some(id);
    }

    /// Returns all records in insertion order.
    #[must_use]
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Returns the record with the given identifier, if present.
    #[must_use]
    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|plant| plant.id == id)
    }

    /// Returns the currently selected identifier, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<PlantId> {
        self.selected
    }

    /// Returns the currently selected record, if any.
    #[must_use]
    pub fn selected_plant(&self) -> Option<&Plant> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Returns the number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// Returns `true` if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Next identifier to assign: one past the current maximum.
    fn next_id(&self) -> PlantId {
        self.plants.iter().map(|plant| plant.id).max().unwrap_or(0) + 1
    }
}
