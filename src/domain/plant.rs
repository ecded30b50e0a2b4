//! Plant domain model.
//!
//! This module defines the core catalog record [`Plant`], the [`PlantDraft`]
//! handed to the store by the form validator, and the enumerated care
//! attributes (difficulty, light, water, rarity). Identifiers are assigned
//! exclusively by the catalog store; drafts never carry one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a plant record within the catalog.
///
/// Always a positive integer, assigned by the catalog store as
/// `max(existing ids, 0) + 1` on insertion.
pub type PlantId = u32;

/// How demanding a plant is to keep alive.
///
/// Doubles as the facet value for catalog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Light requirement of a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Light {
    Low,
    Medium,
    Bright,
}

/// Watering requirement of a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Water {
    Low,
    Moderate,
    Frequent,
}

/// How commonly a plant is found in the trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::Bright => "Bright",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Water {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Frequent => "Frequent",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
        };
        f.write_str(label)
    }
}

/// A plant record in the catalog.
///
/// Created by the catalog store from a [`PlantDraft`]; destroyed only by
/// explicit removal. There is no update-in-place operation.
///
/// # Fields
///
/// - `id`: Store-assigned identifier, unique within the catalog
/// - `name`: Display name, non-empty (enforced by the form validator)
/// - `scientific`: Optional botanical name; never an empty string
/// - `difficulty`, `light`, `water`: Care attributes
/// - `rarity`: Optional trade rarity
/// - `description`: Free text, may be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub scientific: Option<String>,
    pub difficulty: Difficulty,
    pub light: Light,
    pub water: Water,
    pub rarity: Option<Rarity>,
    pub description: String,
}

impl Plant {
    /// Materializes a draft into a full record with the given identifier.
    ///
    /// Called by the catalog store on insertion; the store owns identifier
    /// assignment.
    #[must_use]
    pub fn from_draft(id: PlantId, draft: PlantDraft) -> Self {
        Self {
            id,
            name: draft.name,
            scientific: draft.scientific,
            difficulty: draft.difficulty,
            light: draft.light,
            water: draft.water,
            rarity: draft.rarity,
            description: draft.description,
        }
    }
}

/// A plant record's fields prior to identifier assignment.
///
/// Produced by the form validator (already trimmed and normalized) and
/// consumed by the catalog store, which assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantDraft {
    pub name: String,
    pub scientific: Option<String>,
    pub difficulty: Difficulty,
    pub light: Light,
    pub water: Water,
    pub rarity: Option<Rarity>,
    pub description: String,
}
