//! Catalog filtering: free-text query combined with a difficulty facet.
//!
//! The filter engine is a pure function of (catalog, query, facet). It is
//! recomputed whenever any input changes and carries no memoized state, so
//! re-running it with identical inputs yields an identical sequence.
//!
//! # Matching rules
//!
//! - The query is matched case-insensitively as a substring of each record's
//!   name; an empty query matches every record.
//! - The facet either matches every record (`All`) or requires exact
//!   equality on the difficulty field.
//! - A record is included iff both predicates hold.
//! - Output preserves catalog order.
//!
//! # Example
//!
//! ```rust
//! use nursery::app::filter::{filter_catalog, DifficultyFacet};
//! use nursery::domain::Difficulty;
//!
//! let plants = vec![];
//! let visible = filter_catalog(&plants, "fig", DifficultyFacet::Only(Difficulty::Hard));
//! assert!(visible.is_empty());
//! ```

use crate::domain::plant::{Difficulty, Plant};
use std::fmt;

/// The difficulty-based filter selector.
///
/// Either the sentinel `All`, which matches every record, or a specific
/// difficulty matched by exact equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DifficultyFacet {
    /// Matches every record regardless of difficulty.
    #[default]
    All,

    /// Matches only records with exactly this difficulty.
    Only(Difficulty),
}

impl DifficultyFacet {
    /// Returns `true` if a record with the given difficulty passes the facet.
    #[must_use]
    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == difficulty,
        }
    }
}

impl fmt::Display for DifficultyFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(difficulty) => write!(f, "{difficulty}"),
        }
    }
}

/// Derives the filtered view of the catalog.
///
/// Produces a freshly computed, order-preserving sequence on every
/// invocation. Both predicates must hold for a record to be included.
#[must_use]
pub fn filter_catalog(plants: &[Plant], query: &str, facet: DifficultyFacet) -> Vec<Plant> {
    let needle = query.to_lowercase();

    plants
        .iter()
        .filter(|plant| {
            let name_matches = needle.is_empty() || plant.name.to_lowercase().contains(&needle);
            name_matches && facet.matches(plant.difficulty)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plant::{Light, PlantId, Rarity, Water};

    fn plant(id: PlantId, name: &str, difficulty: Difficulty) -> Plant {
        Plant {
            id,
            name: name.to_string(),
            scientific: None,
            difficulty,
            light: Light::Medium,
            water: Water::Moderate,
            rarity: Some(Rarity::Common),
            description: String::new(),
        }
    }

    fn sample() -> Vec<Plant> {
        vec![
            plant(1, "Snake Plant", Difficulty::Easy),
            plant(2, "Fiddle Leaf Fig", Difficulty::Hard),
            plant(3, "Peace Lily", Difficulty::Medium),
        ]
    }

    #[test]
    fn empty_query_and_all_facet_is_identity() {
        let plants = sample();
        let visible = filter_catalog(&plants, "", DifficultyFacet::All);
        assert_eq!(visible, plants);
    }

    #[test]
    fn query_matches_substring_case_insensitively() {
        let plants = sample();
        let visible = filter_catalog(&plants, "fig", DifficultyFacet::All);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);

        let visible = filter_catalog(&plants, "LILY", DifficultyFacet::All);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 3);
    }

    #[test]
    fn facet_matches_exact_difficulty() {
        let plants = sample();
        let visible = filter_catalog(&plants, "", DifficultyFacet::Only(Difficulty::Easy));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn query_and_facet_are_anded() {
        let plants = sample();
        // "l" appears in all three names, but only one record is Hard.
        let visible = filter_catalog(&plants, "l", DifficultyFacet::Only(Difficulty::Hard));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);

        let visible = filter_catalog(&plants, "snake", DifficultyFacet::Only(Difficulty::Hard));
        assert!(visible.is_empty());
    }

    #[test]
    fn output_preserves_catalog_order() {
        let plants = sample();
        let visible = filter_catalog(&plants, "ea", DifficultyFacet::All);
        let ids: Vec<_> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn filter_is_idempotent() {
        let plants = sample();
        let once = filter_catalog(&plants, "a", DifficultyFacet::All);
        let twice = filter_catalog(&once, "a", DifficultyFacet::All);
        assert_eq!(once, twice);
    }
}
