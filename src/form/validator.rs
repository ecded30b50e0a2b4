//! Add-plant form state and validation.
//!
//! This module holds the editable form fields and the validation step that
//! turns them into a [`PlantDraft`] for the catalog store. Validation
//! normalizes text fields (trimming, empty-to-absent for the scientific
//! name) but performs no cross-field checks; the only hard requirement is
//! a non-empty name.
//!
//! Validation never mutates the form: on failure the caller surfaces the
//! error message and leaves every field exactly as the user typed it.
//!
//! # Example
//!
//! ```rust
//! use nursery::form::{FormField, PlantForm};
//!
//! let mut form = PlantForm::default();
//! form.apply(FormField::Name("  Ivy  ".to_string()));
//! form.apply(FormField::Scientific("  ".to_string()));
//!
//! let draft = form.validate().unwrap();
//! assert_eq!(draft.name, "Ivy");
//! assert!(draft.scientific.is_none());
//! ```

use crate::domain::error::{NurseryError, Result};
use crate::domain::plant::{Difficulty, Light, PlantDraft, Rarity, Water};

/// A single form field edit from the presentation layer.
///
/// Each variant carries the new value for one field; [`PlantForm::apply`]
/// is the defined transition for every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Name(String),
    Scientific(String),
    Difficulty(Difficulty),
    Light(Light),
    Water(Water),
    Rarity(Rarity),
    Description(String),
}

/// Editable state of the add-plant form.
///
/// Text fields are kept verbatim as typed; normalization happens only in
/// [`validate`](Self::validate). Enum fields mirror the form's select
/// inputs and always hold a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantForm {
    pub name: String,
    pub scientific: String,
    pub difficulty: Difficulty,
    pub light: Light,
    pub water: Water,
    pub rarity: Rarity,
    pub description: String,
}

impl Default for PlantForm {
    /// The form's default values: empty text fields and the default
    /// selections (Easy / Medium light / Moderate water / Common).
    fn default() -> Self {
        Self {
            name: String::new(),
            scientific: String::new(),
            difficulty: Difficulty::Easy,
            light: Light::Medium,
            water: Water::Moderate,
            rarity: Rarity::Common,
            description: String::new(),
        }
    }
}

impl PlantForm {
    /// Applies a single field edit.
    pub fn apply(&mut self, field: FormField) {
        match field {
            FormField::Name(value) => self.name = value,
            FormField::Scientific(value) => self.scientific = value,
            FormField::Difficulty(value) => self.difficulty = value,
            FormField::Light(value) => self.light = value,
            FormField::Water(value) => self.water = value,
            FormField::Rarity(value) => self.rarity = value,
            FormField::Description(value) => self.description = value,
        }
    }

    /// Validates and normalizes the form into a draft record.
    ///
    /// The name must be non-empty after trimming surrounding whitespace.
    /// The scientific name and description are trimmed; a scientific name
    /// that is empty after trimming becomes absent in the draft, never an
    /// empty string. Enum fields are passed through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`NurseryError::MissingName`] if the trimmed name is empty.
    /// The form itself is left untouched in every case.
    pub fn validate(&self) -> Result<PlantDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            tracing::debug!("form validation failed: empty name");
            return Err(NurseryError::MissingName);
        }

        let scientific = self.scientific.trim();
        let scientific = if scientific.is_empty() {
            None
        } else {
            Some(scientific.to_string())
        };

        Ok(PlantDraft {
            name: name.to_string(),
            scientific,
            difficulty: self.difficulty,
            light: self.light,
            water: self.water,
            rarity: Some(self.rarity),
            description: self.description.trim().to_string(),
        })
    }

    /// Restores every field to its default value.
    ///
    /// Called by the event handler after a successful submission, and on an
    /// explicit clear.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_name_is_rejected() {
        let mut form = PlantForm::default();
        form.apply(FormField::Name("   ".to_string()));

        let err = form.validate().unwrap_err();
        assert!(matches!(err, NurseryError::MissingName));
        // The form keeps what the user typed.
        assert_eq!(form.name, "   ");
    }

    #[test]
    fn name_is_trimmed_in_the_draft() {
        let mut form = PlantForm::default();
        form.apply(FormField::Name("  Ivy  ".to_string()));

        let draft = form.validate().unwrap();
        assert_eq!(draft.name, "Ivy");
    }

    #[test]
    fn blank_scientific_name_becomes_absent() {
        let mut form = PlantForm::default();
        form.apply(FormField::Name("Ivy".to_string()));
        form.apply(FormField::Scientific("  ".to_string()));

        let draft = form.validate().unwrap();
        assert_eq!(draft.scientific, None);
    }

    #[test]
    fn scientific_name_is_trimmed_when_present() {
        let mut form = PlantForm::default();
        form.apply(FormField::Name("Ivy".to_string()));
        form.apply(FormField::Scientific(" Hedera helix ".to_string()));

        let draft = form.validate().unwrap();
        assert_eq!(draft.scientific.as_deref(), Some("Hedera helix"));
    }

    #[test]
    fn enum_selections_pass_through() {
        let mut form = PlantForm::default();
        form.apply(FormField::Name("Fiddle Leaf Fig".to_string()));
        form.apply(FormField::Difficulty(Difficulty::Hard));
        form.apply(FormField::Light(Light::Bright));
        form.apply(FormField::Water(Water::Frequent));
        form.apply(FormField::Rarity(Rarity::Uncommon));

        let draft = form.validate().unwrap();
        assert_eq!(draft.difficulty, Difficulty::Hard);
        assert_eq!(draft.light, Light::Bright);
        assert_eq!(draft.water, Water::Frequent);
        assert_eq!(draft.rarity, Some(Rarity::Uncommon));
    }

    #[test]
    fn description_is_trimmed_and_may_be_empty() {
        let mut form = PlantForm::default();
        form.apply(FormField::Name("Ivy".to_string()));
        form.apply(FormField::Description("  hardy climber  ".to_string()));
        assert_eq!(form.validate().unwrap().description, "hardy climber");

        form.apply(FormField::Description(String::new()));
        assert_eq!(form.validate().unwrap().description, "");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = PlantForm::default();
        form.apply(FormField::Name("Ivy".to_string()));
        form.apply(FormField::Difficulty(Difficulty::Hard));
        form.apply(FormField::Rarity(Rarity::Rare));

        form.reset();
        assert_eq!(form, PlantForm::default());
        assert_eq!(form.difficulty, Difficulty::Easy);
        assert_eq!(form.light, Light::Medium);
        assert_eq!(form.water, Water::Moderate);
        assert_eq!(form.rarity, Rarity::Common);
    }
}
