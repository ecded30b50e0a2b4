//! Form layer: the add-plant form state and its validation.
//!
//! Sits between the presentation layer (which forwards field edits) and the
//! catalog store (which receives validated drafts). See [`validator`].

pub mod validator;

pub use validator::{FormField, PlantForm};
