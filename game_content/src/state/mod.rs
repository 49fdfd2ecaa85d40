//! Player state - the mutable record a session evolves.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::character::Character;

/// The evolving state of one player within one session.
///
/// Owned exclusively by its session. Point values never drop below zero and
/// attribute tags are unique, keeping their acquisition order for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current point totals keyed by point name.
    pub points: HashMap<String, i32>,

    /// Held attribute tags, in acquisition order, no duplicates.
    pub attributes: Vec<String>,

    /// Id of the character template this state was built from.
    pub character_id: String,
}

impl PlayerState {
    /// Build a fresh state from a character template.
    ///
    /// The template is deep-copied; later mutations never touch it.
    pub fn from_character(character: &Character) -> Self {
        Self {
            points: character.initial_state.points.clone(),
            attributes: character.initial_state.attributes.clone(),
            character_id: character.id.clone(),
        }
    }

    /// Current value for a point key, 0 when the key is unknown.
    pub fn point(&self, key: &str) -> i32 {
        self.points.get(key).copied().unwrap_or(0)
    }

    /// Whether the player holds an attribute tag.
    pub fn has_attribute(&self, tag: &str) -> bool {
        self.attributes.iter().any(|held| held == tag)
    }

    /// Shift an existing point total by `delta`, clamping at zero.
    ///
    /// Unknown keys are ignored: outcomes can only move dials the character
    /// started with.
    pub fn adjust_point(&mut self, key: &str, delta: i32) {
        if let Some(value) = self.points.get_mut(key) {
            *value = (*value + delta).max(0);
        }
    }

    /// Add an attribute tag. Already-held tags are not duplicated.
    pub fn grant_attribute(&mut self, tag: &str) {
        if !self.has_attribute(tag) {
            self.attributes.push(tag.to_string());
        }
    }

    /// Remove an attribute tag. Absent tags are a no-op.
    pub fn revoke_attribute(&mut self, tag: &str) {
        self.attributes.retain(|held| held != tag);
    }
}
