//! Character templates - the selectable starting profiles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Starting points and attributes for a character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitialState {
    #[serde(default)]
    pub points: HashMap<String, i32>,

    #[serde(default)]
    pub attributes: Vec<String>,
}

/// A selectable character template.
///
/// Templates are content: the engine copies them into a fresh
/// [`PlayerState`](crate::state::PlayerState) and never writes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub initial_state: InitialState,
}
