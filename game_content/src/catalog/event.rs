//! Event definitions - the narrative units a session is woven from.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Condition, Outcome};

/// Kinds of events in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A regular story beat offered through the turn loop.
    Normal,
    /// A terminal event; its condition is the trigger.
    Ending,
}

/// Inclusive turn window, serialized as `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRange(pub u32, pub u32);

impl TurnRange {
    /// First turn the window covers.
    pub fn start(&self) -> u32 {
        self.0
    }

    /// Last turn the window covers.
    pub fn end(&self) -> u32 {
        self.1
    }

    /// Whether the given turn falls inside the window, both ends inclusive.
    pub fn contains(&self, turn: u32) -> bool {
        turn >= self.0 && turn <= self.1
    }
}

/// A selectable option within an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Label shown to the player.
    pub text: String,

    /// Gate on selectability. Absent means always open.
    #[serde(default)]
    pub conditions: Option<Condition>,

    /// What picking this choice does.
    pub outcome: Outcome,
}

/// A narrative event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique id across the whole catalog.
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: EventKind,

    /// Turn window the event may fire in. Absent means every turn.
    #[serde(default)]
    pub turn_range: Option<TurnRange>,

    /// Eligibility gate; for endings this is the trigger condition.
    #[serde(default)]
    pub conditions: Option<Condition>,

    /// Options offered to the player. Endings typically leave this empty,
    /// and a missing list is tolerated on any event.
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Narration shown when the event fires.
    pub text: String,

    /// Free-form authoring metadata, ignored by the engine.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Event {
    /// Selection priority, taken from the condition block. Defaults to 0.
    pub fn priority(&self) -> i32 {
        self.conditions.as_ref().map(|c| c.priority).unwrap_or(0)
    }

    pub fn is_ending(&self) -> bool {
        self.kind == EventKind::Ending
    }

    /// Whether the event may fire on the given turn.
    pub fn in_turn_range(&self, turn: u32) -> bool {
        self.turn_range
            .map(|range| range.contains(turn))
            .unwrap_or(true)
    }
}
