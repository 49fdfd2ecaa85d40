//! The event catalog - the immutable set of events a session draws from.

mod condition;
mod event;
mod outcome;

pub use condition::*;
pub use event::*;
pub use outcome::*;

use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while assembling content.
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    /// Two events share an id.
    #[error("duplicate event id: {id}")]
    DuplicateEventId { id: String },

    /// Configuration text failed to parse.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// An immutable, validated collection of events.
///
/// Built once from loader output and shared read-only by any number of
/// sessions. Iteration order is the authored order, which is load-bearing
/// for ending detection.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Build a catalog, rejecting duplicate event ids.
    pub fn new(events: Vec<Event>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id.clone()) {
                return Err(ContentError::DuplicateEventId {
                    id: event.id.clone(),
                });
            }
        }
        Ok(Self { events })
    }

    /// All events in authored order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Look up an event by id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
