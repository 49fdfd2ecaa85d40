//! Event selection - deciding which event fires on a given turn.

mod tie_break;

pub use tie_break::*;

use game_content::{Event, PlayerState};
use tracing::debug;

use crate::condition;

/// Filter the catalog down to events that may fire this turn.
///
/// Ending events never fire through the turn loop; they are checked
/// separately after each mutation. Events outside their turn window or with
/// unmet conditions are excluded. The order of the result carries no meaning
/// beyond feeding [`select_by_priority`].
pub fn eligible_events<'a>(
    events: &'a [Event],
    current_turn: u32,
    state: &PlayerState,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| !event.is_ending())
        .filter(|event| event.in_turn_range(current_turn))
        .filter(|event| condition::evaluate(state, event.conditions.as_ref()))
        .collect()
}

/// Pick one event out of the eligible set.
///
/// The highest priority present wins; ties among events sharing that
/// priority go to the injected tie-break. Empty input yields `None`.
pub fn select_by_priority<'a>(
    eligible: &[&'a Event],
    tie_break: &mut dyn TieBreak,
) -> Option<&'a Event> {
    let max_priority = eligible.iter().map(|event| event.priority()).max()?;

    let top: Vec<&Event> = eligible
        .iter()
        .copied()
        .filter(|event| event.priority() == max_priority)
        .collect();

    let picked = top[tie_break.pick(top.len())];
    debug!(
        event = %picked.id,
        priority = max_priority,
        candidates = top.len(),
        "event selected"
    );
    Some(picked)
}
