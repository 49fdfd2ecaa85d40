//! Ending detection - scanning for a satisfied terminal event.

use game_content::{Event, PlayerState};

use crate::condition;

/// Find the first ending whose condition the state satisfies.
///
/// Endings are scanned in catalog order and the first match wins, so when
/// several ending conditions hold at once the authored order decides.
/// Content authors should keep ending conditions mutually exclusive.
pub fn first_triggered_ending<'a>(events: &'a [Event], state: &PlayerState) -> Option<&'a Event> {
    events
        .iter()
        .filter(|event| event.is_ending())
        .find(|event| condition::evaluate(state, event.conditions.as_ref()))
}
