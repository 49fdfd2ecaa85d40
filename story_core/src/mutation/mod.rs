//! Outcome application - the only writer of player state.

use game_content::{Outcome, PlayerState};
use tracing::trace;

/// Apply an outcome to the player state in place.
///
/// Point deltas only move dials that already exist on the state and clamp at
/// zero; attribute adds are idempotent; attribute removes tolerate absence.
/// Point and attribute changes are independent, so application order cannot
/// affect the result.
pub fn apply_outcome(state: &mut PlayerState, outcome: &Outcome) {
    for (key, delta) in &outcome.points_change {
        state.adjust_point(key, *delta);
    }

    for tag in &outcome.attributes_add {
        state.grant_attribute(tag);
    }

    for tag in &outcome.attributes_remove {
        state.revoke_attribute(tag);
    }

    trace!(points = ?state.points, attributes = ?state.attributes, "outcome applied");
}
