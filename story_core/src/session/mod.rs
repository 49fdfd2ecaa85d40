//! Sessions - the turn-by-turn state machine a shell drives.
//!
//! A session owns one player's state and a cursor into shared, read-only
//! content. The shell alternates between [`Session::offer`] (what does this
//! turn hold?) and [`Session::choose`] / [`Session::pass`] (resolve it),
//! until the offer comes back [`TurnOffer::Complete`]. All waiting for player
//! input happens in the shell; the session never blocks.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use game_content::{
    Character, Choice, DefaultEnding, Event, EventCatalog, GameConfig, Outcome, PlayerState,
};

use crate::choice::available_choices;
use crate::ending::first_triggered_ending;
use crate::mutation::apply_outcome;
use crate::selection::{eligible_events, select_by_priority, RandomTieBreak, TieBreak};

/// Unique identifier for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a session concluded.
#[derive(Debug, Clone, Copy)]
pub enum Conclusion<'a> {
    /// An ending event's condition fired.
    Ending(&'a Event),
    /// The turn budget ran out with no ending triggered.
    OutOfTurns(&'a DefaultEnding),
}

/// What the current turn holds.
#[derive(Debug)]
pub enum TurnOffer<'a> {
    /// An event fired. `choices` holds the currently open options; it can be
    /// empty, in which case the shell decides how to recover (usually
    /// [`Session::pass`]).
    Story {
        event: &'a Event,
        choices: Vec<&'a Choice>,
    },

    /// No event was eligible; the turn was skipped and the counter advanced.
    Quiet,

    /// The session is over.
    Complete(Conclusion<'a>),
}

/// What happened after committing a choice.
#[derive(Debug)]
pub struct TurnReport<'a> {
    /// The outcome that was applied.
    pub outcome: &'a Outcome,

    /// Set when the choice concluded the session.
    pub conclusion: Option<Conclusion<'a>>,
}

/// Shell-side mistakes when driving a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// `choose` was called with no event pending.
    #[error("no event is pending a choice")]
    NoPendingEvent,

    /// The chosen index is outside the available-choice list.
    #[error("choice {index} is not available ({available} open)")]
    ChoiceUnavailable { index: usize, available: usize },
}

/// One playthrough: exclusive player state plus a cursor into shared content.
///
/// The catalog and configuration are borrowed immutably, so any number of
/// sessions can run against the same loaded content.
pub struct Session<'a> {
    id: SessionId,
    catalog: &'a EventCatalog,
    config: &'a GameConfig,
    state: PlayerState,
    turn: u32,
    pending: Option<&'a Event>,
    concluded: Option<Conclusion<'a>>,
    tie_break: Box<dyn TieBreak>,
}

impl<'a> Session<'a> {
    /// Start a session for a character with random tie-breaking.
    pub fn new(catalog: &'a EventCatalog, config: &'a GameConfig, character: &Character) -> Self {
        Self::with_tie_break(catalog, config, character, Box::new(RandomTieBreak::new()))
    }

    /// Start a session with an explicit tie-breaking strategy.
    pub fn with_tie_break(
        catalog: &'a EventCatalog,
        config: &'a GameConfig,
        character: &Character,
        tie_break: Box<dyn TieBreak>,
    ) -> Self {
        Self {
            id: SessionId::new(),
            catalog,
            config,
            state: PlayerState::from_character(character),
            turn: 1,
            pending: None,
            concluded: None,
            tie_break,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// 1-based turn counter.
    pub fn current_turn(&self) -> u32 {
        self.turn
    }

    /// The evolving player state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.concluded.is_some()
    }

    /// Produce the current turn's offer.
    ///
    /// Quiet turns (no eligible event) advance the counter immediately. A
    /// `Story` offer stays pending until [`choose`](Self::choose) or
    /// [`pass`](Self::pass) resolves it; calling `offer` again reselects.
    pub fn offer(&mut self) -> TurnOffer<'a> {
        if let Some(conclusion) = self.concluded {
            return TurnOffer::Complete(conclusion);
        }

        if self.turn > self.config.total_turns {
            debug!(session = %self.id, "turn budget spent");
            let conclusion = Conclusion::OutOfTurns(&self.config.default_ending);
            self.concluded = Some(conclusion);
            return TurnOffer::Complete(conclusion);
        }

        let eligible = eligible_events(self.catalog.events(), self.turn, &self.state);
        let Some(event) = select_by_priority(&eligible, self.tie_break.as_mut()) else {
            debug!(session = %self.id, turn = self.turn, "quiet turn");
            self.pending = None;
            self.turn += 1;
            return TurnOffer::Quiet;
        };

        self.pending = Some(event);
        let choices = available_choices(&event.choices, &self.state);
        debug!(
            session = %self.id,
            turn = self.turn,
            event = %event.id,
            open = choices.len(),
            "event offered"
        );
        TurnOffer::Story { event, choices }
    }

    /// Commit one of the open choices of the pending event.
    ///
    /// `index` addresses the available-choice list returned by the matching
    /// [`offer`](Self::offer) call, not the event's full choice list. On
    /// success the outcome is applied, endings are re-checked, and the turn
    /// advances unless the session concluded.
    pub fn choose(&mut self, index: usize) -> Result<TurnReport<'a>, SessionError> {
        let event = self.pending.ok_or(SessionError::NoPendingEvent)?;

        let choices = available_choices(&event.choices, &self.state);
        let choice = choices
            .get(index)
            .copied()
            .ok_or(SessionError::ChoiceUnavailable {
                index,
                available: choices.len(),
            })?;

        apply_outcome(&mut self.state, &choice.outcome);
        self.pending = None;
        debug!(
            session = %self.id,
            turn = self.turn,
            event = %event.id,
            choice = index,
            "choice applied"
        );

        let conclusion =
            first_triggered_ending(self.catalog.events(), &self.state).map(Conclusion::Ending);

        match conclusion {
            Some(found) => {
                debug!(session = %self.id, "ending reached");
                self.concluded = Some(found);
            }
            None => self.turn += 1,
        }

        Ok(TurnReport {
            outcome: &choice.outcome,
            conclusion,
        })
    }

    /// Abandon the pending event (or a choiceless offer) and advance the
    /// turn. The shell's recovery path when an event has no open choices.
    pub fn pass(&mut self) {
        self.pending = None;
        if self.concluded.is_none() {
            self.turn += 1;
        }
    }
}
