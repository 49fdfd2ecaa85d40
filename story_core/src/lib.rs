//! # Story Core (The Loom)
//!
//! The turn engine for Storyloom. This crate consumes the content types from
//! `game_content`, decides which events fire and which choices are open, and
//! applies chosen outcomes to the player state.
//!
//! ## Core Components
//!
//! - **condition**: pure predicate evaluation with failure explanations
//! - **mutation**: applies outcomes to the player state
//! - **selection**: eligibility filtering and priority-based event picking
//! - **choice**: choice availability filtering
//! - **ending**: first-match ending detection
//! - **session**: the turn-by-turn state machine shells drive
//!
//! ## Design Philosophy
//!
//! - **Content in, never out**: the catalog is an immutable value the engine
//!   only reads, so one catalog can serve many concurrent sessions
//! - **No ambient randomness**: tie-breaking goes through an injected
//!   [`TieBreak`](selection::TieBreak) strategy so runs can be reproduced
//! - **Absence is not an error**: missing condition or outcome fields mean
//!   "no constraint" / "no change", never a panic

pub mod choice;
pub mod condition;
pub mod ending;
pub mod mutation;
pub mod selection;
pub mod session;

pub use choice::*;
pub use condition::*;
pub use ending::*;
pub use mutation::*;
pub use selection::*;
pub use session::*;
