//! # Game Content
//!
//! The "Story Bible" crate - contains all narrative content definitions, the
//! player state, and session configuration for Storyloom. This crate is the
//! single source of truth for what a story *is* and carries no engine logic.

pub mod catalog;
pub mod character;
pub mod config;
pub mod state;

pub use catalog::*;
pub use character::*;
pub use config::*;
pub use state::*;
