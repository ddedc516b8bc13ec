//! Match state: the `Game` aggregate and its phase machine.
//!
//! One `Game` owns everything a match needs — countries, players, pending
//! intents, history — and is replaced wholesale when a new match starts.

pub mod game;
pub mod phase;

pub use game::{Game, MAX_ROUNDS};
pub use phase::{MatchReport, MatchState, Phase};
