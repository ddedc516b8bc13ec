//! Session snapshots: enough state to resume a match, nothing more.
//!
//! A snapshot captures the aggregate plus each AI engine's strategy and RNG
//! position. Encoding uses `bincode`; no format stability beyond resuming
//! the session that wrote it is promised.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::Strategy;
use crate::core::{CountryId, GameRngState};
use crate::state::Game;

use super::manager::MatchController;
use super::setup::MatchSetup;

/// Snapshot encode/decode failure.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// One AI engine's resumable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiBinding {
    pub country: CountryId,
    pub strategy: Strategy,
    pub rng: GameRngState,
}

/// A resumable match session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub setup: MatchSetup,
    pub game: Game,
    /// AI bindings in country-index order.
    pub ai: Vec<AiBinding>,
}

impl SessionSnapshot {
    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>, SessionError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes produced by [`SessionSnapshot::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, SessionError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl MatchController {
    /// Capture the current session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let (setup, game, ai) = self.parts();

        let mut bindings: Vec<AiBinding> = ai
            .iter()
            .map(|(&country, system)| AiBinding {
                country,
                strategy: system.strategy(),
                rng: system.rng_state(),
            })
            .collect();
        bindings.sort_by_key(|b| b.country);

        SessionSnapshot {
            setup: setup.clone(),
            game: game.clone(),
            ai: bindings,
        }
    }
}
