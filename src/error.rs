//! Typed command rejection.
//!
//! Every invalid command is rejected without any state change; the error
//! names the reason. Callers that want the original silent-rejection
//! behavior can simply discard the `Err` — observable state is identical
//! either way.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::Phase;

/// Reason a command was refused. The command had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CommandError {
    /// The match has not been started yet.
    #[error("match has not been started")]
    NotStarted,

    /// The match already left `NotStarted`.
    #[error("match has already been started")]
    AlreadyStarted,

    /// The match reached a terminal state; no further play is possible.
    #[error("match is over")]
    MatchOver,

    /// The command is only legal in another phase.
    #[error("command requires the {expected} phase (currently {actual})")]
    WrongPhase { expected: Phase, actual: Phase },

    /// Not enough coins for the purchase.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// The per-round rocket purchase cap has been reached.
    #[error("rocket purchase cap reached for this round")]
    CapReached,

    /// No uncommitted rocket is available.
    #[error("no rocket available")]
    NoRocket,

    /// The target is not attackable (own country, or not in this match).
    #[error("invalid target")]
    InvalidTarget,

    /// The region already has air defense.
    #[error("region already has air defense")]
    AlreadyDefended,

    /// The region has been destroyed.
    #[error("region is destroyed")]
    AlreadyDestroyed,

    /// A player, region, or list index was out of range.
    #[error("index out of range")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(CommandError::InsufficientFunds.to_string(), "insufficient funds");
        assert_eq!(
            CommandError::WrongPhase {
                expected: Phase::Economy,
                actual: Phase::Targeting,
            }
            .to_string(),
            "command requires the economy phase (currently targeting)"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let err = CommandError::CapReached;
        let json = serde_json::to_string(&err).unwrap();
        let back: CommandError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
