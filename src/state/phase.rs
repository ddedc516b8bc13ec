//! Phases, terminal states, and the final match report.

use serde::{Deserialize, Serialize};

use crate::core::CountryId;

/// The three phases of a round, cycling `Economy -> Targeting -> Resolution`.
///
/// Leaving `Resolution` either starts the next round or ends the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Income has been distributed; purchases are accepted.
    Economy,
    /// Attack targets are selected; rockets are committed.
    Targeting,
    /// All committed attacks have been applied; results are observable.
    Resolution,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Economy => "economy",
            Phase::Targeting => "targeting",
            Phase::Resolution => "resolution",
        };
        write!(f, "{name}")
    }
}

/// Lifecycle state of a match.
///
/// There is no transition out of a terminal state; a new match must be
/// started to continue playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    NotStarted,
    InProgress,
    /// Exactly one country survived and it is the human's.
    Victory,
    /// Exactly one country survived and it is not the human's.
    Defeat,
    /// No country survived.
    Draw,
    /// The round limit was reached with multiple survivors.
    MaxRoundsReached,
}

impl MatchState {
    /// Whether the match has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchState::NotStarted | MatchState::InProgress)
    }
}

/// Final standings of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Terminal state the match ended in.
    pub state: MatchState,

    /// Winning country, if any.
    ///
    /// For `Victory`/`Defeat` this is the sole survivor. For
    /// `MaxRoundsReached` it is the country with the strictly greatest
    /// alive-region count, ties broken by the lowest country index. `None`
    /// for a draw.
    pub winner: Option<CountryId>,

    /// Rounds played when the match ended.
    pub rounds_played: u32,

    /// Alive-region count per roster country, in country-index order.
    pub final_region_counts: Vec<(CountryId, u32)>,
}
