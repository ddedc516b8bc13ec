//! Immutable records of resolved rounds.
//!
//! A [`TurnResolution`] is produced exactly once per round by the resolution
//! algorithm and appended to the match history. It is the sole artifact the
//! presentation layer consumes for post-round effects.

use serde::{Deserialize, Serialize};

use super::action::AttackTarget;
use super::country::CountryId;

/// Outcome of a single processed attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    /// The attack that was processed.
    pub attack: AttackTarget,

    /// Whether the target region's air defense absorbed this attack.
    pub blocked: bool,
}

impl AttackResult {
    /// Create a result for a processed attack.
    #[must_use]
    pub fn new(attack: AttackTarget, blocked: bool) -> Self {
        Self { attack, blocked }
    }

    /// An attack succeeds exactly when it was not blocked.
    #[must_use]
    pub fn successful(&self) -> bool {
        !self.blocked
    }
}

/// A region destroyed during one round's resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyedRegion {
    pub country: CountryId,
    pub region: usize,
}

/// Immutable record of one round's outcome.
///
/// Appended to an ordered, never-mutated history; entries are never removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResolution {
    /// Round this resolution belongs to.
    pub round: u32,

    /// One entry per processed attack, in deterministic processing order.
    pub attack_results: Vec<AttackResult>,

    /// Regions newly destroyed this round (no duplicates).
    pub destroyed_regions: Vec<DestroyedRegion>,
}

impl TurnResolution {
    /// Whether anything was destroyed this round.
    #[must_use]
    pub fn has_destroyed_regions(&self) -> bool {
        !self.destroyed_regions.is_empty()
    }

    /// Attacks that got through.
    pub fn successful_attacks(&self) -> impl Iterator<Item = &AttackResult> {
        self.attack_results.iter().filter(|r| r.successful())
    }

    /// Attacks absorbed by air defense.
    pub fn blocked_attacks(&self) -> impl Iterator<Item = &AttackResult> {
        self.attack_results.iter().filter(|r| r.blocked)
    }
}
