//! Match participants and their per-round resources.
//!
//! A player is bound 1:1 to a country via [`CountryId`] (never via array
//! position). Coins and rockets are the two resources: coins buy rockets and
//! air defenses during the economy phase; rockets are consumed one per
//! committed attack target.
//!
//! All mutations are guarded: a refused operation changes nothing and
//! reports failure.

use serde::{Deserialize, Serialize};

use super::country::CountryId;

/// Whether a participant is driven by a human or the AI engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Ai,
}

/// A match participant: kind, bound country, and resources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Human or AI controlled.
    pub kind: PlayerKind,

    /// The country this player is bound to.
    pub country: CountryId,

    /// Coin balance. Never negative; all spends are guarded.
    pub coins: u32,

    /// Rockets bought but not yet committed to an attack target.
    pub rockets: u32,

    /// Rockets purchased this round, reset each round. Compared against
    /// [`Player::MAX_ROCKETS_PER_ROUND`].
    pub rockets_bought_this_round: u32,
}

impl Player {
    /// Most rockets any player may purchase in a single round, regardless of coins.
    pub const MAX_ROCKETS_PER_ROUND: u32 = 2;
    /// Coin cost of one rocket.
    pub const ROCKET_COST: u32 = 20;
    /// Coin cost of one air defense.
    pub const AIR_DEFENSE_COST: u32 = 20;

    /// Create a player bound to a country, with empty resources.
    #[must_use]
    pub fn new(kind: PlayerKind, country: CountryId) -> Self {
        Self {
            kind,
            country,
            coins: 0,
            rockets: 0,
            rockets_bought_this_round: 0,
        }
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.kind == PlayerKind::Ai
    }

    /// Whether a rocket purchase would currently be accepted.
    #[must_use]
    pub fn can_buy_rocket(&self) -> bool {
        self.coins >= Self::ROCKET_COST
            && self.rockets_bought_this_round < Self::MAX_ROCKETS_PER_ROUND
    }

    /// Whether an air defense spend would currently be accepted.
    #[must_use]
    pub fn can_buy_air_defense(&self) -> bool {
        self.coins >= Self::AIR_DEFENSE_COST
    }

    /// Buy one rocket: deducts coins, adds an available rocket, counts
    /// against the per-round cap. Refused once the cap is reached regardless
    /// of coins.
    pub fn buy_rocket(&mut self) -> bool {
        if !self.can_buy_rocket() {
            return false;
        }
        self.coins -= Self::ROCKET_COST;
        self.rockets += 1;
        self.rockets_bought_this_round += 1;
        true
    }

    /// Spend the air-defense cost. The region-side installation is a
    /// separate guarded step owned by [`Country`](super::Country); match
    /// state checks both guards before applying either.
    pub fn spend_air_defense(&mut self) -> bool {
        if !self.can_buy_air_defense() {
            return false;
        }
        self.coins -= Self::AIR_DEFENSE_COST;
        true
    }

    /// Commit one available rocket to an attack target.
    pub fn commit_rocket(&mut self) -> bool {
        if self.rockets == 0 {
            return false;
        }
        self.rockets -= 1;
        true
    }

    /// Return a committed rocket to the available pool (target withdrawn
    /// before resolution).
    pub fn refund_rocket(&mut self) {
        self.rockets += 1;
    }

    /// Credit income from the owned country.
    pub fn add_income(&mut self, amount: u32) {
        self.coins += amount;
    }

    /// Reset the per-round purchase counter at the start of a new round.
    pub fn reset_round_counters(&mut self) {
        self.rockets_bought_this_round = 0;
    }
}

/// Build the player list matching [`roster`](super::country::roster) for the
/// given opponent count: the human on country 0, AI opponents on the rest.
#[must_use]
pub fn players_for(opponent_count: u8) -> Vec<Player> {
    let ids: &[u8] = match opponent_count {
        1 => &[0, 3],
        2 => &[0, 1, 3],
        _ => &[0, 1, 2, 3],
    };

    ids.iter()
        .enumerate()
        .map(|(position, &id)| {
            let kind = if position == 0 {
                PlayerKind::Human
            } else {
                PlayerKind::Ai
            };
            Player::new(kind, CountryId::new(id))
        })
        .collect()
}
