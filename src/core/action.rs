//! Per-round intents: purchases and attack targets.
//!
//! Intents are records, not effects. A purchase intent is appended only
//! after the spend has been validated and applied; an attack-target intent
//! consumes one of the attacker's rockets when recorded and releases it back
//! if withdrawn before resolution. Resolution consumes the accumulated
//! targets of all players at once.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::country::CountryId;

/// A validated economy-phase purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseAction {
    /// A rocket bought for (launch from) one of the buyer's regions.
    BuyRocket { region: usize },
    /// An air defense installed on one of the buyer's regions.
    BuyAirDefense { region: usize },
}

/// An attack intent: one rocket committed against one enemy region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackTarget {
    /// Country the rocket launches from.
    pub attacker: CountryId,
    /// Country under attack.
    pub target_country: CountryId,
    /// Region index within the target country.
    pub target_region: usize,
}

impl AttackTarget {
    /// Create an attack intent.
    #[must_use]
    pub fn new(attacker: CountryId, target_country: CountryId, target_region: usize) -> Self {
        Self {
            attacker,
            target_country,
            target_region,
        }
    }
}

/// Per-player accumulator for the current round.
///
/// One instance per player for the lifetime of the match, cleared at the
/// start of every round. Both lists stay tiny (the rocket cap bounds
/// purchases; accumulated rockets bound targets), hence `SmallVec`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTurnActions {
    /// Purchases committed this round, in the order they were made.
    pub purchases: SmallVec<[PurchaseAction; 4]>,

    /// Attack targets committed this round, in the order they were selected.
    pub targets: SmallVec<[AttackTarget; 4]>,
}

impl PlayerTurnActions {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validated purchase.
    pub fn add_purchase(&mut self, action: PurchaseAction) {
        self.purchases.push(action);
    }

    /// Record a committed attack target.
    pub fn add_target(&mut self, target: AttackTarget) {
        self.targets.push(target);
    }

    /// Withdraw a target by its position in this player's list.
    ///
    /// Returns the removed target so the caller can refund the rocket, or
    /// `None` for an out-of-range index (no state change).
    pub fn remove_target(&mut self, index: usize) -> Option<AttackTarget> {
        if index >= self.targets.len() {
            return None;
        }
        Some(self.targets.remove(index))
    }

    /// Clear both lists at the start of a new round.
    pub fn clear(&mut self) {
        self.purchases.clear();
        self.targets.clear();
    }

    /// Whether this player has recorded anything this round.
    #[must_use]
    pub fn has_actions(&self) -> bool {
        !self.purchases.is_empty() || !self.targets.is_empty()
    }
}
