//! Regions: the destructible sub-units of a country.
//!
//! A region is the unit of both income generation and attack targeting.
//! Destruction is a one-way transition; air defense is a one-shot resource
//! that blocks exactly one incoming attack before being consumed.

use serde::{Deserialize, Serialize};

/// Income generated per round by a single alive region.
pub const REGION_INCOME: u32 = 10;

/// A destructible sub-unit of a [`Country`](super::Country).
///
/// ## Invariants
///
/// - `destroyed` only ever transitions `false -> true`
/// - a destroyed region never has (and can never acquire) air defense
///
/// The `position` is fixed at creation and exists purely for presentation;
/// the engine never reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Whether this region has been destroyed.
    pub destroyed: bool,

    /// Whether this region currently has an (unconsumed) air defense.
    pub air_defense: bool,

    /// Fixed map position, presentation-only.
    pub position: (f32, f32),
}

impl Region {
    /// Create an alive, undefended region at a fixed position.
    #[must_use]
    pub fn new(position: (f32, f32)) -> Self {
        Self {
            destroyed: false,
            air_defense: false,
            position,
        }
    }

    /// Income this region contributes per round: fixed while alive, zero once destroyed.
    #[must_use]
    pub fn income(&self) -> u32 {
        if self.destroyed {
            0
        } else {
            REGION_INCOME
        }
    }

    /// Whether the region is still alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.destroyed
    }

    /// Destroy this region. Idempotent; always clears air defense.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.air_defense = false;
    }

    /// Whether an air defense can be installed here (alive and undefended).
    #[must_use]
    pub fn can_add_air_defense(&self) -> bool {
        !self.destroyed && !self.air_defense
    }

    /// Install an air defense. Returns `false` (and changes nothing) if the
    /// region is destroyed or already defended.
    pub fn add_air_defense(&mut self) -> bool {
        if !self.can_add_air_defense() {
            return false;
        }
        self.air_defense = true;
        true
    }

    /// Atomically consume the air defense, if present.
    ///
    /// Returns `true` if a defense was present and has now been cleared
    /// (the incoming attack is blocked), `false` if there was nothing to
    /// consume. This is the check-and-clear used by turn resolution.
    pub fn consume_air_defense(&mut self) -> bool {
        if !self.air_defense {
            return false;
        }
        self.air_defense = false;
        true
    }
}
