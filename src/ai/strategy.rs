//! Strategy profiles: the two weighting scalars behind every AI decision.

use serde::{Deserialize, Serialize};

use crate::core::CountryId;

/// How an AI opponent balances offense against defense.
///
/// Each profile supplies a rocket-purchase weight and an air-defense weight;
/// every priority score is scaled by the matching weight before candidates
/// are ranked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Aggressive,
    Balanced,
    Defensive,
}

impl Strategy {
    /// Weight applied to rocket-purchase priorities.
    #[must_use]
    pub fn rocket_weight(self) -> f64 {
        match self {
            Strategy::Aggressive => 0.8,
            Strategy::Balanced => 0.6,
            Strategy::Defensive => 0.4,
        }
    }

    /// Weight applied to air-defense priorities.
    #[must_use]
    pub fn air_defense_weight(self) -> f64 {
        match self {
            Strategy::Aggressive => 0.2,
            Strategy::Balanced => 0.4,
            Strategy::Defensive => 0.6,
        }
    }

    /// Fixed per-country strategy assignment, decided at match setup.
    #[must_use]
    pub fn for_country(country: CountryId) -> Self {
        const ASSIGNMENT: [Strategy; 4] = [
            Strategy::Aggressive,
            Strategy::Balanced,
            Strategy::Aggressive,
            Strategy::Aggressive,
        ];
        ASSIGNMENT[country.index().min(ASSIGNMENT.len() - 1)]
    }
}
