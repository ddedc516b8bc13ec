//! Match setup configuration.

use serde::{Deserialize, Serialize};

/// Configuration for starting a match.
///
/// ## Example
///
/// ```
/// use strike_engine::controller::MatchSetup;
///
/// let setup = MatchSetup::new().opponents(2).seed(7);
/// assert_eq!(setup.opponent_count, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    /// Number of AI opponents, 1..=3. Values outside that range select the
    /// full roster of three.
    pub opponent_count: u8,

    /// Seed for all AI randomness. The same setup plays the same match.
    pub rng_seed: u64,

    /// Campaign level being played, if any; completing the match with a
    /// victory fires the campaign-completion hook with this number.
    pub campaign_level: Option<u32>,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            opponent_count: 3,
            rng_seed: 0,
            campaign_level: None,
        }
    }
}

impl MatchSetup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opponent count (1..=3; out-of-range values fall back to 3).
    #[must_use]
    pub fn opponents(mut self, count: u8) -> Self {
        self.opponent_count = if (1..=3).contains(&count) { count } else { 3 };
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Mark this match as a campaign level.
    #[must_use]
    pub fn campaign_level(mut self, level: u32) -> Self {
        self.campaign_level = Some(level);
        self
    }
}
