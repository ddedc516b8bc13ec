//! The campaign ladder: 15 levels of escalating opposition.
//!
//! The ladder holds progression logic only. Where the progress actually
//! lives (disk, preferences, a server) is an external concern: callers
//! persist the opaque [`CampaignProgress`] snapshot and rebuild the ladder
//! from it next session.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Number of levels in the campaign.
pub const TOTAL_LEVELS: u32 = 15;

/// Unlock state of a single level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelStatus {
    Locked,
    Unlocked,
    Completed,
}

/// One rung of the ladder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignLevel {
    /// 1-based level number.
    pub number: u32,
    pub status: LevelStatus,
    /// Opponents fielded by this level.
    pub opponent_count: u8,
}

impl CampaignLevel {
    #[must_use]
    pub fn new(number: u32, status: LevelStatus) -> Self {
        Self {
            number,
            status,
            opponent_count: opponent_count_for_level(number),
        }
    }

    /// Whether the level can currently be played.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        matches!(self.status, LevelStatus::Unlocked | LevelStatus::Completed)
    }
}

/// Opponents per level: a gentle ramp, then the full roster.
#[must_use]
pub fn opponent_count_for_level(number: u32) -> u8 {
    match number {
        1 => 1,
        2 => 2,
        _ => 3,
    }
}

/// Serializable campaign progress, owned by an external store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignProgress {
    /// Highest unlocked level (minimum 1 after normalization).
    pub max_unlocked: u32,
    /// Completed level numbers.
    pub completed: FxHashSet<u32>,
}

/// Campaign progression state.
#[derive(Clone, Debug)]
pub struct Campaign {
    levels: Vec<CampaignLevel>,
    current: u32,
    max_unlocked: u32,
    completed: FxHashSet<u32>,
}

impl Default for Campaign {
    fn default() -> Self {
        Self::new()
    }
}

impl Campaign {
    /// A fresh campaign: level 1 unlocked, everything else locked.
    #[must_use]
    pub fn new() -> Self {
        Self::from_progress(&CampaignProgress::default())
    }

    /// Rebuild the ladder from persisted progress.
    #[must_use]
    pub fn from_progress(progress: &CampaignProgress) -> Self {
        let max_unlocked = progress.max_unlocked.clamp(1, TOTAL_LEVELS);
        let completed = progress.completed.clone();

        let mut campaign = Self {
            levels: Vec::new(),
            current: 1,
            max_unlocked,
            completed,
        };
        campaign.rebuild_levels();
        campaign
    }

    /// Snapshot for the external store.
    #[must_use]
    pub fn progress(&self) -> CampaignProgress {
        CampaignProgress {
            max_unlocked: self.max_unlocked,
            completed: self.completed.clone(),
        }
    }

    /// All levels, in order.
    #[must_use]
    pub fn levels(&self) -> &[CampaignLevel] {
        &self.levels
    }

    /// One level by number.
    #[must_use]
    pub fn level(&self, number: u32) -> Option<&CampaignLevel> {
        self.levels.get(number.checked_sub(1)? as usize)
    }

    /// The currently selected level.
    #[must_use]
    pub fn current_level(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn max_unlocked(&self) -> u32 {
        self.max_unlocked
    }

    /// Select a level to play. Locked levels are refused.
    pub fn select_level(&mut self, number: u32) -> bool {
        if number == 0 || number > self.max_unlocked {
            return false;
        }
        self.current = number;
        true
    }

    /// Mark a level completed, unlocking the next when the frontier moves.
    /// Replaying an earlier level never regresses progress.
    pub fn complete_level(&mut self, number: u32) -> bool {
        if number == 0 || number > TOTAL_LEVELS {
            return false;
        }

        self.completed.insert(number);
        if number == self.max_unlocked && number < TOTAL_LEVELS {
            self.max_unlocked = number + 1;
        }
        self.rebuild_levels();
        true
    }

    /// Whether a level beyond the current one is already unlocked.
    #[must_use]
    pub fn has_next_level(&self) -> bool {
        self.current < self.max_unlocked
    }

    /// The next playable level after the current one, if unlocked.
    #[must_use]
    pub fn next_level(&self) -> Option<u32> {
        let next = self.current + 1;
        (next <= self.max_unlocked).then_some(next)
    }

    fn rebuild_levels(&mut self) {
        self.levels = (1..=TOTAL_LEVELS)
            .map(|number| {
                let status = if number > self.max_unlocked {
                    LevelStatus::Locked
                } else if self.completed.contains(&number) {
                    LevelStatus::Completed
                } else {
                    LevelStatus::Unlocked
                };
                CampaignLevel::new(number, status)
            })
            .collect();
    }
}
