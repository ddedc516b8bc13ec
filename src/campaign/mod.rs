//! Campaign progression: the level ladder and its persisted snapshot.

pub mod ladder;

pub use ladder::{
    opponent_count_for_level, Campaign, CampaignLevel, CampaignProgress, LevelStatus, TOTAL_LEVELS,
};
