//! # strike-engine
//!
//! A deterministic, turn-based engine for multi-nation strike/defense
//! strategy games: economy, simultaneous targeting, ordered resolution, and
//! heuristic AI opponents.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Resolution**: Attacks resolve in a fixed, reproducible
//!    order (players ascending by country index, targets in selection
//!    order). The same intents against the same pre-state always produce the
//!    same outcome.
//!
//! 2. **One Validated Mutation API**: Human commands and AI proposals flow
//!    through the same guarded `Game` commands. A rejected command never
//!    changes state; the `Err` carries the reason.
//!
//! 3. **Seeded Randomness**: The only randomness is the AI's targeting
//!    perturbation, drawn from a forkable ChaCha8 stream. A match replays
//!    identically from its setup and seed.
//!
//! 4. **Synchronous Phases**: A phase transition — including full round
//!    resolution — completes atomically. Delays and animations are a
//!    presentation concern; the engine performs no I/O and never blocks.
//!
//! ## Modules
//!
//! - `core`: Countries, regions, players, intents, round records, RNG
//! - `state`: The `Game` aggregate — phase machine, commands, resolution
//! - `ai`: Strategy profiles and per-opponent purchase/targeting planning
//! - `controller`: Match orchestration, AI execution, observer hooks,
//!   session snapshots
//! - `campaign`: The level ladder and its persisted-progress snapshot

pub mod ai;
pub mod campaign;
pub mod controller;
pub mod core;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use crate::core::{
    AttackResult, AttackTarget, Country, CountryId, DestroyedRegion, GameRng, GameRngState,
    Player, PlayerKind, PlayerTurnActions, PurchaseAction, Region, TurnResolution,
    REGIONS_PER_COUNTRY, REGION_INCOME,
};

pub use crate::state::{Game, MatchReport, MatchState, Phase, MAX_ROUNDS};

pub use crate::ai::{AiSystem, Strategy};

pub use crate::controller::{
    MatchController, MatchObserver, MatchSetup, NullObserver, SessionSnapshot, VICTORY_REWARD,
};

pub use crate::campaign::{Campaign, CampaignLevel, CampaignProgress, LevelStatus};

pub use crate::error::CommandError;
