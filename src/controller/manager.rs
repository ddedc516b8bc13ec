//! The match controller: one object that drives a full match.
//!
//! The controller exclusively owns the [`Game`] aggregate and the per-country
//! AI bindings. Ending a phase triggers the AI engines for every
//! AI-controlled participant; their proposals are applied through the same
//! validated commands the human uses, sequentially in country-index order, so
//! later evaluations observe earlier effects. Starting a new match replaces
//! the aggregate and the bindings wholesale.

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::ai::AiSystem;
use crate::core::{AttackTarget, CountryId, GameRng, Player, PurchaseAction, TurnResolution};
use crate::error::CommandError;
use crate::state::{Game, MatchReport, MatchState, Phase};

use super::session::SessionSnapshot;
use super::setup::MatchSetup;

/// Coins awarded through the observer hook when the human wins.
pub const VICTORY_REWARD: u32 = 100;

/// Hooks fired at the boundary to external collaborators (wallet,
/// campaign progression). The engine stores nothing behind them.
pub trait MatchObserver {
    /// The human won; credit the reward wallet.
    fn on_victory_reward(&mut self, coins: u32) {
        let _ = coins;
    }

    /// A campaign level was completed by winning its match.
    fn on_campaign_level_completed(&mut self, level: u32) {
        let _ = level;
    }
}

/// Observer that ignores every hook.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl MatchObserver for NullObserver {}

/// Orchestrates one match: owns the aggregate, drives phases, runs the AI.
#[derive(Debug)]
pub struct MatchController {
    setup: MatchSetup,
    game: Game,
    ai: FxHashMap<CountryId, AiSystem>,
}

impl MatchController {
    /// Start a new match from the given setup.
    #[must_use]
    pub fn new(setup: MatchSetup) -> Self {
        let mut game = Game::new(setup.opponent_count);
        // A freshly built aggregate is always startable.
        let _ = game.start();

        let ai = bind_ai(&game, setup.rng_seed);
        debug!(
            "match started: {} opponents, seed {}",
            setup.opponent_count, setup.rng_seed
        );

        Self { setup, game, ai }
    }

    /// Abandon the current match and start a new one. The aggregate and all
    /// AI bindings are replaced, never reset in place.
    pub fn restart(&mut self, setup: MatchSetup) {
        *self = Self::new(setup);
    }

    /// Rebuild a controller from a session snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        let human_country = snapshot
            .game
            .human_index()
            .map(|i| snapshot.game.players()[i].country)
            .unwrap_or(CountryId::new(0));

        let ai = snapshot
            .ai
            .iter()
            .map(|binding| {
                (
                    binding.country,
                    AiSystem::new(
                        binding.strategy,
                        human_country,
                        GameRng::from_state(&binding.rng),
                    ),
                )
            })
            .collect();

        Self {
            setup: snapshot.setup,
            game: snapshot.game,
            ai,
        }
    }

    // === Queries ===

    /// The full query surface: the match aggregate itself.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn setup(&self) -> &MatchSetup {
        &self.setup
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.game.round()
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.game.state()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game.state().is_terminal()
    }

    /// The human participant.
    #[must_use]
    pub fn human_player(&self) -> Option<&Player> {
        self.game.human_index().map(|i| &self.game.players()[i])
    }

    /// Whether a rocket purchase by the human would currently be accepted.
    #[must_use]
    pub fn can_buy_rocket(&self) -> bool {
        self.phase() == Phase::Economy
            && self.human_player().is_some_and(Player::can_buy_rocket)
    }

    /// Whether an air-defense purchase for the given human region would
    /// currently be accepted.
    #[must_use]
    pub fn can_buy_air_defense(&self, region: usize) -> bool {
        self.phase() == Phase::Economy
            && self.human_player().is_some_and(|player| {
                player.can_buy_air_defense()
                    && self
                        .game
                        .country(player.country)
                        .is_some_and(|c| c.can_add_air_defense(region))
            })
    }

    /// The human's pending attack targets, in selection order.
    #[must_use]
    pub fn pending_targets(&self) -> &[AttackTarget] {
        match self.game.human_index() {
            Some(index) => self.game.pending_targets(index),
            None => &[],
        }
    }

    /// The most recent round's resolution, for post-round effects.
    #[must_use]
    pub fn last_resolution(&self) -> Option<&TurnResolution> {
        self.game.last_resolution()
    }

    /// Final standings once the match has ended.
    #[must_use]
    pub fn report(&self) -> Option<MatchReport> {
        self.game.report()
    }

    // === Human commands ===

    /// Buy a rocket for the human player.
    pub fn buy_rocket(&mut self, region: usize) -> Result<(), CommandError> {
        let human = self.human_index()?;
        self.game.buy_rocket(human, region)
    }

    /// Buy an air defense for one of the human's regions.
    pub fn buy_air_defense(&mut self, region: usize) -> Result<(), CommandError> {
        let human = self.human_index()?;
        self.game.buy_air_defense(human, region)
    }

    /// Commit one of the human's rockets against an enemy region.
    pub fn select_target(
        &mut self,
        country: CountryId,
        region: usize,
    ) -> Result<(), CommandError> {
        let human = self.human_index()?;
        self.game.select_target(human, country, region)
    }

    /// Withdraw one of the human's pending targets by index.
    pub fn remove_target(&mut self, index: usize) -> Result<(), CommandError> {
        let human = self.human_index()?;
        self.game.remove_target(human, index)
    }

    // === Phase driving ===

    /// End the current phase, without observer hooks.
    pub fn end_phase(&mut self) -> Result<(), CommandError> {
        self.end_phase_with(&mut NullObserver)
    }

    /// End the current phase.
    ///
    /// - Ending `Economy` first executes every AI's purchase plan.
    /// - Ending `Targeting` first executes every AI's targeting plan; the
    ///   transition then resolves the round.
    /// - Ending `Resolution` evaluates terminal conditions (firing the
    ///   victory/campaign hooks on a human win) or begins the next round.
    pub fn end_phase_with(
        &mut self,
        observer: &mut dyn MatchObserver,
    ) -> Result<(), CommandError> {
        if self.game.state() != MatchState::InProgress {
            // Propagate the precise reason without running any AI.
            return self.game.advance_phase();
        }

        match self.game.phase() {
            Phase::Economy => {
                self.run_ai_purchases();
                self.game.advance_phase()
            }
            Phase::Targeting => {
                self.run_ai_targeting();
                self.game.advance_phase()
            }
            Phase::Resolution => {
                self.game.advance_phase()?;
                if self.game.state() == MatchState::Victory {
                    observer.on_victory_reward(VICTORY_REWARD);
                    if let Some(level) = self.setup.campaign_level {
                        observer.on_campaign_level_completed(level);
                    }
                }
                Ok(())
            }
        }
    }

    // === Internals ===

    fn human_index(&self) -> Result<usize, CommandError> {
        self.game.human_index().ok_or(CommandError::OutOfRange)
    }

    pub(super) fn parts(&self) -> (&MatchSetup, &Game, &FxHashMap<CountryId, AiSystem>) {
        (&self.setup, &self.game, &self.ai)
    }

    /// Run purchase planning for every AI participant, in country-index
    /// order, applying each proposal through the validated command API.
    /// A country with no bound engine simply makes no decisions.
    fn run_ai_purchases(&mut self) {
        for index in 0..self.game.players().len() {
            let player = &self.game.players()[index];
            if !player.is_ai() {
                continue;
            }
            let country_id = player.country;

            let Some(ai) = self.ai.get(&country_id) else {
                debug!("{country_id}: no AI bound, skipping purchases");
                continue;
            };
            let Some(country) = self.game.country(country_id) else {
                continue;
            };

            let plan = ai.plan_purchases(player, country, self.game.countries());
            for action in plan {
                let applied = match action {
                    PurchaseAction::BuyRocket { region } => self.game.buy_rocket(index, region),
                    PurchaseAction::BuyAirDefense { region } => {
                        self.game.buy_air_defense(index, region)
                    }
                };
                if let Err(err) = applied {
                    trace!("{country_id}: purchase refused: {err}");
                }
            }
        }
    }

    /// Run targeting for every AI participant. A refused commit stops that
    /// player's remaining targets rather than erroring.
    fn run_ai_targeting(&mut self) {
        for index in 0..self.game.players().len() {
            let player = &self.game.players()[index];
            if !player.is_ai() {
                continue;
            }
            let country_id = player.country;

            let Some(ai) = self.ai.get_mut(&country_id) else {
                debug!("{country_id}: no AI bound, skipping targeting");
                continue;
            };

            let plan = ai.plan_targets(player, self.game.countries());
            for target in plan {
                if self
                    .game
                    .select_target(index, target.target_country, target.target_region)
                    .is_err()
                {
                    break;
                }
            }
        }
    }
}

/// Build one AI engine per AI participant, forking a deterministic RNG
/// stream for each in country-index order.
fn bind_ai(game: &Game, seed: u64) -> FxHashMap<CountryId, AiSystem> {
    let human_country = game
        .human_index()
        .map(|i| game.players()[i].country)
        .unwrap_or(CountryId::new(0));

    let mut base_rng = GameRng::new(seed);
    let mut bindings = FxHashMap::default();

    for player in game.players() {
        if player.is_ai() {
            bindings.insert(
                player.country,
                AiSystem::for_country(player.country, human_country, base_rng.fork()),
            );
        }
    }

    bindings
}
