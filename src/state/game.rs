//! The match aggregate: phase machine, validated commands, resolution.
//!
//! `Game` owns every country, player, and per-round intent accumulator for
//! one match. All mutations go through the validated command methods here;
//! a rejected command never changes state. The AI engine only *proposes*
//! intents — the controller feeds them back through these same commands.
//!
//! ## Determinism
//!
//! Resolution iterates players in ascending country-index order (the order
//! of the player list) and each player's targets in the order they were
//! added. Given the same accumulated intents and pre-state, resolving a
//! round twice yields identical results.

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    players_for, roster, AttackResult, AttackTarget, Country, CountryId, DestroyedRegion, Player,
    PlayerTurnActions, PurchaseAction, TurnResolution,
};
use crate::error::CommandError;

use super::phase::{MatchReport, MatchState, Phase};

/// Rounds after which a stalemate is called.
pub const MAX_ROUNDS: u32 = 50;

/// The aggregate root for one match.
///
/// Created once per match start and replaced wholesale (never reset in
/// place) when a new match begins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    countries: Vec<Country>,
    players: Vec<Player>,
    /// Per-player accumulators, parallel to `players`.
    actions: Vec<PlayerTurnActions>,
    phase: Phase,
    round: u32,
    max_rounds: u32,
    state: MatchState,
    history: Vector<TurnResolution>,
}

impl Game {
    /// Create a match against the given number of AI opponents (1..=3;
    /// other values select the full roster).
    #[must_use]
    pub fn new(opponent_count: u8) -> Self {
        Self::from_parts(roster(opponent_count), players_for(opponent_count))
    }

    /// Assemble a match from pre-built countries and players.
    ///
    /// Useful for campaign variants and tests that start from a damaged
    /// board. Players are reordered to ascending country index — the
    /// canonical iteration order for resolution.
    #[must_use]
    pub fn from_parts(countries: Vec<Country>, mut players: Vec<Player>) -> Self {
        players.sort_by_key(|p| p.country);
        let actions = players.iter().map(|_| PlayerTurnActions::new()).collect();

        Self {
            countries,
            players,
            actions,
            phase: Phase::Economy,
            round: 1,
            max_rounds: MAX_ROUNDS,
            state: MatchState::NotStarted,
            history: Vector::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Participating countries, in country-index order.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Participants, in country-index order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a country by its stable index (not array position).
    #[must_use]
    pub fn country(&self, id: CountryId) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == id)
    }

    /// Position of the human participant in the player list, if any.
    #[must_use]
    pub fn human_index(&self) -> Option<usize> {
        self.players.iter().position(Player::is_human)
    }

    /// Position of the participant bound to a country.
    #[must_use]
    pub fn player_index_for(&self, country: CountryId) -> Option<usize> {
        self.players.iter().position(|p| p.country == country)
    }

    /// Countries with at least one alive region.
    pub fn alive_countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter().filter(|c| !c.is_destroyed())
    }

    #[must_use]
    pub fn alive_country_count(&self) -> usize {
        self.alive_countries().count()
    }

    /// A player's pending attack targets, in selection order.
    #[must_use]
    pub fn pending_targets(&self, player_index: usize) -> &[AttackTarget] {
        self.actions
            .get(player_index)
            .map_or(&[], |a| a.targets.as_slice())
    }

    /// A player's accumulated actions for the current round.
    #[must_use]
    pub fn actions_for(&self, player_index: usize) -> Option<&PlayerTurnActions> {
        self.actions.get(player_index)
    }

    /// Full resolution history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnResolution> {
        &self.history
    }

    /// The most recent round's resolution.
    #[must_use]
    pub fn last_resolution(&self) -> Option<&TurnResolution> {
        self.history.last()
    }

    /// Final standings, once the match has ended.
    #[must_use]
    pub fn report(&self) -> Option<MatchReport> {
        if !self.state.is_terminal() {
            return None;
        }

        let winner = match self.state {
            MatchState::Victory | MatchState::Defeat => self.alive_countries().next().map(|c| c.id),
            MatchState::MaxRoundsReached => self.max_rounds_winner(),
            _ => None,
        };

        Some(MatchReport {
            state: self.state,
            winner,
            rounds_played: self.round,
            final_region_counts: self
                .countries
                .iter()
                .map(|c| (c.id, c.alive_region_count() as u32))
                .collect(),
        })
    }

    /// Winner under the round limit: strictly greatest alive-region count,
    /// lowest country index among ties (countries are in index order, and
    /// `>` keeps the first maximum).
    fn max_rounds_winner(&self) -> Option<CountryId> {
        let mut best: Option<(&Country, usize)> = None;
        for country in &self.countries {
            let count = country.alive_region_count();
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((country, count));
            }
        }
        best.map(|(c, _)| c.id)
    }

    // === Lifecycle ===

    /// Start the match: moves `NotStarted -> InProgress` and distributes
    /// the opening income.
    pub fn start(&mut self) -> Result<(), CommandError> {
        match self.state {
            MatchState::NotStarted => {
                self.state = MatchState::InProgress;
                self.distribute_income();
                debug!("match started: {} countries", self.countries.len());
                Ok(())
            }
            _ => Err(CommandError::AlreadyStarted),
        }
    }

    /// Advance to the next phase.
    ///
    /// - `Economy -> Targeting`
    /// - `Targeting -> Resolution`, running the resolution algorithm
    /// - `Resolution ->` terminal evaluation; if the match continues, a new
    ///   round begins (counters reset, accumulators cleared, income
    ///   distributed) and the phase returns to `Economy`
    pub fn advance_phase(&mut self) -> Result<(), CommandError> {
        self.ensure_in_progress()?;

        match self.phase {
            Phase::Economy => {
                self.phase = Phase::Targeting;
                debug!("round {}: targeting phase", self.round);
            }
            Phase::Targeting => {
                self.phase = Phase::Resolution;
                self.resolve_round();
            }
            Phase::Resolution => {
                if !self.evaluate_terminal() {
                    self.begin_new_round();
                }
            }
        }

        Ok(())
    }

    // === Economy-phase commands ===

    /// Buy one rocket for the issuing player, nominally launched from one of
    /// their regions. Refused by the per-round cap before funds are
    /// considered.
    pub fn buy_rocket(&mut self, player_index: usize, region: usize) -> Result<(), CommandError> {
        self.ensure_phase(Phase::Economy)?;

        let player = self
            .players
            .get(player_index)
            .ok_or(CommandError::OutOfRange)?;
        let country = self
            .country(player.country)
            .ok_or(CommandError::InvalidTarget)?;
        if region >= country.regions().len() {
            return Err(CommandError::OutOfRange);
        }
        if player.rockets_bought_this_round >= Player::MAX_ROCKETS_PER_ROUND {
            return Err(CommandError::CapReached);
        }
        if player.coins < Player::ROCKET_COST {
            return Err(CommandError::InsufficientFunds);
        }

        self.players[player_index].buy_rocket();
        self.actions[player_index].add_purchase(PurchaseAction::BuyRocket { region });
        trace!("player {player_index} bought a rocket (region {region})");
        Ok(())
    }

    /// Buy an air defense for one of the issuing player's regions.
    ///
    /// The coin spend and the installation are checked together and applied
    /// together: a refused purchase deducts nothing.
    pub fn buy_air_defense(
        &mut self,
        player_index: usize,
        region: usize,
    ) -> Result<(), CommandError> {
        self.ensure_phase(Phase::Economy)?;

        let player = self
            .players
            .get(player_index)
            .ok_or(CommandError::OutOfRange)?;
        let pos = self
            .country_pos(player.country)
            .ok_or(CommandError::InvalidTarget)?;
        let target = self.countries[pos]
            .region(region)
            .ok_or(CommandError::OutOfRange)?;

        if player.coins < Player::AIR_DEFENSE_COST {
            return Err(CommandError::InsufficientFunds);
        }
        if target.destroyed {
            return Err(CommandError::AlreadyDestroyed);
        }
        if target.air_defense {
            return Err(CommandError::AlreadyDefended);
        }

        self.players[player_index].spend_air_defense();
        self.countries[pos].add_air_defense(region);
        self.actions[player_index].add_purchase(PurchaseAction::BuyAirDefense { region });
        trace!("player {player_index} bought air defense for region {region}");
        Ok(())
    }

    // === Targeting-phase commands ===

    /// Commit one available rocket against an enemy region.
    ///
    /// The target must belong to a different, participating country; the
    /// region index must be in range. Targeting an already-destroyed region
    /// is allowed (the attack becomes a no-op at resolution), as is aiming
    /// several rockets at the same region in one round.
    pub fn select_target(
        &mut self,
        player_index: usize,
        target_country: CountryId,
        target_region: usize,
    ) -> Result<(), CommandError> {
        self.ensure_phase(Phase::Targeting)?;

        let player = self
            .players
            .get(player_index)
            .ok_or(CommandError::OutOfRange)?;
        if player.country == target_country {
            return Err(CommandError::InvalidTarget);
        }
        let country = self
            .country(target_country)
            .ok_or(CommandError::InvalidTarget)?;
        if target_region >= country.regions().len() {
            return Err(CommandError::OutOfRange);
        }
        if player.rockets == 0 {
            return Err(CommandError::NoRocket);
        }

        let attacker = player.country;
        self.players[player_index].commit_rocket();
        self.actions[player_index].add_target(AttackTarget::new(
            attacker,
            target_country,
            target_region,
        ));
        trace!("player {player_index} targeting {target_country} region {target_region}");
        Ok(())
    }

    /// Withdraw a pending target by its position in the player's list,
    /// returning the rocket to the available pool.
    pub fn remove_target(&mut self, player_index: usize, index: usize) -> Result<(), CommandError> {
        self.ensure_phase(Phase::Targeting)?;

        if player_index >= self.players.len() {
            return Err(CommandError::OutOfRange);
        }
        match self.actions[player_index].remove_target(index) {
            Some(_) => {
                self.players[player_index].refund_rocket();
                trace!("player {player_index} withdrew target {index}");
                Ok(())
            }
            None => Err(CommandError::OutOfRange),
        }
    }

    // === Internals ===

    fn ensure_in_progress(&self) -> Result<(), CommandError> {
        match self.state {
            MatchState::NotStarted => Err(CommandError::NotStarted),
            MatchState::InProgress => Ok(()),
            _ => Err(CommandError::MatchOver),
        }
    }

    fn ensure_phase(&self, expected: Phase) -> Result<(), CommandError> {
        self.ensure_in_progress()?;
        if self.phase != expected {
            return Err(CommandError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn country_pos(&self, id: CountryId) -> Option<usize> {
        self.countries.iter().position(|c| c.id == id)
    }

    /// Apply every accumulated attack, in deterministic order: players in
    /// ascending country index, each player's targets in selection order.
    ///
    /// Air-defense consumption is a one-shot check-and-clear applied per
    /// attack, so of several attacks on the same defended region only the
    /// first is blocked; the rest destroy it. Destruction is applied
    /// immediately so later attacks observe it.
    fn resolve_round(&mut self) {
        let attacks: Vec<AttackTarget> = self
            .actions
            .iter()
            .flat_map(|a| a.targets.iter().copied())
            .collect();

        let mut attack_results = Vec::with_capacity(attacks.len());
        let mut destroyed_regions = Vec::new();

        for attack in attacks {
            let Some(pos) = self.country_pos(attack.target_country) else {
                // Targets are validated at selection; an unknown country here
                // would be a constructed-state inconsistency. Skip it.
                continue;
            };
            let country = &mut self.countries[pos];

            let blocked = country.consume_air_defense(attack.target_region);
            if !blocked && country.destroy_region(attack.target_region) {
                destroyed_regions.push(DestroyedRegion {
                    country: attack.target_country,
                    region: attack.target_region,
                });
            }

            debug!(
                "round {}: {} -> {} region {}: {}",
                self.round,
                attack.attacker,
                attack.target_country,
                attack.target_region,
                if blocked { "blocked" } else { "hit" }
            );
            attack_results.push(AttackResult::new(attack, blocked));
        }

        self.history.push_back(TurnResolution {
            round: self.round,
            attack_results,
            destroyed_regions,
        });
    }

    /// Evaluate terminal conditions after resolution, before the round
    /// counter advances. Returns `true` if the match ended.
    fn evaluate_terminal(&mut self) -> bool {
        let alive = self.alive_country_count();

        if alive == 1 {
            let survivor = self.alive_countries().next().map(|c| c.id);
            let human_country = self.human_index().map(|i| self.players[i].country);
            self.state = if survivor == human_country && human_country.is_some() {
                MatchState::Victory
            } else {
                MatchState::Defeat
            };
            debug!("match over after round {}: {:?}", self.round, self.state);
            return true;
        }

        if alive == 0 {
            self.state = MatchState::Draw;
            debug!("match over after round {}: draw", self.round);
            return true;
        }

        if self.round >= self.max_rounds {
            self.state = MatchState::MaxRoundsReached;
            debug!("round limit reached after round {}", self.round);
            return true;
        }

        false
    }

    fn begin_new_round(&mut self) {
        self.round += 1;
        self.phase = Phase::Economy;

        for player in &mut self.players {
            player.reset_round_counters();
        }
        for actions in &mut self.actions {
            actions.clear();
        }

        self.distribute_income();
        debug!("round {} begins", self.round);
    }

    /// Credit each player with their country's current total income.
    fn distribute_income(&mut self) {
        for i in 0..self.players.len() {
            let income = self
                .country(self.players[i].country)
                .map_or(0, Country::total_income);
            self.players[i].add_income(income);
            trace!("player {i} received {income} income");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerKind, REGIONS_PER_COUNTRY, REGION_INCOME};

    fn started_game(opponents: u8) -> Game {
        let mut game = Game::new(opponents);
        game.start().unwrap();
        game
    }

    #[test]
    fn test_new_game_not_started() {
        let game = Game::new(3);
        assert_eq!(game.state(), MatchState::NotStarted);
        assert_eq!(game.phase(), Phase::Economy);
        assert_eq!(game.round(), 1);
        assert_eq!(game.max_rounds(), MAX_ROUNDS);
        assert_eq!(game.countries().len(), 4);
        assert_eq!(game.players().len(), 4);
    }

    #[test]
    fn test_commands_rejected_before_start() {
        let mut game = Game::new(1);
        assert_eq!(game.buy_rocket(0, 0), Err(CommandError::NotStarted));
        assert_eq!(game.advance_phase(), Err(CommandError::NotStarted));
    }

    #[test]
    fn test_start_distributes_initial_income() {
        let game = started_game(3);
        let expected = REGIONS_PER_COUNTRY as u32 * REGION_INCOME;
        for player in game.players() {
            assert_eq!(player.coins, expected);
        }
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut game = started_game(1);
        assert_eq!(game.start(), Err(CommandError::AlreadyStarted));
    }

    #[test]
    fn test_phase_cycle() {
        let mut game = started_game(1);

        assert_eq!(game.phase(), Phase::Economy);
        game.advance_phase().unwrap();
        assert_eq!(game.phase(), Phase::Targeting);
        game.advance_phase().unwrap();
        assert_eq!(game.phase(), Phase::Resolution);
        game.advance_phase().unwrap();
        assert_eq!(game.phase(), Phase::Economy);
        assert_eq!(game.round(), 2);
    }

    #[test]
    fn test_buy_rocket_happy_path_and_guards() {
        let mut game = started_game(1);
        let human = game.human_index().unwrap();

        assert!(game.buy_rocket(human, 0).is_ok());
        assert_eq!(game.players()[human].rockets, 1);
        assert_eq!(game.players()[human].coins, 50 - Player::ROCKET_COST);

        assert!(game.buy_rocket(human, 0).is_ok());
        assert_eq!(game.buy_rocket(human, 0), Err(CommandError::CapReached));

        // Wrong phase.
        game.advance_phase().unwrap();
        assert!(matches!(
            game.buy_rocket(human, 0),
            Err(CommandError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_buy_rocket_region_out_of_range() {
        let mut game = started_game(1);
        let human = game.human_index().unwrap();
        assert_eq!(
            game.buy_rocket(human, REGIONS_PER_COUNTRY),
            Err(CommandError::OutOfRange)
        );
        assert_eq!(game.buy_rocket(99, 0), Err(CommandError::OutOfRange));
    }

    #[test]
    fn test_buy_air_defense_atomic() {
        let mut game = started_game(1);
        let human = game.human_index().unwrap();
        let coins_before = game.players()[human].coins;

        assert!(game.buy_air_defense(human, 1).is_ok());
        assert_eq!(
            game.players()[human].coins,
            coins_before - Player::AIR_DEFENSE_COST
        );
        let usa = game.country(CountryId::new(0)).unwrap();
        assert!(usa.region(1).unwrap().air_defense);

        // Second purchase on the same region: refused, coins untouched.
        let coins = game.players()[human].coins;
        assert_eq!(
            game.buy_air_defense(human, 1),
            Err(CommandError::AlreadyDefended)
        );
        assert_eq!(game.players()[human].coins, coins);
    }

    #[test]
    fn test_select_target_guards() {
        let mut game = started_game(1);
        let human = game.human_index().unwrap();
        game.buy_rocket(human, 0).unwrap();

        // Wrong phase.
        assert!(matches!(
            game.select_target(human, CountryId::new(3), 0),
            Err(CommandError::WrongPhase { .. })
        ));

        game.advance_phase().unwrap();

        // Own country.
        assert_eq!(
            game.select_target(human, CountryId::new(0), 0),
            Err(CommandError::InvalidTarget)
        );
        // Country not in this match (Iran absent with one opponent).
        assert_eq!(
            game.select_target(human, CountryId::new(1), 0),
            Err(CommandError::InvalidTarget)
        );
        // Region out of range.
        assert_eq!(
            game.select_target(human, CountryId::new(3), REGIONS_PER_COUNTRY),
            Err(CommandError::OutOfRange)
        );

        assert!(game.select_target(human, CountryId::new(3), 0).is_ok());
        assert_eq!(game.players()[human].rockets, 0);
        assert_eq!(
            game.select_target(human, CountryId::new(3), 1),
            Err(CommandError::NoRocket)
        );
        assert_eq!(game.pending_targets(human).len(), 1);
    }

    #[test]
    fn test_remove_target_refunds_rocket() {
        let mut game = started_game(1);
        let human = game.human_index().unwrap();
        game.buy_rocket(human, 0).unwrap();
        game.buy_rocket(human, 0).unwrap();
        game.advance_phase().unwrap();

        game.select_target(human, CountryId::new(3), 0).unwrap();
        assert_eq!(game.players()[human].rockets, 1);

        game.remove_target(human, 0).unwrap();
        assert_eq!(game.players()[human].rockets, 2);
        assert!(game.pending_targets(human).is_empty());

        assert_eq!(game.remove_target(human, 0), Err(CommandError::OutOfRange));
    }

    #[test]
    fn test_resolution_destroys_and_records() {
        let mut game = started_game(1);
        let human = game.human_index().unwrap();
        game.buy_rocket(human, 0).unwrap();
        game.advance_phase().unwrap();
        game.select_target(human, CountryId::new(3), 2).unwrap();
        game.advance_phase().unwrap();

        let resolution = game.last_resolution().unwrap();
        assert_eq!(resolution.round, 1);
        assert_eq!(resolution.attack_results.len(), 1);
        assert!(resolution.attack_results[0].successful());
        assert_eq!(resolution.destroyed_regions.len(), 1);

        let nk = game.country(CountryId::new(3)).unwrap();
        assert!(nk.region(2).unwrap().destroyed);
        assert_eq!(nk.alive_region_count(), REGIONS_PER_COUNTRY - 1);
    }

    #[test]
    fn test_new_round_resets_counters_and_pays_income() {
        let mut game = started_game(1);
        let human = game.human_index().unwrap();
        game.buy_rocket(human, 0).unwrap();
        game.buy_rocket(human, 0).unwrap();
        let coins_after_buys = game.players()[human].coins;

        game.advance_phase().unwrap();
        game.advance_phase().unwrap();
        game.advance_phase().unwrap();

        assert_eq!(game.round(), 2);
        assert_eq!(game.players()[human].rockets_bought_this_round, 0);
        assert!(!game.actions_for(human).unwrap().has_actions());
        // Undamaged country: +50.
        assert_eq!(game.players()[human].coins, coins_after_buys + 50);
        // Rockets carry over between rounds.
        assert_eq!(game.players()[human].rockets, 2);
    }

    #[test]
    fn test_max_rounds_winner_lowest_index_on_tie() {
        let mut game = Game::from_parts(roster(3), players_for(3));
        game.start().unwrap();

        for _ in 0..MAX_ROUNDS {
            game.advance_phase().unwrap();
            game.advance_phase().unwrap();
            game.advance_phase().unwrap();
            if game.state().is_terminal() {
                break;
            }
        }

        assert_eq!(game.state(), MatchState::MaxRoundsReached);
        let report = game.report().unwrap();
        assert_eq!(report.winner, Some(CountryId::new(0)));
        assert_eq!(report.rounds_played, MAX_ROUNDS);
    }

    #[test]
    fn test_terminal_blocks_everything() {
        let mut countries = roster(1);
        // Leave North Korea one region so a single hit ends the match.
        for region in 0..REGIONS_PER_COUNTRY - 1 {
            countries[1].destroy_region(region);
        }
        let mut game = Game::from_parts(countries, players_for(1));
        game.start().unwrap();
        let human = game.human_index().unwrap();

        game.buy_rocket(human, 0).unwrap();
        game.advance_phase().unwrap();
        game.select_target(human, CountryId::new(3), REGIONS_PER_COUNTRY - 1)
            .unwrap();
        game.advance_phase().unwrap();
        game.advance_phase().unwrap();

        assert_eq!(game.state(), MatchState::Victory);
        assert_eq!(game.buy_rocket(human, 0), Err(CommandError::MatchOver));
        assert_eq!(game.advance_phase(), Err(CommandError::MatchOver));
        assert_eq!(
            game.select_target(human, CountryId::new(3), 0),
            Err(CommandError::MatchOver)
        );
    }

    #[test]
    fn test_no_human_survivor_is_defeat() {
        // Human's country already wiped out; AI survives alone.
        let mut countries = roster(1);
        for region in 0..REGIONS_PER_COUNTRY {
            countries[0].destroy_region(region);
        }
        let mut game = Game::from_parts(countries, players_for(1));
        game.start().unwrap();

        game.advance_phase().unwrap();
        game.advance_phase().unwrap();
        game.advance_phase().unwrap();

        assert_eq!(game.state(), MatchState::Defeat);
        let report = game.report().unwrap();
        assert_eq!(report.winner, Some(CountryId::new(3)));
    }

    #[test]
    fn test_from_parts_sorts_players_by_country() {
        let countries = roster(3);
        let players = vec![
            Player::new(PlayerKind::Ai, CountryId::new(3)),
            Player::new(PlayerKind::Human, CountryId::new(0)),
            Player::new(PlayerKind::Ai, CountryId::new(1)),
        ];
        let game = Game::from_parts(countries, players);

        let order: Vec<_> = game.players().iter().map(|p| p.country.0).collect();
        assert_eq!(order, vec![0, 1, 3]);
    }

    #[test]
    fn test_serde_round_trip_mid_match() {
        let mut game = started_game(2);
        let human = game.human_index().unwrap();
        game.buy_rocket(human, 0).unwrap();
        game.advance_phase().unwrap();
        game.select_target(human, CountryId::new(3), 1).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let mut back: Game = serde_json::from_str(&json).unwrap();

        assert_eq!(back.phase(), Phase::Targeting);
        assert_eq!(back.pending_targets(human), game.pending_targets(human));

        // The restored game keeps playing.
        back.advance_phase().unwrap();
        assert_eq!(back.last_resolution().unwrap().attack_results.len(), 1);
    }
}
