//! Per-opponent purchase and targeting policy.
//!
//! An `AiSystem` is bound to one AI-controlled country for the whole match.
//! It only *proposes* intents; the controller feeds each proposal through
//! the same validated `Game` commands the human uses, so every guard applies
//! uniformly. The engine never fails — an empty plan is a valid plan.
//!
//! Scores are in `[0, 1]`: a base value plus situational bonuses, capped,
//! then scaled by the strategy profile's weight. Targeting adds a small
//! random perturbation (drawn from the engine's own forked [`GameRng`]) so
//! equally-scored candidates do not always resolve the same way, while the
//! match as a whole stays reproducible from its seed.

use log::trace;

use crate::core::{AttackTarget, Country, CountryId, GameRng, Player, PurchaseAction};

use super::strategy::Strategy;

/// Scored candidate used while ranking purchase options.
struct PurchaseCandidate {
    action: PurchaseAction,
    score: f64,
}

/// Scored candidate used while ranking attack targets.
struct TargetCandidate {
    target: AttackTarget,
    score: f64,
}

/// Decision engine for one AI-controlled country.
#[derive(Clone, Debug)]
pub struct AiSystem {
    strategy: Strategy,
    /// The human participant's country, passed in explicitly at setup so
    /// scoring never has to guess who the human is.
    human_country: CountryId,
    rng: GameRng,
}

impl AiSystem {
    /// Create an engine with an explicit strategy.
    #[must_use]
    pub fn new(strategy: Strategy, human_country: CountryId, rng: GameRng) -> Self {
        Self {
            strategy,
            human_country,
            rng,
        }
    }

    /// Create the engine for a country using the fixed per-country strategy
    /// assignment.
    #[must_use]
    pub fn for_country(country: CountryId, human_country: CountryId, rng: GameRng) -> Self {
        Self::new(Strategy::for_country(country), human_country, rng)
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Capture the RNG state for a session snapshot.
    #[must_use]
    pub fn rng_state(&self) -> crate::core::GameRngState {
        self.rng.state()
    }

    /// Plan this round's purchases for the bound country.
    ///
    /// Candidates (an air defense per eligible region, plus as many rockets
    /// as coins and the per-round cap allow) are scored, ranked, and then
    /// committed greedily against a simulated budget: each accepted
    /// candidate deducts from the running coin total and rocket counter so
    /// later candidates cannot double-spend.
    #[must_use]
    pub fn plan_purchases(
        &self,
        player: &Player,
        country: &Country,
        all_countries: &[Country],
    ) -> Vec<PurchaseAction> {
        let mut candidates: Vec<PurchaseCandidate> = Vec::new();

        // Air defense for every alive, undefended region.
        for (region_index, region) in country.regions().iter().enumerate() {
            if !region.can_add_air_defense() || player.coins < Player::AIR_DEFENSE_COST {
                continue;
            }
            let score = self.air_defense_priority(country, all_countries)
                * self.strategy.air_defense_weight();
            candidates.push(PurchaseCandidate {
                action: PurchaseAction::BuyAirDefense {
                    region: region_index,
                },
                score,
            });
        }

        // As many rockets as coins and the per-round cap still allow.
        let cap_left = Player::MAX_ROCKETS_PER_ROUND.saturating_sub(player.rockets_bought_this_round);
        let affordable = player.coins / Player::ROCKET_COST;
        let rockets_to_consider = cap_left.min(affordable);

        let launch_region = first_alive_region(country);
        let rocket_score = rocket_priority(all_countries) * self.strategy.rocket_weight();
        for _ in 0..rockets_to_consider {
            candidates.push(PurchaseCandidate {
                action: PurchaseAction::BuyRocket {
                    region: launch_region,
                },
                score: rocket_score,
            });
        }

        // Rank and commit greedily against a simulated budget. The sort is
        // stable, so equal scores keep candidate-construction order.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut plan = Vec::new();
        let mut coins = player.coins;
        let mut rockets_bought = player.rockets_bought_this_round;

        for candidate in candidates {
            match candidate.action {
                PurchaseAction::BuyRocket { .. } => {
                    if coins >= Player::ROCKET_COST && rockets_bought < Player::MAX_ROCKETS_PER_ROUND
                    {
                        coins -= Player::ROCKET_COST;
                        rockets_bought += 1;
                        plan.push(candidate.action);
                    }
                }
                PurchaseAction::BuyAirDefense { .. } => {
                    if coins >= Player::AIR_DEFENSE_COST {
                        coins -= Player::AIR_DEFENSE_COST;
                        plan.push(candidate.action);
                    }
                }
            }
        }

        trace!(
            "{}: planned {} purchases ({:?})",
            player.country,
            plan.len(),
            self.strategy
        );
        plan
    }

    /// Plan this round's attack targets: every alive enemy region is scored
    /// and the top `player.rockets` candidates are kept, in rank order.
    #[must_use]
    pub fn plan_targets(&mut self, player: &Player, all_countries: &[Country]) -> Vec<AttackTarget> {
        if player.rockets == 0 {
            return Vec::new();
        }

        let mut candidates: Vec<TargetCandidate> = Vec::new();

        for target_country in all_countries {
            if target_country.id == player.country || target_country.is_destroyed() {
                continue;
            }
            for (region_index, region) in target_country.regions().iter().enumerate() {
                if !region.is_alive() {
                    continue;
                }
                let score = self.target_priority(target_country, region_index);
                candidates.push(TargetCandidate {
                    target: AttackTarget::new(player.country, target_country.id, region_index),
                    score,
                });
            }
        }

        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates.truncate(player.rockets as usize);

        trace!(
            "{}: planned {} targets ({:?})",
            player.country,
            candidates.len(),
            self.strategy
        );
        candidates.into_iter().map(|c| c.target).collect()
    }

    /// Air-defense priority for a region of the bound country.
    ///
    /// Base 0.5, +0.3 for being undefended (always true for the candidates
    /// we build), +0.4 when any enemy exists to pose a rocket threat.
    fn air_defense_priority(&self, country: &Country, all_countries: &[Country]) -> f64 {
        let mut priority: f64 = 0.5 + 0.3;

        let enemy_exists = all_countries.iter().any(|c| c.id != country.id);
        if enemy_exists {
            priority += 0.4;
        }

        priority.min(1.0)
    }

    /// Priority of one enemy region as an attack target.
    fn target_priority(&mut self, target_country: &Country, region_index: usize) -> f64 {
        let mut priority = 0.5;

        // Undefended regions are cheap hits.
        let defended = target_country
            .region(region_index)
            .is_some_and(|r| r.air_defense);
        if !defended {
            priority += 0.4;
        }

        // Escalating preference for finishing off weak countries.
        let alive = target_country.alive_region_count();
        if alive <= 2 {
            priority += 0.4;
        } else if alive <= 3 {
            priority += 0.2;
        }

        // The human is the rival to beat while their country stays strong.
        if target_country.id == self.human_country && alive > 3 {
            priority += 0.3;
        }

        // Perturbation for tie-breaking and unpredictability.
        priority += self.rng.gen_range_f64(0.0..0.2);

        priority.min(1.0)
    }
}

/// Launch region for rocket purchases: the first alive region, or 0 when
/// everything is rubble (the purchase will then be refused downstream).
fn first_alive_region(country: &Country) -> usize {
    country
        .regions()
        .iter()
        .position(|r| r.is_alive())
        .unwrap_or(0)
}

/// Rocket priority: high while the war is still contested.
fn rocket_priority(all_countries: &[Country]) -> f64 {
    let alive = all_countries.iter().filter(|c| !c.is_destroyed()).count();
    if alive > 1 {
        0.8
    } else {
        0.2
    }
}
