//! Campaign ladder integration: match outcomes driving progression.

use strike_engine::campaign::{Campaign, CampaignProgress, LevelStatus, TOTAL_LEVELS};
use strike_engine::controller::{MatchController, MatchObserver, MatchSetup, SessionSnapshot};
use strike_engine::core::{players_for, roster, CountryId, REGIONS_PER_COUNTRY};
use strike_engine::state::{Game, MatchState};

/// Observer that forwards completions into the ladder.
struct CampaignObserver<'a> {
    campaign: &'a mut Campaign,
    coins_earned: u32,
}

impl MatchObserver for CampaignObserver<'_> {
    fn on_victory_reward(&mut self, coins: u32) {
        self.coins_earned += coins;
    }

    fn on_campaign_level_completed(&mut self, level: u32) {
        self.campaign.complete_level(level);
    }
}

/// A 1-opponent match already on the brink: one human rocket wins it.
fn near_victory_controller(level: u32) -> MatchController {
    let mut countries = roster(1);
    for region in 0..REGIONS_PER_COUNTRY - 1 {
        countries[1].destroy_region(region);
    }
    let mut game = Game::from_parts(countries, players_for(1));
    game.start().unwrap();

    MatchController::from_snapshot(SessionSnapshot {
        setup: MatchSetup::new().opponents(1).seed(0).campaign_level(level),
        game,
        ai: Vec::new(),
    })
}

#[test]
fn test_winning_a_campaign_match_unlocks_the_next_level() {
    let mut campaign = Campaign::new();
    assert!(campaign.select_level(1));

    let mut controller = near_victory_controller(1);
    let mut observer = CampaignObserver {
        campaign: &mut campaign,
        coins_earned: 0,
    };

    controller.buy_rocket(0).unwrap();
    controller.end_phase_with(&mut observer).unwrap();
    controller
        .select_target(CountryId::new(3), REGIONS_PER_COUNTRY - 1)
        .unwrap();
    controller.end_phase_with(&mut observer).unwrap();
    controller.end_phase_with(&mut observer).unwrap();

    assert_eq!(controller.state(), MatchState::Victory);
    assert_eq!(observer.coins_earned, 100);
    assert_eq!(campaign.level(1).unwrap().status, LevelStatus::Completed);
    assert_eq!(campaign.level(2).unwrap().status, LevelStatus::Unlocked);
    assert_eq!(campaign.next_level(), Some(2));
}

#[test]
fn test_campaign_levels_field_the_right_opposition() {
    let campaign = Campaign::new();

    assert_eq!(campaign.level(1).unwrap().opponent_count, 1);
    assert_eq!(campaign.level(2).unwrap().opponent_count, 2);
    for number in 3..=TOTAL_LEVELS {
        assert_eq!(campaign.level(number).unwrap().opponent_count, 3);
    }

    // A level's opponent count flows into match setup.
    let level = campaign.level(2).unwrap();
    let controller = MatchController::new(
        MatchSetup::new()
            .opponents(level.opponent_count)
            .campaign_level(level.number),
    );
    assert_eq!(controller.game().players().len(), 3);
}

#[test]
fn test_losing_does_not_advance_the_campaign() {
    let mut campaign = Campaign::new();

    // Human already eliminated: the match ends in defeat immediately.
    let mut countries = roster(1);
    for region in 0..REGIONS_PER_COUNTRY {
        countries[0].destroy_region(region);
    }
    let mut game = Game::from_parts(countries, players_for(1));
    game.start().unwrap();
    let mut controller = MatchController::from_snapshot(SessionSnapshot {
        setup: MatchSetup::new().opponents(1).seed(0).campaign_level(1),
        game,
        ai: Vec::new(),
    });

    let mut observer = CampaignObserver {
        campaign: &mut campaign,
        coins_earned: 0,
    };
    controller.end_phase_with(&mut observer).unwrap();
    controller.end_phase_with(&mut observer).unwrap();
    controller.end_phase_with(&mut observer).unwrap();

    assert_eq!(controller.state(), MatchState::Defeat);
    assert_eq!(observer.coins_earned, 0);
    assert_eq!(campaign.level(1).unwrap().status, LevelStatus::Unlocked);
    assert_eq!(campaign.max_unlocked(), 1);
}

#[test]
fn test_progress_survives_an_external_store() {
    let mut campaign = Campaign::new();
    campaign.complete_level(1);
    campaign.complete_level(2);
    campaign.complete_level(3);

    // Persist wherever the host keeps opaque state, then rebuild.
    let stored = serde_json::to_vec(&campaign.progress()).unwrap();
    let progress: CampaignProgress = serde_json::from_slice(&stored).unwrap();
    let rebuilt = Campaign::from_progress(&progress);

    assert_eq!(rebuilt.max_unlocked(), 4);
    for number in 1..=3 {
        assert_eq!(rebuilt.level(number).unwrap().status, LevelStatus::Completed);
    }
    assert_eq!(rebuilt.level(4).unwrap().status, LevelStatus::Unlocked);
}
