//! Squad selection against the HiGHS backend.

mod support;

use fplopt::adapter::solver::HiGHSSolver;
use fplopt::domain::{OptimizationConfig, PlayerId, Position, SelectionStatus, TeamId};
use fplopt::error::Error;
use fplopt::port::SolveOptions;
use fplopt::service::SquadSelector;
use fplopt::testkit::domain::{league_pool, minimal_pool, player};
use rust_decimal_macros::dec;

use support::assertions::{assert_close, assert_legal_squad};

fn selector() -> SquadSelector<HiGHSSolver> {
    SquadSelector::new(HiGHSSolver::new())
}

#[test]
fn test_minimal_pool_selects_every_candidate() {
    let config = OptimizationConfig::default()
        .with_budget(dec!(100))
        .with_max_per_team(15);

    let selection = selector()
        .select(&minimal_pool(), &config, &SolveOptions::default())
        .unwrap();

    assert_eq!(selection.status, SelectionStatus::Optimal);
    assert_eq!(selection.squad.len(), 15);
    assert_eq!(selection.squad.total_cost(), dec!(73.0));
    assert_close(selection.objective, 63.5);
    assert_legal_squad(&selection.squad, &config);
}

#[test]
fn test_budget_too_low_is_infeasible() {
    let config = OptimizationConfig::default()
        .with_budget(dec!(50))
        .with_max_per_team(15);

    let result = selector().select(&minimal_pool(), &config, &SolveOptions::default());

    assert!(
        matches!(result, Err(Error::Infeasible { .. })),
        "expected infeasible, got {result:?}"
    );
}

#[test]
fn test_team_limit_blocks_minimal_pool() {
    // Five defenders share a team, so a limit of three cannot be met.
    let config = OptimizationConfig::default();

    let result = selector().select(&minimal_pool(), &config, &SolveOptions::default());

    assert!(matches!(result, Err(Error::Infeasible { .. })));
}

#[test]
fn test_league_pool_respects_all_constraints() {
    let players = league_pool(8);
    let config = OptimizationConfig::default().with_budget(dec!(83.0));

    let selection = selector()
        .select(&players, &config, &SolveOptions::default())
        .unwrap();

    assert_legal_squad(&selection.squad, &config);
    assert_close(selection.objective, selection.squad.total_expected_points());
}

#[test]
fn test_team_limit_binds_when_one_team_dominates() {
    let mut players = league_pool(6);
    for p in players.iter_mut().filter(|p| p.team == TeamId::new(1)) {
        p.expected_points += 50.0;
    }
    let config = OptimizationConfig::default()
        .with_budget(dec!(200))
        .with_max_per_team(3);

    let selection = selector()
        .select(&players, &config, &SolveOptions::default())
        .unwrap();

    let from_team_one = selection
        .squad
        .players()
        .iter()
        .filter(|p| p.team == TeamId::new(1))
        .count();
    assert_eq!(from_team_one, 3);
    assert_legal_squad(&selection.squad, &config);
}

#[test]
fn test_budget_forces_cheaper_choice() {
    // A star forward that does not fit alongside the rest of the squad.
    let mut players = minimal_pool();
    for (i, p) in players.iter_mut().enumerate() {
        p.team = TeamId::new(i as u32 + 1);
    }
    players.push(player(100, Position::Forward, 50, dec!(40.0), 20.0));

    let tight = OptimizationConfig::default().with_budget(dec!(80.0));
    let selection = selector()
        .select(&players, &tight, &SolveOptions::default())
        .unwrap();
    assert!(!selection.squad.contains(PlayerId::new(100)));

    let loose = OptimizationConfig::default().with_budget(dec!(110.0));
    let selection = selector()
        .select(&players, &loose, &SolveOptions::default())
        .unwrap();
    assert!(selection.squad.contains(PlayerId::new(100)));
    assert_legal_squad(&selection.squad, &loose);
}

#[test]
fn test_negative_scores_are_allowed() {
    let mut players = minimal_pool();
    for p in &mut players {
        p.expected_points = -1.0;
    }
    let config = OptimizationConfig::default().with_max_per_team(15);

    let selection = selector()
        .select(&players, &config, &SolveOptions::default())
        .unwrap();

    assert_close(selection.objective, -15.0);
}

#[test]
fn test_objective_is_deterministic() {
    let players = league_pool(10);
    let config = OptimizationConfig::default();

    let first = selector()
        .select(&players, &config, &SolveOptions::default())
        .unwrap();
    let second = selector()
        .select(&players, &config, &SolveOptions::default())
        .unwrap();

    // The chosen players may differ among equal-value squads; the objective may not.
    assert_close(first.objective, second.objective);
}
