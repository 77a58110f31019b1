//! Assertions over squad invariants shared by integration tests.

use std::collections::HashMap;

use fplopt::domain::{OptimizationConfig, Position, Squad, StartingXi};
use rust_decimal::prelude::ToPrimitive;

/// Tolerance for floating point comparisons of costs and objectives.
pub const TOLERANCE: f64 = 1e-6;

/// Check every squad property: size, quotas, team limit and budget.
pub fn assert_legal_squad(squad: &Squad, config: &OptimizationConfig) {
    assert_eq!(squad.len(), 15, "squad size");

    for position in Position::ALL {
        assert_eq!(
            squad.by_position(position).count(),
            position.quota(),
            "quota for {position}"
        );
    }

    let mut per_team: HashMap<_, u32> = HashMap::new();
    for p in squad.players() {
        *per_team.entry(p.team).or_default() += 1;
    }
    for (team, count) in per_team {
        assert!(
            count <= config.max_per_team,
            "team {team} has {count} players, limit {}",
            config.max_per_team
        );
    }

    let cost = squad.total_cost().to_f64().unwrap();
    let budget = config.budget.to_f64().unwrap();
    assert!(cost <= budget + TOLERANCE, "cost {cost} exceeds budget {budget}");
}

/// Check the lineup shape and captain against the squad.
pub fn assert_valid_lineup(xi: &StartingXi, squad: &Squad) {
    assert_eq!(xi.len(), 11, "lineup size");
    assert_eq!(xi.count(Position::Goalkeeper), 1, "one goalkeeper");

    if let Some(formation) = xi.formation().formation() {
        assert_eq!(xi.count(Position::Defender), usize::from(formation.defenders()));
        assert_eq!(xi.count(Position::Midfielder), usize::from(formation.midfielders()));
        assert_eq!(xi.count(Position::Forward), usize::from(formation.forwards()));
    }

    for p in xi.players() {
        assert!(squad.contains(p.id), "{} is not in the squad", p.name);
    }

    let captain = xi.captain().expect("lineup has a captain");
    for p in xi.players() {
        assert!(
            captain.expected_points >= p.expected_points,
            "captain {} scores below {}",
            captain.name,
            p.name
        );
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}
