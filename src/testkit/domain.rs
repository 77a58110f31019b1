//! Builders for players and candidate pools used across tests.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{Player, PlayerId, PlayerRecord, Position, TeamId};

/// Create a scored player named `P{id}`.
pub fn player(id: u32, position: Position, team: u32, cost: Decimal, points: f64) -> Player {
    Player::new(
        PlayerId::new(id),
        format!("P{id}"),
        TeamId::new(team),
        position,
        cost,
        points,
    )
    .with_team_short_name(format!("T{team}"))
}

/// Create an unscored record with no scoring fields.
pub fn record(id: u32, position: Position, team: u32, cost: Decimal) -> PlayerRecord {
    let mut record = PlayerRecord::new(
        PlayerId::new(id),
        format!("P{id}"),
        TeamId::new(team),
        position,
        cost,
    );
    record.team_short_name = format!("T{team}");
    record
}

/// The minimal legal pool: 2 GK (3.0 pts, 4.5), 5 DEF (4.0, 4.5),
/// 5 MID (4.5, 5.0) and 3 FWD (5.0, 5.5), one team per position.
///
/// Costs total 73.0 and points total 63.5.
pub fn minimal_pool() -> Vec<Player> {
    let groups = [
        (Position::Goalkeeper, 1, dec!(4.5), 3.0),
        (Position::Defender, 2, dec!(4.5), 4.0),
        (Position::Midfielder, 3, dec!(5.0), 4.5),
        (Position::Forward, 4, dec!(5.5), 5.0),
    ];

    let mut players = Vec::new();
    let mut id = 1;
    for (position, team, cost, points) in groups {
        for _ in 0..position.quota() {
            players.push(player(id, position, team, cost, points));
            id += 1;
        }
    }
    players
}

/// A larger pool over `teams` teams with varied prices and scores.
///
/// Each team supplies 2 GK, 5 DEF, 5 MID and 3 FWD. Scores and prices are
/// deterministic functions of the id, so better players cost more.
pub fn league_pool(teams: u32) -> Vec<Player> {
    let mut players = Vec::new();
    let mut id = 1;
    for team in 1..=teams {
        for position in Position::ALL {
            for slot in 0..position.quota() {
                let spread = f64::from((id * 7 + team * 3) % 11);
                let points = 2.0 + spread * 0.5 + slot as f64 * 0.1;
                let cost = dec!(4.0) + Decimal::new(i64::from((id * 7 + team * 3) % 11) * 5, 1);
                players.push(player(id, position, team, cost, points));
                id += 1;
            }
        }
    }
    players
}
