//! Validated squads and starting lineups.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use super::error::DomainError;
use super::{
    by_score_desc, FormationUsed, OptimizationConfig, Player, PlayerId, Position, TeamId,
    SQUAD_SIZE,
};

/// A legal 15-player squad.
///
/// The only way to obtain a `Squad` is [`Squad::new`], which checks every
/// squad invariant: size, position quotas, team limit, budget and
/// uniqueness.
#[derive(Debug, Clone, PartialEq)]
pub struct Squad {
    players: Vec<Player>,
}

impl Squad {
    /// Validate `players` against `config` and build a squad.
    ///
    /// Players are stored by position, then score descending.
    pub fn new(mut players: Vec<Player>, config: &OptimizationConfig) -> Result<Self, DomainError> {
        if players.len() != SQUAD_SIZE {
            return Err(DomainError::SquadSize {
                expected: SQUAD_SIZE,
                actual: players.len(),
            });
        }

        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            if !seen.insert(player.id) {
                return Err(DomainError::DuplicatePlayer { player: player.id });
            }
        }

        for position in Position::ALL {
            let actual = players.iter().filter(|p| p.position == position).count();
            if actual != position.quota() {
                return Err(DomainError::PositionQuota {
                    position,
                    expected: position.quota(),
                    actual,
                });
            }
        }

        let mut per_team: BTreeMap<TeamId, usize> = BTreeMap::new();
        for player in &players {
            *per_team.entry(player.team).or_default() += 1;
        }
        if let Some((&team, &count)) = per_team
            .iter()
            .find(|(_, &count)| count > config.max_per_team as usize)
        {
            return Err(DomainError::TeamLimit {
                team,
                count,
                limit: config.max_per_team,
            });
        }

        let cost: Decimal = players.iter().map(|p| p.cost).sum();
        if cost > config.budget {
            return Err(DomainError::OverBudget {
                cost,
                budget: config.budget,
            });
        }

        players.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| by_score_desc(a, b)));
        Ok(Self { players })
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// Players of one position group, best first.
    pub fn by_position(&self, position: Position) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.position == position)
    }

    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.players.iter().map(|p| p.cost).sum()
    }

    #[must_use]
    pub fn total_expected_points(&self) -> f64 {
        self.players.iter().map(|p| p.expected_points).sum()
    }
}

/// Eleven starters drawn from a squad, with the shape used and a captain.
#[derive(Debug, Clone, PartialEq)]
pub struct StartingXi {
    players: Vec<Player>,
    formation: FormationUsed,
    captain: Option<PlayerId>,
}

impl StartingXi {
    /// Build a lineup. The captain, when given, must be one of `players`.
    pub(crate) fn new(
        players: Vec<Player>,
        formation: FormationUsed,
        captain: Option<PlayerId>,
    ) -> Self {
        debug_assert!(captain.map_or(true, |c| players.iter().any(|p| p.id == c)));
        Self {
            players,
            formation,
            captain,
        }
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub const fn formation(&self) -> FormationUsed {
        self.formation
    }

    #[must_use]
    pub fn captain(&self) -> Option<&Player> {
        self.captain
            .and_then(|id| self.players.iter().find(|p| p.id == id))
    }

    #[must_use]
    pub fn is_captain(&self, id: PlayerId) -> bool {
        self.captain == Some(id)
    }

    #[must_use]
    pub fn count(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.position == position).count()
    }

    #[must_use]
    pub fn total_expected_points(&self) -> f64 {
        self.players.iter().map(|p| p.expected_points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn player(id: u32, position: Position, team: u32, cost: Decimal, points: f64) -> Player {
        Player::new(
            PlayerId::new(id),
            format!("Player {id}"),
            TeamId::new(team),
            position,
            cost,
            points,
        )
    }

    /// Two GK, five DEF, five MID, three FWD spread over five teams.
    fn legal_players() -> Vec<Player> {
        let mut players = Vec::new();
        let mut id = 1;
        for position in Position::ALL {
            for _ in 0..position.quota() {
                players.push(player(id, position, id % 5 + 1, dec!(5.0), f64::from(id)));
                id += 1;
            }
        }
        players
    }

    #[test]
    fn accepts_legal_squad() {
        let squad = Squad::new(legal_players(), &OptimizationConfig::default()).unwrap();

        assert_eq!(squad.len(), SQUAD_SIZE);
        assert_eq!(squad.total_cost(), dec!(75.0));
        assert_eq!(squad.by_position(Position::Defender).count(), 5);
        // Stored by position then score descending.
        assert_eq!(squad.players()[0].id, PlayerId::new(2));
    }

    #[test]
    fn rejects_wrong_size() {
        let mut players = legal_players();
        players.pop();
        let err = Squad::new(players, &OptimizationConfig::default()).unwrap_err();
        assert_eq!(
            err,
            DomainError::SquadSize {
                expected: 15,
                actual: 14
            }
        );
    }

    #[test]
    fn rejects_quota_violation() {
        let mut players = legal_players();
        players[0].position = Position::Forward;
        let err = Squad::new(players, &OptimizationConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            DomainError::PositionQuota {
                position: Position::Goalkeeper,
                ..
            }
        ));
    }

    #[test]
    fn rejects_team_limit_violation() {
        let mut players = legal_players();
        for p in players.iter_mut().take(4) {
            p.team = TeamId::new(99);
        }
        let err = Squad::new(players, &OptimizationConfig::default()).unwrap_err();
        assert!(matches!(err, DomainError::TeamLimit { count: 4, limit: 3, .. }));
    }

    #[test]
    fn rejects_over_budget() {
        let config = OptimizationConfig::default().with_budget(dec!(70.0));
        let err = Squad::new(legal_players(), &config).unwrap_err();
        assert!(matches!(err, DomainError::OverBudget { .. }));
    }

    #[test]
    fn rejects_duplicates() {
        let mut players = legal_players();
        players[1].id = players[0].id;
        let err = Squad::new(players, &OptimizationConfig::default()).unwrap_err();
        assert!(matches!(err, DomainError::DuplicatePlayer { .. }));
    }
}
