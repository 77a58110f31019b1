//! Player snapshots, before and after scoring.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PlayerId, Position, TeamId};

/// An unscored candidate as supplied by the upstream data source.
///
/// The scoring fields stay loosely typed because the FPL API encodes them
/// as strings; expected points providers coerce them to numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub team: TeamId,
    #[serde(default)]
    pub team_short_name: String,
    pub position: Position,
    /// Price in currency units (FPL `now_cost` divided by ten).
    pub cost: Decimal,
    #[serde(default)]
    pub ep_next: Option<Value>,
    #[serde(default)]
    pub form: Option<Value>,
    #[serde(default)]
    pub points_per_game: Option<Value>,
}

impl PlayerRecord {
    /// Create a record with no scoring fields set.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        team: TeamId,
        position: Position,
        cost: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            team,
            team_short_name: String::new(),
            position,
            cost,
            ep_next: None,
            form: None,
            points_per_game: None,
        }
    }

    /// Attach a score, producing an immutable [`Player`].
    #[must_use]
    pub fn to_player(&self, expected_points: f64) -> Player {
        Player {
            id: self.id,
            name: self.name.clone(),
            team: self.team,
            team_short_name: self.team_short_name.clone(),
            position: self.position,
            cost: self.cost,
            expected_points,
        }
    }
}

/// A scored player, immutable for the duration of one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: TeamId,
    pub team_short_name: String,
    pub position: Position,
    pub cost: Decimal,
    /// Objective coefficient; may be negative.
    pub expected_points: f64,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        team: TeamId,
        position: Position,
        cost: Decimal,
        expected_points: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            team,
            team_short_name: String::new(),
            position,
            cost,
            expected_points,
        }
    }

    /// Set the team's short display name.
    #[must_use]
    pub fn with_team_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.team_short_name = short_name.into();
        self
    }
}

/// Ordering used wherever players are ranked: score descending, then id
/// ascending so equal scores resolve deterministically.
pub fn by_score_desc(a: &Player, b: &Player) -> std::cmp::Ordering {
    b.expected_points
        .total_cmp(&a.expected_points)
        .then_with(|| a.id.cmp(&b.id))
}
