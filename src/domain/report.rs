//! Flat records handed to output writers.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{ExpectedPointsModel, FormationUsed, Player, Position, Squad, StartingXi};

/// Termination status of an accepted squad selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    /// The solver proved optimality.
    Optimal,
    /// The solver stopped at its time limit; the squad is legal but may be
    /// suboptimal.
    TimeLimit,
}

/// Column names of `squad.csv`, in [`SquadRecord`] field order.
pub const SQUAD_HEADERS: [&str; 5] = [
    "name",
    "team_short_name",
    "position_group",
    "cost",
    "expected_points",
];

/// Column names of `starting_xi.csv`, in [`StartingXiRecord`] field order.
pub const STARTING_XI_HEADERS: [&str; 6] = [
    "name",
    "team_short_name",
    "position_group",
    "cost",
    "expected_points",
    "is_captain",
];

/// One row of `squad.csv`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquadRecord {
    pub name: String,
    pub team_short_name: String,
    pub position_group: Position,
    pub cost: Decimal,
    pub expected_points: f64,
}

impl From<&Player> for SquadRecord {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name.clone(),
            team_short_name: p.team_short_name.clone(),
            position_group: p.position,
            cost: p.cost,
            expected_points: p.expected_points,
        }
    }
}

/// One row of `starting_xi.csv`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartingXiRecord {
    pub name: String,
    pub team_short_name: String,
    pub position_group: Position,
    pub cost: Decimal,
    pub expected_points: f64,
    pub is_captain: bool,
}

/// Run-level summary written to `summary.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub formation_used: FormationUsed,
    pub total_expected_points_xi: f64,
    pub captain_name: Option<String>,
    pub expected_points_model_used: ExpectedPointsModel,
    pub solver_status: SelectionStatus,
    /// Sum of expected points over the whole squad.
    pub objective: f64,
}

/// Squad rows in output order.
#[must_use]
pub fn squad_records(squad: &Squad) -> Vec<SquadRecord> {
    squad.players().iter().map(SquadRecord::from).collect()
}

/// Lineup rows in output order, with the captain flagged.
#[must_use]
pub fn starting_xi_records(xi: &StartingXi) -> Vec<StartingXiRecord> {
    xi.players()
        .iter()
        .map(|p| StartingXiRecord {
            name: p.name.clone(),
            team_short_name: p.team_short_name.clone(),
            position_group: p.position,
            cost: p.cost,
            expected_points: p.expected_points,
            is_captain: xi.is_captain(p.id),
        })
        .collect()
}
