//! Solver-agnostic domain types: players, squads, lineups and run settings.

pub mod error;
mod fixture;
mod formation;
mod id;
mod optimization;
mod player;
mod position;
mod report;
mod squad;

pub use fixture::Fixture;
pub use formation::{Formation, FormationUsed, OUTFIELD_PLAYERS};
pub use id::{PlayerId, TeamId};
pub use optimization::{ExpectedPointsModel, OptimizationConfig};
pub use player::{by_score_desc, Player, PlayerRecord};
pub use position::{Position, SQUAD_SIZE, STARTING_XI_SIZE};
pub use report::{
    squad_records, starting_xi_records, RunSummary, SelectionStatus, SquadRecord,
    StartingXiRecord, SQUAD_HEADERS, STARTING_XI_HEADERS,
};
pub use squad::{Squad, StartingXi};
