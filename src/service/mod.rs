//! Optimization services built on the domain types and the solver port.
//!
//! - [`expected_points`] - pluggable scoring strategies
//! - [`squad`] - the squad integer program
//! - [`extract`] - solver values back to a squad
//! - [`lineup`] - starting XI and captain
//! - [`optimizer`] - the end-to-end pipeline

pub mod expected_points;
pub mod extract;
pub mod lineup;
pub mod optimizer;
pub mod squad;

pub use expected_points::{
    coerce_numeric, provider_by_name, provider_for, score_players, BlendProvider,
    DirectProvider, ExpectedPointsProvider,
};
pub use extract::{extract_squad, FEASIBILITY_TOLERANCE, SELECTION_THRESHOLD};
pub use lineup::{pick_captain, StartingXiSelector};
pub use optimizer::{OptimizationReport, Optimizer};
pub use squad::{SquadProgram, SquadSelection, SquadSelector};
