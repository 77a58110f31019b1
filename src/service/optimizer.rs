//! End-to-end optimization run: score, select, lineup.

use std::time::Instant;

use tracing::{info, info_span, warn};

use super::expected_points::score_players;
use super::lineup::StartingXiSelector;
use super::squad::SquadSelector;
use crate::domain::{
    ExpectedPointsModel, Fixture, OptimizationConfig, Player, PlayerRecord, RunSummary,
    SelectionStatus, Squad, StartingXi,
};
use crate::error::{Error, Result};
use crate::port::solver::{CancelToken, SolveOptions, Solver};

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct OptimizationReport {
    pub squad: Squad,
    pub starting_xi: StartingXi,
    pub status: SelectionStatus,
    /// Sum of expected points over the squad.
    pub objective: f64,
    pub model: ExpectedPointsModel,
}

impl OptimizationReport {
    /// Run-level summary for output writers.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            formation_used: self.starting_xi.formation(),
            total_expected_points_xi: self.starting_xi.total_expected_points(),
            captain_name: self.starting_xi.captain().map(|p| p.name.clone()),
            expected_points_model_used: self.model,
            solver_status: self.status,
            objective: self.objective,
        }
    }
}

/// Runs the full pipeline against one solver backend.
///
/// Each call works on its own inputs, so one `Optimizer` may serve
/// concurrent requests if the solver allows it.
pub struct Optimizer<S> {
    selector: SquadSelector<S>,
}

impl<S: Solver> Optimizer<S> {
    pub fn new(solver: S) -> Self {
        Self {
            selector: SquadSelector::new(solver),
        }
    }

    /// Score `records`, then select a squad and lineup.
    pub fn run(
        &self,
        records: &[PlayerRecord],
        fixtures: &[Fixture],
        config: &OptimizationConfig,
        cancel: &CancelToken,
    ) -> Result<OptimizationReport> {
        config.validate()?;
        let players = score_players(records, fixtures, config)?;
        self.run_scored(&players, config, cancel)
    }

    /// Select a squad and lineup from already scored players.
    pub fn run_scored(
        &self,
        players: &[Player],
        config: &OptimizationConfig,
        cancel: &CancelToken,
    ) -> Result<OptimizationReport> {
        let span = info_span!("optimize", model = %config.expected_points_model);
        let _guard = span.enter();
        let started = Instant::now();

        check_cancelled(cancel)?;
        let options = SolveOptions::default()
            .with_time_limit(config.time_limit)
            .with_cancel(cancel.clone());
        let selection = self.selector.select(players, config, &options)?;

        if selection.status == SelectionStatus::TimeLimit {
            if !config.accept_time_limit {
                return Err(Error::TimeLimitRejected {
                    objective: selection.objective,
                });
            }
            warn!(
                objective = selection.objective,
                "Accepting time-limited squad"
            );
        }

        check_cancelled(cancel)?;
        let starting_xi = StartingXiSelector::from_config(config).select_from_squad(&selection.squad);

        info!(
            formation = %starting_xi.formation(),
            xi_points = starting_xi.total_expected_points(),
            captain = starting_xi.captain().map(|p| p.name.as_str()).unwrap_or("-"),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Optimization complete"
        );

        Ok(OptimizationReport {
            squad: selection.squad,
            starting_xi,
            status: selection.status,
            objective: selection.objective,
            model: config.expected_points_model,
        })
    }
}

fn check_cancelled(cancel: &CancelToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    Ok(())
}
