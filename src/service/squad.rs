//! Squad selection as a binary integer program.
//!
//! # Formulation
//!
//! One binary variable `x_i` per candidate:
//!
//! ```text
//! maximize    sum(score_i * x_i)
//! subject to  sum(cost_i * x_i)        <= budget
//!             sum(x_i)                 == 15
//!             sum(x_i : i in group g)  == quota_g      for GK, DEF, MID, FWD
//!             sum(x_i : i in team t)   <= max_per_team for every team present
//!             x_i in {0, 1}
//! ```
//!
//! The program is solved through the [`Solver`] port, so any MILP backend
//! can be plugged in.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, info, warn};

use super::extract::extract_squad;
use crate::domain::{
    OptimizationConfig, Player, Position, SelectionStatus, Squad, TeamId, SQUAD_SIZE,
};
use crate::error::{ConfigError, DataError, Error, Result, SolverError};
use crate::port::solver::{
    Constraint, IlpProblem, LinearExpr, ObjectiveSense, SolutionStatus, SolveOptions, Solver,
    VarId,
};

/// Name of the budget constraint.
pub const BUDGET_CONSTRAINT: &str = "budget";

/// Name of the squad size constraint.
pub const SIZE_CONSTRAINT: &str = "squad_size";

/// An assembled squad program and the variable of each candidate.
#[derive(Debug, Clone)]
pub struct SquadProgram {
    pub problem: IlpProblem,
    /// `vars[i]` is the decision variable of the i-th candidate.
    pub vars: Vec<VarId>,
}

/// An accepted squad with how the solver terminated.
#[derive(Debug, Clone)]
pub struct SquadSelection {
    pub status: SelectionStatus,
    pub squad: Squad,
    /// Sum of expected points over the squad.
    pub objective: f64,
}

/// Builds and solves the squad program over a candidate pool.
pub struct SquadSelector<S> {
    solver: S,
}

impl<S: Solver> SquadSelector<S> {
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    /// The backing solver.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Assemble the binary program for `players` under `config`.
    pub fn build_program(players: &[Player], config: &OptimizationConfig) -> Result<SquadProgram> {
        if players.is_empty() {
            return Err(DataError::EmptyPool.into());
        }

        let budget = config.budget.to_f64().ok_or(ConfigError::InvalidValue {
            field: "budget",
            reason: format!("{} is not representable as f64", config.budget),
        })?;

        let mut problem = IlpProblem::new("squad_selection");
        let mut vars = Vec::with_capacity(players.len());
        let mut objective = LinearExpr::new();
        let mut cost = LinearExpr::new();
        let mut size = LinearExpr::new();
        let mut by_position: BTreeMap<Position, LinearExpr> = BTreeMap::new();
        let mut by_team: BTreeMap<TeamId, LinearExpr> = BTreeMap::new();
        let mut seen = HashSet::with_capacity(players.len());

        for player in players {
            if !seen.insert(player.id) {
                return Err(DataError::DuplicatePlayer {
                    player_id: player.id.get(),
                }
                .into());
            }
            let price = player.cost.to_f64().ok_or_else(|| DataError::InvalidValue {
                player_id: player.id.get(),
                field: "cost",
                reason: format!("{} is not representable as f64", player.cost),
            })?;

            let x = problem.add_binary_variable(format!("x_{}", player.id));
            objective.add_term(x, player.expected_points);
            cost.add_term(x, price);
            size.add_term(x, 1.0);
            by_position.entry(player.position).or_default().add_term(x, 1.0);
            by_team.entry(player.team).or_default().add_term(x, 1.0);
            vars.push(x);
        }

        problem.set_objective(ObjectiveSense::Maximize, objective);
        problem.add_constraint(Constraint::leq(BUDGET_CONSTRAINT, cost, budget));
        problem.add_constraint(Constraint::eq(SIZE_CONSTRAINT, size, SQUAD_SIZE as f64));

        for position in Position::ALL {
            let expr = by_position.remove(&position).unwrap_or_default();
            problem.add_constraint(Constraint::eq(
                format!("count_{position}"),
                expr,
                position.quota() as f64,
            ));
        }

        for (team, expr) in by_team {
            problem.add_constraint(Constraint::leq(
                format!("team_limit_{team}"),
                expr,
                f64::from(config.max_per_team),
            ));
        }

        debug!(
            variables = problem.num_vars(),
            constraints = problem.constraints().len(),
            "Built squad program"
        );

        Ok(SquadProgram { problem, vars })
    }

    /// Select the best legal squad from `players`.
    ///
    /// # Errors
    ///
    /// - [`Error::Infeasible`] when no legal squad exists
    /// - [`Error::Solver`] when the backend fails, reports an error or
    ///   unbounded status, or returns values that do not form a legal squad
    /// - [`Error::Data`] / [`Error::Config`] for unusable inputs
    ///
    /// A time-limited solve with a legal incumbent is returned with
    /// [`SelectionStatus::TimeLimit`]; accepting it is the caller's call.
    pub fn select(
        &self,
        players: &[Player],
        config: &OptimizationConfig,
        options: &SolveOptions,
    ) -> Result<SquadSelection> {
        config.validate()?;
        check_position_supply(players)?;

        let program = Self::build_program(players, config)?;
        let solution = self.solver.solve(&program.problem, options)?;

        info!(
            solver = self.solver.name(),
            status = %solution.status,
            objective = solution.objective,
            "Squad solve finished"
        );

        let status = match solution.status {
            SolutionStatus::Optimal => SelectionStatus::Optimal,
            SolutionStatus::TimeLimit if !solution.values.is_empty() => {
                warn!("Solver hit its time limit; squad may be suboptimal");
                SelectionStatus::TimeLimit
            }
            SolutionStatus::TimeLimit => {
                return Err(SolverError::NoSolution {
                    status: solution.status.to_string(),
                }
                .into())
            }
            SolutionStatus::Infeasible => {
                return Err(Error::Infeasible {
                    reason: format!(
                        "no squad satisfies budget {} with at most {} per team",
                        config.budget, config.max_per_team
                    ),
                })
            }
            SolutionStatus::Unbounded => return Err(SolverError::Unbounded.into()),
            SolutionStatus::Error => {
                return Err(SolverError::Backend {
                    solver: self.solver.name(),
                    message: solution
                        .message
                        .unwrap_or_else(|| "unspecified error".to_string()),
                }
                .into())
            }
        };

        let squad = extract_squad(players, &program, &solution, config)?;
        let objective = squad.total_expected_points();

        info!(
            status = ?status,
            objective,
            cost = %squad.total_cost(),
            "Selected squad"
        );

        Ok(SquadSelection {
            status,
            squad,
            objective,
        })
    }
}

/// Reject pools that cannot fill a position quota before invoking the solver.
fn check_position_supply(players: &[Player]) -> Result<()> {
    if players.is_empty() {
        return Err(DataError::EmptyPool.into());
    }
    for position in Position::ALL {
        let available = players.iter().filter(|p| p.position == position).count();
        if available < position.quota() {
            return Err(Error::Infeasible {
                reason: format!(
                    "only {available} {position} candidates for a quota of {}",
                    position.quota()
                ),
            });
        }
    }
    Ok(())
}
