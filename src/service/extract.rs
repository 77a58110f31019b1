//! Turning solver output back into a concrete squad.

use super::squad::SquadProgram;
use crate::domain::{OptimizationConfig, Player, Squad};
use crate::error::{Result, SolverError};
use crate::port::solver::IlpSolution;

/// A variable counts as selected when its value exceeds this threshold.
///
/// Solvers may return near-binary floats such as `0.9999999`.
pub const SELECTION_THRESHOLD: f64 = 0.5;

/// Slack allowed when re-checking the rounded selection against the program.
pub const FEASIBILITY_TOLERANCE: f64 = 1e-6;

/// Build the squad selected by `solution`.
///
/// `program.vars[i]` is the decision variable of `players[i]`. Values are
/// rounded at [`SELECTION_THRESHOLD`], then the rounded selection is checked
/// against every constraint of the program; a violation is reported as
/// [`SolverError::ConstraintViolated`]. The selected players are finally
/// validated as a squad under `config`, and a failure there is
/// [`SolverError::InconsistentSolution`].
pub fn extract_squad(
    players: &[Player],
    program: &SquadProgram,
    solution: &IlpSolution,
    config: &OptimizationConfig,
) -> Result<Squad> {
    let expected = program.problem.num_vars();
    if solution.values.len() < expected {
        return Err(SolverError::ValueCountMismatch {
            expected,
            actual: solution.values.len(),
        }
        .into());
    }

    let rounded: Vec<f64> = solution.values[..expected]
        .iter()
        .map(|&v| if v > SELECTION_THRESHOLD { 1.0 } else { 0.0 })
        .collect();

    if !program.problem.is_feasible(&rounded, FEASIBILITY_TOLERANCE) {
        let constraint = program
            .problem
            .constraints()
            .iter()
            .find(|c| !c.is_satisfied_by(&rounded, FEASIBILITY_TOLERANCE))
            .map_or_else(|| "variable bounds".to_string(), |c| c.name.clone());
        return Err(SolverError::ConstraintViolated { constraint }.into());
    }

    let selected: Vec<Player> = players
        .iter()
        .zip(&program.vars)
        .filter(|(_, var)| rounded[var.index()] > SELECTION_THRESHOLD)
        .map(|(player, _)| player.clone())
        .collect();

    Squad::new(selected, config).map_err(|e| SolverError::InconsistentSolution(e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::{PlayerId, Position};
    use crate::error::Error;
    use crate::service::squad::{SquadSelector, SIZE_CONSTRAINT};
    use crate::testkit::domain::{minimal_pool, player};
    use crate::testkit::solver::ScriptedSolver;
    use rust_decimal_macros::dec;

    fn program_for(players: &[Player], config: &OptimizationConfig) -> SquadProgram {
        SquadSelector::<ScriptedSolver>::build_program(players, config).unwrap()
    }

    #[test]
    fn near_binary_values_are_rounded() {
        let mut players = minimal_pool();
        players.push(player(99, Position::Forward, 9, dec!(4.0), 0.1));
        let config = OptimizationConfig::default().with_max_per_team(15);
        let program = program_for(&players, &config);
        let mut values = vec![0.999_999_9; 15];
        values.push(1e-7);

        let squad = extract_squad(
            &players,
            &program,
            &IlpSolution::optimal(values, 63.5),
            &config,
        )
        .unwrap();

        assert_eq!(squad.len(), 15);
        assert!(!squad.contains(PlayerId::new(99)));
    }

    #[test]
    fn selection_breaking_a_program_constraint_is_named() {
        let players = minimal_pool();
        let config = OptimizationConfig::default().with_max_per_team(15);
        let program = program_for(&players, &config);
        let mut values = vec![1.0; 15];
        values[0] = 0.0;

        let err = extract_squad(
            &players,
            &program,
            &IlpSolution::optimal(values, 60.5),
            &config,
        )
        .unwrap_err();

        match err {
            Error::Solver(SolverError::ConstraintViolated { constraint }) => {
                assert_eq!(constraint, SIZE_CONSTRAINT);
            }
            other => panic!("expected constraint violation, got {other:?}"),
        }
    }

    #[test]
    fn feasible_selection_still_checked_against_config() {
        let players = minimal_pool();
        let program = program_for(
            &players,
            &OptimizationConfig::default().with_max_per_team(15),
        );
        let stricter = OptimizationConfig::default()
            .with_max_per_team(15)
            .with_budget(dec!(70.0));

        let err = extract_squad(
            &players,
            &program,
            &IlpSolution::optimal(vec![1.0; 15], 63.5),
            &stricter,
        )
        .unwrap_err();

        // Squad invariant failures reach callers only through the solver layer.
        match err {
            Error::Solver(SolverError::InconsistentSolution(DomainError::OverBudget {
                budget,
                ..
            })) => assert_eq!(budget, dec!(70.0)),
            other => panic!("expected inconsistent solution, got {other:?}"),
        }
    }

    #[test]
    fn short_value_vector_is_rejected() {
        let players = minimal_pool();
        let program = program_for(&players, &OptimizationConfig::default());

        let err = extract_squad(
            &players,
            &program,
            &IlpSolution::optimal(vec![1.0; 3], 0.0),
            &OptimizationConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::Solver(SolverError::ValueCountMismatch {
                expected: 15,
                actual: 3
            })
        ));
    }
}
