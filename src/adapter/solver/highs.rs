//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic Rust usage.

use std::time::{Duration, Instant};

use good_lp::solvers::highs::highs;
use good_lp::{
    constraint, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolutionStatus as LpStatus, SolverModel,
};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::port::solver::{
    ConstraintSense, IlpProblem, IlpSolution, LinearExpr, ObjectiveSense, SolveOptions, Solver,
};

/// Error tag good_lp uses when HiGHS stops without a primal feasible point.
const NO_SOLUTION_FOUND: &str = "NoSolutionFound";

/// HiGHS-based ILP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver;

impl HiGHSSolver {
    /// Create a new HiGHS solver instance.
    pub fn new() -> Self {
        Self
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve(&self, problem: &IlpProblem, options: &SolveOptions) -> Result<IlpSolution> {
        if options.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let time_limit = options.effective_time_limit(Instant::now());
        if time_limit.is_some_and(|t| t.is_zero()) {
            warn!(problem = problem.name(), "Deadline passed before solve started");
            return Ok(IlpSolution::time_limit(vec![], None));
        }

        solve_with_good_lp(problem, time_limit)
    }
}

fn to_expression(expr: &LinearExpr, vars: &[good_lp::Variable]) -> Expression {
    expr.terms()
        .iter()
        .map(|(v, coef)| *coef * vars[v.index()])
        .sum()
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(problem: &IlpProblem, time_limit: Option<Duration>) -> Result<IlpSolution> {
    let n = problem.num_vars();

    // Handle empty problem
    if n == 0 {
        return Ok(IlpSolution::optimal(vec![], 0.0));
    }

    // Create variables
    let mut vars = ProblemVariables::new();
    let mut var_list = Vec::with_capacity(n);

    for def in problem.variables() {
        let mut v = variable().name(def.name.clone());

        // Apply bounds
        if let Some(lb) = def.bounds.lower {
            v = v.min(lb);
        }
        if let Some(ub) = def.bounds.upper {
            v = v.max(ub);
        }

        if def.integer {
            v = v.integer();
        }

        var_list.push(vars.add(v));
    }

    let objective = to_expression(&problem.objective().expr, &var_list);
    let unsolved = match problem.objective().sense {
        ObjectiveSense::Maximize => vars.maximise(&objective),
        ObjectiveSense::Minimize => vars.minimise(&objective),
    };

    let mut model = unsolved.using(highs);
    if let Some(limit) = time_limit {
        model = model.set_time_limit(limit.as_secs_f64());
    }

    for constr in problem.constraints() {
        let lhs = to_expression(&constr.expr, &var_list);
        let rhs = constr.rhs;

        match constr.sense {
            ConstraintSense::GreaterEqual => {
                model = model.with(constraint!(lhs >= rhs));
            }
            ConstraintSense::LessEqual => {
                model = model.with(constraint!(lhs <= rhs));
            }
            ConstraintSense::Equal => {
                model = model.with(constraint!(lhs == rhs));
            }
        }
    }

    debug!(
        problem = problem.name(),
        variables = n,
        constraints = problem.constraints().len(),
        time_limit_secs = time_limit.map(|t| t.as_secs_f64()),
        "Invoking HiGHS"
    );

    match model.solve() {
        Ok(solution) => {
            let values: Vec<f64> = var_list.iter().map(|v| solution.value(*v)).collect();
            let objective = problem.evaluate_objective(&values);

            match solution.status() {
                LpStatus::TimeLimit => {
                    debug!(objective, "HiGHS stopped at a limit with an incumbent");
                    Ok(IlpSolution::time_limit(values, Some(objective)))
                }
                // HiGHS reports optimality within its default relative MIP gap;
                // good_lp labels a nonzero residual gap separately.
                LpStatus::GapLimit | LpStatus::Optimal => {
                    Ok(IlpSolution::optimal(values, objective))
                }
            }
        }
        Err(ResolutionError::Infeasible) => Ok(IlpSolution::infeasible()),
        Err(ResolutionError::Unbounded) => Ok(IlpSolution::unbounded()),
        Err(ResolutionError::Other(NO_SOLUTION_FOUND)) if time_limit.is_some() => {
            warn!(problem = problem.name(), "HiGHS hit its time limit without an incumbent");
            Ok(IlpSolution::time_limit(vec![], None))
        }
        Err(other) => Ok(IlpSolution::error(other.to_string())),
    }
}
