//! Scripted [`Solver`] for exercising status handling without a MILP backend.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::port::solver::{IlpProblem, IlpSolution, SolutionStatus, SolveOptions, Solver};

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    /// Return this solution verbatim.
    Solution(IlpSolution),
    /// Set every variable to 1.0 and report `status`.
    SelectAll(SolutionStatus),
    /// Fail the invocation itself.
    Fail(String),
}

/// A solver that replays pre-loaded outcomes and records what it was asked.
///
/// Each call to `solve()` pops the next outcome; once the script is
/// exhausted it reports an `Error` status.
pub struct ScriptedSolver {
    outcomes: Mutex<VecDeque<ScriptedOutcome>>,
    calls: Arc<AtomicU32>,
    last_problem: Mutex<Option<IlpProblem>>,
}

impl ScriptedSolver {
    pub fn new(outcomes: Vec<ScriptedOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Arc::new(AtomicU32::new(0)),
            last_problem: Mutex::new(None),
        }
    }

    /// Reply once with `solution`.
    pub fn returning(solution: IlpSolution) -> Self {
        Self::new(vec![ScriptedOutcome::Solution(solution)])
    }

    /// Reply once with every variable set and the given status.
    pub fn select_all(status: SolutionStatus) -> Self {
        Self::new(vec![ScriptedOutcome::SelectAll(status)])
    }

    /// Fail the next invocation.
    pub fn failing(message: &str) -> Self {
        Self::new(vec![ScriptedOutcome::Fail(message.to_string())])
    }

    /// Number of `solve()` calls so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent problem passed to `solve()`.
    pub fn last_problem(&self) -> Option<IlpProblem> {
        self.last_problem
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Solver for ScriptedSolver {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn solve(&self, problem: &IlpProblem, options: &SolveOptions) -> Result<IlpSolution> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_problem.lock().unwrap_or_else(|e| e.into_inner()) = Some(problem.clone());

        if options.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let next = self
            .outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        match next {
            Some(ScriptedOutcome::Solution(solution)) => Ok(solution),
            Some(ScriptedOutcome::SelectAll(status)) => {
                let values = vec![1.0; problem.num_vars()];
                let objective = problem.evaluate_objective(&values);
                Ok(IlpSolution {
                    status,
                    values,
                    objective: Some(objective),
                    message: None,
                })
            }
            Some(ScriptedOutcome::Fail(message)) => Err(crate::error::SolverError::Backend {
                solver: "scripted",
                message,
            }
            .into()),
            None => Ok(IlpSolution::error("script exhausted")),
        }
    }
}
