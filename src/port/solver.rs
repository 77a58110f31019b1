//! Solver port for integer linear programming.
//!
//! Defines the narrow model-building interface the squad selector depends
//! on, and the [`Solver`] trait implemented by MILP backends.
//!
//! # Overview
//!
//! - [`IlpProblem`]: Model builder (variables, constraints, objective)
//! - [`Solver`]: Backend interface, e.g. HiGHS
//! - [`SolveOptions`]: Time limit, deadline and cancellation
//! - [`IlpSolution`]: Status plus variable values

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::Result;

/// Handle to a decision variable inside one [`IlpProblem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    /// Position of the variable in the problem and in solution values.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<f64>,
    /// Upper bound (None = +infinity).
    pub upper: Option<f64>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(0.0),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Binary variable bounds [0, 1].
    #[must_use]
    pub const fn binary() -> Self {
        Self {
            lower: Some(0.0),
            upper: Some(1.0),
        }
    }

    /// Bounded variable [lower, upper].
    #[must_use]
    pub const fn bounded(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }
}

/// A decision variable definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub bounds: VariableBounds,
    pub integer: bool,
}

/// A sparse linear expression `sum(coef * x)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(VarId, f64)>,
}

impl LinearExpr {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_term(&mut self, var: VarId, coefficient: f64) {
        self.terms.push((var, coefficient));
    }

    #[must_use]
    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    /// Evaluate the expression at `values`. Missing values count as zero.
    #[must_use]
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|(var, coef)| coef * values.get(var.index()).copied().unwrap_or(0.0))
            .sum()
    }
}

impl FromIterator<(VarId, f64)> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = (VarId, f64)>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
    /// Equal (=).
    Equal,
}

/// A single named linear constraint: `expr {>=, <=, =} rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub expr: LinearExpr,
    pub sense: ConstraintSense,
    pub rhs: f64,
}

impl Constraint {
    /// Create a >= constraint.
    #[must_use]
    pub fn geq(name: impl Into<String>, expr: LinearExpr, rhs: f64) -> Self {
        Self::with_sense(name, expr, ConstraintSense::GreaterEqual, rhs)
    }

    /// Create a <= constraint.
    #[must_use]
    pub fn leq(name: impl Into<String>, expr: LinearExpr, rhs: f64) -> Self {
        Self::with_sense(name, expr, ConstraintSense::LessEqual, rhs)
    }

    /// Create an = constraint.
    #[must_use]
    pub fn eq(name: impl Into<String>, expr: LinearExpr, rhs: f64) -> Self {
        Self::with_sense(name, expr, ConstraintSense::Equal, rhs)
    }

    fn with_sense(name: impl Into<String>, expr: LinearExpr, sense: ConstraintSense, rhs: f64) -> Self {
        Self {
            name: name.into(),
            expr,
            sense,
            rhs,
        }
    }

    /// Whether `values` satisfy this constraint within `tolerance`.
    #[must_use]
    pub fn is_satisfied_by(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs = self.expr.evaluate(values);
        match self.sense {
            ConstraintSense::GreaterEqual => lhs >= self.rhs - tolerance,
            ConstraintSense::LessEqual => lhs <= self.rhs + tolerance,
            ConstraintSense::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectiveSense {
    #[default]
    Minimize,
    Maximize,
}

/// Objective function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Objective {
    pub sense: ObjectiveSense,
    pub expr: LinearExpr,
}

/// Integer linear programming problem under construction.
///
/// ```text
/// maximize / minimize   c^T * x
/// subject to            constraints
///                       bounds and integrality on x
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IlpProblem {
    name: String,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    objective: Objective,
}

impl IlpProblem {
    /// Create an empty problem.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a 0/1 decision variable.
    pub fn add_binary_variable(&mut self, name: impl Into<String>) -> VarId {
        self.add_variable(Variable {
            name: name.into(),
            bounds: VariableBounds::binary(),
            integer: true,
        })
    }

    /// Add an arbitrary variable.
    pub fn add_variable(&mut self, variable: Variable) -> VarId {
        self.variables.push(variable);
        VarId(self.variables.len() - 1)
    }

    /// Add a linear constraint.
    ///
    /// Terms must refer to variables of this problem.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        debug_assert!(constraint
            .expr
            .terms()
            .iter()
            .all(|(v, _)| v.index() < self.variables.len()));
        self.constraints.push(constraint);
    }

    /// Replace the objective.
    pub fn set_objective(&mut self, sense: ObjectiveSense, expr: LinearExpr) {
        self.objective = Objective { sense, expr };
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[must_use]
    pub fn constraint(&self, name: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Objective value at `values`.
    #[must_use]
    pub fn evaluate_objective(&self, values: &[f64]) -> f64 {
        self.objective.expr.evaluate(values)
    }

    /// Whether `values` satisfy every constraint and bound within `tolerance`.
    #[must_use]
    pub fn is_feasible(&self, values: &[f64], tolerance: f64) -> bool {
        values.len() == self.variables.len()
            && self.variables.iter().zip(values).all(|(var, &x)| {
                var.bounds.lower.map_or(true, |lb| x >= lb - tolerance)
                    && var.bounds.upper.map_or(true, |ub| x <= ub + tolerance)
            })
            && self
                .constraints
                .iter()
                .all(|c| c.is_satisfied_by(values, tolerance))
    }
}

/// Cooperative cancellation flag shared between a caller and a running
/// optimization.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Visible to every clone of this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Limits applied to one solve.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Maximum solve duration.
    pub time_limit: Option<Duration>,
    /// Absolute point in time by which the solve must finish.
    pub deadline: Option<Instant>,
    pub cancel: CancelToken,
}

impl SolveOptions {
    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// The tighter of the time limit and the time remaining until the
    /// deadline, measured from `now`.
    #[must_use]
    pub fn effective_time_limit(&self, now: Instant) -> Option<Duration> {
        let remaining = self
            .deadline
            .map(|d| d.saturating_duration_since(now));
        match (self.time_limit, remaining) {
            (Some(limit), Some(rem)) => Some(limit.min(rem)),
            (limit, rem) => limit.or(rem),
        }
    }
}

/// Termination status of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Solver found a provably optimal solution.
    Optimal,
    /// No feasible solution exists.
    Infeasible,
    /// Objective function is unbounded.
    Unbounded,
    /// Solver stopped at its time limit. Values hold the best incumbent,
    /// if any.
    TimeLimit,
    /// Solver encountered an internal error.
    Error,
}

impl std::fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Optimal => "optimal",
            Self::Infeasible => "infeasible",
            Self::Unbounded => "unbounded",
            Self::TimeLimit => "time_limit",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// Result of a solve.
#[derive(Debug, Clone, PartialEq)]
pub struct IlpSolution {
    pub status: SolutionStatus,
    /// One value per variable when `status` is `Optimal` or `TimeLimit`
    /// with an incumbent; empty otherwise.
    pub values: Vec<f64>,
    pub objective: Option<f64>,
    /// Backend message accompanying an `Error` status.
    pub message: Option<String>,
}

impl IlpSolution {
    #[must_use]
    pub fn optimal(values: Vec<f64>, objective: f64) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            values,
            objective: Some(objective),
            message: None,
        }
    }

    /// A time-limited result. `values` is empty when no incumbent was found.
    #[must_use]
    pub fn time_limit(values: Vec<f64>, objective: Option<f64>) -> Self {
        Self {
            status: SolutionStatus::TimeLimit,
            values,
            objective,
            message: None,
        }
    }

    #[must_use]
    pub fn infeasible() -> Self {
        Self::without_values(SolutionStatus::Infeasible, None)
    }

    #[must_use]
    pub fn unbounded() -> Self {
        Self::without_values(SolutionStatus::Unbounded, None)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::without_values(SolutionStatus::Error, Some(message.into()))
    }

    fn without_values(status: SolutionStatus, message: Option<String>) -> Self {
        Self {
            status,
            values: Vec::new(),
            objective: None,
            message,
        }
    }

    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Integer linear programming backend.
///
/// Implementations wrap a specific MILP engine (HiGHS, CBC, Gurobi, ...).
/// Callers depend only on this trait.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so independent optimization
/// requests can run concurrently.
///
/// # Contract
///
/// - Infeasible, unbounded and time-limited outcomes are reported through
///   [`IlpSolution::status`], not as `Err`.
/// - `Err` is reserved for failing to invoke the backend at all, and for
///   [`Error::Cancelled`](crate::error::Error::Cancelled).
/// - Honour `options.effective_time_limit` where the backend supports it.
pub trait Solver: Send + Sync {
    /// Solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Solve `problem` within the limits in `options`.
    fn solve(&self, problem: &IlpProblem, options: &SolveOptions) -> Result<IlpSolution>;
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, problem: &IlpProblem, options: &SolveOptions) -> Result<IlpSolution> {
        (**self).solve(problem, options)
    }
}

impl<S: Solver + ?Sized> Solver for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, problem: &IlpProblem, options: &SolveOptions) -> Result<IlpSolution> {
        (**self).solve(problem, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knapsack() -> (IlpProblem, VarId, VarId) {
        let mut problem = IlpProblem::new("test");
        let x = problem.add_binary_variable("x");
        let y = problem.add_binary_variable("y");
        problem.add_constraint(Constraint::leq(
            "cap",
            [(x, 1.0), (y, 1.0)].into_iter().collect(),
            1.0,
        ));
        problem.set_objective(
            ObjectiveSense::Maximize,
            [(x, 2.0), (y, 3.0)].into_iter().collect(),
        );
        (problem, x, y)
    }

    #[test]
    fn builder_assigns_sequential_ids() {
        let (problem, x, y) = knapsack();
        assert_eq!(x.index(), 0);
        assert_eq!(y.index(), 1);
        assert_eq!(problem.num_vars(), 2);
        assert!(problem.variables().iter().all(|v| v.integer));
        assert!(problem.constraint("cap").is_some());
    }

    #[test]
    fn evaluates_objective_and_feasibility() {
        let (problem, _, _) = knapsack();
        assert_eq!(problem.evaluate_objective(&[0.0, 1.0]), 3.0);
        assert!(problem.is_feasible(&[0.0, 1.0], 1e-9));
        assert!(!problem.is_feasible(&[1.0, 1.0], 1e-9));
        assert!(!problem.is_feasible(&[0.0, 2.0], 1e-9));
        assert!(!problem.is_feasible(&[1.0], 1e-9));
    }

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn effective_time_limit_takes_the_tighter_bound() {
        let now = Instant::now();
        let opts = SolveOptions::default()
            .with_time_limit(Some(Duration::from_secs(60)))
            .with_deadline(now + Duration::from_secs(5));
        assert_eq!(opts.effective_time_limit(now), Some(Duration::from_secs(5)));

        let opts = SolveOptions::default().with_time_limit(Some(Duration::from_secs(2)));
        assert_eq!(opts.effective_time_limit(now), Some(Duration::from_secs(2)));

        assert_eq!(SolveOptions::default().effective_time_limit(now), None);

        let opts = SolveOptions::default().with_deadline(now);
        assert_eq!(
            opts.effective_time_limit(now + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }
}
