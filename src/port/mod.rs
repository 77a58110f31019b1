//! Ports: traits the optimization core depends on.
//!
//! Concrete implementations live in [`crate::adapter`].

pub mod solver;

pub use solver::{
    CancelToken, Constraint, ConstraintSense, IlpProblem, IlpSolution, LinearExpr, Objective,
    ObjectiveSense, SolutionStatus, SolveOptions, Solver, VarId, Variable, VariableBounds,
};
