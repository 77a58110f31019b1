//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`solver`] - [`ScriptedSolver`](solver::ScriptedSolver), a
//!   [`Solver`](crate::port::Solver) that replays canned statuses.
//! - [`domain`] - Builders for players and candidate pools.

pub mod domain;
pub mod solver;
