//! Adapters: concrete implementations at the edges of the optimiser.
//!
//! - [`solver`] - MILP backends implementing [`crate::port::Solver`]
//! - [`fpl`] - loading candidates from FPL API dumps
//! - [`output`] - writing squad, lineup and summary files

pub mod fpl;
pub mod output;
pub mod solver;
