//! fplopt - Fantasy football squad and starting XI optimisation.
//!
//! This crate picks a budget-constrained 15-player squad by integer
//! programming, then a starting XI and captain from that squad.
//!
//! # Architecture
//!
//! - **`service::expected_points`** - Pluggable scoring strategies
//!   - `DirectProvider` - upstream `ep_next` projection
//!   - `BlendProvider` - `0.6 * form + 0.4 * points_per_game`
//!
//! - **`service::squad`** - Binary program over the candidate pool
//!   (budget, position quotas, per-team limit)
//!
//! - **`service::lineup`** - Greedy starting XI over candidate formations
//!
//! - **`port::solver`** - ILP model-building interface and `Solver` trait
//!   - `HiGHSSolver` - Open-source HiGHS via good_lp
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Players, squads, formations and run settings
//! - [`error`] - Error types for the crate
//! - [`port`] - Solver interface the core depends on
//! - [`service`] - Scoring, squad selection and lineup selection
//! - [`adapter`] - HiGHS backend, FPL data loading, output files
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use fplopt::adapter::solver::HiGHSSolver;
//! use fplopt::domain::OptimizationConfig;
//! use fplopt::port::CancelToken;
//! use fplopt::service::Optimizer;
//!
//! # fn run(records: Vec<fplopt::domain::PlayerRecord>) -> fplopt::error::Result<()> {
//! let optimizer = Optimizer::new(HiGHSSolver::new());
//! let report = optimizer.run(&records, &[], &OptimizationConfig::default(), &CancelToken::new())?;
//! println!("captain: {:?}", report.starting_xi.captain().map(|p| &p.name));
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod service;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
