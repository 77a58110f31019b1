//! Domain validation errors for squad and lineup invariants.
//!
//! These errors are returned by validating constructors such as
//! [`Squad::new`](crate::domain::Squad::new) when a set of players does not
//! form a legal squad.
//!
//! # Examples
//!
//! ```
//! use fplopt::domain::error::DomainError;
//! use fplopt::domain::{OptimizationConfig, Squad};
//!
//! let result = Squad::new(vec![], &OptimizationConfig::default());
//! assert!(matches!(result, Err(DomainError::SquadSize { actual: 0, .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use super::{PlayerId, Position, TeamId};

/// Errors that occur when squad invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A squad must contain exactly the fixed number of players.
    #[error("squad must have {expected} players, got {actual}")]
    SquadSize {
        /// Required squad size.
        expected: usize,
        /// Number of players supplied.
        actual: usize,
    },

    /// Each position group must meet its quota exactly.
    #[error("squad must have {expected} {position} players, got {actual}")]
    PositionQuota {
        /// The position group in violation.
        position: Position,
        /// Required count.
        expected: usize,
        /// Actual count.
        actual: usize,
    },

    /// No team may contribute more than the configured maximum.
    #[error("team {team} has {count} players, limit is {limit}")]
    TeamLimit {
        /// The over-represented team.
        team: TeamId,
        /// Players from that team.
        count: usize,
        /// Configured limit.
        limit: u32,
    },

    /// Total squad cost must not exceed the budget.
    #[error("squad costs {cost}, budget is {budget}")]
    OverBudget {
        /// Total cost of the squad.
        cost: Decimal,
        /// Configured budget.
        budget: Decimal,
    },

    /// A player may appear in a squad at most once.
    #[error("player {player} appears more than once")]
    DuplicatePlayer {
        /// The repeated player.
        player: PlayerId,
    },
}
