//! Per-run optimization settings.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Serializer};

use super::Formation;
use crate::error::ConfigError;

/// Named expected points scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpectedPointsModel {
    /// Pass through the upstream `ep_next` projection.
    #[default]
    Direct,
    /// Weighted blend of `form` and `points_per_game`.
    Blend,
}

impl ExpectedPointsModel {
    pub const ALL: [ExpectedPointsModel; 2] = [Self::Direct, Self::Blend];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Blend => "blend",
        }
    }

    /// Legacy name accepted for compatibility with older configs.
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::Direct => "fpl_ep_next",
            Self::Blend => "form_ppg_blend",
        }
    }
}

impl FromStr for ExpectedPointsModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| name.eq_ignore_ascii_case(m.as_str()) || name.eq_ignore_ascii_case(m.alias()))
            .ok_or_else(|| ConfigError::UnknownModel { name: s.to_string() })
    }
}

impl fmt::Display for ExpectedPointsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ExpectedPointsModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Constraints and knobs for one optimization run.
///
/// Position quotas (2/5/5/3) and the squad size are fixed and live on
/// [`Position`](super::Position).
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationConfig {
    /// Maximum total squad cost.
    pub budget: Decimal,
    /// Maximum squad players from any one team.
    pub max_per_team: u32,
    pub expected_points_model: ExpectedPointsModel,
    /// Candidate lineup shapes, tried in order.
    pub formations: Vec<Formation>,
    /// Gameweeks to look ahead. Accepted but unused by the current models.
    pub horizon: u32,
    /// Wall-clock cap on the solve. `None` lets the solver run to completion.
    pub time_limit: Option<Duration>,
    /// Whether a solve that stopped at its time limit is accepted.
    pub accept_time_limit: bool,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            budget: dec!(100.0),
            max_per_team: 3,
            expected_points_model: ExpectedPointsModel::default(),
            formations: Formation::DEFAULTS.to_vec(),
            horizon: 1,
            time_limit: Some(Duration::from_secs(60)),
            accept_time_limit: true,
        }
    }
}

impl OptimizationConfig {
    #[must_use]
    pub fn with_budget(mut self, budget: Decimal) -> Self {
        self.budget = budget;
        self
    }

    #[must_use]
    pub fn with_max_per_team(mut self, max_per_team: u32) -> Self {
        self.max_per_team = max_per_team;
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: ExpectedPointsModel) -> Self {
        self.expected_points_model = model;
        self
    }

    #[must_use]
    pub fn with_formations(mut self, formations: Vec<Formation>) -> Self {
        self.formations = formations;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Check the settings that cannot be enforced by construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.budget <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "budget",
                reason: format!("must be positive, got {}", self.budget),
            });
        }
        if self.max_per_team == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_per_team",
                reason: "must be at least 1".into(),
            });
        }
        if self.formations.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "formations",
                reason: "at least one formation is required".into(),
            });
        }
        if self.time_limit.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidValue {
                field: "time_limit",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
