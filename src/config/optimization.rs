//! The `[optimization]` table.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{ExpectedPointsModel, Formation, OptimizationConfig};
use crate::error::ConfigError;

/// Optimization settings as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizationSettings {
    /// Squad budget in currency units (e.g. 100.0).
    #[serde(default = "default_budget")]
    pub budget: Decimal,
    /// Maximum players from a single team.
    #[serde(default = "default_max_per_team")]
    pub max_per_team: u32,
    /// Expected points model name (`direct` or `blend`).
    #[serde(default = "default_model")]
    pub expected_points_model: String,
    /// Candidate formations as `[def, mid, fwd]`, tried in order.
    #[serde(default = "default_formations")]
    pub formations: Vec<[u8; 3]>,
    /// Gameweeks to look ahead.
    #[serde(default = "default_horizon")]
    pub horizon: u32,
    /// Solver time limit in seconds. 0 disables the limit.
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: u64,
    /// Accept a squad from a solve that stopped at its time limit.
    #[serde(default = "default_accept_time_limit")]
    pub accept_time_limit: bool,
}

fn default_budget() -> Decimal {
    Decimal::from(100)
}

const fn default_max_per_team() -> u32 {
    3
}

fn default_model() -> String {
    ExpectedPointsModel::Direct.as_str().to_string()
}

fn default_formations() -> Vec<[u8; 3]> {
    Formation::DEFAULTS.iter().map(|&f| f.into()).collect()
}

const fn default_horizon() -> u32 {
    1
}

const fn default_time_limit_secs() -> u64 {
    60
}

const fn default_accept_time_limit() -> bool {
    true
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            budget: default_budget(),
            max_per_team: default_max_per_team(),
            expected_points_model: default_model(),
            formations: default_formations(),
            horizon: default_horizon(),
            time_limit_secs: default_time_limit_secs(),
            accept_time_limit: default_accept_time_limit(),
        }
    }
}

impl OptimizationSettings {
    /// Parse and validate into the domain configuration.
    pub fn to_config(&self) -> Result<OptimizationConfig, ConfigError> {
        let formations = self
            .formations
            .iter()
            .map(|&f| Formation::try_from(f))
            .collect::<Result<Vec<_>, _>>()?;

        let config = OptimizationConfig {
            budget: self.budget,
            max_per_team: self.max_per_team,
            expected_points_model: self.expected_points_model.parse()?,
            formations,
            horizon: self.horizon,
            time_limit: (self.time_limit_secs > 0)
                .then(|| Duration::from_secs(self.time_limit_secs)),
            accept_time_limit: self.accept_time_limit,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_convert_to_default_config() {
        let config = OptimizationSettings::default().to_config().unwrap();
        assert_eq!(config, OptimizationConfig::default());
    }

    #[test]
    fn zero_time_limit_disables_limit() {
        let settings = OptimizationSettings {
            time_limit_secs: 0,
            ..Default::default()
        };
        assert_eq!(settings.to_config().unwrap().time_limit, None);
    }

    #[test]
    fn invalid_formation_is_rejected() {
        let settings = OptimizationSettings {
            formations: vec![[3, 4, 3], [5, 5, 1]],
            ..Default::default()
        };
        assert!(matches!(
            settings.to_config(),
            Err(ConfigError::InvalidValue {
                field: "formations",
                ..
            })
        ));
    }

    #[test]
    fn unknown_model_is_rejected() {
        let settings = OptimizationSettings {
            expected_points_model: "neural".into(),
            ..Default::default()
        };
        assert!(matches!(
            settings.to_config(),
            Err(ConfigError::UnknownModel { .. })
        ));
    }

    #[test]
    fn non_positive_budget_is_rejected() {
        let settings = OptimizationSettings {
            budget: dec!(-1),
            ..Default::default()
        };
        assert!(settings.to_config().is_err());
    }
}
