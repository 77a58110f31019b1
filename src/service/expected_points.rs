//! Expected points providers.
//!
//! A provider turns raw upstream player attributes into the single score
//! the squad selector maximises. Providers are selected by name:
//!
//! - **direct** - pass through the upstream `ep_next` projection
//! - **blend** - `0.6 * form + 0.4 * points_per_game`
//!
//! Raw fields are coerced with [`coerce_numeric`]: missing or non-numeric
//! values score 0.0, so scoring itself never fails.

use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{ExpectedPointsModel, Fixture, OptimizationConfig, Player, PlayerId, PlayerRecord};
use crate::error::{DataError, Result};

/// Weight of `form` in the blend model.
pub const BLEND_FORM_WEIGHT: f64 = 0.6;

/// Weight of `points_per_game` in the blend model.
pub const BLEND_PPG_WEIGHT: f64 = 0.4;

/// A scoring strategy.
///
/// `fixtures` and `horizon` are passed so horizon-aware models can be
/// added without changing callers; the built-in models ignore them.
pub trait ExpectedPointsProvider: Send + Sync {
    /// Unique identifier, as used in configuration.
    fn name(&self) -> &'static str;

    /// Score every player in `players`.
    fn compute(
        &self,
        players: &[PlayerRecord],
        fixtures: &[Fixture],
        horizon: u32,
        config: &OptimizationConfig,
    ) -> HashMap<PlayerId, f64>;
}

/// Passes through the upstream `ep_next` projection.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectProvider;

impl ExpectedPointsProvider for DirectProvider {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn compute(
        &self,
        players: &[PlayerRecord],
        _fixtures: &[Fixture],
        _horizon: u32,
        _config: &OptimizationConfig,
    ) -> HashMap<PlayerId, f64> {
        players
            .iter()
            .map(|p| (p.id, coerce_numeric(p.ep_next.as_ref())))
            .collect()
    }
}

/// Weighted blend of recent form and season points per game.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlendProvider;

impl ExpectedPointsProvider for BlendProvider {
    fn name(&self) -> &'static str {
        "blend"
    }

    fn compute(
        &self,
        players: &[PlayerRecord],
        _fixtures: &[Fixture],
        _horizon: u32,
        _config: &OptimizationConfig,
    ) -> HashMap<PlayerId, f64> {
        players
            .iter()
            .map(|p| {
                let form = coerce_numeric(p.form.as_ref());
                let ppg = coerce_numeric(p.points_per_game.as_ref());
                (p.id, BLEND_FORM_WEIGHT * form + BLEND_PPG_WEIGHT * ppg)
            })
            .collect()
    }
}

/// Coerce a loosely typed upstream value to a finite number.
///
/// Numbers pass through, numeric strings are parsed, everything else
/// (including `null`, NaN and infinities) becomes 0.0.
#[must_use]
pub fn coerce_numeric(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Provider implementing `model`.
#[must_use]
pub fn provider_for(model: ExpectedPointsModel) -> Box<dyn ExpectedPointsProvider> {
    match model {
        ExpectedPointsModel::Direct => Box::new(DirectProvider),
        ExpectedPointsModel::Blend => Box::new(BlendProvider),
    }
}

/// Provider registered under `name`.
///
/// Fails with [`ConfigError::UnknownModel`](crate::error::ConfigError::UnknownModel)
/// for unregistered names.
pub fn provider_by_name(name: &str) -> Result<Box<dyn ExpectedPointsProvider>> {
    let model: ExpectedPointsModel = name.parse()?;
    Ok(provider_for(model))
}

/// Score `records` with the configured model, producing players.
///
/// Fails on an empty pool or duplicate ids.
pub fn score_players(
    records: &[PlayerRecord],
    fixtures: &[Fixture],
    config: &OptimizationConfig,
) -> Result<Vec<Player>> {
    if records.is_empty() {
        return Err(DataError::EmptyPool.into());
    }

    let mut seen = HashSet::with_capacity(records.len());
    if let Some(dup) = records.iter().find(|r| !seen.insert(r.id)) {
        return Err(DataError::DuplicatePlayer {
            player_id: dup.id.get(),
        }
        .into());
    }

    let provider = provider_for(config.expected_points_model);
    let scores = provider.compute(records, fixtures, config.horizon, config);

    let players: Vec<Player> = records
        .iter()
        .map(|r| r.to_player(scores.get(&r.id).copied().unwrap_or(0.0)))
        .collect();

    let scored = players.iter().filter(|p| p.expected_points != 0.0).count();
    info!(
        model = provider.name(),
        players = players.len(),
        scored,
        "Computed expected points"
    );
    debug!(fixtures = fixtures.len(), horizon = config.horizon, "Fixtures unused by model");

    Ok(players)
}
