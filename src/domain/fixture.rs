use serde::{Deserialize, Serialize};

use super::TeamId;

/// A scheduled match, as listed in FPL `fixtures.json`.
///
/// Carried through scoring so horizon-aware models can use it; the current
/// models ignore fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    /// Gameweek number; `None` for unscheduled fixtures.
    #[serde(default)]
    pub event: Option<u32>,
    pub team_h: TeamId,
    pub team_a: TeamId,
    #[serde(default)]
    pub team_h_difficulty: Option<u8>,
    #[serde(default)]
    pub team_a_difficulty: Option<u8>,
    #[serde(default)]
    pub finished: bool,
}
