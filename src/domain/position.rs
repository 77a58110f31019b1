//! Position groups and the fixed squad quotas.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of players in a squad.
pub const SQUAD_SIZE: usize = 15;

/// Number of players in a starting lineup.
pub const STARTING_XI_SIZE: usize = 11;

/// Position group of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    /// All position groups in squad order.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Map an FPL `element_type` code (1..=4) to a position.
    #[must_use]
    pub const fn from_element_type(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Goalkeeper),
            2 => Some(Self::Defender),
            3 => Some(Self::Midfielder),
            4 => Some(Self::Forward),
            _ => None,
        }
    }

    /// Required number of players of this position in a squad.
    #[must_use]
    pub const fn quota(self) -> usize {
        match self {
            Self::Goalkeeper => 2,
            Self::Defender => 5,
            Self::Midfielder => 5,
            Self::Forward => 3,
        }
    }

    /// Short code used in output records.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::Defender => "DEF",
            Self::Midfielder => "MID",
            Self::Forward => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotas_sum_to_squad_size() {
        let total: usize = Position::ALL.iter().map(|p| p.quota()).sum();
        assert_eq!(total, SQUAD_SIZE);
    }

    #[test]
    fn element_type_codes() {
        assert_eq!(Position::from_element_type(1), Some(Position::Goalkeeper));
        assert_eq!(Position::from_element_type(4), Some(Position::Forward));
        assert_eq!(Position::from_element_type(0), None);
        assert_eq!(Position::from_element_type(5), None);
    }

    #[test]
    fn serializes_as_short_code() {
        assert_eq!(serde_json::to_string(&Position::Midfielder).unwrap(), "\"MID\"");
    }
}
