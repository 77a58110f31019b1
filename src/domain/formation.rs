//! Starting lineup shapes.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ConfigError;

/// Number of outfield players in a starting lineup.
pub const OUTFIELD_PLAYERS: u8 = 10;

/// A `(defenders, midfielders, forwards)` lineup shape.
///
/// Serialized as a three-element array, e.g. `[3, 4, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 3]", into = "[u8; 3]")]
pub struct Formation {
    def: u8,
    mid: u8,
    fwd: u8,
}

impl Formation {
    /// Formations tried when none are configured, in priority order.
    pub const DEFAULTS: [Formation; 3] = [
        Formation::of(3, 4, 3),
        Formation::of(3, 5, 2),
        Formation::of(4, 4, 2),
    ];

    /// Create a formation, rejecting shapes that do not fill ten outfield slots.
    pub fn new(def: u8, mid: u8, fwd: u8) -> Result<Self, ConfigError> {
        let total = u16::from(def) + u16::from(mid) + u16::from(fwd);
        if total != u16::from(OUTFIELD_PLAYERS) {
            return Err(ConfigError::InvalidValue {
                field: "formations",
                reason: format!(
                    "{def}-{mid}-{fwd} has {total} outfield players, expected {OUTFIELD_PLAYERS}"
                ),
            });
        }
        Ok(Self { def, mid, fwd })
    }

    const fn of(def: u8, mid: u8, fwd: u8) -> Self {
        Self { def, mid, fwd }
    }

    #[must_use]
    pub const fn defenders(self) -> u8 {
        self.def
    }

    #[must_use]
    pub const fn midfielders(self) -> u8 {
        self.mid
    }

    #[must_use]
    pub const fn forwards(self) -> u8 {
        self.fwd
    }
}

impl TryFrom<[u8; 3]> for Formation {
    type Error = ConfigError;

    fn try_from([def, mid, fwd]: [u8; 3]) -> Result<Self, Self::Error> {
        Self::new(def, mid, fwd)
    }
}

impl From<Formation> for [u8; 3] {
    fn from(f: Formation) -> Self {
        [f.def, f.mid, f.fwd]
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.def, self.mid, self.fwd)
    }
}

/// The shape a starting lineup was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormationUsed {
    Formation(Formation),
    /// No candidate formation could be filled; the lineup is the top eleven
    /// players by score.
    Unknown,
}

impl FormationUsed {
    #[must_use]
    pub const fn formation(self) -> Option<Formation> {
        match self {
            Self::Formation(f) => Some(f),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl Serialize for FormationUsed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Formation(f) => f.serialize(serializer),
            Self::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

impl fmt::Display for FormationUsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formation(formation) => formation.fmt(f),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_shapes_not_summing_to_ten() {
        assert!(Formation::new(4, 4, 2).is_ok());
        assert!(Formation::new(4, 4, 3).is_err());
        assert!(Formation::new(0, 0, 0).is_err());
    }

    #[test]
    fn defaults_are_valid() {
        for f in Formation::DEFAULTS {
            assert!(Formation::new(f.defenders(), f.midfielders(), f.forwards()).is_ok());
        }
    }

    #[test]
    fn deserializes_from_array() {
        let f: Formation = serde_json::from_str("[5, 3, 2]").unwrap();
        assert_eq!(f.to_string(), "5-3-2");

        let bad: Result<Formation, _> = serde_json::from_str("[5, 5, 5]");
        assert!(bad.is_err());
    }

    #[test]
    fn formation_used_serialization() {
        let used = FormationUsed::Formation(Formation::DEFAULTS[0]);
        assert_eq!(serde_json::to_string(&used).unwrap(), "[3,4,3]");
        assert_eq!(
            serde_json::to_string(&FormationUsed::Unknown).unwrap(),
            "\"unknown\""
        );
    }
}
