//! Loading candidate players from FPL API dumps.
//!
//! Reads `bootstrap-static.json` (players and teams) and, when present,
//! `fixtures.json`. Fetching these files is out of scope; they are expected
//! on disk under the configured data directory.

pub mod dto;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use self::dto::{BootstrapStatic, ElementDto};
use crate::domain::{Fixture, PlayerId, PlayerRecord, Position, TeamId};
use crate::error::{DataError, Result};

/// File name of the bootstrap dump inside the raw data directory.
pub const BOOTSTRAP_FILE: &str = "bootstrap-static.json";

/// File name of the fixtures dump inside the raw data directory.
pub const FIXTURES_FILE: &str = "fixtures.json";

/// Read and convert a `bootstrap-static.json` file.
pub fn load_bootstrap(path: &Path) -> Result<Vec<PlayerRecord>> {
    let content = fs::read_to_string(path).map_err(|source| DataError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let bootstrap: BootstrapStatic =
        serde_json::from_str(&content).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let records = convert_bootstrap(bootstrap)?;
    info!(path = %path.display(), players = records.len(), "Loaded bootstrap data");
    Ok(records)
}

/// Parse bootstrap JSON already held in memory.
pub fn parse_bootstrap(json: &str) -> Result<Vec<PlayerRecord>> {
    let bootstrap: BootstrapStatic = serde_json::from_str(json)?;
    convert_bootstrap(bootstrap)
}

fn convert_bootstrap(bootstrap: BootstrapStatic) -> Result<Vec<PlayerRecord>> {
    if bootstrap.elements.is_empty() {
        return Err(DataError::EmptyPool.into());
    }

    let short_names: HashMap<u32, String> = bootstrap
        .teams
        .into_iter()
        .map(|t| (t.id, t.short_name))
        .collect();

    bootstrap
        .elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| convert_element(index, element, &short_names))
        .collect()
}

fn convert_element(
    index: usize,
    element: ElementDto,
    short_names: &HashMap<u32, String>,
) -> Result<PlayerRecord> {
    let missing = |field| DataError::MissingField { index, field };

    let id = element.id.ok_or_else(|| missing("id"))?;
    let team = element.team.ok_or_else(|| missing("team"))?;
    let code = element.element_type.ok_or_else(|| missing("element_type"))?;
    let now_cost = element.now_cost.ok_or_else(|| missing("now_cost"))?;

    let position = Position::from_element_type(code)
        .ok_or(DataError::UnknownPosition { player_id: id, code })?;

    if now_cost < 0 {
        return Err(DataError::InvalidValue {
            player_id: id,
            field: "now_cost",
            reason: format!("cost cannot be negative, got {now_cost}"),
        }
        .into());
    }

    let name = match (element.first_name, element.second_name, element.web_name) {
        (Some(first), Some(second), _) => format!("{first} {second}"),
        (_, _, Some(web)) => web,
        (first, second, None) => first.or(second).unwrap_or_else(|| format!("Player {id}")),
    };

    let team_short_name = match short_names.get(&team) {
        Some(short) => short.clone(),
        None => {
            warn!(player_id = id, team, "Team missing from bootstrap data");
            String::new()
        }
    };

    Ok(PlayerRecord {
        id: PlayerId::new(id),
        name,
        team: TeamId::new(team),
        team_short_name,
        position,
        cost: Decimal::new(now_cost, 1),
        ep_next: element.ep_next,
        form: element.form,
        points_per_game: element.points_per_game,
    })
}

/// Read `fixtures.json`. A missing file yields no fixtures.
pub fn load_fixtures(path: &Path) -> Result<Vec<Fixture>> {
    if !path.exists() {
        debug!(path = %path.display(), "No fixtures file");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|source| DataError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let fixtures: Vec<Fixture> =
        serde_json::from_str(&content).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(fixtures = fixtures.len(), "Loaded fixtures");
    Ok(fixtures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn converts_elements_and_joins_team_names() {
        let json = json!({
            "elements": [
                {
                    "id": 10, "first_name": "Mohamed", "second_name": "Salah",
                    "team": 12, "element_type": 3, "now_cost": 130,
                    "ep_next": "8.1", "form": "7.5", "points_per_game": "6.9",
                    "total_points": 211
                },
                {
                    "id": 11, "web_name": "Alisson", "team": 99,
                    "element_type": 1, "now_cost": 55
                }
            ],
            "teams": [{ "id": 12, "name": "Liverpool", "short_name": "LIV" }]
        });

        let records = parse_bootstrap(&json.to_string()).unwrap();

        assert_eq!(records.len(), 2);
        let salah = &records[0];
        assert_eq!(salah.name, "Mohamed Salah");
        assert_eq!(salah.team_short_name, "LIV");
        assert_eq!(salah.position, Position::Midfielder);
        assert_eq!(salah.cost, dec!(13.0));
        assert_eq!(salah.ep_next, Some(json!("8.1")));

        let alisson = &records[1];
        assert_eq!(alisson.name, "Alisson");
        assert_eq!(alisson.team_short_name, "");
        assert_eq!(alisson.ep_next, None);
    }

    #[test]
    fn missing_required_field_is_a_data_error() {
        let json = json!({
            "elements": [{ "id": 1, "team": 1, "element_type": 2 }],
            "teams": []
        });

        let err = parse_bootstrap(&json.to_string()).unwrap_err();

        assert!(matches!(
            err,
            Error::Data(DataError::MissingField {
                index: 0,
                field: "now_cost"
            })
        ));
    }

    #[test]
    fn unknown_position_code_is_rejected() {
        let json = json!({
            "elements": [{ "id": 5, "team": 1, "element_type": 5, "now_cost": 40 }]
        });

        let err = parse_bootstrap(&json.to_string()).unwrap_err();

        assert!(matches!(
            err,
            Error::Data(DataError::UnknownPosition {
                player_id: 5,
                code: 5
            })
        ));
    }

    #[test]
    fn empty_elements_is_an_empty_pool() {
        let err = parse_bootstrap(r#"{"elements": [], "teams": []}"#).unwrap_err();
        assert!(matches!(err, Error::Data(DataError::EmptyPool)));
    }

    #[test]
    fn missing_fixtures_file_is_empty() {
        let fixtures = load_fixtures(Path::new("/nonexistent/fixtures.json")).unwrap();
        assert!(fixtures.is_empty());
    }
}
