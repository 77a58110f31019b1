//! Writers for FPL-shaped input files.

use std::fs;
use std::path::Path;

use fplopt::domain::{Player, Position};
use rust_decimal::prelude::ToPrimitive;
use serde_json::{json, Value};

fn element_type(position: Position) -> u8 {
    match position {
        Position::Goalkeeper => 1,
        Position::Defender => 2,
        Position::Midfielder => 3,
        Position::Forward => 4,
    }
}

/// A `bootstrap-static.json` payload for `players`, with each player's
/// expected points encoded as a string `ep_next`, the way the API does.
pub fn bootstrap_json(players: &[Player]) -> Value {
    let elements: Vec<Value> = players
        .iter()
        .map(|p| {
            json!({
                "id": p.id.get(),
                "first_name": "Player",
                "second_name": p.id.get().to_string(),
                "web_name": p.name,
                "team": p.team.get(),
                "element_type": element_type(p.position),
                "now_cost": (p.cost * rust_decimal::Decimal::TEN).to_i64().unwrap(),
                "ep_next": format!("{:.1}", p.expected_points),
                "form": "0.0",
                "points_per_game": "0.0",
            })
        })
        .collect();

    let mut team_ids: Vec<u32> = players.iter().map(|p| p.team.get()).collect();
    team_ids.sort_unstable();
    team_ids.dedup();
    let teams: Vec<Value> = team_ids
        .into_iter()
        .map(|id| json!({ "id": id, "name": format!("Team {id}"), "short_name": format!("T{id}") }))
        .collect();

    json!({ "elements": elements, "teams": teams })
}

/// Write `<data_dir>/raw/bootstrap-static.json` for `players`.
pub fn write_bootstrap(data_dir: &Path, players: &[Player]) {
    let raw = data_dir.join("raw");
    fs::create_dir_all(&raw).unwrap();
    fs::write(
        raw.join("bootstrap-static.json"),
        serde_json::to_string_pretty(&bootstrap_json(players)).unwrap(),
    )
    .unwrap();
}
