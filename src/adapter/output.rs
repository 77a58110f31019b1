//! Persisting optimization results as CSV and JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::domain::{squad_records, starting_xi_records, SQUAD_HEADERS, STARTING_XI_HEADERS};
use crate::error::Result;
use crate::service::OptimizationReport;

pub const SQUAD_FILE: &str = "squad.csv";
pub const STARTING_XI_FILE: &str = "starting_xi.csv";
pub const SUMMARY_FILE: &str = "summary.json";

/// Where each output was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub squad: PathBuf,
    pub starting_xi: PathBuf,
    pub summary: PathBuf,
}

/// Write `squad.csv`, `starting_xi.csv` and `summary.json` into `dir`,
/// creating it if needed.
pub fn write_outputs(report: &OptimizationReport, dir: &Path) -> Result<OutputPaths> {
    fs::create_dir_all(dir)?;

    let paths = OutputPaths {
        squad: dir.join(SQUAD_FILE),
        starting_xi: dir.join(STARTING_XI_FILE),
        summary: dir.join(SUMMARY_FILE),
    };

    write_csv(&paths.squad, &SQUAD_HEADERS, &squad_records(&report.squad))?;
    write_csv(
        &paths.starting_xi,
        &STARTING_XI_HEADERS,
        &starting_xi_records(&report.starting_xi),
    )?;

    let summary = serde_json::to_string_pretty(&report.summary())?;
    fs::write(&paths.summary, summary)?;

    info!(dir = %dir.display(), "Wrote optimization outputs");
    Ok(paths)
}

/// Write `headers` then one line per row. The header line is written even
/// when `rows` is empty.
fn write_csv<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OptimizationConfig, SquadRecord, StartingXiRecord};
    use crate::service::lineup::StartingXiSelector;
    use crate::testkit::domain::minimal_pool;
    use tempfile::tempdir;

    #[test]
    fn empty_starting_xi_still_gets_a_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STARTING_XI_FILE);
        let xi = StartingXiSelector::from_config(&OptimizationConfig::default()).select(&[]);

        write_csv(&path, &STARTING_XI_HEADERS, &starting_xi_records(&xi)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "name,team_short_name,position_group,cost,expected_points,is_captain\n"
        );
    }

    #[test]
    fn header_constants_match_serialized_fields() {
        let player = &minimal_pool()[0];
        let mut squad = csv::Writer::from_writer(Vec::new());
        squad.serialize(SquadRecord::from(player)).unwrap();
        let squad = String::from_utf8(squad.into_inner().unwrap()).unwrap();
        assert_eq!(squad.lines().next(), Some(SQUAD_HEADERS.join(",").as_str()));

        let mut xi = csv::Writer::from_writer(Vec::new());
        xi.serialize(StartingXiRecord {
            name: player.name.clone(),
            team_short_name: player.team_short_name.clone(),
            position_group: player.position,
            cost: player.cost,
            expected_points: player.expected_points,
            is_captain: true,
        })
        .unwrap();
        let xi = String::from_utf8(xi.into_inner().unwrap()).unwrap();
        assert_eq!(xi.lines().next(), Some(STARTING_XI_HEADERS.join(",").as_str()));
    }
}
