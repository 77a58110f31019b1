//! The `run` command: load data, optimise, write outputs.

use std::path::Path;
use std::time::Duration;

use tabled::{Table, Tabled};
use tracing::info;

use crate::adapter::fpl::{load_bootstrap, load_fixtures, BOOTSTRAP_FILE, FIXTURES_FILE};
use crate::adapter::output::write_outputs;
use crate::adapter::solver::HiGHSSolver;
use crate::cli::{output, RunArgs, DEFAULT_CONFIG};
use crate::config::Config;
use crate::domain::StartingXi;
use crate::error::Result;
use crate::port::CancelToken;
use crate::service::{OptimizationReport, Optimizer};

#[derive(Tabled)]
struct LineupRow {
    #[tabled(rename = "Pos")]
    position: String,
    #[tabled(rename = "Player")]
    name: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "xPts")]
    points: String,
    #[tabled(rename = "")]
    captain: &'static str,
}

/// Load configuration, applying defaults when no file is available.
fn load_config(args: &RunArgs) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load(path),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(DEFAULT_CONFIG),
        None => Ok(Config::default()),
    }
}

/// Apply command-line overrides on top of the file configuration.
fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(dir) = &args.data_dir {
        config.paths.data_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.paths.output_dir = dir.clone();
    }
    if let Some(budget) = args.budget {
        config.optimization.budget = budget;
    }
    if let Some(model) = &args.model {
        config.optimization.expected_points_model = model.clone();
    }
    if let Some(max) = args.max_per_team {
        config.optimization.max_per_team = max;
    }
    if let Some(secs) = args.time_limit {
        config.optimization.time_limit_secs = secs;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }
}

/// Execute the `run` command.
pub fn execute(args: &RunArgs) -> Result<()> {
    let mut config = load_config(args)?;
    apply_overrides(&mut config, args);
    config.init_logging();

    let optimization = config.optimization_config()?;
    let raw_dir = config.paths.raw_dir();
    let records = load_bootstrap(&raw_dir.join(BOOTSTRAP_FILE))?;
    let fixtures = load_fixtures(&raw_dir.join(FIXTURES_FILE))?;

    info!(
        players = records.len(),
        fixtures = fixtures.len(),
        budget = %optimization.budget,
        model = %optimization.expected_points_model,
        time_limit_secs = optimization.time_limit.map(|t: Duration| t.as_secs()),
        "Starting optimization"
    );

    let optimizer = Optimizer::new(HiGHSSolver::new());
    let report = optimizer.run(&records, &fixtures, &optimization, &CancelToken::new())?;
    let paths = write_outputs(&report, &config.paths.output_dir)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.summary())?);
        return Ok(());
    }

    print_report(&report);
    output::section("Outputs");
    output::field("squad", paths.squad.display());
    output::field("starting XI", paths.starting_xi.display());
    output::field("summary", paths.summary.display());
    println!();

    Ok(())
}

fn print_report(report: &OptimizationReport) {
    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Starting XI");
    println!();
    output::lines(&Table::new(lineup_rows(&report.starting_xi)).to_string());

    let summary = report.summary();
    output::section("Summary");
    output::field("formation", output::highlight(summary.formation_used));
    output::field(
        "xi points",
        format!("{:.2}", summary.total_expected_points_xi),
    );
    output::field(
        "captain",
        summary.captain_name.as_deref().unwrap_or("-"),
    );
    output::field("model", summary.expected_points_model_used);
    output::field("squad points", format!("{:.2}", summary.objective));
    output::field("squad cost", report.squad.total_cost());

    if report.starting_xi.formation().is_unknown() {
        output::warning("no configured formation fits the squad; showing top 11 by score");
    }
    if summary.solver_status == crate::domain::SelectionStatus::TimeLimit {
        output::warning("solver stopped at its time limit; squad may be suboptimal");
    } else {
        output::success("optimal squad found");
    }
}

fn lineup_rows(xi: &StartingXi) -> Vec<LineupRow> {
    xi.players()
        .iter()
        .map(|p| LineupRow {
            position: p.position.to_string(),
            name: p.name.clone(),
            team: p.team_short_name.clone(),
            cost: p.cost.to_string(),
            points: format!("{:.2}", p.expected_points),
            captain: if xi.is_captain(p.id) { "(C)" } else { "" },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn overrides_replace_file_values() {
        let mut config = Config::default();
        let args = RunArgs {
            budget: Some(dec!(95.5)),
            model: Some("blend".into()),
            max_per_team: Some(2),
            time_limit: Some(0),
            json_logs: true,
            ..Default::default()
        };

        apply_overrides(&mut config, &args);
        let opt = config.optimization_config().unwrap();

        assert_eq!(opt.budget, dec!(95.5));
        assert_eq!(opt.max_per_team, 2);
        assert_eq!(opt.time_limit, None);
        assert_eq!(config.logging.format, "json");
    }
}
