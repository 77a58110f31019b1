//! Configuration validation command.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;

/// Validate a configuration file without running the optimiser.
pub fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&format!("Checking {}", path.display()));

    let config = Config::load(path)?;
    let optimization = config.optimization_config()?;

    output::success("configuration is valid");
    output::field("budget", optimization.budget);
    output::field("max per team", optimization.max_per_team);
    output::field("model", optimization.expected_points_model);
    let formations: Vec<String> = optimization
        .formations
        .iter()
        .map(ToString::to_string)
        .collect();
    output::field("formations", formations.join(", "));
    output::field(
        "time limit",
        optimization
            .time_limit
            .map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs())),
    );
    output::field("data dir", config.paths.data_dir.display());
    output::field("output dir", config.paths.output_dir.display());

    let bootstrap = config
        .paths
        .raw_dir()
        .join(crate::adapter::fpl::BOOTSTRAP_FILE);
    if !bootstrap.exists() {
        output::warning(&format!("{} not found", bootstrap.display()));
    }
    println!();

    Ok(())
}
