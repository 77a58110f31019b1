//! Expected points model listing.

use tabled::{Table, Tabled};

use crate::cli::output;
use crate::domain::ExpectedPointsModel;
use crate::error::Result;

#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Alias")]
    alias: &'static str,
    #[tabled(rename = "Score")]
    score: &'static str,
}

fn describe(model: ExpectedPointsModel) -> &'static str {
    match model {
        ExpectedPointsModel::Direct => "ep_next",
        ExpectedPointsModel::Blend => "0.6 * form + 0.4 * points_per_game",
    }
}

/// List available expected points models.
pub fn list() -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Expected points models");
    println!();

    let rows: Vec<ModelRow> = ExpectedPointsModel::ALL
        .into_iter()
        .map(|m| ModelRow {
            name: m.as_str(),
            alias: m.alias(),
            score: describe(m),
        })
        .collect();

    output::lines(&Table::new(rows).to_string());
    println!();
    println!(
        "  Select one with {}",
        output::highlight("expected_points_model = \"<name>\"")
    );
    println!("  {}", output::muted("Missing or non-numeric inputs score 0.0"));
    println!();

    Ok(())
}
