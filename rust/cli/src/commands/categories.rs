//! Categories command handler.
//!
//! Lists the ten hand categories from weakest to strongest with their
//! ordinal strength.

use crate::config::{OutputFormat, OutputSettings};
use crate::error::CliError;
use crate::formatters::describe_category;
use fivecard_engine::hand::HandCategory;
use std::io::Write;

pub fn handle_categories_command(
    settings: OutputSettings,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match settings.format {
        OutputFormat::Text => {
            for c in HandCategory::all() {
                writeln!(
                    out,
                    "{} {:<16} {}",
                    c.strength(),
                    c.name(),
                    describe_category(c)
                )?;
            }
        }
        OutputFormat::Json => {
            let list: Vec<serde_json::Value> = HandCategory::all()
                .iter()
                .map(|c| serde_json::json!({ "name": c, "strength": c.strength() }))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&list)?)?;
        }
    }
    Ok(())
}
