//! Classify command handler.
//!
//! Parses five cards from the command line, classifies them and prints the
//! category either as a text line or as a JSON object.

use crate::config::{OutputFormat, OutputSettings};
use crate::error::CliError;
use crate::formatters::{describe_category, format_hand};
use fivecard_engine::hand::{self, Hand};
use std::io::Write;

/// Parse a hand from one or more command-line tokens.
///
/// The tokens are joined with spaces first, so `["Ah", "Kh", ...]` and
/// `["Ah Kh Qh Jh Th"]` are equivalent.
pub(crate) fn parse_hand_args<S: AsRef<str>>(tokens: &[S]) -> Result<Hand, CliError> {
    let joined = tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(joined.parse::<Hand>()?)
}

/// JSON description of a classified hand, shared with `compare`.
pub(crate) fn hand_json(hand: &Hand, settings: OutputSettings) -> serde_json::Value {
    let strength = hand::evaluate(hand);
    serde_json::json!({
        "hand": hand,
        "display": format_hand(hand, settings.symbols),
        "category": strength.category,
        "strength": strength.category.strength(),
        "kickers": strength.kickers,
    })
}

/// Handle the classify command.
///
/// # Errors
///
/// Returns `CliError::Validation` when the cards do not form a valid hand
/// and `CliError::Io` if writing to the output stream fails.
pub fn handle_classify_command(
    cards: &[String],
    settings: OutputSettings,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let parsed = parse_hand_args(cards)?;
    let category = hand::classify(parsed.cards())?;

    match settings.format {
        OutputFormat::Text => writeln!(
            out,
            "{}: {} ({})",
            format_hand(&parsed, settings.symbols),
            category,
            describe_category(category)
        )?,
        OutputFormat::Json => {
            let json = serde_json::to_string(&hand_json(&parsed, settings))?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
