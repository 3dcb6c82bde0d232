//! Compare command handler.
//!
//! Orders two hands and prints the result as 1 (A wins), 0 (tie) or
//! -1 (B wins), together with both categories.

use super::classify::hand_json;
use crate::config::{OutputFormat, OutputSettings};
use crate::error::CliError;
use crate::formatters::format_hand;
use fivecard_engine::hand::{self, Hand};
use std::cmp::Ordering;
use std::io::Write;

fn winner_label(ord: Ordering) -> &'static str {
    match ord {
        Ordering::Greater => "a",
        Ordering::Less => "b",
        Ordering::Equal => "tie",
    }
}

/// Handle the compare command.
///
/// Both hands are parsed and validated before anything is printed; the first
/// invalid hand aborts the command with `CliError::Validation`.
pub fn handle_compare_command(
    a: &str,
    b: &str,
    settings: OutputSettings,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let ha: Hand = a.parse()?;
    let hb: Hand = b.parse()?;
    let ord = hand::compare(ha.cards(), hb.cards())?;
    let score = ord as i8;

    match settings.format {
        OutputFormat::Text => {
            let (sa, sb) = (hand::evaluate(&ha), hand::evaluate(&hb));
            writeln!(out, "A: {} ({})", format_hand(&ha, settings.symbols), sa.category)?;
            writeln!(out, "B: {} ({})", format_hand(&hb, settings.symbols), sb.category)?;
            let verdict = match ord {
                Ordering::Greater => "A wins",
                Ordering::Less => "B wins",
                Ordering::Equal => "tie",
            };
            writeln!(out, "Result: {} ({})", score, verdict)?;
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "result": score,
                "winner": winner_label(ord),
                "a": hand_json(&ha, settings),
                "b": hand_json(&hb, settings),
            });
            writeln!(out, "{}", serde_json::to_string(&json)?)?;
        }
    }
    Ok(())
}
