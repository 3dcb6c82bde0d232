//! Batch command handler.
//!
//! Reads a text file with one hand per line, classifies every valid hand and
//! emits one evaluation record (JSON line) per hand, either to stdout or to
//! an output file. Invalid lines are reported and skipped; the command still
//! fails at the end if any line was invalid.

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::{hand_lines, read_text};
use crate::ui;
use fivecard_engine::hand::Hand;
use fivecard_engine::logger::RecordLogger;
use std::io::Write;
use tracing::{info, warn};

/// Handle the batch command.
///
/// # Arguments
///
/// * `input` - Path to the hand list
/// * `output` - Optional JSONL destination; records go to `out` when `None`
/// * `out` - Output stream for records (or the summary when `output` is set)
/// * `err` - Error stream for per-line errors and warnings
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when the file cannot be read or at least
/// one line failed validation.
pub fn handle_batch_command(
    input: &str,
    output: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text(input).map_err(CliError::InvalidInput)?;
    let date = chrono::Utc::now().format("%Y%m%d").to_string();

    let mut logger = match output {
        Some(path) => RecordLogger::create(path, &date)?,
        None => RecordLogger::in_memory(&date),
    };

    let mut evaluated = 0usize;
    let mut failures: Vec<BatchValidationError<String>> = Vec::new();

    for (line_no, text) in hand_lines(&content) {
        let hand = match text.parse::<Hand>() {
            Ok(h) => h,
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping invalid hand");
                let failure = BatchValidationError {
                    item_context: format!("line {}", line_no),
                    message: e.to_string(),
                };
                ui::write_error(err, &failure.to_string())?;
                failures.push(failure);
                continue;
            }
        };
        let record = logger.log_hand(&hand)?;
        if output.is_none() {
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
        evaluated += 1;
    }

    if evaluated == 0 && failures.is_empty() {
        ui::display_warning(err, &format!("no hands found in {}", input))?;
    }
    info!(input, evaluated, invalid = failures.len(), "batch finished");

    let summary = format!(
        "Evaluated {} hand(s), {} invalid",
        evaluated,
        failures.len()
    );
    match output {
        Some(_) => writeln!(out, "{}", summary)?,
        None => writeln!(err, "{}", summary)?,
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!(
            "{} invalid hand(s) in {}",
            failures.len(),
            input
        )))
    }
}
