//! File I/O utilities for reading hand lists.
//!
//! Hand files are plain UTF-8 text with one hand per line. Blank lines and
//! lines starting with `#` are ignored, and a leading UTF-8 BOM is stripped.

/// Read a text file, stripping a UTF-8 BOM if present.
///
/// # Returns
///
/// * `Ok(String)` - File contents as UTF-8 string
/// * `Err(String)` - I/O or UTF-8 conversion error with the path included
///
/// # Example
///
/// ```rust,no_run
/// # use fivecard_cli::io_utils::read_text;
/// let content = read_text("hands.txt").unwrap();
/// ```
pub fn read_text(path: &str) -> Result<String, String> {
    let mut content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Iterate over the hand lines of a file body as `(line_number, text)`.
///
/// Line numbers are 1-based and count skipped lines, so they match what an
/// editor shows.
pub fn hand_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
