/// Replacement for `|` inside table cells (U+4E28, visually a vertical bar).
const PIPE_SUBSTITUTE: char = '丨';

/// Makes free text safe to embed in a single Markdown table cell.
///
/// Line breaks become spaces and pipes become a look-alike character, so a
/// description can never split a row or add a column.
///
/// # Examples
///
/// ```
/// use pubdash::render::format::sanitize_cell;
///
/// assert_eq!(sanitize_cell("a|b\nc"), "a丨b c");
/// ```
pub fn sanitize_cell(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '\r')
        .map(|c| match c {
            '\n' => ' ',
            '|' => PIPE_SUBSTITUTE,
            other => other,
        })
        .collect()
}

/// Compact download count: `999`, `1.23k`, `1.5M`.
///
/// Two decimals are kept, then trailing zeros and a dangling dot are trimmed.
pub fn format_download_count(count: u64) -> String {
    let (scaled, suffix) = if count >= 1_000_000 {
        (count as f64 / 1_000_000.0, "M")
    } else if count >= 1_000 {
        (count as f64 / 1_000.0, "k")
    } else {
        return count.to_string();
    };

    let formatted = format!("{:.2}", scaled);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", trimmed, suffix)
}
