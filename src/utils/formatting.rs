//! Formatting utilities used for CLI and export outputs.

/// Number of printed characters, ignoring ANSI color sequences.
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if in_escape {
            in_escape = c != 'm';
            continue;
        }
        if c == '\x1b' {
            in_escape = true;
            continue;
        }
        width += 1;
    }

    width
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Hours as `"{h}h:{m}min"`.
///
/// Both parts are floored, so negative values read as whole hours below
/// plus minutes above: `-1.5` → `-2h:30min`.
pub fn hours2readable(hours: f64) -> String {
    let whole = hours.floor();
    let minutes = ((hours - whole) * 60.0).floor();
    format!("{}h:{}min", whole as i64, minutes as i64)
}
