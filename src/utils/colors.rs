//! ANSI color helpers for the hour values printed by the CLI.

use ansi_term::Colour;

/// Overtime color:
/// \>0 → green
/// \<0 → red
/// 0 → plain
pub fn paint_overtime(hours: f64, text: &str) -> String {
    if hours > 0.0 {
        Colour::Green.paint(text).to_string()
    } else if hours < 0.0 {
        Colour::Red.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Lost hours are greyed out when nothing was lost.
pub fn paint_lost(hours: f64, text: &str) -> String {
    if hours > 0.0 {
        Colour::Yellow.paint(text).to_string()
    } else {
        Colour::Fixed(8).paint(text).to_string()
    }
}
