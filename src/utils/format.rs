// src/utils/format.rs
use console::style;

use crate::generators::strength::strength_label;

// Render a ten-segment strength meter like
// `Strength: [██████····] 60/100 (Strong)`.
pub fn strength_meter(strength: u8) -> String {
    let filled = (strength as usize / 10).min(10);
    let bar = format!("{}{}", "█".repeat(filled), "·".repeat(10 - filled));

    let bar = match strength {
        0..=39 => style(bar).red(),
        40..=59 => style(bar).yellow(),
        _ => style(bar).green(),
    };

    format!(
        "Strength: [{}] {}/100 ({})",
        bar,
        strength,
        strength_label(strength)
    )
}
