//! Number and string formatting for record display.

/// Format a stored quantity the way it was typed: whole numbers keep one
/// decimal (`120.0`), fractional values print in full.
pub fn quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Fixed-decimal formatting for computed figures.
pub fn decimal(value: f64, places: usize) -> String {
    format!("{:.*}", places, value)
}

/// Currency with two decimals.
pub fn money(value: f64) -> String {
    format!("R$ {:.2}", value)
}

/// Shorten `text` to at most `width` characters, ending in `...` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(&"..."[..width - keep]);
    out
}
