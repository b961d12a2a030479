//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// `12.5, "$"` → `$12.50`; negatives keep the sign in front of the symbol.
pub fn format_money(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Fraction to a human percentage: `0.15` → `15%`, `0.175` → `17.5%`.
pub fn format_percent(fraction: f64) -> String {
    let pct = fraction * 100.0;
    let rounded = (pct * 100.0).round() / 100.0;

    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        let s = format!("{:.2}", rounded);
        format!("{}%", s.trim_end_matches('0'))
    }
}

/// Parse a percent argument.
///
/// `0.15`, `15` and `15%` all mean fifteen percent: a trailing `%` or a
/// value above 1 is read as a whole percentage.
pub fn parse_percent(input: &str) -> Result<f64, String> {
    let s = input.trim();
    let (number, explicit) = match s.strip_suffix('%') {
        Some(n) => (n.trim(), true),
        None => (s, false),
    };

    let value: f64 = number
        .parse()
        .map_err(|_| input.trim().to_string())?;

    if !value.is_finite() || value < 0.0 {
        return Err(input.trim().to_string());
    }

    if explicit || value > 1.0 {
        Ok(value / 100.0)
    } else {
        Ok(value)
    }
}

/// Parse a bill amount, tolerating a leading currency symbol.
pub fn parse_amount(input: &str) -> Result<f64, String> {
    let s = input
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '-' && c != '.');

    let value: f64 = s
        .parse()
        .map_err(|_| input.trim().to_string())?;

    if !value.is_finite() || value < 0.0 {
        return Err(input.trim().to_string());
    }
    Ok(value)
}
