use super::params::pawn_value_eg;
use super::{EvalPosition, Evaluation, Value};
use crate::chess::types::Color;

const SIGNIFICANT_DIGITS: i32 = 6;

// White's point of view, for stdout only
pub fn trace<P: EvalPosition + ?Sized>(pos: &P) -> String {
    if pos.in_check() {
        return "Total evaluation: none (in check)".to_string();
    }

    let mut value: Value = Evaluation::new(pos).value();

    if pos.side_to_move() == Color::Black {
        value = -value;
    }

    let pawns: f64 = value.get() as f64 / pawn_value_eg() as f64;

    format!(
        "Final evaluation: {} (white side)\n",
        format_significant(pawns, SIGNIFICANT_DIGITS)
    )
}

// Rounds to `digits` significant digits and drops trailing zeros
fn format_significant(x: f64, digits: i32) -> String {
    if x == 0.0 || !x.is_finite() {
        return format!("{x}");
    }

    let magnitude = x.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    let formatted = format!("{x:.decimals$}");

    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
