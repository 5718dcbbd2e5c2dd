//! Display formatting for equations and the numbers inside them.
//!
//! Zero-coefficient policy: a term whose coefficient is zero is dropped
//! entirely, so `0x + 3y = 6` renders as `3y = 6` and `2x + 0y = 4` as
//! `2x = 4`. When the x term is dropped the y term leads with its own sign.

use crate::model::Equation;

/// Shortest decimal form of a number; negative zero renders as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// A coefficient attached to a variable: `x`, `-x`, `2x`, `1.5y`.
///
/// Returns an empty string for a zero coefficient.
#[must_use]
pub fn format_term(coefficient: f64, variable: char) -> String {
    if coefficient == 0.0 {
        String::new()
    } else if coefficient == 1.0 {
        variable.to_string()
    } else if coefficient == -1.0 {
        format!("-{variable}")
    } else {
        format!("{}{variable}", format_number(coefficient))
    }
}

/// Render `a·x + b·y = c` in its canonical display form.
#[must_use]
pub fn format_equation(equation: &Equation) -> String {
    let x_term = format_term(equation.a(), 'x');
    let b = equation.b();
    let y_magnitude = format_term(b.abs(), 'y');

    let lhs = match (x_term.is_empty(), b == 0.0) {
        (false, true) => x_term,
        (false, false) => {
            let sign = if b > 0.0 { '+' } else { '-' };
            format!("{x_term} {sign} {y_magnitude}")
        }
        (true, _) if b < 0.0 => format!("-{y_magnitude}"),
        (true, _) => y_magnitude,
    };

    format!("{lhs} = {}", format_number(equation.c()))
}
