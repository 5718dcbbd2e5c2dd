//! Worked solution by the substitution method.
//!
//! The narrative restates the system and walks through the substitution, then
//! states the solution stored on the question. Nothing is re-derived here.

use crate::format::{format_equation, format_number, format_term};
use crate::model::{Equation, Question};

/// Number of steps in every narrative.
pub const STEP_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Build the five-step substitution narrative for a question.
#[must_use]
pub fn solution_steps(question: &Question) -> Vec<Step> {
    let [first, second] = question.equations();
    let solution = question.solution();
    let isolation = Isolation::from_first(first);

    vec![
        Step {
            number: 1,
            title: "Initial system",
            lines: vec![
                format!("(I) {}", format_equation(first)),
                format!("(II) {}", format_equation(second)),
            ],
        },
        Step {
            number: 2,
            title: "Isolate a variable",
            lines: isolation.lines(first),
        },
        Step {
            number: 3,
            title: "Substitute into the other equation",
            lines: isolation.substitution_lines(second),
        },
        Step {
            number: 4,
            title: "Solve for y",
            lines: vec![
                "Simplifying the equation gives the value of y.".to_string(),
                format!("y = {}", format_number(solution.y)),
            ],
        },
        Step {
            number: 5,
            title: "Find x",
            lines: vec![
                "With y known, go back to the expression from step 2 to find x.".to_string(),
                format!("x = {}", format_number(solution.x)),
            ],
        },
    ]
}

/// Which variable equation (I) is solved for, and the resulting expression.
enum Isolation {
    /// `x = expression` (equation I has an x term)
    X { expression: String },
    /// `y = expression` (equation I is `b·y = c`)
    Y { expression: String },
}

impl Isolation {
    fn from_first(first: &Equation) -> Self {
        let (a, b, c) = (first.a(), first.b(), first.c());
        if a == 0.0 {
            let expression = if b == 1.0 {
                format_number(c)
            } else {
                format!("{} / {}", format_number(c), format_number(b))
            };
            return Isolation::Y { expression };
        }
        let rhs = moved_y_side(b, c);
        let expression = if a == 1.0 {
            rhs
        } else if b == 0.0 {
            format!("{rhs} / {}", format_number(a))
        } else {
            format!("({rhs}) / {}", format_number(a))
        };
        Isolation::X { expression }
    }

    fn lines(&self, first: &Equation) -> Vec<String> {
        match self {
            Isolation::X { expression } => {
                let mut lines = vec!["Isolate x in the first equation (I):".to_string()];
                if first.a() != 1.0 {
                    lines.push(format!(
                        "{} = {}",
                        format_term(first.a(), 'x'),
                        moved_y_side(first.b(), first.c())
                    ));
                }
                lines.push(format!("x = {expression}"));
                lines
            }
            Isolation::Y { expression } => {
                let mut lines =
                    vec!["Equation (I) has no x term, so isolate y instead:".to_string()];
                if first.b() != 1.0 {
                    lines.push(format!(
                        "{} = {}",
                        format_term(first.b(), 'y'),
                        format_number(first.c())
                    ));
                }
                lines.push(format!("y = {expression}"));
                lines
            }
        }
    }

    fn substitution_lines(&self, second: &Equation) -> Vec<String> {
        let (a, b, c) = (second.a(), second.b(), second.c());
        match self {
            Isolation::X { .. } if a == 0.0 => vec![
                "Equation (II) has no x term, so it already gives y:".to_string(),
                format_equation(second),
            ],
            Isolation::X { expression } => {
                let mut line = format!("{} * ({expression})", format_number(a));
                if b != 0.0 {
                    let sign = if b > 0.0 { '+' } else { '-' };
                    line.push_str(&format!(" {sign} {}", format_term(b.abs(), 'y')));
                }
                vec![
                    "Substitute that expression for x in the second equation (II):".to_string(),
                    format!("{line} = {}", format_number(c)),
                ]
            }
            Isolation::Y { .. } if b == 0.0 => vec![
                "Equation (II) has no y term, so it already gives x:".to_string(),
                format_equation(second),
            ],
            Isolation::Y { expression } => {
                let sign = if b > 0.0 { '+' } else { '-' };
                vec![
                    "Substitute that value for y in the second equation (II):".to_string(),
                    format!(
                        "{} {sign} {} * ({expression}) = {}",
                        format_term(a, 'x'),
                        format_number(b.abs()),
                        format_number(c)
                    ),
                ]
            }
        }
    }
}

/// Right-hand side after moving the y term across: `c - 3y`, `c + y`, or `c`.
fn moved_y_side(b: f64, c: f64) -> String {
    if b == 0.0 {
        return format_number(c);
    }
    let op = if b > 0.0 { '-' } else { '+' };
    format!("{} {op} {}", format_number(c), format_term(b.abs(), 'y'))
}
