use crate::expression::ast::{Expr, Lit};
use crate::expression::number::format_number;
use std::fmt;

/// Render `expr` with every binary node fully parenthesized.
///
/// Precedence is not modeled, so `(a + b)` is always wrapped even where it would be redundant.
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

/// Render `expr` for display.
///
/// When the rendered text starts with `(` and ends with `)`, exactly that one pair is dropped.
/// This removes the redundant wrapper of a top-level binary node; nested pairs are untouched.
pub fn display(expr: &Expr) -> String {
    let mut out = render(expr);
    if out.len() >= 2 && out.starts_with('(') && out.ends_with(')') {
        out.pop();
        out.remove(0);
    }
    out
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Lit(lit) | Expr::Throttle { input: lit } => write!(f, "{lit}"),
            Expr::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Expr::Aggregate { op, inputs } => {
                write!(f, "{op}[")?;
                for (i, input) in inputs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{input}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lit::Number(v) => f.write_str(&format_number(*v)),
            Lit::Source(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/render.rs"]
mod tests;
