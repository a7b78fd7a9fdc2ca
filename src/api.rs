use crate::expression::decode::decode_with_limit;
use crate::expression::render::{display, render};
use crate::foundation::error::{DisplayError, DisplayResult};
use serde_json::Value;

/// Options for [`display_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOpts {
    /// Drop the parentheses around a top-level binary expression.
    pub strip_outer_parens: bool,
    /// Reject trees nested deeper than this; `None` leaves depth unchecked.
    pub max_depth: Option<usize>,
}

impl Default for DisplayOpts {
    fn default() -> Self {
        Self {
            strip_outer_parens: true,
            max_depth: None,
        }
    }
}

/// Decode and render `value`, keeping every parenthesis pair.
pub fn render_json(value: &Value) -> DisplayResult<String> {
    display_with(
        value,
        &DisplayOpts {
            strip_outer_parens: false,
            ..DisplayOpts::default()
        },
    )
}

/// Decode and render `value` for display.
///
/// ```
/// let v = serde_json::json!({
///     "operation": "*",
///     "left": 5,
///     "right": { "operation": "-", "left": 45, "right": 3 }
/// });
/// assert_eq!(expr_display::display_json(&v).unwrap(), "5 * (45 - 3)");
/// ```
pub fn display_json(value: &Value) -> DisplayResult<String> {
    display_with(value, &DisplayOpts::default())
}

/// Decode and render `value` under explicit options.
#[tracing::instrument(level = "debug", skip(value), err(level = "debug"))]
pub fn display_with(value: &Value, opts: &DisplayOpts) -> DisplayResult<String> {
    let expr = decode_with_limit(value, opts.max_depth)?;
    let out = if opts.strip_outer_parens {
        display(&expr)
    } else {
        render(&expr)
    };
    tracing::debug!(depth = expr.depth(), len = out.len(), "rendered expression");
    Ok(out)
}

/// Parse JSON text and render it for display.
pub fn display_str(json: &str) -> DisplayResult<String> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| DisplayError::serde(format!("expression json parse failed: {e}")))?;
    display_json(&value)
}

#[cfg(test)]
#[path = "../tests/unit/api.rs"]
mod tests;
