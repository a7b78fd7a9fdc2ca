//! `expr-display` turns machine-readable expression trees into readable math.
//!
//! Trees arrive as JSON: numbers and strings are leaves, objects carry an `operation` plus either
//! `left`/`right` (binary `+ - * /`), `inputs` (`sum`, `min`, `max`) or `input` (`throttle`).
//! Nothing is evaluated; the output is text only.
//!
//! ```
//! let v = serde_json::json!({
//!     "operation": "-",
//!     "left": {
//!         "operation": "+",
//!         "left": 15.3,
//!         "right": { "operation": "min", "inputs": [42, 24, 8, 12] }
//!     },
//!     "right": { "operation": "throttle", "cooldown_period": "42", "input": 8 }
//! });
//! assert_eq!(
//!     expr_display::display_json(&v).unwrap(),
//!     "(15.3 + min[42, 24, 8, 12]) - 8"
//! );
//! ```
//!
//! Decoding ([`decode`]) and rendering ([`render`], [`display`]) are separate steps, so a tree can
//! be validated once and shown many times.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod expression;
mod foundation;

pub use crate::api::{DisplayOpts, display_json, display_str, display_with, render_json};
pub use crate::expression::ast::{AggregateOp, BinaryOp, Expr, Lit};
pub use crate::expression::decode::{decode, decode_with_limit};
pub use crate::expression::number::{MAX_FRACTION_DIGITS, SIGNIFICANT_DIGITS, format_number};
pub use crate::expression::render::{display, render};
pub use crate::foundation::error::{DisplayError, DisplayResult};
