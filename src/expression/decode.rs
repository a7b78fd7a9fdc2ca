use crate::expression::ast::{AggregateOp, BinaryOp, Expr, Lit};
use crate::foundation::error::{DisplayError, DisplayResult};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

const THROTTLE: &str = "throttle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathElem {
    Field(&'static str),
    Index(usize),
}

fn format_path(path: &[PathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            PathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            PathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

/// Decode a JSON expression tree into an [`Expr`].
///
/// Shapes are probed in a fixed order: bare literal, then `throttle`, then `left`+`right`, then
/// `inputs`. A node carrying both binary and aggregate fields therefore decodes as binary.
pub fn decode(value: &Value) -> DisplayResult<Expr> {
    decode_with_limit(value, None)
}

/// Like [`decode`], failing with [`DisplayError::DepthExceeded`] once a node sits deeper than
/// `max_depth` (the root is depth 1).
pub fn decode_with_limit(value: &Value, max_depth: Option<usize>) -> DisplayResult<Expr> {
    let mut decoder = Decoder {
        max_depth,
        depth: 1,
        path: Vec::new(),
    };
    decoder.node(value)
}

struct Decoder {
    max_depth: Option<usize>,
    /// Tree level of the node being decoded; one per `child`, not per path element.
    depth: usize,
    path: Vec<PathElem>,
}

impl Decoder {
    fn invalid(&self, message: impl Into<String>) -> DisplayError {
        DisplayError::invalid(format_path(&self.path), message)
    }

    fn child(&mut self, elem: PathElem, value: &Value) -> DisplayResult<Expr> {
        self.path.push(elem);
        self.depth += 1;
        let out = self.node(value);
        self.depth -= 1;
        self.path.pop();
        out
    }

    fn node(&mut self, value: &Value) -> DisplayResult<Expr> {
        if let Some(limit) = self.max_depth
            && self.depth > limit
        {
            return Err(DisplayError::depth_exceeded(format_path(&self.path), limit));
        }

        match value {
            Value::Number(_) | Value::String(_) => self.basic(value).map(Expr::Lit),
            Value::Object(map) => self.operation(map),
            _ => Err(self.invalid("Unknown expression format")),
        }
    }

    fn basic(&self, value: &Value) -> DisplayResult<Lit> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(Lit::Number)
                .ok_or_else(|| self.invalid(format!("number {n} is not representable as f64"))),
            Value::String(s) => Ok(Lit::Source(s.clone())),
            _ => Err(self.invalid("Expression is not a basic type (number or string)")),
        }
    }

    fn operation(&mut self, map: &Map<String, Value>) -> DisplayResult<Expr> {
        let Some(op) = map.get("operation") else {
            return Err(self.invalid("Unknown expression format"));
        };
        let Some(op) = op.as_str() else {
            return Err(self.invalid("operation must be a string"));
        };

        if op == THROTTLE {
            let Some(input) = map.get("input") else {
                return Err(self.invalid("Throttle does not contain an input"));
            };
            self.path.push(PathElem::Field("input"));
            let input = self.basic(input);
            self.path.pop();
            let input = input?;

            tracing::debug!(
                path = %format_path(&self.path),
                ignored_fields = map.len().saturating_sub(2),
                "throttle rendered as its input"
            );
            return Ok(Expr::Throttle { input });
        }

        if let (Some(left), Some(right)) = (map.get("left"), map.get("right")) {
            let left = self.child(PathElem::Field("left"), left)?;
            let right = self.child(PathElem::Field("right"), right)?;
            let op = self.binary_op(op)?;
            return Ok(Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        if let Some(inputs) = map.get("inputs") {
            let Value::Array(items) = inputs else {
                self.path.push(PathElem::Field("inputs"));
                let err = self.invalid("Inputs must be an array");
                self.path.pop();
                return Err(err);
            };

            self.path.push(PathElem::Field("inputs"));
            let decoded = items
                .iter()
                .enumerate()
                .map(|(i, item)| self.child(PathElem::Index(i), item))
                .collect::<DisplayResult<Vec<_>>>();
            self.path.pop();
            let inputs = decoded?;

            let Some(op) = AggregateOp::from_name(op) else {
                return Err(self.invalid(format!("Invalid aggregate operation: {op}")));
            };
            if inputs.is_empty() {
                return Err(self.invalid("Aggregate operation missing inputs"));
            }
            tracing::trace!(
                path = %format_path(&self.path),
                op = op.name(),
                len = inputs.len(),
                "decoded aggregate"
            );
            return Ok(Expr::Aggregate { op, inputs });
        }

        Err(self.invalid(format!("Unsupported operation type: {op}")))
    }

    fn binary_op(&self, op: &str) -> DisplayResult<BinaryOp> {
        if op.chars().count() > 1 {
            return Err(self.invalid(format!("Invalid operator length: {op}")));
        }
        BinaryOp::from_symbol(op).ok_or_else(|| self.invalid(format!("Invalid operator: {op}")))
    }
}

impl<'de> Deserialize<'de> for Expr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/decode.rs"]
mod tests;
