use std::fmt;

/// A decoded expression tree.
///
/// Shapes are discriminated once, while decoding JSON (see [`crate::decode`]), so rendering is a
/// plain structural recursion with no validation left to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bare number or source name.
    Lit(Lit),
    /// Two-operand arithmetic.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// Variadic combination over an ordered, non-empty input list.
    Aggregate {
        /// Combination kind.
        op: AggregateOp,
        /// Inputs in their original order.
        inputs: Vec<Expr>,
    },
    /// Rate-limiting wrapper; only its input is shown.
    Throttle {
        /// Wrapped literal.
        input: Lit,
    },
}

impl Expr {
    /// Nesting depth of the tree; a literal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Lit(_) | Expr::Throttle { .. } => 1,
            Expr::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
            Expr::Aggregate { inputs, .. } => {
                1 + inputs.iter().map(Expr::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Lit {
    /// Numeric constant.
    Number(f64),
    /// Identifier of a metric/source, shown verbatim.
    Source(String),
}

/// Arithmetic operator of a [`Expr::Binary`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOp {
    /// Single-character spelling used in JSON and in rendered output.
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    /// Parse an operator from its single-character spelling.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Combination kind of an [`Expr::Aggregate`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    /// `sum[...]`
    Sum,
    /// `min[...]`
    Min,
    /// `max[...]`
    Max,
}

impl AggregateOp {
    /// Keyword used in JSON and in rendered output.
    pub fn name(self) -> &'static str {
        match self {
            AggregateOp::Sum => "sum",
            AggregateOp::Min => "min",
            AggregateOp::Max => "max",
        }
    }

    /// Parse a combination kind from its keyword.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "sum" => Some(AggregateOp::Sum),
            "min" => Some(AggregateOp::Min),
            "max" => Some(AggregateOp::Max),
            _ => None,
        }
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
