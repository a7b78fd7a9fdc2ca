/// Convenience result type used across the crate.
pub type DisplayResult<T> = Result<T, DisplayError>;

/// Error taxonomy surfaced by decoding and display APIs.
///
/// Every variant is caller-visible input validation; nothing is recovered internally and the
/// first failure aborts the whole render.
#[derive(thiserror::Error, Debug)]
pub enum DisplayError {
    /// The node at `path` does not match any recognized expression shape.
    #[error("invalid expression at {path}: {message}")]
    InvalidExpression {
        /// JSON path of the offending node, rooted at `$`.
        path: String,
        /// Human-readable reason.
        message: String,
    },

    /// The tree nests deeper than the configured limit.
    #[error("expression at {path} exceeds the maximum depth of {limit}")]
    DepthExceeded {
        /// JSON path of the first node past the limit.
        path: String,
        /// Configured maximum depth.
        limit: usize,
    },

    /// JSON text could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl DisplayError {
    /// Build a [`DisplayError::InvalidExpression`] value.
    pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidExpression {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Build a [`DisplayError::DepthExceeded`] value.
    pub fn depth_exceeded(path: impl Into<String>, limit: usize) -> Self {
        Self::DepthExceeded {
            path: path.into(),
            limit,
        }
    }

    /// Build a [`DisplayError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for [`DisplayError::InvalidExpression`].
    pub fn is_invalid_expression(&self) -> bool {
        matches!(self, Self::InvalidExpression { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
