//! Error types with location information

use crate::source::{SourceMap, Span};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("intlist:{filename}:{line}:{column}: ERR_SYNTAX: {message}")]
    Syntax {
        message: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error(
        "intlist:{filename}:{line}:{column}: ERR_INT_RANGE: {literal} does not fit in a 32-bit integer"
    )]
    IntegerRange {
        literal: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error("intlist: ERR_SUM_OVERFLOW: sum leaves the 32-bit integer range at element {steps}")]
    SumOverflow { steps: usize },
}

impl ListError {
    #[must_use]
    pub fn syntax(message: String, span: Span, source_map: &SourceMap, filename: &str) -> Self {
        let pos = source_map.position(span.start);
        Self::Syntax {
            message,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn integer_range(
        literal: String,
        span: Span,
        source_map: &SourceMap,
        filename: &str,
    ) -> Self {
        let pos = source_map.position(span.start);
        Self::IntegerRange {
            literal,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    /// Location of the offending input, if the error came from text
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Syntax { span, .. } | Self::IntegerRange { span, .. } => Some(*span),
            Self::SumOverflow { .. } => None,
        }
    }
}
