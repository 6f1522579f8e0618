use thiserror::Error;

use crate::token::MAX_DEPTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Grammar violation: unexpected character, malformed escape or
    /// number, unmatched delimiter, trailing content.
    Syntax,
    /// Object/array nesting beyond the fixed limit.
    DepthExceeded,
}

/// A terminal parse failure. The first violation aborts the whole parse;
/// there is no recovery and no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at offset {offset}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    /// Byte offset into the input where the violation was detected.
    pub offset: usize,
}

impl Error {
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            offset,
        }
    }

    pub fn depth_exceeded(offset: usize) -> Self {
        Self {
            kind: ErrorKind::DepthExceeded,
            message: format!("maximum nesting depth of {MAX_DEPTH} exceeded"),
            offset,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }

    pub fn is_depth_exceeded(&self) -> bool {
        self.kind == ErrorKind::DepthExceeded
    }
}
