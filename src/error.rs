//! Error types for the rule engine.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while constructing or evaluating a [`crate::Rule`].
///
/// Construction (`Rule::new`) can only fail with [`Error::Lex`] or
/// [`Error::Parse`]; evaluation (`evaluate`/`matches`) can only fail with
/// [`Error::Eval`]. A parse failure never leaves a partially built `Rule`
/// around, and an evaluation failure never invalidates the `Rule` for
/// subsequent calls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("lex error at byte {pos}: {message}")]
    Lex { message: String, pos: usize },

    #[error("parse error at byte {pos}: {message}")]
    Parse { message: String, pos: usize },

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub(crate) fn lex(message: impl Into<String>, pos: usize) -> Self {
        Error::Lex {
            message: message.into(),
            pos,
        }
    }

    pub(crate) fn parse(message: impl Into<String>, pos: usize) -> Self {
        Error::Parse {
            message: message.into(),
            pos,
        }
    }
}

/// Errors that can only occur while walking the AST against a context.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("undefined symbol `{0}`")]
    UndefinedSymbol(String),

    #[error("no attribute `{field}` on `{base}`")]
    UndefinedAttribute { base: String, field: String },

    #[error("attribute access on a non-mapping value")]
    NotAMapping,

    #[error("type error: {0}")]
    TypeError(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,
}
