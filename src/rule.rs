//! The public `Rule` facade: parse once, evaluate many times.

use crate::ast::Expr;
use crate::context::{Context, EmptyContext};
use crate::error::{Error, Result};
use crate::evaluator::eval;
use crate::parser::{parse_with, ParserConfig};
use crate::value::Value;

/// A compiled, immutable rule.
///
/// Construction parses the source once; `evaluate`/`matches` are pure and
/// read-only, so a `Rule` can be shared across threads and evaluated
/// concurrently against independent contexts (spec.md §5).
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    source: String,
    ast: Expr,
}

impl Rule {
    /// Parse `source` into a `Rule` using the default [`ParserConfig`].
    pub fn new(source: impl Into<String>) -> Result<Self> {
        Self::with_config(source, ParserConfig::default())
    }

    /// Parse `source` into a `Rule` with a custom [`ParserConfig`] — e.g. to
    /// raise or lower the nesting-depth ceiling (SPEC_FULL.md §10).
    pub fn with_config(source: impl Into<String>, config: ParserConfig) -> Result<Self> {
        let source = source.into();
        let ast = parse_with(&source, config)?;
        Ok(Self { source, ast })
    }

    /// The source text this rule was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate the rule against `context`, returning the computed value.
    pub fn evaluate(&self, context: &dyn Context) -> Result<Value> {
        eval(&self.ast, context).map_err(Error::from)
    }

    /// Evaluate the rule with no context at all. Only valid for rules that
    /// reference no identifiers; otherwise evaluation fails with a
    /// symbol-resolution error (spec.md §6).
    pub fn evaluate_null(&self) -> Result<Value> {
        self.evaluate(&EmptyContext)
    }

    /// Evaluate the rule and coerce the result to a boolean verdict
    /// (spec.md §4.4): `Bool` results pass through, everything else is
    /// coerced via truthiness.
    pub fn matches(&self, context: &dyn Context) -> Result<bool> {
        Ok(self.evaluate(context)?.coerce_bool())
    }

    /// `matches` against no context; see [`Rule::evaluate_null`].
    pub fn matches_null(&self) -> Result<bool> {
        self.matches(&EmptyContext)
    }
}
