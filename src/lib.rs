//! An embeddable expression rule engine.
//!
//! A caller supplies a textual rule and a [`Context`]; the engine parses the
//! rule once into a [`Rule`] and evaluates it against any number of
//! contexts, returning either the computed [`Value`] (`evaluate`) or a
//! boolean verdict (`matches`).
//!
//! ```
//! use rule_engine::{MapContext, Rule, Value};
//!
//! let rule = Rule::new("num1 > num2 or num3 < num4").unwrap();
//! let ctx = MapContext::new()
//!     .insert("num1", Value::Int(1))
//!     .insert("num2", Value::Int(2))
//!     .insert("num3", Value::Int(3))
//!     .insert("num4", Value::Int(4));
//! assert!(rule.matches(&ctx).unwrap());
//! ```
//!
//! # Architecture
//!
//! ```text
//! source string
//!      |
//!   Lexer -> tokens
//!      |
//!   Parser -> AST
//!      |
//! Evaluator + Context -> Value
//! ```
//!
//! The language itself has no loops, no user-defined functions, no
//! assignment and no statements — a rule is a single expression. See
//! `SPEC_FULL.md` in the repository for the full grammar and semantics.

pub mod ast;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod rule;
pub mod token;
pub mod value;

pub use context::{Context, EmptyContext, Lookup, MapContext, Owned};
pub use error::{Error, EvalError, Result};
pub use parser::ParserConfig;
pub use rule::Rule;
pub use value::Value;
