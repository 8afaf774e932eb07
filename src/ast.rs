//! Abstract syntax tree produced by the parser.
//!
//! The tree is owned outright: every node's children belong exclusively to
//! it, there is no sharing and no cycles. Built once during parsing and
//! never mutated afterwards.

use crate::value::Value;
use std::fmt;

/// A parsed expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Ident(String),
    Attr(Box<Expr>, String),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
}

impl BinaryOp {
    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Lte => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Gte => ">=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{:?}", v),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Null => write!(f, "null"),
        }
    }
}

/// Pretty-prints the tree with full parenthesization, so that
/// `parse(&expr.to_string())` always reproduces an equivalent tree
/// (spec.md §8's parser round-trip property).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(v) => write!(f, "{}", v),
            Expr::Ident(name) => write!(f, "{}", name),
            Expr::Attr(base, field) => write!(f, "({}.{})", base, field),
            Expr::Unary(UnaryOp::Neg, operand) => write!(f, "(-{})", operand),
            Expr::Unary(UnaryOp::Not, operand) => write!(f, "(not {})", operand),
            Expr::Binary(op, left, right) => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
        }
    }
}
