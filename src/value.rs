//! The engine's dynamic value type and its coercion rules.

use crate::error::EvalError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A dynamically typed value flowing through lexing, literals and
/// evaluation.
///
/// `Null` is only ever produced by an explicit `null` literal in the source
/// — a lookup failure against a [`crate::Context`] is an [`EvalError`], not
/// a `Null` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Null,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::Null => "null",
        }
    }

    /// Truthy-mode coercion to a boolean (spec.md §4.4): `Int`/`Float` are
    /// truthy iff non-zero, `Str` is truthy iff non-empty, `Bool` is itself,
    /// `Null` is always falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
            Value::Null => false,
        }
    }

    /// Coerce the result of an evaluation to a boolean verdict, as required
    /// by `Rule::matches`. `Bool` passes through directly; anything else
    /// falls back to truthiness (spec.md §4.4).
    pub fn coerce_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            other => other.is_truthy(),
        }
    }

    pub fn negate(&self) -> Result<Value, EvalError> {
        match self {
            Value::Int(i) => i.checked_neg().map(Value::Int).ok_or_else(|| {
                EvalError::TypeError(format!("integer overflow evaluating `-{}`", i))
            }),
            Value::Float(f) => Ok(Value::Float(-f)),
            other => Err(EvalError::TypeError(format!(
                "cannot negate a {}",
                other.type_name()
            ))),
        }
    }

    pub fn not(&self) -> Result<Value, EvalError> {
        Ok(Value::Bool(!self.is_truthy()))
    }

    pub fn and(&self, rhs: &Value) -> Result<Value, EvalError> {
        Ok(Value::Bool(self.is_truthy() && rhs.is_truthy()))
    }

    pub fn or(&self, rhs: &Value) -> Result<Value, EvalError> {
        Ok(Value::Bool(self.is_truthy() || rhs.is_truthy()))
    }

    pub fn add(&self, rhs: &Value) -> Result<Value, EvalError> {
        numeric_op(
            self,
            rhs,
            "+",
            |a, b| a.checked_add(b).map(Value::Int),
            |a, b| Value::Float(a + b),
        )
    }

    pub fn sub(&self, rhs: &Value) -> Result<Value, EvalError> {
        numeric_op(
            self,
            rhs,
            "-",
            |a, b| a.checked_sub(b).map(Value::Int),
            |a, b| Value::Float(a - b),
        )
    }

    pub fn mul(&self, rhs: &Value) -> Result<Value, EvalError> {
        numeric_op(
            self,
            rhs,
            "*",
            |a, b| a.checked_mul(b).map(Value::Int),
            |a, b| Value::Float(a * b),
        )
    }

    pub fn div(&self, rhs: &Value) -> Result<Value, EvalError> {
        match promote(self, rhs, "/")? {
            Promoted::Ints(a, b) => {
                if b == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    a.checked_div(b).map(Value::Int).ok_or_else(|| {
                        EvalError::TypeError(format!("integer overflow evaluating `{} / {}`", a, b))
                    })
                }
            }
            Promoted::Floats(a, b) => {
                if b == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(Value::Float(a / b))
                }
            }
        }
    }

    pub fn modulo(&self, rhs: &Value) -> Result<Value, EvalError> {
        match promote(self, rhs, "%")? {
            Promoted::Ints(a, b) => {
                if b == 0 {
                    Err(EvalError::ModuloByZero)
                } else {
                    a.checked_rem(b).map(Value::Int).ok_or_else(|| {
                        EvalError::TypeError(format!("integer overflow evaluating `{} % {}`", a, b))
                    })
                }
            }
            Promoted::Floats(a, b) => {
                if b == 0.0 {
                    Err(EvalError::ModuloByZero)
                } else {
                    Ok(Value::Float(a % b))
                }
            }
        }
    }

    /// `==` / `!=` per spec.md §4.3: `Int`/`Float` promote and compare
    /// numerically; every other cross-variant pair is unequal.
    pub fn equals(&self, rhs: &Value) -> bool {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }

    /// Ordered comparison, defined for numeric pairs (with promotion) and
    /// `Str` vs `Str` (lexicographic by code unit). Anything else is a
    /// type error.
    pub fn partial_cmp_checked(&self, rhs: &Value) -> Result<Ordering, EvalError> {
        match (self, rhs) {
            (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
            _ => match promote(self, rhs, "comparison")? {
                Promoted::Ints(a, b) => Ok(a.cmp(&b)),
                Promoted::Floats(a, b) => a.partial_cmp(&b).ok_or_else(|| {
                    EvalError::TypeError("cannot order NaN values".to_string())
                }),
            },
        }
    }
}

enum Promoted {
    Ints(i64, i64),
    Floats(f64, f64),
}

fn promote(lhs: &Value, rhs: &Value, op: &str) -> Result<Promoted, EvalError> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Promoted::Ints(*a, *b)),
        (Value::Float(a), Value::Float(b)) => Ok(Promoted::Floats(*a, *b)),
        (Value::Int(a), Value::Float(b)) => Ok(Promoted::Floats(*a as f64, *b)),
        (Value::Float(a), Value::Int(b)) => Ok(Promoted::Floats(*a, *b as f64)),
        _ => Err(EvalError::TypeError(format!(
            "cannot apply `{}` to {} and {}",
            op,
            lhs.type_name(),
            rhs.type_name()
        ))),
    }
}

fn numeric_op(
    lhs: &Value,
    rhs: &Value,
    op: &str,
    int_op: impl Fn(i64, i64) -> Option<Value>,
    float_op: impl Fn(f64, f64) -> Value,
) -> Result<Value, EvalError> {
    match promote(lhs, rhs, op)? {
        Promoted::Ints(a, b) => int_op(a, b).ok_or_else(|| {
            EvalError::TypeError(format!("integer overflow evaluating `{} {} {}`", a, op, b))
        }),
        Promoted::Floats(a, b) => Ok(float_op(a, b)),
    }
}
