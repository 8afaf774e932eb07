//! Evaluator - walks an [`Expr`] tree against a [`Context`], producing a
//! [`Value`] or an [`EvalError`].
//!
//! Evaluation is pure, deterministic and allocation-free for numeric
//! expressions (spec.md §5). Both operands of every binary node are always
//! evaluated; there is no short-circuiting (spec.md §4.4).

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::context::{Context, Lookup};
use crate::error::EvalError;
use crate::value::Value;

/// Evaluate `expr` against `ctx`.
pub fn eval(expr: &Expr, ctx: &dyn Context) -> Result<Value, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),

        Expr::Ident(name) => match ctx.get(name) {
            Some(Lookup::Value(v)) => Ok(v),
            Some(Lookup::Nested(_)) => Err(EvalError::TypeError(format!(
                "`{}` is a mapping, not a value",
                name
            ))),
            None => Err(EvalError::UndefinedSymbol(name.clone())),
        },

        Expr::Attr(base, field) => {
            let base_name = describe(base);
            match eval_context(base, ctx)? {
                Some(base_ctx) => match base_ctx.get(field) {
                    Some(Lookup::Value(v)) => Ok(v),
                    Some(Lookup::Nested(_)) => Err(EvalError::TypeError(format!(
                        "`{}.{}` is a mapping, not a value",
                        base_name, field
                    ))),
                    None => Err(EvalError::UndefinedAttribute {
                        base: base_name,
                        field: field.clone(),
                    }),
                },
                None => Err(EvalError::NotAMapping),
            }
        }

        Expr::Unary(op, operand) => {
            let value = eval(operand, ctx)?;
            match op {
                UnaryOp::Neg => value.negate(),
                UnaryOp::Not => value.not(),
            }
        }

        Expr::Binary(op, left, right) => {
            let lhs = eval(left, ctx)?;
            let rhs = eval(right, ctx)?;
            apply_binary(*op, &lhs, &rhs)
        }
    }
}

/// Resolve `expr` as something that can itself be descended into via
/// attribute access: either an `Ident`/`Attr` node that resolves to a
/// nested mapping in `ctx`, or a further nested `Attr` chain.
fn eval_context<'a>(expr: &Expr, ctx: &'a dyn Context) -> Result<Option<&'a dyn Context>, EvalError> {
    match expr {
        Expr::Ident(name) => match ctx.get(name) {
            Some(Lookup::Nested(nested)) => Ok(Some(nested)),
            Some(Lookup::Value(_)) => Ok(None),
            None => Err(EvalError::UndefinedSymbol(name.clone())),
        },
        Expr::Attr(base, field) => match eval_context(base, ctx)? {
            Some(base_ctx) => match base_ctx.get(field) {
                Some(Lookup::Nested(nested)) => Ok(Some(nested)),
                Some(Lookup::Value(_)) => Ok(None),
                None => Err(EvalError::UndefinedAttribute {
                    base: describe(base),
                    field: field.clone(),
                }),
            },
            None => Err(EvalError::NotAMapping),
        },
        _ => Ok(None),
    }
}

fn describe(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::Attr(base, field) => format!("{}.{}", describe(base), field),
        _ => "<expr>".to_string(),
    }
}

fn apply_binary(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => lhs.add(rhs),
        BinaryOp::Sub => lhs.sub(rhs),
        BinaryOp::Mul => lhs.mul(rhs),
        BinaryOp::Div => lhs.div(rhs),
        BinaryOp::Mod => lhs.modulo(rhs),
        BinaryOp::Eq => Ok(Value::Bool(lhs.equals(rhs))),
        BinaryOp::Neq => Ok(Value::Bool(!lhs.equals(rhs))),
        BinaryOp::Lt => Ok(Value::Bool(lhs.partial_cmp_checked(rhs)?.is_lt())),
        BinaryOp::Lte => Ok(Value::Bool(lhs.partial_cmp_checked(rhs)?.is_le())),
        BinaryOp::Gt => Ok(Value::Bool(lhs.partial_cmp_checked(rhs)?.is_gt())),
        BinaryOp::Gte => Ok(Value::Bool(lhs.partial_cmp_checked(rhs)?.is_ge())),
        BinaryOp::And => lhs.and(rhs),
        BinaryOp::Or => lhs.or(rhs),
    }
}
