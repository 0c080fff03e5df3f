//! Condition expression evaluator

use super::ast::{CompareOp, Expression, Literal};
use crate::context::Context;
use crate::selector::Truthy;
use serde_json::Value;

/// Evaluate a condition expression against a context
pub fn evaluate(expr: &Expression, context: &Context) -> bool {
    match expr {
        Expression::True => true,
        Expression::False => false,
        Expression::Path(path) => context.get_path(path).is_truthy(),
        Expression::Compare { path, op, right } => {
            evaluate_compare(context.get_path(path), *op, right)
        }
        Expression::And(left, right) => evaluate(left, context) && evaluate(right, context),
        Expression::Or(left, right) => evaluate(left, context) || evaluate(right, context),
        Expression::Not(inner) => !evaluate(inner, context),
    }
}

fn evaluate_compare(left: Option<&Value>, op: CompareOp, right: &Literal) -> bool {
    match op {
        CompareOp::Eq => values_equal(left, right),
        CompareOp::NotEq => !values_equal(left, right),
        CompareOp::Gt => compare_numbers(left, right, |a, b| a > b),
        CompareOp::Gte => compare_numbers(left, right, |a, b| a >= b),
        CompareOp::Lt => compare_numbers(left, right, |a, b| a < b),
        CompareOp::Lte => compare_numbers(left, right, |a, b| a <= b),
        CompareOp::Contains => check_contains(left, right),
    }
}

fn values_equal(left: Option<&Value>, right: &Literal) -> bool {
    match (left, right) {
        (None | Some(Value::Null), Literal::Null) => true,
        (Some(Value::String(s)), Literal::String(rs)) => s == rs,
        (Some(Value::Number(n)), Literal::Number(rn)) => {
            n.as_f64().is_some_and(|f| (f - rn).abs() < f64::EPSILON)
        }
        (Some(Value::Bool(b)), Literal::Boolean(rb)) => b == rb,
        _ => false,
    }
}

fn compare_numbers<F>(left: Option<&Value>, right: &Literal, cmp: F) -> bool
where
    F: Fn(f64, f64) -> bool,
{
    match (left, right) {
        (Some(Value::Number(n)), Literal::Number(rn)) => n.as_f64().is_some_and(|f| cmp(f, *rn)),
        _ => false,
    }
}

fn check_contains(left: Option<&Value>, right: &Literal) -> bool {
    match (left, right) {
        // String contains substring
        (Some(Value::String(s)), Literal::String(substr)) => s.contains(substr.as_str()),
        // Array contains value
        (Some(Value::Array(arr)), literal) => arr.iter().any(|v| values_equal(Some(v), literal)),
        _ => false,
    }
}
