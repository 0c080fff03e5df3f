//! Condition expression parser
//!
//! Parses expressions like:
//! - `field == 'value'`
//! - `score > 0.8`
//! - `a == 'x' and b > 5`
//! - `not (user.banned or retries >= 3)`
//! - `is_admin`

use super::ast::{CompareOp, Expression, Literal};
use crate::error::ConditionError;

/// Deepest nesting of `not`, parentheses and connectives accepted
pub const MAX_DEPTH: usize = 64;

type Combine = fn(Box<Expression>, Box<Expression>) -> Expression;

/// Parse a condition expression string into an AST
///
/// `and` binds tighter than `or`, and both associate to the left:
/// `a and b or c` is `(a and b) or c`.
pub fn parse(input: &str) -> Result<Expression, ConditionError> {
    parse_at(input, 0)
}

fn parse_at(input: &str, depth: usize) -> Result<Expression, ConditionError> {
    if depth > MAX_DEPTH {
        return Err(ConditionError::Parse(format!(
            "nested deeper than {} levels",
            MAX_DEPTH
        )));
    }

    let input = input.trim();

    if input == "true" {
        return Ok(Expression::True);
    }
    if input == "false" {
        return Ok(Expression::False);
    }

    if let Some(expr) = try_parse_compound(input, depth)? {
        return Ok(expr);
    }

    if let Some(rest) = input.strip_prefix("not ") {
        return Ok(Expression::Not(Box::new(parse_at(rest, depth + 1)?)));
    }

    if let Some(inner) = strip_outer_parens(input) {
        return parse_at(inner, depth + 1);
    }

    parse_comparison(input)
}

fn try_parse_compound(input: &str, depth: usize) -> Result<Option<Expression>, ConditionError> {
    // Loosest connective first
    let connectives: [(&str, Combine); 2] = [(" or ", Expression::Or), (" and ", Expression::And)];

    for (connective, combine) in connectives {
        let parts = split_top_level(input, connective);
        if parts.len() < 2 {
            continue;
        }

        let mut expr = parse_at(parts[0], depth + 1)?;
        for part in &parts[1..] {
            expr = combine(Box::new(expr), Box::new(parse_at(part, depth + 1)?));
        }
        return Ok(Some(expr));
    }

    Ok(None)
}

/// Split on `connective` outside quotes and parentheses
fn split_top_level<'s>(input: &'s str, connective: &str) -> Vec<&'s str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        if i < start {
            continue;
        }
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' => depth += 1,
                ')' => depth -= 1,
                _ if depth == 0 && input[i..].starts_with(connective) => {
                    parts.push(&input[start..i]);
                    start = i + connective.len();
                }
                _ => {}
            },
        }
    }

    parts.push(&input[start..]);
    parts
}

/// Strip one pair of parentheses when they enclose the whole input
fn strip_outer_parens(input: &str) -> Option<&str> {
    let inner = input.strip_prefix('(')?.strip_suffix(')')?;
    let mut depth = 0i32;
    let mut quote: Option<char> = None;

    for c in inner.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth < 0 {
                        return None;
                    }
                }
                _ => {}
            },
        }
    }

    (depth == 0).then_some(inner)
}

fn parse_comparison(input: &str) -> Result<Expression, ConditionError> {
    // Try operators in order of length (longest first)
    let operators = [
        ("!=", CompareOp::NotEq),
        (">=", CompareOp::Gte),
        ("<=", CompareOp::Lte),
        ("==", CompareOp::Eq),
        (">", CompareOp::Gt),
        ("<", CompareOp::Lt),
        (" contains ", CompareOp::Contains),
    ];

    for (op_str, op) in operators {
        if let Some(pos) = find_operator(input, op_str) {
            let path = input[..pos].trim();
            if !is_path(path) {
                return Err(ConditionError::Parse(input.to_string()));
            }
            let right = parse_literal(&input[pos + op_str.len()..])?;
            return Ok(Expression::Compare {
                path: path.to_string(),
                op,
                right,
            });
        }
    }

    if is_path(input) {
        return Ok(Expression::Path(input.to_string()));
    }

    Err(ConditionError::Parse(input.to_string()))
}

fn find_operator(input: &str, op: &str) -> Option<usize> {
    let mut quote: Option<char> = None;

    for (i, c) in input.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if input[i..].starts_with(op) => return Some(i),
            None => {}
        }
    }
    None
}

/// A dotted path of identifier or index segments
fn is_path(input: &str) -> bool {
    !input.is_empty()
        && input.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
}

fn parse_literal(input: &str) -> Result<Literal, ConditionError> {
    let input = input.trim();

    if input == "null" {
        return Ok(Literal::Null);
    }

    if input == "true" {
        return Ok(Literal::Boolean(true));
    }
    if input == "false" {
        return Ok(Literal::Boolean(false));
    }

    // String (single or double quotes)
    if input.len() >= 2
        && ((input.starts_with('\'') && input.ends_with('\''))
            || (input.starts_with('"') && input.ends_with('"')))
    {
        let s = &input[1..input.len() - 1];
        return Ok(Literal::String(s.to_string()));
    }

    if let Ok(n) = input.parse::<f64>() {
        return Ok(Literal::Number(n));
    }

    Err(ConditionError::Literal(input.to_string()))
}
