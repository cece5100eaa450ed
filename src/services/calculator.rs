//! Quick-entry arithmetic evaluator
//!
//! Evaluates a single-operator chain typed as free text, e.g. `25+18+42`
//! or `100-15-5`, so an amount can be computed at entry time. The contract
//! is intentionally simple: the first operator found in the priority order
//! `+`, `-`, `*`, `/` decides the whole expression, so mixed-operator
//! input like `2+3*4` is treated as an addition over the parts `2` and
//! `3*4` (which then fails to parse). There is no precedence and no
//! guard against division by zero; f64 semantics apply.

use crate::error::{LedgerError, LedgerResult};

/// Evaluate a single-operator arithmetic chain
///
/// Whitespace and `$` are stripped before parsing. Every part split off by
/// the detected operator must parse as a number; a trailing operator
/// leaves an empty part and fails. With no operator present the whole
/// string is parsed as one number.
pub fn evaluate(input: &str) -> LedgerResult<f64> {
    let expr: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$')
        .collect();

    if expr.contains('+') {
        let mut sum = 0.0;
        for part in expr.split('+') {
            sum += parse_part(part)?;
        }
        Ok(sum)
    } else if expr.contains('-') {
        let mut parts = expr.split('-');
        let mut result = parse_part(parts.next().unwrap_or(""))?;
        for part in parts {
            result -= parse_part(part)?;
        }
        Ok(result)
    } else if expr.contains('*') {
        let mut product = 1.0;
        for part in expr.split('*') {
            product *= parse_part(part)?;
        }
        Ok(product)
    } else if expr.contains('/') {
        let mut parts = expr.split('/');
        let mut result = parse_part(parts.next().unwrap_or(""))?;
        for part in parts {
            result /= parse_part(part)?;
        }
        Ok(result)
    } else {
        parse_part(&expr)
    }
}

fn parse_part(part: &str) -> LedgerResult<f64> {
    part.parse::<f64>()
        .map_err(|_| LedgerError::bad_number(part))
}
