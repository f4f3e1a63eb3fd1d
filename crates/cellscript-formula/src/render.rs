//! Cell rendering
//!
//! The orchestrating entry point: cycle check first, then parse and
//! evaluate, with literal text as the fallback for anything that is not a
//! well-formed formula.

use crate::cycle::find_cycle;
use crate::error::FormulaResult;
use crate::evaluator::evaluate;
use crate::functions::FormulaRegistry;
use crate::parser::parse;
use crate::value::Value;

/// Render a cell's raw text to its final value
///
/// `get_cell_text(col, row)` supplies the raw stored text of another cell;
/// its row argument is 0-based. Referenced cells render recursively with
/// the same registry and lookup, re-parsing and re-evaluating on every
/// reference (no caching across calls).
///
/// Steps:
/// 1. Cycle check with a fresh path. A hit short-circuits to the sentinel
///    text `RECURSIVE <address>` without evaluating anything.
/// 2. Text without a leading `=` is returned unchanged.
/// 3. A body that parses to an empty token sequence also returns the raw
///    text unchanged (malformed-formula fallback, not an error).
/// 4. Otherwise, evaluate.
pub fn try_render<F>(
    text: &str,
    registry: &FormulaRegistry,
    get_cell_text: &F,
) -> FormulaResult<Value>
where
    F: Fn(u32, u32) -> String,
{
    let mut path = Vec::new();
    if let Some(address) = find_cycle(text, get_cell_text, &mut path) {
        return Ok(Value::Text(format!("RECURSIVE {}", address)));
    }

    let body = match text.strip_prefix('=') {
        Some(body) => body,
        None => return Ok(Value::Text(text.to_string())),
    };

    let tokens = parse(body)?;
    if tokens.is_empty() {
        return Ok(Value::Text(text.to_string()));
    }

    evaluate(&tokens, registry, |col, row| {
        // The grid is 0-based in rows; addresses are written 1-based.
        try_render(&get_cell_text(col, row - 1), registry, get_cell_text)
    })
}

/// Render with errors flattened to text
///
/// The compatibility surface for hosts that treat every cell outcome as a
/// displayable value: any [`crate::FormulaError`] becomes its message text,
/// occupying the cell like any other string.
pub fn render<F>(text: &str, registry: &FormulaRegistry, get_cell_text: &F) -> Value
where
    F: Fn(u32, u32) -> String,
{
    match try_render(text, registry, get_cell_text) {
        Ok(value) => value,
        Err(err) => Value::Text(err.to_string()),
    }
}
